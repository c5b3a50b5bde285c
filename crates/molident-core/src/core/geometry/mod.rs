//! Geometry conditioning for periodic structures.

use crate::core::models::atom::AtomSet;
use nalgebra::Vector3;

pub mod dimensionality;

/// Threshold below which a cell determinant is treated as singular.
pub const SINGULAR_CELL_DET_THRESHOLD: f64 = 1e-8;

/// Unwraps a molecule split across periodic images, using the minimum-image
/// convention, and re-centers its geometric center at the origin.
///
/// Atom 0 is the reference point. For every other atom the displacement from
/// the reference is reduced to its shortest periodic equivalent by rounding
/// the displacement's fractional coordinates to the nearest lattice
/// translation. A set without a lattice, or with a singular one, is returned
/// unchanged; an atom whose fractional solve fails keeps its raw displacement.
pub fn unwrap_molecule(atoms: &AtomSet) -> AtomSet {
    let mut unwrapped = atoms.clone();
    let Some(cell) = atoms.cell else {
        return unwrapped;
    };
    if cell.determinant().abs() < SINGULAR_CELL_DET_THRESHOLD {
        return unwrapped;
    }
    let Some(reference) = unwrapped.atoms.first().map(|a| a.position) else {
        return unwrapped;
    };

    let lu = cell.lu();
    for atom in unwrapped.atoms.iter_mut().skip(1) {
        let displacement = atom.position - reference;
        if let Some(fractional) = lu.solve(&displacement) {
            atom.position -= cell * fractional.map(f64::round);
        }
    }

    recenter(&mut unwrapped);
    unwrapped
}

/// Translates the set so its geometric center sits at the origin.
pub fn recenter(atoms: &mut AtomSet) {
    let Some(centroid) = atoms.centroid() else {
        return;
    };
    let shift: Vector3<f64> = centroid.coords;
    for atom in &mut atoms.atoms {
        atom.position -= shift;
    }
}
