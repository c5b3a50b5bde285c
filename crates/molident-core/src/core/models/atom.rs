use crate::core::utils::elements::is_element_symbol;
use nalgebra::{Matrix3, Point3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Conversion factor from SI positions (meters) to Ångström.
pub const M_TO_ANGSTROM: f64 = 1e10;

/// A single atom: chemical species, Cartesian position, and an optional mass override.
///
/// Positions are in Ångström. The mass override (in unified atomic mass units) is the
/// channel through which non-standard isotopes reach the chemistry provider; `None`
/// means the standard isotope of the element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// The chemical element symbol (e.g. "O", "H", "Fe").
    pub symbol: String,
    /// The 3D Cartesian position in Ångström.
    pub position: Point3<f64>,
    /// Mass override in u; `None` means the element's standard isotope.
    pub mass: Option<f64>,
}

impl Atom {
    /// Creates an atom with the standard isotope mass.
    pub fn new(symbol: &str, position: Point3<f64>) -> Self {
        Self {
            symbol: symbol.to_string(),
            position,
            mass: None,
        }
    }

    /// Sets a per-atom mass override (e.g. 2.0141 u for deuterium).
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }
}

/// An ordered set of atoms with optional lattice and per-axis periodicity.
///
/// The lattice matrix, when present, holds the lattice vectors as its **columns**,
/// so `cell * fractional` yields Cartesian coordinates. The position-count-equals-
/// atom-count invariant is enforced by representation: each [`Atom`] owns its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomSet {
    /// The atoms, in host order.
    pub atoms: Vec<Atom>,
    /// The lattice matrix (columns are the lattice vectors), if the host supplied one.
    pub cell: Option<Matrix3<f64>>,
    /// Periodicity flag per spatial axis.
    pub pbc: [bool; 3],
}

impl AtomSet {
    /// Creates an atom set, reporting (but accepting) unknown element symbols.
    pub fn new(atoms: Vec<Atom>, cell: Option<Matrix3<f64>>, pbc: [bool; 3]) -> Self {
        for atom in &atoms {
            if !is_element_symbol(&atom.symbol) {
                warn!(symbol = %atom.symbol, "unknown chemical element symbol");
            }
        }
        Self { atoms, cell, pbc }
    }

    /// Builds an atom set from host data in SI units (meters), converting to Ångström.
    ///
    /// Symbol and position slices must be of equal length; lattice vectors are given
    /// as the three cell vectors `a`, `b`, `c`.
    pub fn from_si(
        symbols: &[&str],
        positions: &[Point3<f64>],
        lattice_vectors: Option<[Vector3<f64>; 3]>,
        pbc: [bool; 3],
    ) -> Self {
        debug_assert_eq!(symbols.len(), positions.len());
        let atoms = symbols
            .iter()
            .zip(positions)
            .map(|(symbol, position)| {
                Atom::new(symbol, Point3::from(position.coords * M_TO_ANGSTROM))
            })
            .collect();
        let cell = lattice_vectors
            .map(|[a, b, c]| Matrix3::from_columns(&[a, b, c]) * M_TO_ANGSTROM);
        Self::new(atoms, cell, pbc)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// True when the structure is periodic along all three axes.
    pub fn is_fully_periodic(&self) -> bool {
        self.pbc.iter().all(|&p| p)
    }

    /// Extracts the sub-block selected by `indices`, keeping lattice and periodicity.
    ///
    /// Returns `None` if any index is out of range.
    pub fn select(&self, indices: &[usize]) -> Option<AtomSet> {
        let atoms = indices
            .iter()
            .map(|&i| self.atoms.get(i).cloned())
            .collect::<Option<Vec<_>>>()?;
        Some(AtomSet {
            atoms,
            cell: self.cell,
            pbc: self.pbc,
        })
    }

    /// Geometric center of the atom positions; `None` for an empty set.
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.atoms.is_empty() {
            return None;
        }
        let sum = self
            .atoms
            .iter()
            .fold(Vector3::zeros(), |acc, atom| acc + atom.position.coords);
        Some(Point3::from(sum / self.atoms.len() as f64))
    }
}
