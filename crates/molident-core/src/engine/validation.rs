use crate::core::geometry::dimensionality::{Dimensionality, DimensionalityClassifier};
use crate::core::models::atom::AtomSet;
use tracing::warn;

/// Accepts a structure whose atom count lies within `[min_atoms, max_atoms]`.
///
/// Rejections are expected outcomes, reported at warning level; the caller
/// skips the entry and continues.
pub fn accept_atom_count(atoms: &AtomSet, min_atoms: usize, max_atoms: usize) -> bool {
    let count = atoms.len();
    if count < min_atoms {
        warn!(
            count,
            min_atoms, "system has fewer atoms than the minimum; skipping identification"
        );
        return false;
    }
    if count > max_atoms {
        warn!(
            count,
            max_atoms, "system has more atoms than the maximum; skipping identification"
        );
        return false;
    }
    true
}

/// Accepts only structures the classifier reports as 0-dimensional.
///
/// Periodic and extended structures (chains, slabs, bulk) are outside the
/// scope of molecule identification.
pub fn accept_dimensionality(atoms: &AtomSet, classifier: &dyn DimensionalityClassifier) -> bool {
    let dimensionality = classifier.dimensionality(atoms);
    if dimensionality != Dimensionality::Zero {
        warn!(
            %dimensionality,
            "only 0D systems are identified; skipping identification"
        );
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use nalgebra::Point3;

    struct FixedClassifier(Dimensionality);

    impl DimensionalityClassifier for FixedClassifier {
        fn dimensionality(&self, _atoms: &AtomSet) -> Dimensionality {
            self.0
        }
    }

    fn chain(n: usize) -> AtomSet {
        let atoms = (0..n)
            .map(|i| Atom::new("C", Point3::new(1.5 * i as f64, 0.0, 0.0)))
            .collect();
        AtomSet::new(atoms, None, [false; 3])
    }

    #[test]
    fn accepts_counts_within_bounds() {
        assert!(accept_atom_count(&chain(3), 2, 5));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(accept_atom_count(&chain(2), 2, 5));
        assert!(accept_atom_count(&chain(5), 2, 5));
    }

    #[test]
    fn rejects_counts_just_outside_the_bounds() {
        assert!(!accept_atom_count(&chain(1), 2, 5));
        assert!(!accept_atom_count(&chain(6), 2, 5));
    }

    #[test]
    fn accepts_only_zero_dimensional_structures() {
        let atoms = chain(4);
        assert!(accept_dimensionality(
            &atoms,
            &FixedClassifier(Dimensionality::Zero)
        ));
        for dim in [
            Dimensionality::One,
            Dimensionality::Two,
            Dimensionality::Three,
        ] {
            assert!(!accept_dimensionality(&atoms, &FixedClassifier(dim)));
        }
    }
}
