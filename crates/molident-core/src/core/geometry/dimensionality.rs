use crate::core::models::atom::AtomSet;
use std::fmt;

/// Geometric dimensionality of a structure as reported by the classifier.
///
/// Only [`Dimensionality::Zero`] structures (discrete, non-periodic
/// clusters) are eligible for molecule identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dimensionality {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
}

impl Dimensionality {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.as_u8())
    }
}

/// Seam to the external geometry library that classifies the dimensionality
/// of an atomistic structure (cluster, chain, slab, bulk).
pub trait DimensionalityClassifier {
    fn dimensionality(&self, atoms: &AtomSet) -> Dimensionality;
}
