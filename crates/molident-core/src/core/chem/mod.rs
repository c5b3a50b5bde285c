//! Canonical chemical identity: the structured key type and the seam to the
//! external chemistry toolkit that computes keys from geometry.

use crate::core::models::atom::AtomSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of the connectivity ("skeleton") block of a canonical key.
///
/// The key layout is a 14-character connectivity block, a hyphen, a
/// 10-character stereochemistry/isotope block, a hyphen, and a protonation
/// character. Matching on the first block alone identifies connectivity
/// while ignoring stereochemistry and isotope detail.
pub const SKELETON_LEN: usize = 14;

/// Total length of a canonical key.
pub const KEY_LEN: usize = 27;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("canonical key must be {KEY_LEN} characters, got {0}")]
    Length(usize),
    #[error("canonical key has a malformed block layout")]
    Separators,
    #[error("canonical key contains characters outside A-Z0-9")]
    Characters,
}

/// A validated canonical chemical key (InChIKey layout).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Validates and wraps a key string.
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        if s.len() != KEY_LEN {
            return Err(KeyError::Length(s.len()));
        }
        let bytes = s.as_bytes();
        if bytes[SKELETON_LEN] != b'-' || bytes[KEY_LEN - 2] != b'-' {
            return Err(KeyError::Separators);
        }
        let blocks_valid = s
            .split('-')
            .all(|block| block.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        if s.matches('-').count() != 2 || !blocks_valid {
            return Err(KeyError::Characters);
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The connectivity-only prefix of the key.
    pub fn skeleton(&self) -> &str {
        &self.0[..SKELETON_LEN]
    }

    /// True when both keys share the same connectivity block.
    pub fn matches_skeleton(&self, other: &CanonicalKey) -> bool {
        self.skeleton() == other.skeleton()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CanonicalKey {
    type Err = KeyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Failure reported by the external chemistry toolkit.
///
/// The toolkit is a black box; only its message survives the boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ChemistryError(pub String);

/// Seam to the external cheminformatics library that derives a canonical key
/// from atomic species, positions, and masses.
pub trait ChemistryProvider {
    fn canonical_key(&self, atoms: &AtomSet) -> Result<CanonicalKey, ChemistryError>;
}
