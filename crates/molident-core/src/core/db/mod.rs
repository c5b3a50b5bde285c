//! Reference-database access: the lookup seam and its SQLite backend.
//!
//! The reference store is externally owned and read-only from this crate's
//! perspective. A lookup maps a canonical key (or its connectivity skeleton)
//! to an ordered list of compound descriptors; the first record returned by
//! a backend is authoritative for match-tier classification.

use crate::core::chem::CanonicalKey;
use std::path::Path;
use thiserror::Error;

pub mod sqlite;

/// One reference-database descriptor for a compound.
///
/// The store contract only promises the canonical key; descriptor fields may
/// be absent on sparse rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRecord {
    /// The compound's full canonical key.
    pub key: CanonicalKey,
    /// SMILES-equivalent structural string.
    pub smiles: Option<String>,
    /// Full descriptor (InChI-equivalent) string.
    pub inchi: Option<String>,
    /// Compound name.
    pub name: Option<String>,
    /// Formula string.
    pub formula: Option<String>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open reference database '{path}': {source}")]
    Open {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("reference database query failed: {source}")]
    Query {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Seam to the reference-database backend.
///
/// Implementations open their own handle per call; no connection is held
/// across lookups, so concurrent pipeline invocations over different records
/// need no coordination.
pub trait MoleculeStore {
    /// Returns the ordered candidate records for `key`, matching either the
    /// full key or its skeleton prefix. An empty list is a successful "no
    /// match" outcome, not an error.
    fn lookup(
        &self,
        database: &Path,
        key: &CanonicalKey,
    ) -> Result<Vec<CompoundRecord>, StoreError>;
}
