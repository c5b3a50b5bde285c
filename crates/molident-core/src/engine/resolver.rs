use crate::core::chem::{CanonicalKey, ChemistryProvider, SKELETON_LEN};
use crate::core::db::{CompoundRecord, MoleculeStore};
use crate::core::models::atom::AtomSet;
use std::path::Path;
use tracing::{error, info};

/// How strongly a structure was identified against the reference database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    /// The computed key equals the top candidate's stored key exactly.
    Full,
    /// Only the connectivity skeleton matched; stereochemistry or isotope
    /// detail differs.
    Partial,
    /// No candidate, or the lookup was unavailable.
    None,
}

/// The outcome of identity resolution for one structure.
///
/// A retained `key` with an empty candidate list distinguishes "we tried but
/// found nothing" from "we could not even compute a key".
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The canonical key computed for the structure, when computation succeeded.
    pub key: Option<CanonicalKey>,
    /// Ordered candidate records; the first is authoritative.
    pub candidates: Vec<CompoundRecord>,
    pub tier: MatchTier,
}

impl MatchResult {
    /// The no-key, no-candidate outcome.
    fn unresolved() -> Self {
        Self {
            key: None,
            candidates: Vec::new(),
            tier: MatchTier::None,
        }
    }

    fn unmatched(key: CanonicalKey) -> Self {
        Self {
            key: Some(key),
            candidates: Vec::new(),
            tier: MatchTier::None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.tier != MatchTier::None
    }
}

/// Computes the canonical key for a conditioned structure and classifies it
/// against the reference database.
///
/// Every failure mode (missing database file, key computation failure,
/// lookup failure) is contained here: the function always returns a
/// [`MatchResult`], reporting the failure on the diagnostics stream. The
/// first candidate returned by the store is authoritative; no ranking or
/// deduplication is applied.
pub fn resolve(
    atoms: &AtomSet,
    database: &Path,
    chemistry: &dyn ChemistryProvider,
    store: &dyn MoleculeStore,
) -> MatchResult {
    if !database.is_file() {
        error!(
            path = %database.display(),
            "reference database not found or inaccessible"
        );
        return MatchResult::unresolved();
    }

    let key = match chemistry.canonical_key(atoms) {
        Ok(key) => key,
        Err(err) => {
            error!(%err, "canonical key computation failed");
            return MatchResult::unresolved();
        }
    };
    info!(key = %key, "computed canonical key");

    let candidates = match store.lookup(database, &key) {
        Ok(candidates) => candidates,
        Err(err) => {
            error!(%err, "reference database lookup failed");
            return MatchResult::unmatched(key);
        }
    };

    if candidates.is_empty() {
        info!(key = %key, "no reference match for canonical key");
        return MatchResult::unmatched(key);
    }

    let tier = if candidates[0].key == key {
        MatchTier::Full
    } else {
        info!(
            key = %key,
            "identification restricted to the connectivity skeleton (first {SKELETON_LEN} characters of the key)"
        );
        MatchTier::Partial
    };

    MatchResult {
        key: Some(key),
        candidates,
        tier,
    }
}
