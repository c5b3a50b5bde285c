use super::atom::AtomSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a topology entry's chemical identity was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// The full canonical key matched a reference record exactly.
    FullStructure,
    /// Only the connectivity skeleton (key prefix) matched; stereochemistry
    /// and isotope detail differ from the reference record.
    Skeleton,
}

#[derive(Debug, Error)]
#[error("invalid match kind string")]
pub struct ParseMatchKindError;

impl FromStr for MatchKind {
    type Err = ParseMatchKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full structure" => Ok(Self::FullStructure),
            "skeleton (core)" => Ok(Self::Skeleton),
            _ => Err(ParseMatchKindError),
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::FullStructure => "full structure",
                Self::Skeleton => "skeleton (core)",
            }
        )
    }
}

/// The identity-annotation block written onto a topology entry.
///
/// On a skeleton match only `inchi_key` is populated (with the truncated
/// connectivity prefix); the descriptor fields stay empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cheminformatics {
    /// The matched canonical key, or its skeleton prefix on a partial match.
    pub inchi_key: Option<String>,
    /// SMILES-equivalent structural string.
    pub smiles: Option<String>,
    /// Full descriptor (InChI-equivalent) string.
    pub inchi: Option<String>,
    /// Formula string from the reference record.
    pub formula: Option<String>,
    /// Which tier of identification was achieved.
    pub match_kind: MatchKind,
}

/// One structural unit within a host record: the whole system, a sub-block,
/// or a molecular group.
///
/// The pipeline only ever fills fields that are currently unset; values
/// provided by the parser or an upstream normalizer are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologyEntry {
    /// Classification label ("original", "conventional cell", a group name).
    pub label: Option<String>,
    /// Provenance of the entry (e.g. "parser").
    pub method: Option<String>,
    /// Structural building-block classification (e.g. "molecule", "monomer").
    pub building_block: Option<String>,
    /// Inline atom set, if the entry carries its own geometry.
    pub atoms: Option<AtomSet>,
    /// Nested index selection into the record's shared atom set; the first
    /// block is authoritative.
    pub indices: Option<Vec<Vec<usize>>>,
    /// The identity block, once an identification has succeeded.
    pub cheminformatics: Option<Cheminformatics>,
}

impl TopologyEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entry with only a classification label set.
    pub fn with_label(label: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            ..Self::default()
        }
    }
}

/// The material section of a host record: the shared, parser-produced atom
/// set plus the topology entries that describe (sub)structures of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// The full system's atom set that entries with `indices` select from.
    pub atoms: Option<AtomSet>,
    /// The structural units of this material.
    pub topology: Vec<TopologyEntry>,
}

/// The results section of a host record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordResults {
    pub material: Option<MaterialRecord>,
}

/// One archive record as handed over by the host record system.
///
/// Every member on the path down to the topology entries is explicitly
/// optional; the pipeline walks the chain and abandons the record gracefully
/// at the first absent section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub results: Option<RecordResults>,
}
