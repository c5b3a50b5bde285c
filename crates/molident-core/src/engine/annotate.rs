use super::resolver::{MatchResult, MatchTier};
use crate::core::models::record::{Cheminformatics, MatchKind, TopologyEntry};

const DEFAULT_LABEL: &str = "molecule";
const DEFAULT_METHOD: &str = "parser";
const DEFAULT_BUILDING_BLOCK: &str = "molecule";

/// Writes a resolved identity onto a topology entry.
///
/// Only empty fields are ever filled: an identity block, label, method, or
/// building-block value provided by the parser or an upstream normalizer is
/// preserved, which also makes the operation idempotent. An unmatched result
/// leaves the entry untouched.
pub fn annotate(entry: &mut TopologyEntry, outcome: &MatchResult) {
    if !outcome.is_match() {
        return;
    }

    if entry.cheminformatics.is_none() {
        entry.cheminformatics = match outcome.tier {
            MatchTier::Full => outcome.candidates.first().map(|top| Cheminformatics {
                inchi_key: Some(top.key.as_str().to_string()),
                smiles: top.smiles.clone(),
                inchi: top.inchi.clone(),
                formula: top.formula.clone(),
                match_kind: MatchKind::FullStructure,
            }),
            MatchTier::Partial => outcome.key.as_ref().map(|key| Cheminformatics {
                inchi_key: Some(key.skeleton().to_string()),
                smiles: None,
                inchi: None,
                formula: None,
                match_kind: MatchKind::Skeleton,
            }),
            MatchTier::None => None,
        };
    }

    if is_unset(&entry.label) {
        entry.label = Some(DEFAULT_LABEL.to_string());
    }
    if is_unset(&entry.method) {
        entry.method = Some(DEFAULT_METHOD.to_string());
    }
    if is_unset(&entry.building_block) {
        entry.building_block = Some(DEFAULT_BUILDING_BLOCK.to_string());
    }
}

fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chem::CanonicalKey;
    use crate::core::db::CompoundRecord;

    const WATER_KEY: &str = "XLYOFNOQVPJJNP-UHFFFAOYSA-N";
    const HEAVY_WATER_KEY: &str = "XLYOFNOQVPJJNP-ZSJDYOACSA-N";

    fn water_record() -> CompoundRecord {
        CompoundRecord {
            key: CanonicalKey::parse(WATER_KEY).unwrap(),
            smiles: Some("O".to_string()),
            inchi: Some("InChI=1S/H2O/h1H2".to_string()),
            name: Some("Water".to_string()),
            formula: Some("H2O".to_string()),
        }
    }

    fn full_match() -> MatchResult {
        MatchResult {
            key: Some(CanonicalKey::parse(WATER_KEY).unwrap()),
            candidates: vec![water_record()],
            tier: MatchTier::Full,
        }
    }

    fn partial_match() -> MatchResult {
        MatchResult {
            key: Some(CanonicalKey::parse(HEAVY_WATER_KEY).unwrap()),
            candidates: vec![water_record()],
            tier: MatchTier::Partial,
        }
    }

    fn unmatched() -> MatchResult {
        MatchResult {
            key: None,
            candidates: vec![],
            tier: MatchTier::None,
        }
    }

    #[test]
    fn full_match_fills_the_identity_block_from_the_top_candidate() {
        let mut entry = TopologyEntry::new();
        annotate(&mut entry, &full_match());

        let block = entry.cheminformatics.unwrap();
        assert_eq!(block.inchi_key.as_deref(), Some(WATER_KEY));
        assert_eq!(block.smiles.as_deref(), Some("O"));
        assert_eq!(block.inchi.as_deref(), Some("InChI=1S/H2O/h1H2"));
        assert_eq!(block.formula.as_deref(), Some("H2O"));
        assert_eq!(block.match_kind, MatchKind::FullStructure);
    }

    #[test]
    fn full_match_sets_default_classification_fields() {
        let mut entry = TopologyEntry::new();
        annotate(&mut entry, &full_match());

        assert_eq!(entry.label.as_deref(), Some("molecule"));
        assert_eq!(entry.method.as_deref(), Some("parser"));
        assert_eq!(entry.building_block.as_deref(), Some("molecule"));
    }

    #[test]
    fn partial_match_writes_only_the_skeleton_key() {
        let mut entry = TopologyEntry::new();
        annotate(&mut entry, &partial_match());

        let block = entry.cheminformatics.unwrap();
        assert_eq!(block.inchi_key.as_deref(), Some("XLYOFNOQVPJJNP"));
        assert_eq!(block.smiles, None);
        assert_eq!(block.inchi, None);
        assert_eq!(block.formula, None);
        assert_eq!(block.match_kind, MatchKind::Skeleton);
        assert_eq!(block.match_kind.to_string(), "skeleton (core)");
    }

    #[test]
    fn unmatched_result_is_a_no_op() {
        let mut entry = TopologyEntry::new();
        annotate(&mut entry, &unmatched());
        assert_eq!(entry, TopologyEntry::new());
    }

    #[test]
    fn annotation_is_idempotent() {
        let mut entry = TopologyEntry::new();
        annotate(&mut entry, &full_match());
        let first = entry.clone();
        annotate(&mut entry, &full_match());
        assert_eq!(entry, first);
    }

    #[test]
    fn caller_provided_fields_are_preserved() {
        let mut entry = TopologyEntry::new();
        entry.label = Some("pre-set label".to_string());
        entry.method = Some("user".to_string());
        entry.building_block = Some("monomer".to_string());
        annotate(&mut entry, &full_match());

        assert_eq!(entry.label.as_deref(), Some("pre-set label"));
        assert_eq!(entry.method.as_deref(), Some("user"));
        assert_eq!(entry.building_block.as_deref(), Some("monomer"));
    }

    #[test]
    fn empty_string_fields_count_as_unset() {
        let mut entry = TopologyEntry::new();
        entry.method = Some(String::new());
        annotate(&mut entry, &full_match());
        assert_eq!(entry.method.as_deref(), Some("parser"));
    }

    #[test]
    fn an_existing_identity_block_is_never_overwritten() {
        let mut entry = TopologyEntry::new();
        annotate(&mut entry, &partial_match());
        let skeleton_block = entry.cheminformatics.clone().unwrap();

        annotate(&mut entry, &full_match());
        assert_eq!(entry.cheminformatics.unwrap(), skeleton_block);
    }
}
