use crate::core::chem::ChemistryProvider;
use crate::core::db::MoleculeStore;
use crate::core::geometry::dimensionality::DimensionalityClassifier;
use crate::core::geometry::unwrap_molecule;
use crate::engine::annotate::annotate;
use crate::engine::config::IdentifyConfig;
use crate::engine::resolver;
use crate::engine::selection::select_atoms;
use crate::engine::validation;
use crate::core::models::record::EntryRecord;
use tracing::{debug, info, instrument, warn};

/// Counts reported by one identification pass over a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentifySummary {
    /// Topology entries examined.
    pub processed: usize,
    /// Entries that received an identity annotation.
    pub annotated: usize,
    /// Entries left untouched (skip rules, validation, no match).
    pub skipped: usize,
}

/// Runs molecule identification over every topology entry of one record.
///
/// For each entry the pipeline selects its atom set, applies the acceptance
/// gates, unwraps periodic images when the set is fully periodic, resolves
/// the identity against the reference database, and annotates the entry on a
/// match. Entries that fail a gate or yield no identity are skipped, not
/// erased. The operation never raises: a record without the expected
/// sections is abandoned gracefully after a single diagnostic.
#[instrument(skip_all, name = "molecule_identification")]
pub fn run(
    record: &mut EntryRecord,
    config: &IdentifyConfig,
    chemistry: &dyn ChemistryProvider,
    classifier: &dyn DimensionalityClassifier,
    store: &dyn MoleculeStore,
) -> IdentifySummary {
    info!("starting molecule identification");
    let mut summary = IdentifySummary::default();

    let Some(results) = record.results.as_mut() else {
        info!("record has no results section; nothing to identify");
        return summary;
    };
    let Some(material) = results.material.as_mut() else {
        info!("record has no material section; nothing to identify");
        return summary;
    };
    if material.topology.is_empty() {
        info!("record has no topology entries; nothing to identify");
        return summary;
    }
    let Some(database) = config.database_path().map(|p| p.to_path_buf()) else {
        warn!(mode = ?config.mode, "no reference database configured for the selected mode");
        return summary;
    };

    let entry_count = material.topology.len();
    let shared = &material.atoms;

    for entry in material.topology.iter_mut() {
        summary.processed += 1;

        match entry.label.as_deref() {
            Some("conventional cell") => {
                debug!("skipping conventional-cell entry");
                summary.skipped += 1;
                continue;
            }
            Some("original") if entry_count > 1 => {
                debug!("skipping original entry of a composite record");
                summary.skipped += 1;
                continue;
            }
            _ => {}
        }

        let Some(atoms) = select_atoms(entry, shared.as_ref()) else {
            summary.skipped += 1;
            continue;
        };

        if !validation::accept_atom_count(&atoms, config.min_atoms, config.max_atoms) {
            summary.skipped += 1;
            continue;
        }

        let atoms = if atoms.is_fully_periodic() {
            unwrap_molecule(&atoms)
        } else {
            atoms
        };

        if !validation::accept_dimensionality(&atoms, classifier) {
            summary.skipped += 1;
            continue;
        }

        let outcome = resolver::resolve(&atoms, &database, chemistry, store);
        if !outcome.is_match() {
            summary.skipped += 1;
            continue;
        }

        annotate(entry, &outcome);
        summary.annotated += 1;
    }

    info!(
        processed = summary.processed,
        annotated = summary.annotated,
        skipped = summary.skipped,
        "molecule identification finished"
    );
    summary
}
