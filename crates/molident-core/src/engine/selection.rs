use crate::core::models::atom::AtomSet;
use crate::core::models::record::TopologyEntry;
use tracing::{error, info, warn};

/// Resolves a topology entry to the atom set it describes.
///
/// Precedence mirrors the host record conventions: an index selection into
/// the record's shared atom set wins over an inline atom set, which wins
/// over the shared set itself. Only the first index block of a nested
/// selection is applied. Returns `None` (with a diagnostic) when the entry
/// carries no usable atom data.
pub fn select_atoms(entry: &TopologyEntry, shared: Option<&AtomSet>) -> Option<AtomSet> {
    if let Some(blocks) = &entry.indices {
        info!("topology entry carries an index selection");
        let Some(block) = blocks.first() else {
            error!("index selection is empty");
            return None;
        };
        let Some(source) = shared.or(entry.atoms.as_ref()) else {
            error!("index selection without an atom set to select from");
            return None;
        };
        return match source.select(block) {
            Some(sub) => Some(sub),
            None => {
                error!("failed to apply topology indices: index out of range");
                None
            }
        };
    }
    if let Some(atoms) = &entry.atoms {
        return Some(atoms.clone());
    }
    if let Some(shared) = shared {
        return Some(shared.clone());
    }
    warn!("no atom data found on topology entry");
    None
}
