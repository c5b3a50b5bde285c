use super::{CompoundRecord, MoleculeStore, StoreError};
use crate::core::chem::CanonicalKey;
use rusqlite::{Connection, OpenFlags, params};
use std::path::Path;
use tracing::warn;

/// SQLite backend over the offline `compound_data` reference table.
///
/// The store opens the database file read-only on every lookup and closes it
/// when the call returns. Expected columns: `InChIKey`, `InChI`, `SMILES`,
/// `InChIKey14`, `Name`, `Formula`; candidates are returned in rowid order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteStore;

impl SqliteStore {
    pub fn new() -> Self {
        Self
    }
}

impl MoleculeStore for SqliteStore {
    fn lookup(
        &self,
        database: &Path,
        key: &CanonicalKey,
    ) -> Result<Vec<CompoundRecord>, StoreError> {
        let connection = Connection::open_with_flags(database, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| StoreError::Open {
                path: database.display().to_string(),
                source: Box::new(e),
            })?;

        let mut statement = connection
            .prepare(
                "SELECT InChIKey, InChI, SMILES, Name, Formula FROM compound_data \
                 WHERE InChIKey = ?1 OR InChIKey14 = ?2 ORDER BY id",
            )
            .map_err(query_error)?;

        let rows = statement
            .query_map(params![key.as_str(), key.skeleton()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, Option<String>>(4)?,
                ))
            })
            .map_err(query_error)?;

        let mut records = Vec::new();
        for row in rows {
            let (stored_key, inchi, smiles, name, formula) = row.map_err(query_error)?;
            match CanonicalKey::parse(&stored_key) {
                Ok(key) => records.push(CompoundRecord {
                    key,
                    smiles,
                    inchi,
                    name,
                    formula,
                }),
                Err(err) => {
                    warn!(key = %stored_key, %err, "skipping reference record with malformed key");
                }
            }
        }
        Ok(records)
    }
}

fn query_error(source: rusqlite::Error) -> StoreError {
    StoreError::Query {
        source: Box::new(source),
    }
}
