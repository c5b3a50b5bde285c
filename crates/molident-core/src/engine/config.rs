use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default lower bound on the atom count of an identifiable structure.
pub const DEFAULT_MIN_ATOMS: usize = 2;
/// Default upper bound on the atom count of an identifiable structure.
pub const DEFAULT_MAX_ATOMS: usize = 100;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("min_atoms ({min}) exceeds max_atoms ({max})")]
    InvalidAtomBounds { min: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Which reference database a pipeline invocation queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupMode {
    /// Query the single master database directly.
    #[default]
    OfflineBasic,
    /// Query the secondary cache database.
    Cached,
}

/// Resolved configuration values consumed by the identification pipeline.
///
/// Constructed once, via the builder or from a TOML file, and passed by
/// parameter into the workflow entry point; the pipeline performs no ambient
/// configuration lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyConfig {
    /// Smallest atom count eligible for identification (inclusive).
    #[serde(default = "default_min_atoms")]
    pub min_atoms: usize,
    /// Largest atom count eligible for identification (inclusive).
    #[serde(default = "default_max_atoms")]
    pub max_atoms: usize,
    /// Which reference database lookups go to.
    #[serde(default)]
    pub mode: LookupMode,
    /// Path to the master reference database.
    pub master_db: PathBuf,
    /// Path to the cache database, required for [`LookupMode::Cached`].
    #[serde(default)]
    pub cache_db: Option<PathBuf>,
}

fn default_min_atoms() -> usize {
    DEFAULT_MIN_ATOMS
}

fn default_max_atoms() -> usize {
    DEFAULT_MAX_ATOMS
}

impl IdentifyConfig {
    /// The database the selected mode queries; `None` when the cached mode
    /// is selected without a cache database.
    pub fn database_path(&self) -> Option<&Path> {
        match self.mode {
            LookupMode::OfflineBasic => Some(&self.master_db),
            LookupMode::Cached => self.cache_db.as_deref(),
        }
    }

    /// Loads a configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

#[derive(Default)]
pub struct IdentifyConfigBuilder {
    min_atoms: Option<usize>,
    max_atoms: Option<usize>,
    mode: Option<LookupMode>,
    master_db: Option<PathBuf>,
    cache_db: Option<PathBuf>,
}

impl IdentifyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_atoms(mut self, min: usize) -> Self {
        self.min_atoms = Some(min);
        self
    }
    pub fn max_atoms(mut self, max: usize) -> Self {
        self.max_atoms = Some(max);
        self
    }
    pub fn mode(mut self, mode: LookupMode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn master_db(mut self, path: PathBuf) -> Self {
        self.master_db = Some(path);
        self
    }
    pub fn cache_db(mut self, path: PathBuf) -> Self {
        self.cache_db = Some(path);
        self
    }

    pub fn build(self) -> Result<IdentifyConfig, ConfigError> {
        let min_atoms = self.min_atoms.unwrap_or(DEFAULT_MIN_ATOMS);
        let max_atoms = self.max_atoms.unwrap_or(DEFAULT_MAX_ATOMS);
        if min_atoms > max_atoms {
            return Err(ConfigError::InvalidAtomBounds {
                min: min_atoms,
                max: max_atoms,
            });
        }
        let mode = self.mode.unwrap_or_default();
        if mode == LookupMode::Cached && self.cache_db.is_none() {
            return Err(ConfigError::MissingParameter("cache_db"));
        }
        Ok(IdentifyConfig {
            min_atoms,
            max_atoms,
            mode,
            master_db: self
                .master_db
                .ok_or(ConfigError::MissingParameter("master_db"))?,
            cache_db: self.cache_db,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builder_applies_documented_defaults() {
        let config = IdentifyConfigBuilder::new()
            .master_db(PathBuf::from("master.db"))
            .build()
            .unwrap();
        assert_eq!(config.min_atoms, 2);
        assert_eq!(config.max_atoms, 100);
        assert_eq!(config.mode, LookupMode::OfflineBasic);
        assert_eq!(config.cache_db, None);
    }

    #[test]
    fn builder_requires_a_master_database() {
        let err = IdentifyConfigBuilder::new().build().unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("master_db"));
    }

    #[test]
    fn builder_requires_a_cache_database_in_cached_mode() {
        let err = IdentifyConfigBuilder::new()
            .master_db(PathBuf::from("master.db"))
            .mode(LookupMode::Cached)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("cache_db"));
    }

    #[test]
    fn builder_rejects_inverted_atom_bounds() {
        let err = IdentifyConfigBuilder::new()
            .master_db(PathBuf::from("master.db"))
            .min_atoms(10)
            .max_atoms(4)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidAtomBounds { min: 10, max: 4 });
    }

    #[test]
    fn database_path_follows_the_mode() {
        let offline = IdentifyConfigBuilder::new()
            .master_db(PathBuf::from("master.db"))
            .cache_db(PathBuf::from("cache.db"))
            .build()
            .unwrap();
        assert_eq!(offline.database_path(), Some(Path::new("master.db")));

        let cached = IdentifyConfigBuilder::new()
            .master_db(PathBuf::from("master.db"))
            .cache_db(PathBuf::from("cache.db"))
            .mode(LookupMode::Cached)
            .build()
            .unwrap();
        assert_eq!(cached.database_path(), Some(Path::new("cache.db")));
    }

    #[test]
    fn from_toml_file_parses_a_full_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("identify.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "min_atoms = 3\nmax_atoms = 40\nmode = \"cached\"\nmaster_db = \"master.db\"\ncache_db = \"cache.db\""
        )
        .unwrap();

        let config = IdentifyConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.min_atoms, 3);
        assert_eq!(config.max_atoms, 40);
        assert_eq!(config.mode, LookupMode::Cached);
        assert_eq!(config.database_path(), Some(Path::new("cache.db")));
    }

    #[test]
    fn from_toml_file_defaults_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("identify.toml");
        std::fs::write(&path, "master_db = \"master.db\"\n").unwrap();

        let config = IdentifyConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.min_atoms, DEFAULT_MIN_ATOMS);
        assert_eq!(config.max_atoms, DEFAULT_MAX_ATOMS);
        assert_eq!(config.mode, LookupMode::OfflineBasic);
    }

    #[test]
    fn from_toml_file_reports_missing_file_and_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nofile.toml");
        assert!(matches!(
            IdentifyConfig::from_toml_file(&missing),
            Err(ConfigLoadError::Io { .. })
        ));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "min_atoms = \"not a number\"").unwrap();
        assert!(matches!(
            IdentifyConfig::from_toml_file(&bad),
            Err(ConfigLoadError::Toml { .. })
        ));
    }
}
