//! # Run Settings
//!
//! Universe shape and worker pool, loaded from TOML. Every key is optional:
//!
//! ```toml
//! [universe]
//! universe_size = 100
//! galaxy_size = 100
//! star_system_size = 32
//! galaxy_density = 50
//! star_system_density = 200
//!
//! [scan]
//! workers = 8
//! progress_interval = 5
//! ```

use std::path::Path;

use astrolabe_procedural::UniverseConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ScanError, ScanResult};
use crate::scanner::ScanConfig;

/// Complete run settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Universe shape.
    pub universe: UniverseConfig,
    /// Worker pool.
    pub scan: ScanConfig,
}

impl Settings {
    /// Parses and validates settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Settings`] for malformed TOML or unknown keys,
    /// and a validation error for out-of-range values.
    pub fn from_toml_str(text: &str) -> ScanResult<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Input`] if the file cannot be read, otherwise
    /// as [`Settings::from_toml_str`].
    pub fn load(path: &Path) -> ScanResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ScanError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading settings");
        Self::from_toml_str(&text)
    }

    /// Checks both sections.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> ScanResult<()> {
        self.universe.validate()?;
        self.scan.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_legacy() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.universe, UniverseConfig::LEGACY);
        assert_eq!(settings.scan.progress_interval, 5);
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_toml_str(
            "[universe]\nuniverse_size = 2\ngalaxy_size = 2\n\n[scan]\nworkers = 3\n",
        )
        .unwrap();
        assert_eq!(settings.universe.universe_size, 2);
        assert_eq!(settings.universe.galaxy_size, 2);
        assert_eq!(settings.universe.star_system_density, 200);
        assert_eq!(settings.scan.workers, 3);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            Settings::from_toml_str("[universe]\nsize = 3\n"),
            Err(ScanError::Settings(_))
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            Settings::from_toml_str("[scan]\nworkers = 0\n"),
            Err(ScanError::InvalidWorkers(0))
        ));
        assert!(matches!(
            Settings::from_toml_str("[universe]\ngalaxy_density = 0\n"),
            Err(ScanError::Procedural(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("astrolabe_settings_does_not_exist.toml");
        assert!(matches!(Settings::load(&path), Err(ScanError::Input { .. })));
    }
}
