use std::collections::HashMap;

use log::debug;

use crate::catalog::errors::{Error, Result};

/// Named configuration entries consumed by hosting applications.
///
/// The pipeline itself takes plain paths and handles; hosts use a
/// `Settings` value to resolve those by name (e.g. the recommendations
/// file path) and pass it around explicitly.
pub struct Settings {
    entries: HashMap<String, String>,
}

impl Settings {
    /// Build settings from the process environment, loading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_ok() {
            debug!("Loaded additional settings from .env file");
        }
        Settings {
            entries: std::env::vars().collect(),
        }
    }

    /// Build settings from explicit entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Settings {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up an entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up an entry that must be present.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| Error::ConfigurationError(format!("Missing configuration entry: {key}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present() {
        let settings = Settings::from_entries([(
            "RECOMMENDATIONS_FILE_PATH".to_string(),
            "/data/recommendations.json".to_string(),
        )]);

        assert_eq!(
            settings.require("RECOMMENDATIONS_FILE_PATH").unwrap(),
            "/data/recommendations.json"
        );
    }

    #[test]
    fn test_require_missing() {
        let settings = Settings::from_entries([]);

        let err = settings.require("RECOMMENDATIONS_FILE_PATH").unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
        assert!(err.to_string().contains("RECOMMENDATIONS_FILE_PATH"));
    }
}
