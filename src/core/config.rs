use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::category::Category;
use super::error::{PhayaoError, Result};


pub const ENV_PREFIX: &str = "PHAYAO";


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhayaoConfig {

    pub debounce_ms: u64,
    pub max_suggestions: usize,
    pub show_suggestions: bool,
    pub popular_searches_enabled: bool,

    /// Section an unrecognised query is sent to.
    pub default_category: Category,
}

impl PhayaoConfig {

    pub fn new(debounce_ms: u64, max_suggestions: usize) -> Self {
        Self {
            debounce_ms,
            max_suggestions,
            show_suggestions: true,
            popular_searches_enabled: true,
            default_category: Category::Market,
        }
    }


    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }


    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("PHAYAO_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(crate::DEFAULT_DEBOUNCE_MS),
            std::env::var("PHAYAO_MAX_SUGGESTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(crate::DEFAULT_MAX_SUGGESTIONS),
        );

        if let Ok(flag) = std::env::var("PHAYAO_SHOW_SUGGESTIONS") {
            config.show_suggestions = parse_flag(&flag, config.show_suggestions);
        }
        if let Ok(flag) = std::env::var("PHAYAO_POPULAR_SEARCHES_ENABLED") {
            config.popular_searches_enabled = parse_flag(&flag, config.popular_searches_enabled);
        }
        if let Ok(category) = std::env::var("PHAYAO_DEFAULT_CATEGORY") {
            if let Ok(parsed) = category.parse() {
                config.default_category = parsed;
            }
        }

        config
    }

    /// Layers an optional config file (format picked from its extension)
    /// under `PHAYAO_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            debug!("Loading config file: {}", path.display());
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }


    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(PhayaoError::Validation(
                "max_suggestions must be at least 1".to_string(),
            ));
        }
        if self.debounce_ms > 10_000 {
            return Err(PhayaoError::Validation(format!(
                "debounce_ms {} exceeds 10000",
                self.debounce_ms
            )));
        }
        Ok(())
    }
}

impl Default for PhayaoConfig {
    fn default() -> Self {
        Self::new(crate::DEFAULT_DEBOUNCE_MS, crate::DEFAULT_MAX_SUGGESTIONS)
    }
}

fn parse_flag(value: &str, fallback: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_defaults() {
        let config = PhayaoConfig::default();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.max_suggestions, 4);
        assert!(config.show_suggestions);
        assert_eq!(config.default_category, Category::Market);
        assert_eq!(config.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE", false));
        assert!(!parse_flag("off", true));
        assert!(parse_flag("maybe", true));
    }

    #[test]
    fn test_validate() {
        assert_ok!(PhayaoConfig::default().validate());
        assert_err!(PhayaoConfig::new(300, 0).validate());
        assert_err!(PhayaoConfig::new(60_000, 4).validate());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phayao.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "debounce_ms = 150").unwrap();
        writeln!(file, "show_suggestions = false").unwrap();
        writeln!(file, "default_category = \"community\"").unwrap();

        let config = PhayaoConfig::load(Some(&path)).unwrap();
        assert_eq!(config.debounce_ms, 150);
        assert!(!config.show_suggestions);
        assert_eq!(config.default_category, Category::Community);
        assert_eq!(config.max_suggestions, 4);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PhayaoConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.max_suggestions, 4);
    }

    #[test]
    fn test_load_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "max_suggestions = 0\n").unwrap();
        assert_err!(PhayaoConfig::load(Some(&path)));
    }
}
