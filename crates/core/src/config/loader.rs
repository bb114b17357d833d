//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::Path;

/// Standard locations searched when no path is given, in order
pub const CONFIG_CANDIDATES: [&str; 3] = [
    ".isis-search.toml",
    "isis-search.toml",
    ".config/isis-search.toml",
];

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit `path` must exist. Without one, the first of
    /// [`CONFIG_CANDIDATES`] that exists is used, else built-in defaults.
    /// Environment overrides are applied last, then the result is validated.
    ///
    /// # Errors
    /// Fails if the file cannot be read or parsed, or a value is invalid.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            if !Path::new(p).exists() {
                return Err(Error::config_not_found(p));
            }
        }

        let config_path = path.map(String::from).or_else(find_config_file);

        let mut schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        apply_env_overrides(&mut schema, |key| std::env::var(key).ok())?;

        let config = Self {
            schema,
            path: config_path,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Fails when `search.page_size` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.schema.search.page_size == 0 {
            return Err(Error::invalid_config_value(
                "search.page_size",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    CONFIG_CANDIDATES
        .iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(|candidate| (*candidate).to_string())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read config file {path}: {e}")).with_source(e))?;

    toml::from_str(&content).map_err(|e| Error::from(e).with_context(format!("Loading {path}")))
}

/// Apply `ISIS_CATALOG_PATH` and `ISIS_PAGE_SIZE`
fn apply_env_overrides(
    schema: &mut ConfigSchema,
    var: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(path) = var("ISIS_CATALOG_PATH").filter(|p| !p.is_empty()) {
        schema.search.catalog_path = Some(path);
    }

    if let Some(raw) = var("ISIS_PAGE_SIZE") {
        schema.search.page_size = raw.trim().parse().map_err(|_| {
            Error::invalid_config_value("ISIS_PAGE_SIZE", format!("'{raw}' is not a number"))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.search.page_size, 12);
        assert_eq!(config.schema.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_explicit_missing_file() {
        let err = Config::load(Some("/nonexistent/isis-search.toml")).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[search]\npage_size = 24\ncatalog_path = \"catalog.json\"\n\n[logging]\njson = true"
        )
        .unwrap();

        let schema = load_config_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(schema.search.page_size, 24);
        assert_eq!(schema.search.catalog_path.as_deref(), Some("catalog.json"));
        assert!(schema.logging.json);
        assert_eq!(schema.logging.level, "warn");
    }

    #[test]
    fn test_config_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search\npage_size = ").unwrap();

        let err = load_config_file(file.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ConfigParseError);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = Config::default();
        config.schema.search.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> =
            [("ISIS_CATALOG_PATH", "/srv/catalog.json"), ("ISIS_PAGE_SIZE", " 30 ")].into();
        let mut schema = ConfigSchema::default();

        apply_env_overrides(&mut schema, |k| env.get(k).map(|v| (*v).to_string())).unwrap();
        assert_eq!(schema.search.catalog_path.as_deref(), Some("/srv/catalog.json"));
        assert_eq!(schema.search.page_size, 30);
    }

    #[test]
    fn test_env_override_invalid_page_size() {
        let mut schema = ConfigSchema::default();
        let err = apply_env_overrides(&mut schema, |k| {
            (k == "ISIS_PAGE_SIZE").then(|| "twelve".to_string())
        })
        .unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::InvalidConfigValue);
    }
}
