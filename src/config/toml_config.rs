use crate::core::{ConfigProvider, JeepOrdering};
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub service: ServiceConfig,
    pub catalog: CatalogConfig,
    pub lookup: Option<LookupConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub data_dir: String,
    pub file: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub ordering: JeepOrdering,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl InventoryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| InventoryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("service.name", &self.service.name)?;
        validate_path("catalog.data_dir", &self.catalog.data_dir)?;
        validate_path("catalog.file", &self.catalog.file)?;
        validate_file_extension("catalog.file", &self.catalog.file, &["csv"])?;

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(InventoryError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }

    /// 日誌等級，未設定時為 None
    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for InventoryConfig {
    fn data_dir(&self) -> &str {
        &self.catalog.data_dir
    }

    fn catalog_file(&self) -> &str {
        &self.catalog.file
    }

    fn ordering(&self) -> JeepOrdering {
        self.lookup
            .as_ref()
            .map(|l| l.ordering)
            .unwrap_or_default()
    }
}

impl Validate for InventoryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[service]
name = "jeep-inventory"
description = "Jeep lookup"

[catalog]
data_dir = "./data"
file = "jeeps.csv"

[lookup]
ordering = "base_price"
"#;

        let config = InventoryConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.service.name, "jeep-inventory");
        assert_eq!(config.data_dir(), "./data");
        assert_eq!(config.catalog_file(), "jeeps.csv");
        assert_eq!(config.ordering(), JeepOrdering::BasePrice);
        assert_eq!(config.log_level(), None);
        assert!(!config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ordering_defaults_to_natural() {
        let toml_content = r#"
[service]
name = "jeep-inventory"

[catalog]
data_dir = "./data"
file = "jeeps.csv"
"#;

        let config = InventoryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.ordering(), JeepOrdering::Natural);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("JEEP_INVENTORY_TEST_DATA_DIR", "/srv/catalog");

        let toml_content = r#"
[service]
name = "test"

[catalog]
data_dir = "${JEEP_INVENTORY_TEST_DATA_DIR}"
file = "jeeps.csv"
"#;

        let config = InventoryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog.data_dir, "/srv/catalog");

        std::env::remove_var("JEEP_INVENTORY_TEST_DATA_DIR");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[service]
name = "test"

[catalog]
data_dir = "${JEEP_INVENTORY_UNSET_VARIABLE}"
file = "jeeps.csv"
"#;

        let config = InventoryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog.data_dir, "${JEEP_INVENTORY_UNSET_VARIABLE}");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[service]
name = "test"

[catalog]
data_dir = "./data"
file = "jeeps.xlsx"

[logging]
level = "debug"
"#;

        let config = InventoryConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
        assert_eq!(config.log_level(), Some("debug"));
    }

    #[test]
    fn test_invalid_ordering_is_a_parse_error() {
        let toml_content = r#"
[service]
name = "test"

[catalog]
data_dir = "./data"
file = "jeeps.csv"

[lookup]
ordering = "cheapest_first"
"#;

        assert!(matches!(
            InventoryConfig::from_toml_str(toml_content),
            Err(InventoryError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[service]
name = "file-test"

[catalog]
data_dir = "./data"
file = "jeeps.csv"

[logging]
level = "info"
json = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = InventoryConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.service.name, "file-test");
        assert!(config.json_logging());
        assert_eq!(config.log_level(), Some("info"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_quiet_log_level_is_kept() {
        let toml_content = r#"
[service]
name = "quiet"

[catalog]
data_dir = "./data"
file = "jeeps.csv"

[logging]
level = "error"
"#;

        let config = InventoryConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level(), Some("error"));
        assert_eq!(
            crate::utils::logger::filter_directive(config.log_level(), false),
            "jeep_inventory=error"
        );
    }
}
