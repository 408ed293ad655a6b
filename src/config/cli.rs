use crate::core::{ConfigProvider, JeepOrdering};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "jeep-inventory")]
#[command(about = "Look up Jeep inventory by model and trim")]
pub struct CliConfig {
    #[arg(long, help = "Model to look up, e.g. WRANGLER")]
    pub model: String,

    #[arg(long, help = "Trim level to look up, e.g. Sport")]
    pub trim: String,

    #[arg(long, help = "TOML configuration file; overrides the catalog and ordering flags")]
    pub config: Option<String>,

    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    #[arg(long, default_value = "jeeps.csv")]
    pub catalog_file: String,

    #[arg(long, default_value = "natural")]
    pub ordering: JeepOrdering,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn catalog_file(&self) -> &str {
        &self.catalog_file
    }

    fn ordering(&self) -> JeepOrdering {
        self.ordering
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_path("catalog_file", &self.catalog_file)?;
        validate_file_extension("catalog_file", &self.catalog_file, &["csv"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config =
            CliConfig::try_parse_from(["jeep-inventory", "--model", "WRANGLER", "--trim", "Sport"])
                .unwrap();
        assert_eq!(config.model, "WRANGLER");
        assert_eq!(config.trim, "Sport");
        assert_eq!(config.data_dir(), "./data");
        assert_eq!(config.catalog_file(), "jeeps.csv");
        assert_eq!(config.ordering(), JeepOrdering::Natural);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_ordering_flag() {
        let config = CliConfig::try_parse_from([
            "jeep-inventory",
            "--model",
            "WRANGLER",
            "--trim",
            "Sport",
            "--ordering",
            "base_price",
        ])
        .unwrap();
        assert_eq!(config.ordering(), JeepOrdering::BasePrice);

        assert!(CliConfig::try_parse_from([
            "jeep-inventory",
            "--model",
            "WRANGLER",
            "--trim",
            "Sport",
            "--ordering",
            "cheapest",
        ])
        .is_err());
    }

    #[test]
    fn test_validate_rejects_non_csv_catalog() {
        let mut config =
            CliConfig::try_parse_from(["jeep-inventory", "--model", "WRANGLER", "--trim", "Sport"])
                .unwrap();
        config.catalog_file = "jeeps.json".to_string();
        assert!(config.validate().is_err());
    }
}
