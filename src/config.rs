use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_file")]
    pub file: String,
    /// Upper bound on the number of raw records read from the source file.
    #[serde(default = "default_max_records")]
    pub max_records: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: default_catalog_file(),
            max_records: default_max_records(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

fn default_catalog_file() -> String {
    "movies.csv".to_string()
}

fn default_max_records() -> usize {
    1000
}

fn default_top_n() -> usize {
    crate::recommend::DEFAULT_TOP_N
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.catalog.file, "movies.csv");
        assert_eq!(config.catalog.max_records, 1000);
        assert_eq!(config.recommend.top_n, 5);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("catalog:\n  file: films.csv\n").unwrap();
        assert_eq!(config.catalog.file, "films.csv");
        assert_eq!(config.catalog.max_records, 1000);
        assert_eq!(config.recommend.top_n, 5);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "catalog:\n  file: data.csv\n  max_records: 50\nrecommend:\n  top_n: 3\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.catalog.max_records, 50);
        assert_eq!(config.recommend.top_n, 3);
    }
}
