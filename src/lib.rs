pub mod catalog;
pub mod config;
pub mod engine;
pub mod index;
pub mod recommend;

use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Catalog read error: {0}")]
    Read(#[from] catalog::ReadError),
    #[error("Catalog schema error: {0}")]
    Schema(#[from] catalog::SchemaError),
    #[error("Index error: {0}")]
    Index(#[from] index::IndexError),
    #[error("Output encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load the catalog named by the config, normalize it and build a ready
/// recommendation engine.
pub fn build_engine(config: &config::Config) -> Result<engine::RecommendEngine, AppError> {
    info!("Loading catalog from {}", config.catalog.file);
    let records = catalog::read_records(&config.catalog.file, config.catalog.max_records)?;

    let catalog = catalog::normalize(&records)?;
    info!("Catalog ready: {} items", catalog.len());

    let engine = engine::RecommendEngine::new(catalog)?;
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::Recommendations;

    #[test]
    fn test_full_pipeline_from_csv_file() {
        let path = std::env::temp_dir().join(format!(
            "reelrec-pipeline-{}-{:?}.csv",
            std::process::id(),
            std::thread::current().id()
        ));
        std::fs::write(
            &path,
            "title,categories,description\n\
             Alpha,war|drama,\n\
             Beta,war,\n\
             Gamma,comedy,\n",
        )
        .unwrap();

        let config = config::Config {
            catalog: config::CatalogConfig {
                file: path.to_string_lossy().to_string(),
                max_records: 1000,
            },
            recommend: config::RecommendConfig { top_n: 5 },
        };

        let engine = build_engine(&config).unwrap();
        let result = engine.recommend("Alpha", None, 2);
        assert_eq!(result.display_lines(), vec!["Beta", "Gamma"]);

        let missing = engine.recommend("Nonexistent Title", None, 5);
        assert_eq!(missing, Recommendations::NotFound);

        std::fs::remove_file(&path).ok();
    }
}
