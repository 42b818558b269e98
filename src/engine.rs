use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::info;

use crate::catalog::{Catalog, TitleIndex};
use crate::index::{self, IndexError, SimilarityMatrix, VectorModel};
use crate::recommend::{recommend, Recommendations};

/// Everything built from one catalog state: the catalog itself, its title
/// lookup, the vector model and the similarity matrix. Immutable once built.
#[derive(Debug)]
pub struct Snapshot {
    pub catalog: Catalog,
    pub titles: TitleIndex,
    pub model: VectorModel,
    pub matrix: SimilarityMatrix,
}

impl Snapshot {
    pub fn build(catalog: Catalog) -> Result<Self, IndexError> {
        let titles = TitleIndex::build(&catalog);
        let (model, matrix) = index::build(&catalog)?;
        Ok(Self {
            catalog,
            titles,
            model,
            matrix,
        })
    }
}

/// Owns the current snapshot. Queries are lock-free reads against it; a
/// catalog refresh builds a whole new snapshot and swaps it in atomically.
/// There is no partial or incremental update path.
pub struct RecommendEngine {
    snapshot: ArcSwap<Snapshot>,
}

impl RecommendEngine {
    pub fn new(catalog: Catalog) -> Result<Self, IndexError> {
        let snapshot = Snapshot::build(catalog)?;
        info!(
            "Similarity model built: {} items, {} terms",
            snapshot.catalog.len(),
            snapshot.model.vocabulary_size()
        );
        Ok(Self {
            snapshot: ArcSwap::from_pointee(snapshot),
        })
    }

    /// Rebuild from a fresh catalog and atomically replace the snapshot.
    /// In-flight readers keep the snapshot they already loaded.
    pub fn rebuild(&self, catalog: Catalog) -> Result<(), IndexError> {
        let snapshot = Snapshot::build(catalog)?;
        info!("Similarity model rebuilt: {} items", snapshot.catalog.len());
        self.snapshot.store(Arc::new(snapshot));
        Ok(())
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot.load_full()
    }

    pub fn recommend(
        &self,
        title: &str,
        category_filter: Option<&str>,
        top_n: usize,
    ) -> Recommendations {
        let snap = self.snapshot.load();
        recommend(
            &snap.catalog,
            &snap.matrix,
            &snap.titles,
            title,
            category_filter,
            top_n,
        )
    }

    /// Sorted distinct display titles, for selection controls.
    pub fn titles(&self) -> Vec<String> {
        self.snapshot.load().catalog.titles()
    }

    /// Sorted distinct category tags, for filter controls.
    pub fn category_tags(&self) -> Vec<String> {
        self.snapshot.load().catalog.category_tags()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::normalize;
    use std::collections::HashMap;

    fn catalog(rows: &[(&str, &str)]) -> Catalog {
        let records: Vec<HashMap<String, String>> = rows
            .iter()
            .map(|(title, categories)| {
                [
                    ("title".to_string(), title.to_string()),
                    ("categories".to_string(), categories.to_string()),
                ]
                .into_iter()
                .collect()
            })
            .collect();
        normalize(&records).unwrap()
    }

    #[test]
    fn test_engine_answers_queries() {
        let engine = RecommendEngine::new(catalog(&[
            ("Alpha", "war|drama"),
            ("Beta", "war"),
            ("Gamma", "comedy"),
        ]))
        .unwrap();

        let result = engine.recommend("Alpha", None, 2);
        assert_eq!(result.display_lines(), vec!["Beta", "Gamma"]);
        assert_eq!(engine.titles(), vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(engine.category_tags(), vec!["comedy", "drama", "war"]);
    }

    #[test]
    fn test_rebuild_swaps_the_snapshot() {
        let engine =
            RecommendEngine::new(catalog(&[("Alpha", "war"), ("Beta", "war")])).unwrap();
        assert_eq!(engine.titles(), vec!["Alpha", "Beta"]);

        engine
            .rebuild(catalog(&[("Delta", "noir"), ("Echo", "noir")]))
            .unwrap();
        assert_eq!(engine.titles(), vec!["Delta", "Echo"]);

        let result = engine.recommend("Alpha", None, 5);
        assert_eq!(result, Recommendations::NotFound);
    }

    #[test]
    fn test_failed_rebuild_keeps_the_old_snapshot() {
        let engine =
            RecommendEngine::new(catalog(&[("Alpha", "war"), ("Beta", "war")])).unwrap();

        // Nothing but stop words: the build fails and the engine keeps
        // serving the previous snapshot.
        let err = engine.rebuild(catalog(&[("The", "of|and")]));
        assert!(err.is_err());
        assert_eq!(engine.titles(), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_readers_keep_their_loaded_snapshot() {
        let engine =
            RecommendEngine::new(catalog(&[("Alpha", "war"), ("Beta", "war")])).unwrap();
        let held = engine.snapshot();

        engine
            .rebuild(catalog(&[("Delta", "noir"), ("Echo", "heist")]))
            .unwrap();

        assert_eq!(held.catalog.titles(), vec!["Alpha", "Beta"]);
        assert_eq!(engine.titles(), vec!["Delta", "Echo"]);
    }
}
