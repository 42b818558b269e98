use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::catalog::Catalog;
use super::tokenize::tokenize;

/// Terms present in more than this fraction of the catalog are dropped from
/// the vocabulary; they carry no discriminative signal.
const MAX_DOC_FREQ: f64 = 0.8;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("No usable terms remain after stop-word and frequency filtering")]
    EmptyVocabulary,
}

/// TF-IDF weighted vector representation of every item's composite text.
///
/// Vectors are sparse (term index, weight) pairs sorted by term index and
/// L2-normalized, so the dot product of two vectors is their cosine
/// similarity.
#[derive(Debug, Clone)]
pub struct VectorModel {
    vocabulary: HashMap<String, usize>,
    vectors: Vec<Vec<(usize, f64)>>,
}

impl VectorModel {
    pub fn fit(catalog: &Catalog) -> Result<Self, IndexError> {
        let n_docs = catalog.len();
        let tokenized: Vec<Vec<String>> = catalog
            .iter()
            .map(|item| tokenize(&item.content))
            .collect();

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let cutoff = MAX_DOC_FREQ * n_docs as f64;
        let mut terms: Vec<&str> = doc_freq
            .iter()
            .filter(|(_, df)| (**df as f64) <= cutoff)
            .map(|(term, _)| *term)
            .collect();
        if terms.is_empty() {
            return Err(IndexError::EmptyVocabulary);
        }
        // Sorted so term indices are stable across identical catalogs.
        terms.sort_unstable();

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        // Smoothed inverse document frequency.
        let mut idf = vec![0.0f64; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = doc_freq[term.as_str()];
            idf[idx] = (((1 + n_docs) as f64) / ((1 + df) as f64)).ln() + 1.0;
        }

        let mut vectors = Vec::with_capacity(n_docs);
        for tokens in &tokenized {
            let mut counts: HashMap<usize, f64> = HashMap::new();
            for token in tokens {
                if let Some(&idx) = vocabulary.get(token.as_str()) {
                    *counts.entry(idx).or_insert(0.0) += 1.0;
                }
            }

            let mut vector: Vec<(usize, f64)> = counts
                .into_iter()
                .map(|(idx, tf)| (idx, tf * idf[idx]))
                .collect();
            vector.sort_unstable_by_key(|&(idx, _)| idx);

            let norm = vector.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for entry in &mut vector {
                    entry.1 /= norm;
                }
            }

            vectors.push(vector);
        }

        debug!(
            "Vector model built: {} items, {} terms",
            vectors.len(),
            vocabulary.len()
        );

        Ok(Self { vocabulary, vectors })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn vector(&self, idx: usize) -> &[(usize, f64)] {
        &self.vectors[idx]
    }
}
