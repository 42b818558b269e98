use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::{Catalog, TitleIndex};
use crate::index::SimilarityMatrix;

pub const DEFAULT_TOP_N: usize = 5;

/// User-facing sentinel lines, rendered by the presentation layer.
pub const NOT_FOUND_SENTINEL: &str = "Movie not found in database.";
pub const NO_MATCHES_SENTINEL: &str = "No similar movies found.";

/// One ranked candidate. The required contract surface is the title; the
/// score rides along for callers that want it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scored {
    pub title: String,
    pub score: f64,
}

/// Outcome of one recommendation query. The not-found and no-matches cases
/// are ordinary results, never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendations {
    Ranked(Vec<Scored>),
    NotFound,
    NoMatches,
}

impl Recommendations {
    /// Ranked titles, or the single sentinel line.
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            Recommendations::Ranked(list) => list.iter().map(|s| s.title.clone()).collect(),
            Recommendations::NotFound => vec![NOT_FOUND_SENTINEL.to_string()],
            Recommendations::NoMatches => vec![NO_MATCHES_SENTINEL.to_string()],
        }
    }

    pub fn as_ranked(&self) -> Option<&[Scored]> {
        match self {
            Recommendations::Ranked(list) => Some(list),
            _ => None,
        }
    }
}

/// Rank every other catalog item by similarity to `query_title`.
///
/// The query title resolves case-insensitively. The query item never appears
/// in its own results. `category_filter` is a case-insensitive substring
/// check against the candidate's space-joined category text ("com" matches
/// "comedy"); it applies during the ranking walk, so excluded items do not
/// disturb the order of eligible ones. Equal scores keep catalog order.
///
/// Stateless: the same snapshot and arguments always produce the same list.
pub fn recommend(
    catalog: &Catalog,
    matrix: &SimilarityMatrix,
    titles: &TitleIndex,
    query_title: &str,
    category_filter: Option<&str>,
    top_n: usize,
) -> Recommendations {
    let Some(query_id) = titles.resolve(query_title) else {
        return Recommendations::NotFound;
    };

    let row = matrix.row(query_id.index());
    let mut ranked: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
    // Stable sort: equal scores stay in catalog order.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let filter = category_filter.map(str::to_lowercase);
    let mut results = Vec::new();

    for (idx, score) in ranked {
        if idx == query_id.index() {
            continue;
        }

        let item = &catalog.items()[idx];
        if let Some(filter) = &filter {
            if !item.category_text().contains(filter.as_str()) {
                continue;
            }
        }

        results.push(Scored {
            title: item.title.clone(),
            score,
        });
        if results.len() == top_n {
            break;
        }
    }

    if results.is_empty() {
        return Recommendations::NoMatches;
    }

    Recommendations::Ranked(results)
}
