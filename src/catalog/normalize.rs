use tracing::debug;

use super::item::{Catalog, Item, ItemId};
use super::reader::RawRecord;

pub const TITLE_COLUMN: &str = "title";
pub const CATEGORIES_COLUMN: &str = "categories";
pub const DESCRIPTION_COLUMN: &str = "description";

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Normalize raw records into a catalog.
///
/// Requires `title` and `categories` columns. A missing `description` column
/// is synthesized as empty. Rows with an empty title or empty categories are
/// dropped whole. Each surviving item gets its composite `content` field and
/// a dense `ItemId`.
pub fn normalize(records: &[RawRecord]) -> Result<Catalog, SchemaError> {
    // Tabular sources carry the same columns on every row, so the first
    // record is authoritative for the schema check.
    if let Some(first) = records.first() {
        for column in [TITLE_COLUMN, CATEGORIES_COLUMN] {
            if !first.contains_key(column) {
                return Err(SchemaError::MissingColumn(column));
            }
        }
    }

    let mut items = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for record in records {
        let title = record.get(TITLE_COLUMN).map_or("", |s| s.trim());
        let raw_categories = record.get(CATEGORIES_COLUMN).map_or("", |s| s.trim());

        if title.is_empty() || raw_categories.is_empty() {
            dropped += 1;
            continue;
        }

        let categories = split_categories(raw_categories);
        let description = record
            .get(DESCRIPTION_COLUMN)
            .map_or(String::new(), |s| s.trim().to_lowercase());

        let content = compose_content(title, &categories, &description);

        items.push(Item {
            id: ItemId(items.len() as u32),
            title: title.to_string(),
            categories,
            description,
            content,
        });
    }

    if dropped > 0 {
        debug!("Dropped {} records with empty title or categories", dropped);
    }

    Ok(Catalog::new(items))
}

/// `|`-separated source tags become lowercase tokens.
fn split_categories(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .replace('|', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Composite text: lowercased title, space-joined categories, lowercased
/// description.
fn compose_content(title: &str, categories: &[String], description: &str) -> String {
    format!(
        "{} {} {}",
        title.to_lowercase(),
        categories.join(" "),
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawRecord;

    fn record(fields: &[(&str, &str)]) -> RawRecord {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        let records = vec![record(&[("title", "Alien"), ("year", "1979")])];
        let err = normalize(&records).unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn("categories")));
    }

    #[test]
    fn test_missing_description_column_is_synthesized_empty() {
        let records = vec![record(&[("title", "Alien"), ("categories", "horror")])];
        let catalog = normalize(&records).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].description, "");
    }

    #[test]
    fn test_rows_with_empty_values_are_dropped() {
        let records = vec![
            record(&[("title", "Alien"), ("categories", "horror")]),
            record(&[("title", ""), ("categories", "drama")]),
            record(&[("title", "Heat"), ("categories", "")]),
        ];
        let catalog = normalize(&records).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].title, "Alien");
        // Dropped rows never get an id, so handles stay dense.
        assert_eq!(catalog.items()[0].id, ItemId(0));
    }

    #[test]
    fn test_pipe_separated_categories_become_lowercase_tags() {
        let records = vec![record(&[("title", "Heat"), ("categories", "Action|Crime|Drama")])];
        let catalog = normalize(&records).unwrap();
        assert_eq!(catalog.items()[0].categories, vec!["action", "crime", "drama"]);
    }

    #[test]
    fn test_content_composition() {
        let records = vec![record(&[
            ("title", "The Matrix"),
            ("categories", "Action|Sci-Fi"),
            ("description", "A hacker Learns the Truth"),
        ])];
        let catalog = normalize(&records).unwrap();
        assert_eq!(
            catalog.items()[0].content,
            "the matrix action sci-fi a hacker learns the truth"
        );
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let records = vec![
            record(&[("title", "Alpha"), ("categories", "war|drama")]),
            record(&[("title", "Beta"), ("categories", "war")]),
        ];
        let a = normalize(&records).unwrap();
        let b = normalize(&records).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.content, y.content);
        }
    }
}
