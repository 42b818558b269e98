use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Dense handle for a catalog row, assigned during normalization.
/// The same handle keys the title index and both similarity-matrix axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Display title, case preserved.
    pub title: String,
    /// Lowercase category tags.
    pub categories: Vec<String>,
    /// Lowercased free text, empty when the source had none.
    pub description: String,
    /// Composite text the similarity model is built from. Derived from the
    /// other three fields, never edited independently.
    pub content: String,
}

impl Item {
    /// Space-joined category tags, the form the category filter matches
    /// against.
    pub fn category_text(&self) -> String {
        self.categories.join(" ")
    }
}

/// Ordered sequence of normalized items, indexed by `ItemId` position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.index())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Sorted distinct display titles, for populating selection controls.
    pub fn titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = self.items.iter().map(|item| item.title.clone()).collect();
        titles.sort();
        titles.dedup();
        titles
    }

    /// Sorted distinct category tags across the whole catalog.
    pub fn category_tags(&self) -> Vec<String> {
        let tags: BTreeSet<&str> = self
            .items
            .iter()
            .flat_map(|item| item.categories.iter().map(String::as_str))
            .collect();
        tags.into_iter().map(str::to_string).collect()
    }
}

/// Case-folded title lookup. When two items fold to the same title the
/// first-seen item wins.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    map: HashMap<String, ItemId>,
}

impl TitleIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let mut map = HashMap::with_capacity(catalog.len());
        for item in catalog.iter() {
            map.entry(item.title.to_lowercase()).or_insert(item.id);
        }
        Self { map }
    }

    pub fn resolve(&self, title: &str) -> Option<ItemId> {
        self.map.get(&title.trim().to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
