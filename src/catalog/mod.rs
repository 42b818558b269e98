pub mod item;
pub mod normalize;
pub mod reader;

pub use item::{Catalog, Item, ItemId, TitleIndex};
pub use normalize::{normalize, SchemaError};
pub use reader::{read_records, RawRecord, ReadError};
