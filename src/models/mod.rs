mod catalog;
mod item;

pub use catalog::CatalogEntry;
pub use item::{ComputedItem, ItemCategory};
