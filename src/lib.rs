pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod parser;
pub mod quotes;
pub mod sources;

pub use error::{CalcError, Result};
pub use models::{CatalogEntry, ComputedItem, ItemCategory};
