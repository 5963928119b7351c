pub mod categories;
pub mod valuation;

pub use categories::CategoryTable;
pub use valuation::{StatVariant, ValuationEngine, BONUS10_MULT, BONUS5_MULT};
