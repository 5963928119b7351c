use serde::{Deserialize, Serialize};

/// Static attributes for one item, pulled out of a catalog source text.
///
/// `secondary_stat` is the item's experience or coin yield depending on which
/// stat variant the sources were extracted with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub sell_price: f64,
    pub secondary_stat: f64,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, sell_price: f64, secondary_stat: f64) -> Self {
        Self {
            name: name.into(),
            sell_price,
            secondary_stat,
        }
    }

    /// Canonical key for lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Whether the entry carries any signal worth keeping.
    pub fn has_signal(&self) -> bool {
        self.sell_price > 0.0 || self.secondary_stat > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalizes() {
        let entry = CatalogEntry::new("  Apple Pie ", 10.0, 0.0);
        assert_eq!(entry.key(), "apple pie");
    }

    #[test]
    fn test_has_signal() {
        assert!(CatalogEntry::new("a", 1.0, 0.0).has_signal());
        assert!(CatalogEntry::new("a", 0.0, 2.5).has_signal());
        assert!(!CatalogEntry::new("a", 0.0, 0.0).has_signal());
    }
}
