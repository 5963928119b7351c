use std::fmt;

use serde::Serialize;

/// Category membership for a market item.
///
/// The set is closed; `Other` is the fallback for names outside every
/// configured list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemCategory {
    Crops,
    Fruits,
    Greenhouse,
    Other,
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemCategory::Crops => "Crops",
            ItemCategory::Fruits => "Fruits",
            ItemCategory::Greenhouse => "Greenhouse",
            ItemCategory::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// One fully valued market row: live quote merged with catalog attributes.
#[derive(Debug, Clone, Serialize)]
pub struct ComputedItem {
    pub name: String,

    pub category: ItemCategory,

    /// Quote price as first observed. Never touched by overrides.
    pub original_p2p: f64,

    /// Current market price; may be user-overridden.
    pub p2p: f64,

    /// Whether `p2p` currently holds a user override.
    pub is_custom: bool,

    /// NPC sell price after any promotional bonus.
    pub sell_price: f64,

    pub secondary_stat: f64,

    /// Secondary stat per unit of market cost. 0 when not computed.
    pub efficiency: f64,

    /// Sell price per unit of market cost. 0 when either side is missing.
    pub ratio: f64,
}

impl ComputedItem {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether a live quote was observed for this item.
    pub fn has_quote(&self) -> bool {
        self.original_p2p > 0.0
    }
}
