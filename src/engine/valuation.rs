use std::collections::HashMap;

use crate::engine::categories::CategoryTable;
use crate::models::{CatalogEntry, ComputedItem, ItemCategory};

/// Promotional bonus multipliers. Crops only; both compound when set.
pub const BONUS5_MULT: f64 = 1.05;
pub const BONUS10_MULT: f64 = 1.10;

/// Which semantics the secondary numeric attribute carries.
///
/// Source variants disagree: one records an experience yield (driving the
/// efficiency metric), the other a coin yield with no efficiency metric at
/// all. The choice feeds both the extractor schema and the engine, so
/// neither has to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatVariant {
    #[default]
    Experience,
    Coin,
}

impl StatVariant {
    /// Accepted source field names for the secondary attribute, in match
    /// order.
    pub fn secondary_fields(self) -> &'static [&'static str] {
        match self {
            StatVariant::Experience => &["xp"],
            StatVariant::Coin => &["coin", "coins"],
        }
    }

    /// Whether the efficiency metric (secondary stat per unit of market
    /// cost) is computed.
    pub fn computes_efficiency(self) -> bool {
        matches!(self, StatVariant::Experience)
    }
}

/// Merges live quotes with catalog attributes into valued item rows.
///
/// Holds no state between calls beyond the borrowed category table; every
/// operation is a pure function over its inputs except the single-record
/// mutators.
pub struct ValuationEngine<'a> {
    table: &'a CategoryTable,
    variant: StatVariant,
}

impl<'a> ValuationEngine<'a> {
    pub fn new(table: &'a CategoryTable, variant: StatVariant) -> Self {
        Self { table, variant }
    }

    pub fn variant(&self) -> StatVariant {
        self.variant
    }

    /// Build the full list of valued items from a quote snapshot and a
    /// merged catalog.
    ///
    /// Walks the union of the category lists; a name with no quote, no sell
    /// price and no secondary stat is excluded entirely. Output order is the
    /// union traversal order; callers wanting a display order sort
    /// themselves.
    pub fn calculate(
        &self,
        quotes: &HashMap<String, f64>,
        catalog: &HashMap<String, CatalogEntry>,
        bonus5: bool,
        bonus10: bool,
    ) -> Vec<ComputedItem> {
        let mut items = Vec::new();

        for name in self.table.all_names() {
            let key = name.to_lowercase();

            let quote = quotes.get(&key).copied().unwrap_or(0.0);
            // Non-positive quotes mean "no quote observed."
            let p2p = if quote > 0.0 { quote } else { 0.0 };

            let (base_sell, secondary) = catalog
                .get(&key)
                .map(|e| (e.sell_price, e.secondary_stat))
                .unwrap_or((0.0, 0.0));

            if base_sell <= 0.0 && secondary <= 0.0 && p2p <= 0.0 {
                continue;
            }

            let category = self.table.category_of(name);
            let mut sell_price = base_sell;
            if category == ItemCategory::Crops {
                if bonus5 {
                    sell_price *= BONUS5_MULT;
                }
                if bonus10 {
                    sell_price *= BONUS10_MULT;
                }
            }

            let mut item = ComputedItem {
                name: name.to_string(),
                category,
                original_p2p: p2p,
                p2p,
                is_custom: false,
                sell_price,
                secondary_stat: secondary,
                efficiency: 0.0,
                ratio: 0.0,
            };
            self.recalculate_item(&mut item);
            items.push(item);
        }

        items
    }

    /// Refresh `ratio` and `efficiency` from the item's current `p2p` and
    /// its stored sell price and secondary stat.
    ///
    /// Does not re-derive the sell price from bonus flags; after a bonus
    /// toggle the caller must run `calculate` again. Idempotent.
    pub fn recalculate_item(&self, item: &mut ComputedItem) {
        if item.p2p > 0.0 {
            item.ratio = if item.sell_price > 0.0 {
                item.sell_price / item.p2p
            } else {
                0.0
            };
            item.efficiency =
                if self.variant.computes_efficiency() && item.secondary_stat > 0.0 {
                    item.secondary_stat / item.p2p
                } else {
                    0.0
                };
        } else {
            item.ratio = 0.0;
            item.efficiency = 0.0;
        }
    }

    /// Apply a raw user override to an item's market price, then refresh its
    /// derived metrics.
    ///
    /// `None` or blank input reverts `p2p` to the originally observed quote
    /// and clears the custom flag; a finite value ≥ 0 replaces `p2p` and
    /// sets it. Anything else is rejected silently with no state change.
    /// Returns whether the item changed.
    pub fn apply_override(&self, item: &mut ComputedItem, raw: Option<&str>) -> bool {
        match raw.map(str::trim) {
            None | Some("") => {
                item.p2p = item.original_p2p;
                item.is_custom = false;
            }
            Some(input) => match input.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => {
                    item.p2p = value;
                    item.is_custom = true;
                }
                _ => return false,
            },
        }
        self.recalculate_item(item);
        true
    }
}
