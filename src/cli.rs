use clap::{Parser, Subcommand, ValueEnum};

use crate::engine::StatVariant;
use crate::models::ItemCategory;

/// FarmMarketCalc — ranks farm items by NPC sell value against live
/// player-market prices.
#[derive(Parser, Debug)]
#[command(name = "farm_market_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the crops catalog source text.
    #[arg(long, default_value = "crops.ts")]
    pub crops: String,

    /// Path to the fruits catalog source text.
    #[arg(long, default_value = "fruits.ts")]
    pub fruits: String,

    /// Path to the market quote JSON payload.
    #[arg(long, default_value = "prices.json")]
    pub prices: String,

    /// Secondary-stat semantics of the catalog sources.
    #[arg(long, value_enum, default_value = "xp")]
    pub stat: StatArg,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute and display the exchange table.
    Calc {
        /// Apply the 5% crop sell bonus.
        #[arg(long)]
        bonus5: bool,

        /// Apply the 10% crop sell bonus.
        #[arg(long)]
        bonus10: bool,

        /// Show only one category.
        #[arg(long, value_enum, default_value = "all")]
        category: CategoryArg,

        /// Field to sort by.
        #[arg(long, value_enum, default_value = "ratio")]
        sort: SortField,

        /// Sort ascending instead of descending.
        #[arg(long)]
        asc: bool,

        /// Prompt for per-item price overrides after display.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Write the computed table to a CSV file.
    Export {
        /// Output CSV path.
        #[arg(short, long, default_value = "market.csv")]
        output: String,

        /// Apply the 5% crop sell bonus.
        #[arg(long)]
        bonus5: bool,

        /// Apply the 10% crop sell bonus.
        #[arg(long)]
        bonus10: bool,
    },

    /// Show what the scanner and extractor pull out of each source text.
    Inspect,
}

impl Default for Command {
    fn default() -> Self {
        Command::Calc {
            bonus5: false,
            bonus10: false,
            category: CategoryArg::All,
            sort: SortField::Ratio,
            asc: false,
            interactive: false,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatArg {
    /// Secondary stat is an experience yield; efficiency is computed.
    Xp,
    /// Secondary stat is a coin yield; no efficiency metric.
    Coin,
}

impl From<StatArg> for StatVariant {
    fn from(arg: StatArg) -> Self {
        match arg {
            StatArg::Xp => StatVariant::Experience,
            StatArg::Coin => StatVariant::Coin,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryArg {
    All,
    Crops,
    Fruits,
    Greenhouse,
    Other,
}

impl CategoryArg {
    /// Whether an item of `category` passes this filter.
    pub fn matches(self, category: ItemCategory) -> bool {
        match self {
            CategoryArg::All => true,
            CategoryArg::Crops => category == ItemCategory::Crops,
            CategoryArg::Fruits => category == ItemCategory::Fruits,
            CategoryArg::Greenhouse => category == ItemCategory::Greenhouse,
            CategoryArg::Other => category == ItemCategory::Other,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    P2p,
    Sell,
    Ratio,
    Efficiency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter() {
        assert!(CategoryArg::All.matches(ItemCategory::Other));
        assert!(CategoryArg::Crops.matches(ItemCategory::Crops));
        assert!(!CategoryArg::Crops.matches(ItemCategory::Fruits));
    }

    #[test]
    fn test_stat_arg_conversion() {
        assert_eq!(StatVariant::from(StatArg::Xp), StatVariant::Experience);
        assert_eq!(StatVariant::from(StatArg::Coin), StatVariant::Coin);
    }
}
