use std::collections::HashMap;

use crate::models::{CatalogEntry, ComputedItem};

/// Ratio at or above which an item is flagged as a strong exchange.
pub const RATIO_HIGHLIGHT: f64 = 320.0;

/// Format a price with more digits for very small values.
pub fn format_price(value: f64) -> String {
    if value < 0.01 {
        format!("{:.5}", value)
    } else {
        format!("{:.4}", value)
    }
}

fn cell(value: f64) -> String {
    if value > 0.0 {
        format_price(value)
    } else {
        "-".to_string()
    }
}

fn round_cell(value: f64) -> String {
    if value > 0.0 {
        format!("{:.0}", value.round())
    } else {
        "-".to_string()
    }
}

/// Display computed items in a formatted table.
///
/// Overridden prices are marked with `*`; items at or above the ratio
/// highlight threshold get a `>` marker. The caller decides order and
/// filtering before calling.
pub fn display_items(items: &[&ComputedItem], show_efficiency: bool) {
    if items.is_empty() {
        println!("No items to display (no data extracted or everything filtered out).");
        return;
    }

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    println!();
    if show_efficiency {
        println!(
            "  {:<width$}  {:<10}  {:>10}  {:>10}  {:>8}  {:>8}",
            "Name",
            "Category",
            "P2P",
            "Sell",
            "Ratio",
            "Eff",
            width = max_name_len
        );
    } else {
        println!(
            "  {:<width$}  {:<10}  {:>10}  {:>10}  {:>8}",
            "Name",
            "Category",
            "P2P",
            "Sell",
            "Ratio",
            width = max_name_len
        );
    }

    for item in items {
        let marker = if item.ratio >= RATIO_HIGHLIGHT { ">" } else { " " };
        let p2p = if item.is_custom {
            format!("{}*", cell(item.p2p))
        } else {
            cell(item.p2p)
        };

        if show_efficiency {
            println!(
                "{} {:<width$}  {:<10}  {:>10}  {:>10}  {:>8}  {:>8}",
                marker,
                item.name,
                item.category.to_string(),
                p2p,
                cell(item.sell_price),
                round_cell(item.ratio),
                round_cell(item.efficiency),
                width = max_name_len
            );
        } else {
            println!(
                "{} {:<width$}  {:<10}  {:>10}  {:>10}  {:>8}",
                marker,
                item.name,
                item.category.to_string(),
                p2p,
                cell(item.sell_price),
                round_cell(item.ratio),
                width = max_name_len
            );
        }
    }

    let quoted = items.iter().filter(|i| i.has_quote()).count();
    let custom = items.iter().filter(|i| i.is_custom).count();

    println!();
    println!("--- Summary ---");
    println!("Items: {}", items.len());
    println!("With market quote: {}", quoted);
    if custom > 0 {
        println!("Overridden prices: {} (marked *)", custom);
    }
    if let Some(best) = items
        .iter()
        .filter(|i| i.ratio > 0.0)
        .max_by(|a, b| a.ratio.total_cmp(&b.ratio))
    {
        println!("Best ratio: {} ({:.0})", best.name, best.ratio.round());
    }
    println!();
}

/// Display a raw extracted catalog, sorted by name.
pub fn display_catalog(title: &str, catalog: &HashMap<String, CatalogEntry>) {
    if catalog.is_empty() {
        println!("{}: (nothing extracted)", title);
        return;
    }

    let mut entries: Vec<&CatalogEntry> = catalog.values().collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    println!();
    println!("=== {} ({} entries) ===", title, entries.len());
    println!();
    for entry in entries {
        println!(
            "  {} - sell: {}, stat: {}",
            entry.name,
            format_price(entry.sell_price),
            entry.secondary_stat
        );
    }
    println!();
}
