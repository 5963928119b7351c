use std::collections::HashMap;

use assert_float_eq::assert_f64_near;
use serde_json::json;

use farm_market_calc_rs::engine::{CategoryTable, StatVariant, ValuationEngine};
use farm_market_calc_rs::parser::{build_catalog, ExtractorSchema};
use farm_market_calc_rs::quotes::normalize_quotes;

/// A realistic loosely-formatted catalog source, including a wrapper-call
/// sell price and an entry the extractor should skip.
const CROPS_SOURCE: &str = r#"
import { marketRate } from "../lib/economy";

export const CROPS: Record<CropName, Crop> = {
  Sunflower: {
    name: "Sunflower",
    sellPrice: marketRate(0.02),
    xp: 1,
    harvestSeconds: 60,
  },
  Potato: {
    name: "Potato",
    sellPrice: 0.14,
    xp: 2,
  },
  Weed: {
    name: "Weed",
    decorative: true,
  },
};
"#;

const FRUITS_SOURCE: &str = r#"
export const FRUIT = {
  Apple: { sellPrice: 25, xp: 6 },
  Blueberry: { sellPrice: 12, xp: 3 },
};
"#;

fn pipeline() -> (
    CategoryTable,
    HashMap<String, farm_market_calc_rs::CatalogEntry>,
    HashMap<String, f64>,
) {
    let schema = ExtractorSchema::new(StatVariant::Experience.secondary_fields());
    let catalog = build_catalog([CROPS_SOURCE, FRUITS_SOURCE], &schema);
    let payload = json!({
        "data": {
            "p2p": {
                "sunflower": "0.001",
                "Potato": 0.07,
                "Apple": 5.0,
            }
        }
    });
    let quotes = normalize_quotes(&payload);
    (CategoryTable::standard(), catalog, quotes)
}

#[test]
fn test_catalog_extraction_end_to_end() {
    let (_, catalog, _) = pipeline();

    // Weed has no recognized attributes and is not emitted.
    assert_eq!(catalog.len(), 4);
    assert_f64_near!(catalog["sunflower"].sell_price, 0.02);
    assert_f64_near!(catalog["potato"].sell_price, 0.14);
    assert_f64_near!(catalog["apple"].secondary_stat, 6.0);
    assert!(!catalog.contains_key("weed"));
}

#[test]
fn test_valuation_end_to_end() {
    let (table, catalog, quotes) = pipeline();
    let engine = ValuationEngine::new(&table, StatVariant::Experience);

    let items = engine.calculate(&quotes, &catalog, false, false);

    // Sunflower, Potato, Apple have quotes or attributes; Blueberry has
    // attributes only; nothing else shows up.
    assert_eq!(items.len(), 4);

    let potato = items.iter().find(|i| i.name == "Potato").unwrap();
    assert_f64_near!(potato.p2p, 0.07);
    assert_f64_near!(potato.original_p2p, 0.07);
    assert_f64_near!(potato.ratio, 2.0);
    assert!(!potato.is_custom);

    let blueberry = items.iter().find(|i| i.name == "Blueberry").unwrap();
    assert_f64_near!(blueberry.p2p, 0.0);
    assert_f64_near!(blueberry.ratio, 0.0);
    assert_f64_near!(blueberry.efficiency, 0.0);
}

#[test]
fn test_bonus_toggle_requires_fresh_calculate() {
    let (table, catalog, quotes) = pipeline();
    let engine = ValuationEngine::new(&table, StatVariant::Experience);

    let plain = engine.calculate(&quotes, &catalog, false, false);
    let boosted = engine.calculate(&quotes, &catalog, true, true);

    let plain_potato = plain.iter().find(|i| i.name == "Potato").unwrap();
    let boosted_potato = boosted.iter().find(|i| i.name == "Potato").unwrap();
    assert_f64_near!(boosted_potato.sell_price, plain_potato.sell_price * 1.05 * 1.10);

    // Fruits are untouched by crop bonuses.
    let plain_apple = plain.iter().find(|i| i.name == "Apple").unwrap();
    let boosted_apple = boosted.iter().find(|i| i.name == "Apple").unwrap();
    assert_f64_near!(boosted_apple.sell_price, plain_apple.sell_price);

    // Recalculate never re-derives the bonus.
    let mut potato = plain_potato.clone();
    engine.recalculate_item(&mut potato);
    assert_f64_near!(potato.sell_price, plain_potato.sell_price);
}

#[test]
fn test_override_flow_end_to_end() {
    let (table, catalog, quotes) = pipeline();
    let engine = ValuationEngine::new(&table, StatVariant::Experience);

    let mut items = engine.calculate(&quotes, &catalog, false, false);
    let apple = items.iter_mut().find(|i| i.name == "Apple").unwrap();
    assert_f64_near!(apple.ratio, 5.0);

    // Numeric override replaces the price and reflows the metrics.
    assert!(engine.apply_override(apple, Some("12.5")));
    assert!(apple.is_custom);
    assert_f64_near!(apple.p2p, 12.5);
    assert_f64_near!(apple.ratio, 2.0);
    assert_f64_near!(apple.efficiency, 6.0 / 12.5);

    // Garbage is ignored without touching state.
    assert!(!engine.apply_override(apple, Some("two")));
    assert_f64_near!(apple.p2p, 12.5);

    // Empty input reverts to the observed quote.
    assert!(engine.apply_override(apple, None));
    assert!(!apple.is_custom);
    assert_f64_near!(apple.p2p, 5.0);
    assert_f64_near!(apple.ratio, 5.0);
}

#[test]
fn test_flat_quote_payload_matches_nested() {
    let schema = ExtractorSchema::new(StatVariant::Experience.secondary_fields());
    let catalog = build_catalog([CROPS_SOURCE], &schema);
    let table = CategoryTable::standard();
    let engine = ValuationEngine::new(&table, StatVariant::Experience);

    let nested = normalize_quotes(&json!({"data": {"p2p": {"Potato": "0.07"}}}));
    let flat = normalize_quotes(&json!({"Potato": 0.07}));

    let from_nested = engine.calculate(&nested, &catalog, false, false);
    let from_flat = engine.calculate(&flat, &catalog, false, false);

    let a = from_nested.iter().find(|i| i.name == "Potato").unwrap();
    let b = from_flat.iter().find(|i| i.name == "Potato").unwrap();
    assert_f64_near!(a.p2p, b.p2p);
    assert_f64_near!(a.ratio, b.ratio);
}

#[test]
fn test_coin_variant_pipeline_has_no_efficiency() {
    let coin_source = "{ Wheat: { sellPrice: 2, coins: 9 } }";
    let schema = ExtractorSchema::new(StatVariant::Coin.secondary_fields());
    let catalog = build_catalog([coin_source], &schema);
    assert_f64_near!(catalog["wheat"].secondary_stat, 9.0);

    let table = CategoryTable::standard();
    let engine = ValuationEngine::new(&table, StatVariant::Coin);
    let quotes = normalize_quotes(&json!({"Wheat": 1.0}));

    let items = engine.calculate(&quotes, &catalog, false, false);
    let wheat = items.iter().find(|i| i.name == "Wheat").unwrap();
    assert_f64_near!(wheat.secondary_stat, 9.0);
    assert_f64_near!(wheat.efficiency, 0.0);
    assert_f64_near!(wheat.ratio, 2.0);
}
