use clap::Parser;

use farm_market_calc_rs::cli::{CategoryArg, Cli, Command, SortField};
use farm_market_calc_rs::engine::{CategoryTable, StatVariant, ValuationEngine};
use farm_market_calc_rs::error::Result;
use farm_market_calc_rs::interface::{
    display_catalog, display_items, prompt_override_target, prompt_override_value, prompt_yes_no,
};
use farm_market_calc_rs::models::ComputedItem;
use farm_market_calc_rs::parser::{build_catalog, ExtractorSchema};
use farm_market_calc_rs::quotes::normalize_quotes;
use farm_market_calc_rs::sources::{load_quote_payload, load_source_text};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let variant = StatVariant::from(cli.stat);
    let sources = Sources {
        crops: cli.crops,
        fruits: cli.fruits,
        prices: cli.prices,
    };

    match command {
        Command::Calc {
            bonus5,
            bonus10,
            category,
            sort,
            asc,
            interactive,
        } => cmd_calc(&sources, variant, bonus5, bonus10, category, sort, asc, interactive),
        Command::Export {
            output,
            bonus5,
            bonus10,
        } => cmd_export(&sources, variant, &output, bonus5, bonus10),
        Command::Inspect => cmd_inspect(&sources, variant),
    }
}

struct Sources {
    crops: String,
    fruits: String,
    prices: String,
}

/// Run the full extraction + valuation pipeline over the source files.
fn compute_items(
    sources: &Sources,
    table: &CategoryTable,
    variant: StatVariant,
    bonus5: bool,
    bonus10: bool,
) -> Result<Vec<ComputedItem>> {
    let crops_text = load_source_text(&sources.crops)?;
    let fruits_text = load_source_text(&sources.fruits)?;
    let payload = load_quote_payload(&sources.prices)?;

    let schema = ExtractorSchema::new(variant.secondary_fields());
    let catalog = build_catalog([crops_text.as_str(), fruits_text.as_str()], &schema);
    let quotes = normalize_quotes(&payload);

    let engine = ValuationEngine::new(table, variant);
    Ok(engine.calculate(&quotes, &catalog, bonus5, bonus10))
}

/// Sort items for display. The engine leaves ordering to its callers.
fn sort_items(items: &mut [ComputedItem], field: SortField, asc: bool) {
    items.sort_by(|a, b| {
        let ord = match field {
            SortField::Name => a.name.cmp(&b.name),
            _ => {
                let key = |i: &ComputedItem| match field {
                    SortField::P2p => i.p2p,
                    SortField::Sell => i.sell_price,
                    SortField::Ratio => i.ratio,
                    SortField::Efficiency => i.efficiency,
                    SortField::Name => unreachable!(),
                };
                key(a).total_cmp(&key(b))
            }
        };
        if asc {
            ord
        } else {
            ord.reverse()
        }
    });
}

fn show(items: &[ComputedItem], category: CategoryArg, variant: StatVariant) {
    let visible: Vec<&ComputedItem> = items
        .iter()
        .filter(|i| category.matches(i.category))
        .collect();
    display_items(&visible, variant.computes_efficiency());
}

#[allow(clippy::too_many_arguments)]
fn cmd_calc(
    sources: &Sources,
    variant: StatVariant,
    bonus5: bool,
    bonus10: bool,
    category: CategoryArg,
    sort: SortField,
    asc: bool,
    interactive: bool,
) -> Result<()> {
    let table = CategoryTable::standard();
    let mut items = compute_items(sources, &table, variant, bonus5, bonus10)?;

    if items.is_empty() {
        println!("No items computed. Check the source and quote files.");
        return Ok(());
    }

    sort_items(&mut items, sort, asc);
    show(&items, category, variant);

    if !interactive {
        return Ok(());
    }

    let engine = ValuationEngine::new(&table, variant);
    loop {
        if !prompt_yes_no("Override a price?", false)? {
            break;
        }
        let Some(name) = prompt_override_target(&items)? else {
            break;
        };
        let raw = prompt_override_value(&name)?;

        let Some(item) = items.iter_mut().find(|i| i.name == name) else {
            continue;
        };
        if !engine.apply_override(item, raw.as_deref()) {
            println!("Ignored invalid price input.");
            continue;
        }

        sort_items(&mut items, sort, asc);
        show(&items, category, variant);
    }

    Ok(())
}

fn cmd_export(
    sources: &Sources,
    variant: StatVariant,
    output: &str,
    bonus5: bool,
    bonus10: bool,
) -> Result<()> {
    let table = CategoryTable::standard();
    let mut items = compute_items(sources, &table, variant, bonus5, bonus10)?;
    sort_items(&mut items, SortField::Ratio, false);

    let mut wtr = csv::Writer::from_path(output)?;
    for item in &items {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    println!("Wrote {} items to {}", items.len(), output);
    Ok(())
}

fn cmd_inspect(sources: &Sources, variant: StatVariant) -> Result<()> {
    let schema = ExtractorSchema::new(variant.secondary_fields());

    for (title, path) in [
        ("Crops source", &sources.crops),
        ("Fruits source", &sources.fruits),
    ] {
        let text = load_source_text(path)?;
        let catalog = build_catalog([text.as_str()], &schema);
        display_catalog(title, &catalog);
    }

    let payload = load_quote_payload(&sources.prices)?;
    let quotes = normalize_quotes(&payload);
    println!("Quote payload: {} prices recognized", quotes.len());

    Ok(())
}
