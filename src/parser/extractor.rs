use std::sync::LazyLock;

use regex::Regex;

use crate::models::CatalogEntry;

/// Leading identifier-like token (optionally quoted) opening a `: {` block.
/// Lazy repetition keeps the capture to the shortest token that satisfies
/// the opener.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]?([\w\s]+?)['"]?\s*:\s*\{"#).expect("name pattern"));

/// Attribute a tolerant field rule feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    SellPrice,
    SecondaryStat,
}

/// One accepted source field name and the attribute it maps to.
///
/// Rules are tried in order; the first hit per attribute wins. Sell-price
/// rules also accept the wrapper-call form `<field>: <identifier>(<number>)`,
/// taking the inner number as the literal price.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: String,
    target: FieldTarget,
    direct: Regex,
    wrapper: Option<Regex>,
}

impl FieldRule {
    pub fn new(field: &str, target: FieldTarget) -> Self {
        let escaped = regex::escape(field);
        let direct = Regex::new(&format!(r"\b{escaped}\s*:\s*([\d.]+)")).expect("field pattern");
        let wrapper = match target {
            FieldTarget::SellPrice => Some(
                Regex::new(&format!(r"\b{escaped}\s*:\s*\w+\(([\d.]+)\)"))
                    .expect("wrapper pattern"),
            ),
            FieldTarget::SecondaryStat => None,
        };
        Self {
            field: field.to_string(),
            target,
            direct,
            wrapper,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn target(&self) -> FieldTarget {
        self.target
    }

    /// First numeric value this rule matches in the entry, if any.
    fn capture(&self, entry: &str) -> Option<f64> {
        let matched = self
            .direct
            .captures(entry)
            .or_else(|| self.wrapper.as_ref().and_then(|re| re.captures(entry)))?;
        parse_number(matched.get(1)?.as_str())
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Ordered field rules describing which source attributes feed which
/// catalog fields.
#[derive(Debug, Clone)]
pub struct ExtractorSchema {
    rules: Vec<FieldRule>,
}

impl ExtractorSchema {
    /// Schema with the standard sell-price rule plus the given accepted
    /// secondary-stat field names, tried in order.
    pub fn new(secondary_fields: &[&str]) -> Self {
        let mut rules = vec![FieldRule::new("sellPrice", FieldTarget::SellPrice)];
        rules.extend(
            secondary_fields
                .iter()
                .map(|f| FieldRule::new(f, FieldTarget::SecondaryStat)),
        );
        Self { rules }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Pull an item name and its numeric attributes out of one candidate
    /// entry.
    ///
    /// Returns `None` when no name can be identified or when neither
    /// attribute comes out positive; malformed entries are skipped, never
    /// errors.
    pub fn extract(&self, entry: &str) -> Option<CatalogEntry> {
        let name = NAME_RE
            .captures(entry)?
            .get(1)?
            .as_str()
            .trim()
            .to_string();
        if name.is_empty() {
            return None;
        }

        let mut sell_price = 0.0;
        let mut secondary_stat = 0.0;
        for rule in &self.rules {
            match rule.target {
                FieldTarget::SellPrice if sell_price == 0.0 => {
                    sell_price = rule.capture(entry).unwrap_or(0.0);
                }
                FieldTarget::SecondaryStat if secondary_stat == 0.0 => {
                    secondary_stat = rule.capture(entry).unwrap_or(0.0);
                }
                _ => {}
            }
        }

        let entry = CatalogEntry::new(name, sell_price, secondary_stat);
        entry.has_signal().then_some(entry)
    }
}
