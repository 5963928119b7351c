use std::collections::HashSet;

use crate::models::ItemCategory;

const CROPS: &[&str] = &[
    "Sunflower",
    "Potato",
    "Pumpkin",
    "Carrot",
    "Cabbage",
    "Beetroot",
    "Cauliflower",
    "Parsnip",
    "Eggplant",
    "Corn",
    "Radish",
    "Wheat",
    "Kale",
    "Soybean",
    "Barley",
    "Rhubarb",
    "Zucchini",
    "Yam",
    "Broccoli",
    "Pepper",
    "Onion",
    "Turnip",
    "Artichoke",
];

const FRUITS: &[&str] = &[
    "Apple",
    "Blueberry",
    "Orange",
    "Banana",
    "Tomato",
    "Lemon",
    "Celestine",
    "Lunara",
    "Duskberry",
];

const GREENHOUSE: &[&str] = &["Grape", "Rice", "Olive"];

/// Immutable category → item-name table.
///
/// Built once at startup and passed by reference into the engine; membership
/// is static configuration, never derived from extracted data.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    lists: Vec<(ItemCategory, Vec<String>)>,
}

impl CategoryTable {
    /// The standard farm item lists.
    pub fn standard() -> Self {
        Self::from_lists(vec![
            (ItemCategory::Crops, to_owned(CROPS)),
            (ItemCategory::Fruits, to_owned(FRUITS)),
            (ItemCategory::Greenhouse, to_owned(GREENHOUSE)),
        ])
    }

    pub fn from_lists(lists: Vec<(ItemCategory, Vec<String>)>) -> Self {
        Self { lists }
    }

    /// Category of a name; the first matching list wins, `Other` if none.
    pub fn category_of(&self, name: &str) -> ItemCategory {
        for (category, names) in &self.lists {
            if names.iter().any(|n| n == name) {
                return *category;
            }
        }
        ItemCategory::Other
    }

    /// Union of all list names, deduplicated, in list order.
    pub fn all_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for (_, list) in &self.lists {
            for name in list {
                if seen.insert(name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }

    pub fn len(&self) -> usize {
        self.all_names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(|(_, names)| names.is_empty())
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_membership() {
        let table = CategoryTable::standard();
        assert_eq!(table.category_of("Sunflower"), ItemCategory::Crops);
        assert_eq!(table.category_of("Apple"), ItemCategory::Fruits);
        assert_eq!(table.category_of("Rice"), ItemCategory::Greenhouse);
        assert_eq!(table.category_of("Unobtainium"), ItemCategory::Other);
    }

    #[test]
    fn test_all_names_deduplicates_in_order() {
        let table = CategoryTable::from_lists(vec![
            (
                ItemCategory::Crops,
                vec!["Wheat".to_string(), "Kale".to_string()],
            ),
            (
                ItemCategory::Fruits,
                vec!["Apple".to_string(), "Wheat".to_string()],
            ),
        ]);
        assert_eq!(table.all_names(), vec!["Wheat", "Kale", "Apple"]);
    }

    #[test]
    fn test_first_list_wins_on_overlap() {
        let table = CategoryTable::from_lists(vec![
            (ItemCategory::Crops, vec!["Wheat".to_string()]),
            (ItemCategory::Fruits, vec!["Wheat".to_string()]),
        ]);
        assert_eq!(table.category_of("Wheat"), ItemCategory::Crops);
    }

    #[test]
    fn test_standard_lists_disjoint() {
        let table = CategoryTable::standard();
        assert_eq!(table.len(), 23 + 9 + 3);
    }
}
