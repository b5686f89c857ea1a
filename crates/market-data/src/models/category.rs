use std::fmt;

use log::info;

use super::price::PriceRecord;

/// Livestock categories that can be filtered out of a livestock price list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LivestockCategory {
    Beef,
    Pork,
    Chicken,
}

/// Category name and upstream item codes, one row per category.
///
/// Domestic and imported cuts carry separate item codes.
pub const CATEGORY_ITEM_CODES: &[(LivestockCategory, &str, &[&str])] = &[
    (LivestockCategory::Beef, "beef", &["4301", "4401"]),
    (LivestockCategory::Pork, "pork", &["4304", "4402"]),
    (LivestockCategory::Chicken, "chicken", &["9901"]),
];

impl LivestockCategory {
    /// Looks a category up by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        CATEGORY_ITEM_CODES
            .iter()
            .find(|(_, entry_name, _)| entry_name.eq_ignore_ascii_case(name))
            .map(|(category, _, _)| *category)
    }

    pub fn name(self) -> &'static str {
        CATEGORY_ITEM_CODES
            .iter()
            .find(|(category, _, _)| *category == self)
            .map(|(_, name, _)| *name)
            .unwrap_or_default()
    }

    pub fn item_codes(self) -> &'static [&'static str] {
        CATEGORY_ITEM_CODES
            .iter()
            .find(|(category, _, _)| *category == self)
            .map(|(_, _, codes)| *codes)
            .unwrap_or_default()
    }

    /// Whether the record's item code belongs to this category.
    pub fn matches(self, record: &PriceRecord) -> bool {
        record
            .item_code
            .as_deref()
            .is_some_and(|code| self.item_codes().contains(&code))
    }

    /// Keeps the records of this category, preserving order.
    pub fn filter(self, items: Vec<PriceRecord>) -> Vec<PriceRecord> {
        let total = items.len();
        let filtered: Vec<PriceRecord> = items
            .into_iter()
            .filter(|record| self.matches(record))
            .collect();
        info!(
            "Filtered {} of {} price records for category {}",
            filtered.len(),
            total,
            self
        );
        filtered
    }
}

impl fmt::Display for LivestockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
