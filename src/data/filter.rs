use std::fmt;

use super::model::{SalesDataset, SalesRecord};

// ---------------------------------------------------------------------------
// Filter predicates
// ---------------------------------------------------------------------------

/// Category selection. `All` disables the category constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a select-box value; the literal `"all"` means no constraint.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(c) => write!(f, "{c}"),
        }
    }
}

/// Current filter selections: category plus free-text product search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search: String,
}

impl FilterState {
    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.category.matches(record) && product_contains(record, &self.search.to_lowercase())
    }
}

/// The value the category select box uses for [`CategoryFilter::All`].
pub const ALL_CATEGORIES: &str = "all";

fn product_contains(record: &SalesRecord, needle_lower: &str) -> bool {
    needle_lower.is_empty() || record.product.to_lowercase().contains(needle_lower)
}

// ---------------------------------------------------------------------------
// Filter pipeline
// ---------------------------------------------------------------------------

/// Keep records of the given category (all of them for [`CategoryFilter::All`]).
pub fn filter_by_category<'a, I>(records: I, category: &CategoryFilter) -> Vec<&'a SalesRecord>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    records.into_iter().filter(|r| category.matches(r)).collect()
}

/// Keep records whose product name contains `text`, ignoring case.
/// Empty text keeps everything.
pub fn filter_by_search<'a, I>(records: I, text: &str) -> Vec<&'a SalesRecord>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let needle = text.to_lowercase();
    records
        .into_iter()
        .filter(|r| product_contains(r, &needle))
        .collect()
}

/// Category filter followed by the search filter.
pub fn filter_records<'a>(records: &'a [SalesRecord], filters: &FilterState) -> Vec<&'a SalesRecord> {
    filter_by_search(filter_by_category(records, &filters.category), &filters.search)
}

/// Return indices of records that pass both filters, in dataset order.
pub fn filtered_indices(dataset: &SalesDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| filters.matches(r))
        .map(|(i, _)| i)
        .collect()
}
