use std::collections::HashSet;
use std::fmt;

// ---------------------------------------------------------------------------
// SalesRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single sales entry. `sales` has already been coerced to a number by
/// the loader, so every consumer sees the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub product: String,
    pub category: String,
    pub region: String,
    pub sales: f64,
}

impl SalesRecord {
    pub fn new(
        product: impl Into<String>,
        category: impl Into<String>,
        region: impl Into<String>,
        sales: f64,
    ) -> Self {
        Self {
            product: product.into(),
            category: category.into(),
            region: region.into(),
            sales,
        }
    }
}

// ---------------------------------------------------------------------------
// Amount formatting
// ---------------------------------------------------------------------------

/// A sales amount rendered with a currency prefix, e.g. `$12.5`.
pub struct Money<'a> {
    pub symbol: &'a str,
    pub amount: f64,
}

impl fmt::Display for Money<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol, self.amount)
    }
}

// ---------------------------------------------------------------------------
// SalesDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with the category index computed up front.
#[derive(Debug, Clone, Default)]
pub struct SalesDataset {
    /// All records, in source order.
    pub records: Vec<SalesRecord>,
    /// Distinct categories in first-seen order.
    pub categories: Vec<String>,
}

impl SalesDataset {
    /// Build the category index from the loaded records.
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut categories = Vec::new();
        for rec in &records {
            if seen.insert(rec.category.as_str()) {
                categories.push(rec.category.clone());
            }
        }
        SalesDataset {
            records,
            categories,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
