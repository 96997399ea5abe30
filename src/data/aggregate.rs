use std::collections::HashMap;

use super::model::{Money, SalesRecord};

/// Shown wherever a statistic has no value (e.g. every record filtered out).
pub const PLACEHOLDER: &str = "N/A";

// ---------------------------------------------------------------------------
// Folds over records
// ---------------------------------------------------------------------------

/// Sum of sales; `0` (not `-0`) for no records.
pub fn total_sales<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    records.into_iter().fold(0.0, |acc, r| acc + r.sales)
}

/// Best-selling record.
///
/// Folds from a zero-sales sentinel and only replaces the running best on a
/// strictly greater amount, so ties go to the first occurrence and `None`
/// (the sentinel) is returned when nothing sold more than zero.
pub fn top_product<'a, I>(records: I) -> Option<&'a SalesRecord>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    records
        .into_iter()
        .fold((0.0, None), |(best_sales, best), r| {
            if r.sales > best_sales {
                (r.sales, Some(r))
            } else {
                (best_sales, best)
            }
        })
        .1
}

/// Summed sales per key, keys in first-seen order.
pub fn group_sum_by<'a, I, F>(records: I, key_fn: F) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a SalesRecord>,
    F: Fn(&SalesRecord) -> &str,
{
    let mut groups: Vec<(String, f64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for r in records {
        let key = key_fn(r);
        match index.get(key).copied() {
            Some(i) => groups[i].1 += r.sales,
            None => {
                index.insert(key.to_string(), groups.len());
                groups.push((key.to_string(), r.sales));
            }
        }
    }
    groups
}

pub fn sales_by_category<'a, I>(records: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    group_sum_by(records, |r| r.category.as_str())
}

pub fn sales_by_region<'a, I>(records: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    group_sum_by(records, |r| r.region.as_str())
}

/// Region with the highest summed sales. Ties go to the region seen first.
pub fn top_region<'a, I>(records: I) -> Option<(String, f64)>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    sales_by_region(records)
        .into_iter()
        .fold(None, |best: Option<(String, f64)>, (region, sum)| match best {
            Some((_, best_sum)) if best_sum >= sum => best,
            _ => Some((region, sum)),
        })
}

// ---------------------------------------------------------------------------
// SalesSummary – the three headline numbers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesSummary {
    pub total: f64,
    pub top_product: Option<String>,
    pub top_region: Option<(String, f64)>,
}

impl SalesSummary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SalesRecord>,
        I::IntoIter: Clone,
    {
        let iter = records.into_iter();
        SalesSummary {
            total: total_sales(iter.clone()),
            top_product: top_product(iter.clone()).map(|r| r.product.clone()),
            top_region: top_region(iter),
        }
    }

    pub fn display_total(&self, currency: &str) -> String {
        Money {
            symbol: currency,
            amount: self.total,
        }
        .to_string()
    }

    pub fn display_top_product(&self) -> &str {
        self.top_product.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn display_top_region(&self) -> &str {
        self.top_region
            .as_ref()
            .map(|(region, _)| region.as_str())
            .unwrap_or(PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<SalesRecord> {
        vec![
            SalesRecord::new("A", "X", "E", 10.0),
            SalesRecord::new("B", "Y", "E", 5.0),
            SalesRecord::new("C", "X", "W", 20.0),
        ]
    }

    #[test]
    fn three_record_scenario() {
        let data = scenario();
        assert_eq!(total_sales(&data), 35.0);
        assert_eq!(top_product(&data).map(|r| r.product.as_str()), Some("C"));
        assert_eq!(top_region(&data), Some(("W".to_string(), 20.0)));
    }

    #[test]
    fn region_sums_compare_numerically() {
        // "9" < "10" would flip under a textual comparison.
        let data = vec![
            SalesRecord::new("A", "X", "North", 9.0),
            SalesRecord::new("B", "X", "South", 4.0),
            SalesRecord::new("C", "X", "South", 6.0),
        ];
        assert_eq!(top_region(&data), Some(("South".to_string(), 10.0)));
    }

    #[test]
    fn empty_input_yields_placeholders() {
        let empty: Vec<SalesRecord> = Vec::new();
        assert_eq!(total_sales(&empty), 0.0);
        assert!(top_product(&empty).is_none());
        assert!(top_region(&empty).is_none());

        assert!(total_sales(&empty).is_sign_positive());

        let summary = SalesSummary::from_records(&empty);
        assert_eq!(summary.display_total("$"), "$0");
        assert_eq!(summary.display_top_product(), PLACEHOLDER);
        assert_eq!(summary.display_top_region(), PLACEHOLDER);
    }

    #[test]
    fn top_product_ties_keep_first_occurrence() {
        let data = vec![
            SalesRecord::new("First", "X", "E", 8.0),
            SalesRecord::new("Second", "X", "E", 8.0),
        ];
        assert_eq!(top_product(&data).unwrap().product, "First");
    }

    #[test]
    fn top_product_needs_positive_sales() {
        let data = vec![
            SalesRecord::new("Refund", "X", "E", -3.0),
            SalesRecord::new("Nothing", "X", "E", 0.0),
        ];
        assert!(top_product(&data).is_none());
    }

    #[test]
    fn top_region_ties_keep_first_seen_region() {
        let data = vec![
            SalesRecord::new("A", "X", "West", 5.0),
            SalesRecord::new("B", "X", "East", 5.0),
        ];
        assert_eq!(top_region(&data).unwrap().0, "West");
    }

    #[test]
    fn grouped_sums_partition_the_total() {
        let data = scenario();
        let by_category = sales_by_category(&data);
        assert_eq!(
            by_category,
            vec![("X".to_string(), 30.0), ("Y".to_string(), 5.0)]
        );
        let by_region_total: f64 = sales_by_region(&data).iter().map(|(_, s)| s).sum();
        assert_eq!(by_region_total, total_sales(&data));
    }

    #[test]
    fn summary_of_scenario() {
        let summary = SalesSummary::from_records(&scenario());
        assert_eq!(summary.display_total("$"), "$35");
        assert_eq!(summary.display_top_product(), "C");
        assert_eq!(summary.display_top_region(), "W");
    }
}
