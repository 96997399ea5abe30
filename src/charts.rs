use eframe::egui::Color32;

use crate::data::aggregate::{sales_by_category, sales_by_region};
use crate::data::model::SalesRecord;

pub const CATEGORY_BAR_COLOR: Color32 = Color32::from_rgb(0x4e, 0x79, 0xa7);
pub const REGION_LINE_COLOR: Color32 = Color32::from_rgb(0xf2, 0x8e, 0x2c);

// ---------------------------------------------------------------------------
// Chart data
// ---------------------------------------------------------------------------

/// Labelled values for one chart, in first-seen label order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    fn from_groups(title: &'static str, groups: Vec<(String, f64)>) -> Self {
        let (labels, values) = groups.into_iter().unzip();
        ChartSeries {
            title,
            labels,
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Label for an x position on the chart, if it falls on a data point.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return None;
        }
        self.labels.get(idx as usize).map(String::as_str)
    }
}

/// Both dashboard charts for one view of the data.
///
/// A set is built whole from the filtered view and replaces the previous set;
/// `generation` changes on every rebuild so the plot widgets can drop the
/// zoom/bounds they retained for the old data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSet {
    pub generation: u64,
    pub by_category: ChartSeries,
    pub by_region: ChartSeries,
}

impl ChartSet {
    pub fn build<'a, I>(records: I, generation: u64) -> Self
    where
        I: IntoIterator<Item = &'a SalesRecord>,
        I::IntoIter: Clone,
    {
        let iter = records.into_iter();
        ChartSet {
            generation,
            by_category: ChartSeries::from_groups("Sales by Category", sales_by_category(iter.clone())),
            by_region: ChartSeries::from_groups("Sales by Region", sales_by_region(iter)),
        }
    }
}

/// Tracks which chart generation the plot widgets last drew, so a new set
/// resets each plot exactly once.
#[derive(Debug, Default)]
pub struct PlotMemory {
    drawn_generation: Option<u64>,
}

impl PlotMemory {
    /// Returns `true` the first time a given generation is drawn.
    pub fn take_reset(&mut self, generation: u64) -> bool {
        let fresh = self.drawn_generation != Some(generation);
        self.drawn_generation = Some(generation);
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<SalesRecord> {
        vec![
            SalesRecord::new("A", "X", "E", 10.0),
            SalesRecord::new("B", "Y", "E", 5.0),
            SalesRecord::new("C", "X", "W", 20.0),
        ]
    }

    #[test]
    fn series_follow_first_seen_order() {
        let set = ChartSet::build(&records(), 1);
        assert_eq!(set.by_category.labels, vec!["X", "Y"]);
        assert_eq!(set.by_category.values, vec![30.0, 5.0]);
        assert_eq!(set.by_region.labels, vec!["E", "W"]);
        assert_eq!(set.by_region.values, vec![15.0, 20.0]);
    }

    #[test]
    fn rebuilding_does_not_accumulate() {
        let data = records();
        let first = ChartSet::build(&data, 1);
        let second = ChartSet::build(&data, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_view_has_empty_series() {
        let set = ChartSet::build(&Vec::<SalesRecord>::new(), 3);
        assert!(set.by_category.is_empty());
        assert!(set.by_region.is_empty());
    }

    #[test]
    fn labels_only_on_integer_positions() {
        let set = ChartSet::build(&records(), 1);
        assert_eq!(set.by_region.label_at(1.0), Some("W"));
        assert_eq!(set.by_region.label_at(0.5), None);
        assert_eq!(set.by_region.label_at(-1.0), None);
        assert_eq!(set.by_region.label_at(2.0), None);
    }

    #[test]
    fn plot_memory_resets_once_per_generation() {
        let mut memory = PlotMemory::default();
        assert!(memory.take_reset(1));
        assert!(!memory.take_reset(1));
        assert!(memory.take_reset(2));
    }
}
