use std::path::Path;

use crate::charts::ChartSet;
use crate::data::aggregate::SalesSummary;
use crate::data::filter::{filter_records, filtered_indices, CategoryFilter, FilterState};
use crate::data::model::{SalesDataset, SalesRecord};
use crate::export::{self, ExportError};

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Info(s) | Status::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<SalesDataset>,

    /// Category and search selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Headline numbers for the visible records.
    pub summary: SalesSummary,

    /// Chart data for the visible records; replaced on every rebuild.
    pub charts: ChartSet,

    pub theme: Theme,

    /// Prefix for rendered sales amounts.
    pub currency: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<Status>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            summary: SalesSummary::default(),
            charts: ChartSet::default(),
            theme: Theme::default(),
            currency: "$".to_string(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest the loaded dataset and build the initial, unfiltered view.
    pub fn set_dataset(&mut self, dataset: SalesDataset) {
        self.filters = FilterState::default();
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.refilter();
    }

    /// Records passing the current filters, in dataset order.
    pub fn visible_records(&self) -> impl Iterator<Item = &SalesRecord> + Clone + '_ {
        let records = self
            .dataset
            .as_ref()
            .map(|ds| ds.records.as_slice())
            .unwrap_or(&[]);
        self.visible_indices.iter().map(move |&i| &records[i])
    }

    /// Recompute the filtered view: table indices, summary and charts.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        self.visible_indices = filtered_indices(ds, &self.filters);

        let view = filter_records(&ds.records, &self.filters);
        self.summary = SalesSummary::from_records(view.iter().copied());
        // The previous set is dropped here, before anything draws the new one.
        self.charts = ChartSet::build(view.iter().copied(), self.charts.generation + 1);

        log::debug!(
            "View rebuilt: {} of {} records (category={}, search={:?})",
            self.visible_indices.len(),
            ds.len(),
            self.filters.category,
            self.filters.search
        );
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        if self.dataset.is_none() || self.filters.category == category {
            return;
        }
        self.filters.category = category;
        self.refilter();
    }

    pub fn set_search(&mut self, text: &str) {
        if self.dataset.is_none() || self.filters.search == text {
            return;
        }
        self.filters.search = text.to_string();
        self.refilter();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Export the full dataset (not the filtered view) to `path`.
    ///
    /// The outcome is logged and recorded in `status_message`.
    pub fn export_to(&mut self, path: &Path) {
        let records = self
            .dataset
            .as_ref()
            .map(|ds| ds.records.as_slice())
            .unwrap_or(&[]);

        match export::export_to_file(records, path) {
            Ok(()) => {
                self.status_message = Some(Status::Info(format!(
                    "Exported {} records to {}",
                    records.len(),
                    path.display()
                )));
            }
            Err(e) => {
                match &e {
                    ExportError::EmptyDataset => log::warn!("Export skipped: {e}"),
                    ExportError::Xlsx(_) => log::error!("Export failed: {e}"),
                }
                self.status_message = Some(Status::Error(e.to_string()));
            }
        }
    }

    /// Whether there is anything to export.
    pub fn can_export(&self) -> bool {
        self.dataset.as_ref().is_some_and(|ds| !ds.is_empty())
    }
}
