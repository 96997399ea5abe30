use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{CategoryFilter, ALL_CATEGORIES};
use crate::state::{AppState, Status, Theme};

// ---------------------------------------------------------------------------
// Left side panel – filters and summary
// ---------------------------------------------------------------------------

/// Render the left panel: category select, product search, summary fields.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let categories = match &state.dataset {
        Some(ds) => ds.categories.clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // ---- Category select ----
    ui.strong("Category");
    let current = state.filters.category.clone();
    let mut picked = None;
    egui::ComboBox::from_id_salt("category")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            let options = std::iter::once((ALL_CATEGORIES, "All"))
                .chain(categories.iter().map(|c| (c.as_str(), c.as_str())));
            for (value, label) in options {
                let option = CategoryFilter::from_value(value);
                if ui.selectable_label(current == option, label).clicked() {
                    picked = Some(option);
                }
            }
        });
    if let Some(category) = picked {
        state.set_category(category);
    }

    ui.add_space(8.0);

    // ---- Product search ----
    ui.strong("Search product");
    let mut search = state.filters.search.clone();
    let response = ui.add(egui::TextEdit::singleline(&mut search).hint_text("Product name…"));
    if response.changed() {
        state.set_search(&search);
    }

    ui.add_space(12.0);
    ui.heading("Summary");
    ui.separator();
    summary_fields(ui, state);
}

/// The three headline numbers for the visible records.
fn summary_fields(ui: &mut Ui, state: &AppState) {
    egui::Grid::new("summary")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Total sales");
            ui.strong(state.summary.display_total(&state.currency));
            ui.end_row();

            ui.label("Top product");
            ui.strong(state.summary.display_top_product());
            ui.end_row();

            ui.label("Top region");
            ui.strong(state.summary.display_top_region());
            ui.end_row();
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, export_name: &str) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            // One dataset per session: opening is only offered until a load succeeds.
            if ui
                .add_enabled(state.dataset.is_none(), egui::Button::new("Open…"))
                .clicked()
            {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
            ui.separator();
        }

        if ui.button("Export").clicked() {
            export_dialog(state, export_name);
        }

        if ui
            .selectable_label(state.theme == Theme::Dark, "Dark mode")
            .clicked()
        {
            state.toggle_theme();
        }

        if let Some(status) = &state.status_message {
            ui.separator();
            let text = RichText::new(status.text());
            if status.is_error() {
                ui.label(text.color(Color32::RED));
            } else {
                ui.label(text);
            }
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sales data")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Load `path` into the state, or leave a visible error behind.
pub fn load_path(state: &mut AppState, path: &Path) {
    state.loading = true;
    match crate::data::loader::load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} records with categories {:?}",
                dataset.len(),
                dataset.categories
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            state.status_message = Some(Status::Error(format!("Error: {e:#}")));
            state.loading = false;
        }
    }
}

/// Ask where to save, then export the full dataset there.
pub fn export_dialog(state: &mut AppState, export_name: &str) {
    if !state.can_export() {
        // Fails before touching the filesystem; records the status once.
        state.export_to(Path::new(export_name));
        return;
    }

    let file = rfd::FileDialog::new()
        .set_title("Export sales data")
        .set_file_name(export_name)
        .add_filter("Excel workbook", &["xlsx"])
        .save_file();

    if let Some(path) = file {
        state.export_to(&path);
    }
}
