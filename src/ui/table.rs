use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Money, SalesRecord};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Sales table (central panel, below the charts)
// ---------------------------------------------------------------------------

/// One row per visible record: product, category, region, sales.
pub fn sales_table(ui: &mut Ui, state: &AppState) {
    let rows: Vec<&SalesRecord> = state.visible_records().collect();

    if rows.is_empty() {
        ui.label("No records match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT, |mut header| {
            for title in ["Product", "Category", "Region", "Sales"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let rec = rows[row.index()];
                row.col(|ui| {
                    ui.label(rec.product.as_str());
                });
                row.col(|ui| {
                    ui.label(rec.category.as_str());
                });
                row.col(|ui| {
                    ui.label(rec.region.as_str());
                });
                row.col(|ui| {
                    ui.label(
                        Money {
                            symbol: &state.currency,
                            amount: rec.sales,
                        }
                        .to_string(),
                    );
                });
            });
        });
}
