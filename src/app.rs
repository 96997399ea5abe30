use eframe::egui;

use crate::charts::PlotMemory;
use crate::config::Cli;
use crate::state::{AppState, Theme};
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalesDashboardApp {
    pub state: AppState,
    export_name: String,
    plot_memory: PlotMemory,
    applied_theme: Option<Theme>,
}

impl SalesDashboardApp {
    /// Build the app and load the startup dataset named on the command line.
    pub fn new(cli: &Cli) -> Self {
        let mut state = AppState {
            currency: cli.currency.clone(),
            theme: if cli.dark { Theme::Dark } else { Theme::Light },
            ..AppState::default()
        };
        panels::load_path(&mut state, &cli.data);

        Self {
            state,
            export_name: cli.export_name.clone(),
            plot_memory: PlotMemory::default(),
            applied_theme: None,
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.state.theme) {
            return;
        }
        ctx.set_visuals(match self.state.theme {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        });
        self.applied_theme = Some(self.state.theme);
    }
}

impl eframe::App for SalesDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.export_name);
        });

        // ---- Left side panel: filters + summary ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts above the table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a sales dataset to begin  (File → Open…)");
                });
                return;
            }

            let reset = self.plot_memory.take_reset(self.state.charts.generation);
            plot::sales_charts(ui, &self.state.charts, reset);
            ui.separator();
            table::sales_table(ui, &self.state);
        });
    }
}
