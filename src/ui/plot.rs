use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::charts::{ChartSeries, ChartSet, CATEGORY_BAR_COLOR, REGION_LINE_COLOR};

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Sales charts (central panel, above the table)
// ---------------------------------------------------------------------------

/// Draw both charts side by side. `reset` drops the zoom/bounds the plots
/// kept from the previous chart set.
pub fn sales_charts(ui: &mut Ui, charts: &ChartSet, reset: bool) {
    ui.columns(2, |cols| {
        category_bar_chart(&mut cols[0], &charts.by_category, reset);
        region_area_chart(&mut cols[1], &charts.by_region, reset);
    });
}

/// Axis labels come from the series; a reset plot forgets previous bounds.
fn chart_plot<'a>(id: &str, series: &ChartSeries, reset: bool) -> Plot<'a> {
    let labels = series.clone();
    let plot = Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            labels.label_at(mark.value).unwrap_or_default().to_string()
        });
    if reset {
        plot.reset()
    } else {
        plot
    }
}

fn category_bar_chart(ui: &mut Ui, series: &ChartSeries, reset: bool) {
    ui.strong(series.title);

    let bars: Vec<Bar> = series
        .labels
        .iter()
        .zip(&series.values)
        .enumerate()
        .map(|(i, (label, &value))| Bar::new(i as f64, value).name(label).width(0.6))
        .collect();

    chart_plot("category_chart", series, reset).show(ui, |plot_ui| {
        plot_ui.bar_chart(
            BarChart::new(bars)
                .name(series.title)
                .color(CATEGORY_BAR_COLOR),
        );
    });
}

/// Line chart with the area under it filled.
fn region_area_chart(ui: &mut Ui, series: &ChartSeries, reset: bool) {
    ui.strong(series.title);

    let points: PlotPoints = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect();

    chart_plot("region_chart", series, reset).show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(points)
                .name(series.title)
                .color(REGION_LINE_COLOR)
                .fill(0.0_f32)
                .width(2.0_f32),
        );
    });
}
