//! Sales dashboard: load a flat dataset of sales records, filter it by
//! category and product name, summarise it, chart it, and export it to Excel.

pub mod app;
pub mod charts;
pub mod config;
pub mod data;
pub mod export;
pub mod state;
pub mod ui;
