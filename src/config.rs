use std::path::PathBuf;

use clap::Parser;

use crate::export::DEFAULT_FILE_NAME;

/// Desktop sales dashboard.
#[derive(Parser, Debug, Clone)]
#[command(name = "sales-dashboard", version, about)]
pub struct Cli {
    /// Dataset to load at startup (.json or .csv)
    #[arg(value_name = "DATA", default_value = "data.json")]
    pub data: PathBuf,

    /// Start with the dark theme
    #[arg(long)]
    pub dark: bool,

    /// Currency symbol prefixed to sales amounts
    #[arg(long, value_name = "SYMBOL", default_value = "$")]
    pub currency: String,

    /// File name suggested by the export dialog
    #[arg(long, value_name = "FILE", default_value = DEFAULT_FILE_NAME)]
    pub export_name: String,
}
