//! Command implementations for the temperature heat map CLI.
//!
//! Provides subcommands for downloading the dataset, exporting the derived
//! cells and rendering the heat map to a standalone SVG file.

use clap::{Args, Subcommand};
use gtv_data::source::DATASET_URL;

pub mod export;
pub mod load;
pub mod svg;

/// Where to read the dataset from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Read the dataset from a local JSON file instead of the network
    #[arg(short = 'i', long, conflicts_with = "url")]
    pub input: Option<String>,

    /// Dataset URL
    #[arg(long, default_value = DATASET_URL)]
    pub url: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download the raw dataset JSON
    Fetch {
        /// Output path for the JSON document
        #[arg(short = 'o', long)]
        output: String,

        /// Dataset URL
        #[arg(long, default_value = DATASET_URL)]
        url: String,
    },

    /// Export one CSV row per (year, month) cell with its absolute temperature
    Cells {
        /// Output path for the cells CSV
        #[arg(short = 'o', long)]
        output: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Render the heat map as a standalone SVG document
    Render {
        /// Output path for the SVG file
        #[arg(short = 'o', long)]
        output: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Outer width in pixels, margins included
        #[arg(long, default_value_t = 1200.0)]
        width: f64,

        /// Outer height in pixels, margins included
        #[arg(long, default_value_t = 600.0)]
        height: f64,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output, url } => load::run_fetch(&url, &output).await,
        Command::Cells { output, source } => export::run_cells(&source, &output).await,
        Command::Render {
            output,
            source,
            width,
            height,
        } => svg::run_render(&source, &output, width, height).await,
    }
}
