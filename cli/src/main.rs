//! # hms CLI
//!
//! Terminal dashboard for the Hospital Management System.
//!
//! ## Usage
//!
//! - `hms` - Open the interactive dashboard
//! - `hms pages` - List the dashboard pages
//! - `hms render [PAGE]` - Print a page as plain text
//! - `hms predict --age 60` - Submit the patient form
//!
//! All figures shown are built-in sample data.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hms_core::form::{AdmissionType, Gender};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;
mod output;

use commands::{interactive_command, pages_command, predict_command, render_command, PredictArgs};
use config::CliConfigLoader;

/// hms - Hospital Management System dashboard
#[derive(Parser)]
#[command(name = "hms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hospital Management System dashboard in the terminal")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Page to open first (name, slug or number)
    #[arg(short, long, global = true)]
    page: Option<String>,

    /// Chart width in columns
    #[arg(long, global = true)]
    chart_width: Option<usize>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output mode
    #[arg(short = 'd', long = "debug", global = true)]
    debug_output: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the dashboard pages
    Pages,

    /// Print a page as plain text
    Render {
        /// Page name, slug or number (defaults to the configured start page)
        page_name: Option<String>,

        /// Print every page in sidebar order
        #[arg(long, conflicts_with = "page_name")]
        all: bool,

        /// Text width in columns (defaults to the terminal width)
        #[arg(long)]
        width: Option<usize>,
    },

    /// Fill in the patient form and press Predict
    Predict {
        /// Patient age, clamped to 0-120
        #[arg(long, allow_negative_numbers = true)]
        age: Option<i64>,

        /// Male, Female or Other
        #[arg(long)]
        gender: Option<Gender>,

        /// Emergency, Elective or Urgent
        #[arg(long)]
        admission_type: Option<AdmissionType>,

        /// Free-text diagnosis
        #[arg(long)]
        diagnosis: Option<String>,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new().with_no_color(cli.no_color);

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(page) = &cli.page {
        loader = loader.with_page_override(page.clone());
    }

    if let Some(width) = cli.chart_width {
        loader = loader.with_width_override(width);
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; keep them quiet by default so they stay out of the TUI
    let filter = if cli.verbose || cli.debug_output {
        "debug"
    } else {
        "warn"
    };
    hms_core::init_tracing(filter);

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Pages) => pages_command().await,
        Some(Commands::Render {
            page_name,
            all,
            width,
        }) => render_command(config_loader, page_name, all, width).await,
        Some(Commands::Predict {
            age,
            gender,
            admission_type,
            diagnosis,
        }) => {
            predict_command(PredictArgs {
                age,
                gender,
                admission_type,
                diagnosis,
            })
            .await
        }
        None => interactive_command(config_loader).await,
    }
}
