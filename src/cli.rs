//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "granizo-calc")]
#[command(version)]
#[command(about = "Hail-damage (PDR) quote pricing for auto repair workshops")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Workshop hourly rate in euros. Uses config value if not specified.
    #[arg(long, global = true)]
    pub rate: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a single dent-size bucket
    Price {
        /// Dent size in millimeters (20, 30 or 40)
        #[arg(long, short = 's')]
        size: u32,

        /// Number of dents
        #[arg(long, short = 'c')]
        count: i32,

        /// Panel id from the catalog; decides the orientation
        #[arg(long, short = 'p', conflicts_with = "horizontal")]
        panel: Option<String>,

        /// Price against the horizontal tables (default: vertical)
        #[arg(long)]
        horizontal: bool,

        /// Aluminum panel (+25%)
        #[arg(long)]
        aluminum: bool,

        /// Glue technique (+30%)
        #[arg(long)]
        glue: bool,

        /// Pre-press hardened damage (+60%)
        #[arg(long)]
        pre_press: bool,

        /// Cavity access (+4 AW)
        #[arg(long)]
        cavity_access: bool,
    },

    /// Price a full vehicle damage report (JSON file)
    Quote {
        /// Path to a damage report: a JSON array of panel damage entries
        report: PathBuf,
    },

    /// Price a damage report and store it as a quote
    Add {
        /// Path to a damage report (same format as `quote`)
        report: PathBuf,

        /// Client id the quote belongs to
        #[arg(long)]
        client: String,

        /// Vehicle description (e.g. "Volkswagen Golf")
        #[arg(long)]
        vehicle: String,

        /// License plate
        #[arg(long)]
        plate: Option<String>,

        /// Chassis number
        #[arg(long)]
        chassis: Option<String>,
    },

    /// List stored quotes
    List,

    /// Show one stored quote with its panel breakdown
    Show {
        /// Quote id
        id: String,
    },

    /// Remove a stored quote
    Remove {
        /// Quote id
        id: String,
    },

    /// List the panel catalog
    Panels,

    /// Show the AW tier table for one size and orientation
    Tiers {
        /// Dent size in millimeters (20, 30 or 40)
        #[arg(long, short = 's', default_value_t = 20)]
        size: u32,

        /// Show the vertical table (default: horizontal)
        #[arg(long)]
        vertical: bool,
    },

    /// Manage configuration
    Config {
        /// Show current config
        #[arg(long)]
        show: bool,

        /// Set the default hourly rate in euros
        #[arg(long)]
        set_rate: Option<f64>,

        /// Set the default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset config to defaults
        #[arg(long)]
        reset: bool,
    },
}
