//! Command-line structure.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use causal_core::config::defaults;

/// Causal memory: verify claims against a weighted cause/effect graph, learn
/// from outcomes, and look for routes around blocking constraints.
#[derive(Parser, Debug)]
#[command(name = "causal-memory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file. Falls back to `CAUSAL_MEMORY_CONFIG`, then defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file, overriding `storage.db_path`.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Add or update a CAUSES link between two typed entities.
    Link {
        cause: String,
        cause_type: String,
        effect: String,
        effect_type: String,
        #[arg(default_value_t = defaults::DEFAULT_LINK_WEIGHT)]
        weight: f64,
    },

    /// Run one decision cycle over a piece of text.
    Process {
        text: String,
        /// Real-world outcome of acting on the verified path, in [-1.0, 1.0].
        #[arg(default_value_t = 1.0, allow_negative_numbers = true)]
        feedback: f64,
        /// Trust threshold for this cycle only.
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Verify every claim in a piece of text without learning.
    Verify { text: String },

    /// Look for a route that avoids the blocking constraints.
    Innovate {
        start: String,
        target: String,
        /// Extra nodes to avoid on top of `policy.blocking_constraints`.
        #[arg(long = "forbid")]
        forbid: Vec<String>,
    },

    /// Show the current system confidence.
    Confidence,
}
