// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(
    name = "contour",
    version,
    about = "Convex polygon collision checks over JSON scenes",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Directory holding `contour.json` (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Default log filter directive, e.g. `debug` or `contour_geom=trace`.
    ///
    /// Combined with `RUST_LOG`. Logs go to stderr.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one collision tick over a scene file and report overlapping pairs.
    Check(CheckArgs),
    /// Write a random scene of regular polygons.
    Generate(GenerateArgs),
    /// Inspect or initialise the stored config.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `contour check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Scene JSON file.
    pub scene: PathBuf,

    /// Report format (overrides config).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Minimum region area for outlines in the report (overrides config).
    #[arg(long)]
    pub min_area: Option<f32>,
}

/// Arguments for `contour generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of shapes.
    #[arg(long, default_value_t = 10)]
    pub count: usize,

    /// PRNG seed.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Viewport width.
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Viewport height.
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,

    /// Circumradius of every shape.
    #[arg(long, default_value_t = 30.0)]
    pub radius: f32,

    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// `contour config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective config as JSON.
    Show,
    /// Write the default config file.
    Init {
        /// Overwrite an existing config.
        #[arg(long)]
        force: bool,
    },
}
