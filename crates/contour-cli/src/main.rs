// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `contour`: run collision ticks over JSON scene files.
//!
//! Reports go to stdout; logs go to stderr so reports stay machine-readable.
//! Stored preferences live in `contour.json` under the platform config dir
//! and are overridden by command-line flags.

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod config_fs;
mod generate;
mod report;
mod scene;

use cli::{CheckArgs, Cli, Command, ConfigCommand, GenerateArgs};
use config::{CliConfig, ConfigService, CLI_CONFIG_KEY};
use config_fs::FsConfigStore;
use generate::{generate_scene, GenerateParams};
use report::Report;
use scene::Scene;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = match &cli.config_dir {
        Some(dir) => FsConfigStore::with_base(dir),
        None => FsConfigStore::new(),
    }
    .context("failed to open config store")?;
    let config_path = store.path_for(CLI_CONFIG_KEY);
    let service = ConfigService::new(store);
    let stored: CliConfig = service
        .load(CLI_CONFIG_KEY)
        .with_context(|| format!("failed to load config {}", config_path.display()))?
        .unwrap_or_default();

    let config = match &cli.command {
        Command::Check(args) => {
            stored.with_overrides(args.format, args.min_area, cli.log_level.as_deref())
        }
        _ => stored.with_overrides(None, None, cli.log_level.as_deref()),
    };

    let directive = config
        .log_level
        .parse::<Directive>()
        .with_context(|| format!("invalid log level {:?}", config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Check(args) => run_check(&args, &config),
        Command::Generate(args) => run_generate(&args),
        Command::Config(ConfigCommand::Show) => emit(&serde_json::to_string_pretty(&config)?),
        Command::Config(ConfigCommand::Init { force }) => {
            if config_path.exists() && !force {
                bail!(
                    "config {} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            service
                .save(CLI_CONFIG_KEY, &CliConfig::default())
                .context("failed to write config")?;
            emit(&config_path.display().to_string())
        }
    }
}

fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<()> {
    let scene = Scene::load(&args.scene)?;
    let snapshots = scene.snapshots();
    let result = contour_geom::update(&snapshots);
    info!(
        shapes = snapshots.len(),
        collisions = result.len(),
        "tick finished"
    );
    let report = Report::from_result(&result, config.min_area);
    emit(&report.render(config.format)?)
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let params = GenerateParams {
        count: args.count,
        seed: args.seed,
        width: args.width,
        height: args.height,
        radius: args.radius,
    };
    let scene = generate_scene(&params)?;
    match &args.out {
        Some(path) => {
            scene.save(path)?;
            info!(path = %path.display(), shapes = scene.shapes.len(), "scene written");
            Ok(())
        }
        None => emit(&scene.to_json()?),
    }
}

fn emit(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}").context("failed to write to stdout")
}
