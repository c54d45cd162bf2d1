//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::commands;
use gradesheet::config::Config;
use gradesheet::core::models::IgnoreList;
use gradesheet::output::OutputMode;

/// gradesheet - Ungraded work and grading worksheets
#[derive(Parser, Debug)]
#[command(
    name = "gradesheet",
    version,
    about = "Find ungraded work and normalize grading worksheets",
    long_about = "Find ungraded work and normalize grading worksheets.\n\n\
                  Feeds describe the submissions and grades of a course.\n\
                  Worksheets are the raw grading exports to upload back."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ~/.config/gradesheet/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize raw grading worksheets (files or folders)
    Normalize {
        /// Worksheet files or folders to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Report ungraded submissions from an assignment feed
    Ungraded {
        /// JSON feed with assignments, submissions and grades
        feed: PathBuf,
    },

    /// Show version
    Version,
}

fn load_ignore_list(path: Option<&PathBuf>) -> anyhow::Result<IgnoreList> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.merge_env()?;
    config.ignore_list().context("Invalid students_to_ignore")
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Normalize { paths }) => {
            let ignore = load_ignore_list(cli.config.as_ref())?;
            commands::normalize(&paths, &ignore, output_mode)
        },
        Some(Command::Ungraded { feed }) => {
            let ignore = load_ignore_list(cli.config.as_ref())?;
            commands::ungraded(&feed, &ignore, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": gradesheet::VERSION
                    })
                );
            } else {
                println!("gradesheet v{}", gradesheet::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": gradesheet::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("gradesheet v{}", gradesheet::VERSION);
                println!("\nRun 'gradesheet --help' for usage");
            }
            Ok(())
        },
    }
}
