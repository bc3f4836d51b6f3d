/*
    Uniform CLT, Monte Carlo verification of the central limit theorem
    Copyright (C) 2023 Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

extern crate clap;
extern crate log;
extern crate pretty_env_logger;
extern crate uniform_clt as clt;

use clap::Parser;
use clt::io::scenario::{run_batch, run_single};
use clt::io::watermark::{created_by, prj_name_ver, GitTag};
use log::{error, info, warn};
use std::env::{set_var, var};
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_VAR: &str = "CLT_LOG";
const DEFAULT_CONFIG: &str = "config/experiment.yaml";
const DEFAULT_BATCH_DIR: &str = "config/experiments";

/// Central Limit Theorem experimental verification: sums of uniform random variables against the normal approximation.
#[derive(Parser, Debug)]
#[command(name = "cltcli", version, about)]
struct Cli {
    /// Path to a specific configuration file
    #[arg(short, long, value_name = "FILE", conflicts_with = "batch")]
    config: Option<PathBuf>,
    /// Run every experiment configured in the batch directory
    #[arg(short, long)]
    batch: bool,
    /// Directory searched for configuration files in batch mode
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BATCH_DIR)]
    dir: PathBuf,
    /// Print the summary statistics of each experiment to stdout
    #[arg(long)]
    summary: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if var(LOG_VAR).is_err() {
        set_var(LOG_VAR, "INFO");
    }

    if pretty_env_logger::try_init_custom_env(LOG_VAR).is_err() {
        println!("could not init logger");
    }

    let tag = GitTag::from_build();
    info!("{} run by {}", prj_name_ver(), created_by());
    info!("Experiment running on git commit: {tag}");
    if tag.is_dirty() {
        warn!("Working directory has uncommitted changes. Reproducibility might be compromised.");
    }

    if cli.batch {
        let report = run_batch(&cli.dir, &tag);
        if report.is_empty() {
            error!("No configuration files found in {}", cli.dir.display());
            return ExitCode::FAILURE;
        }
        if cli.summary {
            for outcome in &report.succeeded {
                println!("{}\n{}\n", outcome.config.display(), outcome.stats);
            }
        }
        info!(
            "All batch experiments completed: {} succeeded, {} failed",
            report.succeeded.len(),
            report.failed.len()
        );
        return if report.failed.is_empty() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    let (config_path, is_default) = match cli.config {
        Some(path) => (path, false),
        None => (PathBuf::from(DEFAULT_CONFIG), true),
    };

    if !config_path.exists() {
        if is_default {
            error!(
                "Default config file {DEFAULT_CONFIG} not found. Use -c to specify a config file or -b for batch mode."
            );
        } else {
            error!("Configuration file not found: {}", config_path.display());
        }
        return ExitCode::FAILURE;
    }

    match run_single(&config_path, &tag) {
        Ok(outcome) => {
            if cli.summary {
                println!("{}", outcome.stats);
            }
            info!("All experiments completed successfully!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Experiment failed: {e}");
            ExitCode::FAILURE
        }
    }
}
