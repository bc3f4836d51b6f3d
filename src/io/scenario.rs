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

use super::plot::{output_path, HistogramPlot};
use super::watermark::GitTag;
use super::{find_config_files, ConfigRepr, ExperimentConfig};
use crate::errors::CltError;
use crate::mc::{MonteCarlo, SummaryStatistics};
use std::path::{Path, PathBuf};

/// The artifacts of an experiment which ran to completion
#[derive(Clone, Debug)]
pub struct ExperimentOutcome {
    /// Configuration file of this experiment
    pub config: PathBuf,
    /// Where the plot was saved
    pub plot: PathBuf,
    pub stats: SummaryStatistics,
}

/// Runs the experiment described in the provided configuration file and saves its plot.
///
/// The experiment either completes or fails as a whole: the plot is only written once every trial has run.
pub fn run_single<P: AsRef<Path>>(
    config_path: P,
    tag: &GitTag,
) -> Result<ExperimentOutcome, CltError> {
    let config_path = config_path.as_ref();
    info!("Running experiment with config: {}", config_path.display());

    let cfg = ExperimentConfig::load(config_path)?;
    let params = cfg.parameters()?;
    info!(
        "Experiment parameters: n={}, M={}, seed={}",
        params.n(),
        params.m(),
        params.base_seed()
    );

    let config_name = config_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "experiment".to_string());

    let rslts = MonteCarlo::new(params, config_name.as_str()).run()?;

    let tag_str = tag.to_string();
    let plot = HistogramPlot::new(
        rslts.values(),
        params.n(),
        params.m(),
        Some(tag_str.as_str()),
    )?;
    debug!("{}", plot.stats());

    let plot_path = output_path(
        &cfg.output.directory,
        &config_name,
        params.n(),
        params.m(),
        Some(tag_str.as_str()),
    );
    plot.save_svg(&plot_path)?;

    info!("Experiment completed: {}", plot_path.display());
    Ok(ExperimentOutcome {
        config: config_path.to_path_buf(),
        plot: plot_path,
        stats: *plot.stats(),
    })
}

/// Summary of a batch of experiments
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<ExperimentOutcome>,
    pub failed: Vec<(PathBuf, CltError)>,
}

impl BatchReport {
    /// Number of configuration files processed
    pub fn len(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs every experiment configured in the provided directory, in file name order.
///
/// A failed experiment is logged and does not prevent the others from running.
pub fn run_batch<P: AsRef<Path>>(dir: P, tag: &GitTag) -> BatchReport {
    let dir = dir.as_ref();
    let config_files = find_config_files(dir);
    info!(
        "Found {} configuration files in {}",
        config_files.len(),
        dir.display()
    );

    let mut report = BatchReport::default();
    for config_file in config_files {
        match run_single(&config_file, tag) {
            Ok(outcome) => report.succeeded.push(outcome),
            Err(e) => {
                error!("Failed to run experiment {}: {e}", config_file.display());
                report.failed.push((config_file, e));
            }
        }
    }
    report
}
