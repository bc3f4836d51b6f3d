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

use crate::errors::CltError;
use crate::mc::ExperimentParameters;
use glob::{glob, Pattern};
use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};
use snafu::prelude::*;
use std::fmt::Debug;
use std::fs::File;
use std::io::BufReader;
use std::io::Error as IoError;
use std::path::{Path, PathBuf};

/// Renders the comparison of an experiment against the normal approximation.
pub mod plot;
/// Runs experiments from their configuration files.
pub mod scenario;
/// Build time reproducibility information.
pub mod watermark;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("failed to read configuration file: {source}"))]
    ReadError { source: IoError },
    #[snafu(display("failed to parse YAML configuration file: {source}"))]
    ParseError { source: serde_yaml::Error },
}

pub trait ConfigRepr: Debug + Sized + serde::Serialize + DeserializeOwned {
    /// Builds the configuration representation from the path to a yaml
    fn load<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path).context(ReadSnafu)?;
        let reader = BufReader::new(file);

        serde_yaml::from_reader(reader).context(ParseSnafu)
    }

    /// Builds the configuration representation from the provided string of a yaml
    fn loads(data: &str) -> Result<Self, ConfigError> {
        debug!("Loading YAML:\n{data}");
        serde_yaml::from_str(data).context(ParseSnafu)
    }
}

/// The configuration of a single experiment, e.g.
///
/// ```yaml
/// experiment:
///   n: 12
///   m: 5000
///   seed: 42
/// output:
///   directory: "outputs"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub experiment: ExperimentSection,
    pub output: OutputSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSection {
    /// Number of uniform variables summed in each trial
    pub n: usize,
    /// Number of trials
    pub m: usize,
    /// Seed of the first trial
    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Directory where the plot is saved, created if needed
    pub directory: PathBuf,
}

impl ConfigRepr for ExperimentConfig {}

impl ExperimentConfig {
    /// Validates the experiment section into the parameters of the experiment.
    pub fn parameters(&self) -> Result<ExperimentParameters, CltError> {
        ExperimentParameters::new(self.experiment.n, self.experiment.m, self.experiment.seed)
    }
}

/// Returns the YAML files (`.yaml` and `.yml`) of the provided directory, sorted by path.
/// A directory which does not exist has no configuration files.
pub fn find_config_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Vec::new();
    }

    let base = Pattern::escape(&dir.to_string_lossy());
    let mut files = Vec::new();
    for ext in ["yaml", "yml"] {
        match glob(&format!("{base}/*.{ext}")) {
            Ok(paths) => {
                for entry in paths {
                    match entry {
                        Ok(path) => files.push(path),
                        Err(e) => warn!("skipping unreadable entry: {e}"),
                    }
                }
            }
            Err(e) => warn!("could not search {} for *.{ext}: {e}", dir.display()),
        }
    }
    files.sort();
    files
}
