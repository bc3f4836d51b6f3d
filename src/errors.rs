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

use crate::io::ConfigError;
use snafu::prelude::*;
use std::io::Error as IoError;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CltError {
    #[snafu(display("at least one uniform variable must be summed per trial, got n = 0"))]
    NoVariables,
    #[snafu(display("an experiment requires at least one trial, got m = 0"))]
    NoTrials,
    #[snafu(display("statistics requested over an empty result set"))]
    EmptyResults,
    #[snafu(display(
        "sample standard deviation requires at least two observations, got {len}"
    ))]
    TooFewSamples { len: usize },
    #[snafu(display("configuration error: {source}"))]
    Config { source: ConfigError },
    #[snafu(display("could not render plot: {details}"))]
    Plot { details: String },
    #[snafu(display("{action} {}: {source}", path.display()))]
    Io {
        action: &'static str,
        path: PathBuf,
        source: IoError,
    },
}

impl From<ConfigError> for CltError {
    fn from(source: ConfigError) -> Self {
        Self::Config { source }
    }
}
