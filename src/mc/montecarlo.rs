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
extern crate indicatif;
use super::rayon::prelude::*;
use super::{Distribution, Pcg64Mcg, SeedableRng, UniformSum};
use crate::errors::{CltError, NoTrialsSnafu};
use crate::mc::results::ResultSet;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use snafu::ensure;
use std::fmt;
use std::time::Instant as StdInstant;

/// The parameters of a single experiment, immutable once the experiment has started.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExperimentParameters {
    /// Number of uniform variables summed in each trial
    n: usize,
    /// Number of trials
    m: usize,
    /// Seed of trial #0, trial #i uses `base_seed + i`
    base_seed: u64,
}

impl ExperimentParameters {
    /// Validates the parameters: at least one variable per trial and at least one trial.
    pub fn new(n: usize, m: usize, base_seed: u64) -> Result<Self, CltError> {
        UniformSum::new(n)?;
        ensure!(m >= 1, NoTrialsSnafu);
        Ok(Self { n, m, base_seed })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Seed of the provided trial. It only depends on the trial index, never on the execution order.
    pub fn trial_seed(&self, index: usize) -> u64 {
        trial_seed(self.base_seed, index)
    }
}

fn trial_seed(base_seed: u64, index: usize) -> u64 {
    base_seed.wrapping_add(index as u64)
}

/// Runs `m` trials of the sum of `n` uniform variables, sequentially, where trial #i is seeded with `base_seed + i`.
///
/// An `m` of zero returns an empty result set.
pub fn run_experiment(n: usize, m: usize, base_seed: u64) -> Result<ResultSet, CltError> {
    let distr = UniformSum::new(n)?;
    let values = (0..m)
        .map(|index| {
            let mut rng = Pcg64Mcg::seed_from_u64(trial_seed(base_seed, index));
            distr.sample(&mut rng)
        })
        .collect::<Vec<f64>>();
    Ok(ResultSet::new(values, n))
}

/// A Monte Carlo experiment, automatically running on all threads via a thread pool.
///
/// Trials are independent from one another: each trial builds its own generator from its index,
/// so the result set is identical to that of [`run_experiment`] regardless of the thread pool scheduling.
#[derive(Clone, Debug)]
pub struct MonteCarlo {
    /// Parameters of this experiment
    pub params: ExperimentParameters,
    /// Name of this run, will be reflected in the progress bar and in the output file names
    pub scenario: String,
}

impl MonteCarlo {
    pub fn new<S: Into<String>>(params: ExperimentParameters, scenario: S) -> Self {
        Self {
            params,
            scenario: scenario.into(),
        }
    }

    // Just the template for the progress bar
    fn progress_bar(&self) -> ProgressBar {
        let pb = ProgressBar::new(self.params.m as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:100.cyan/blue} {pos:>7}/{len:7} {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.set_message(format!("{}", self));
        pb
    }

    /// Runs all of the trials and returns them ordered by trial index.
    pub fn run(&self) -> Result<ResultSet, CltError> {
        let distr = UniformSum::new(self.params.n)?;
        let pb = self.progress_bar();

        let start = StdInstant::now();
        let values = (0..self.params.m)
            .into_par_iter()
            .progress_with(pb)
            .map(|index| {
                let mut rng = Pcg64Mcg::seed_from_u64(self.params.trial_seed(index));
                distr.sample(&mut rng)
            })
            .collect::<Vec<f64>>();

        let clock_time = StdInstant::now() - start;
        info!(
            "{}: ran {} trials in {:.3} s",
            self,
            self.params.m,
            clock_time.as_secs_f64()
        );

        Ok(ResultSet::new(values, self.params.n))
    }
}

impl fmt::Display for MonteCarlo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - CLT Monte Carlo - n: {}, M: {}, seed: {}",
            self.scenario, self.params.n, self.params.m, self.params.base_seed
        )
    }
}

impl fmt::LowerHex for MonteCarlo {
    /// Returns a filename friendly name
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clt-{}-n{}-m{}-seed-{}",
            self.scenario.replace(' ', "-"),
            self.params.n,
            self.params.m,
            self.params.base_seed
        )
    }
}
