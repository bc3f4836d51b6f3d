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

use super::{thread_rng, Distribution, Pcg64Mcg, Rng, SeedableRng, Uniform};
use crate::errors::{CltError, NoVariablesSnafu};
use snafu::ensure;

/// The distribution of the sum of `n` independent uniform random variables.
///
/// Each variable is drawn from the half-open interval [0, 1), hence a sample lies in [0, n).
/// As with any other `rand_distr` distribution, the random number generator is owned by the caller,
/// so sampling never touches shared state.
#[derive(Copy, Clone, Debug)]
pub struct UniformSum {
    n: usize,
    unit: Uniform<f64>,
}

impl UniformSum {
    /// Initializes the distribution of a sum of `n` uniform variables, `n` must be at least one.
    pub fn new(n: usize) -> Result<Self, CltError> {
        ensure!(n >= 1, NoVariablesSnafu);
        Ok(Self {
            n,
            unit: Uniform::new(0.0, 1.0),
        })
    }

    /// Number of uniform variables summed per sample
    pub fn n(&self) -> usize {
        self.n
    }

    /// Theoretical mean of the sum, each variable contributes 1/2.
    pub fn mean(&self) -> f64 {
        self.n as f64 / 2.0
    }

    /// Theoretical standard deviation of the sum, each variable contributes a variance of 1/12.
    pub fn std_dev(&self) -> f64 {
        (self.n as f64 / 12.0).sqrt()
    }
}

impl Distribution<f64> for UniformSum {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        (&self.unit).sample_iter(rng).take(self.n).sum()
    }
}

/// Returns the sum of `n` uniform draws from a generator seeded with `seed`.
///
/// The generator is built for this call only: the same `(n, seed)` pair always returns the same value,
/// and consecutive seeds are expanded into unrelated streams.
pub fn sample(n: usize, seed: u64) -> Result<f64, CltError> {
    let distr = UniformSum::new(n)?;
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    Ok(distr.sample(&mut rng))
}

/// Returns the sum of `n` uniform draws from the thread local generator.
///
/// **Debug only:** the result is not reproducible, use [`sample`] for any experiment.
pub fn sample_unseeded(n: usize) -> Result<f64, CltError> {
    let distr = UniformSum::new(n)?;
    Ok(distr.sample(&mut thread_rng()))
}
