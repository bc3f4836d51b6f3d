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

use super::UniformSum;
use crate::errors::{CltError, EmptyResultsSnafu, TooFewSamplesSnafu};
use snafu::ensure;
use std::f64::consts::TAU;
use std::fmt;

/// The sums of every trial of an experiment, where the value at index `i` is the trial seeded with `base_seed + i`.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSet {
    values: Vec<f64>,
    n: usize,
}

impl ResultSet {
    /// Wraps the provided trial values, which must already be sorted by trial index.
    pub fn new(values: Vec<f64>, n: usize) -> Self {
        Self { values, n }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Number of uniform variables summed in each trial
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest observed sums, `None` if there are no trials.
    pub fn range(&self) -> Option<(f64, f64)> {
        range_of(&self.values)
    }

    /// Computes the empirical and theoretical statistics of this result set.
    pub fn summarize(&self) -> Result<SummaryStatistics, CltError> {
        summarize(&self.values, self.n)
    }
}

/// Empirical statistics of a result set next to the closed form moments of the sum of `n` uniform variables.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SummaryStatistics {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean of the observations
    pub empirical_mean: f64,
    /// Sample standard deviation, with Bessel's correction
    pub empirical_std: f64,
    /// n / 2
    pub theoretical_mean: f64,
    /// sqrt(n / 12)
    pub theoretical_std: f64,
}

impl SummaryStatistics {
    /// Relative error of the empirical mean with respect to the theoretical mean
    pub fn mean_rel_error(&self) -> f64 {
        ((self.empirical_mean - self.theoretical_mean) / self.theoretical_mean).abs()
    }

    /// Relative error of the empirical standard deviation with respect to the theoretical one
    pub fn std_rel_error(&self) -> f64 {
        ((self.empirical_std - self.theoretical_std) / self.theoretical_std).abs()
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Experimental: μ={:.3}, σ={:.3}",
            self.empirical_mean, self.empirical_std
        )?;
        write!(
            f,
            "Theoretical: μ={:.3}, σ={:.3}",
            self.theoretical_mean, self.theoretical_std
        )
    }
}

/// Summarizes the provided sums of `n` uniform variables.
///
/// Fails on an empty input, and on a single observation since the sample standard deviation is then undefined.
pub fn summarize(values: &[f64], n: usize) -> Result<SummaryStatistics, CltError> {
    let distr = UniformSum::new(n)?;
    ensure!(!values.is_empty(), EmptyResultsSnafu);
    ensure!(values.len() >= 2, TooFewSamplesSnafu { len: values.len() });

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let sum_sq_dev = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>();

    Ok(SummaryStatistics {
        count,
        empirical_mean: mean,
        empirical_std: (sum_sq_dev / (count - 1) as f64).sqrt(),
        theoretical_mean: distr.mean(),
        theoretical_std: distr.std_dev(),
    })
}

/// Probability density of the normal distribution N(mu, sigma^2) at `x`
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    (-0.5 * ((x - mu) / sigma).powi(2)).exp() / (sigma * TAU.sqrt())
}

/// Returns the theoretical normal density N(n/2, n/12) evaluated at `points` evenly spaced abscissae
/// spanning the observed range of `values`, both ends included.
pub fn theoretical_curve(
    values: &[f64],
    n: usize,
    points: usize,
) -> Result<Vec<(f64, f64)>, CltError> {
    let distr = UniformSum::new(n)?;
    let (lo, hi) = range_of(values).ok_or(CltError::EmptyResults)?;
    let (mu, sigma) = (distr.mean(), distr.std_dev());

    let step = if points > 1 {
        (hi - lo) / (points - 1) as f64
    } else {
        0.0
    };

    Ok((0..points)
        .map(|i| {
            let x = if i + 1 == points && points > 1 {
                hi
            } else {
                lo + step * i as f64
            };
            (x, normal_pdf(x, mu, sigma))
        })
        .collect())
}

/// A bin of a histogram normalized as a probability density
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HistogramBin {
    /// Lower edge of the bin
    pub start: f64,
    /// Upper edge of the bin
    pub end: f64,
    /// Number of observations in this bin
    pub count: usize,
    /// count / (total * width), such that the area of the histogram is one
    pub density: f64,
}

/// Splits the observed range of `values` into `bins` bins of equal width, and normalizes their heights
/// such that the total area is one. The last bin includes the largest value.
///
/// If all values are equal, the range is widened by one half on either side. Zero bins yields an empty histogram.
pub fn density_histogram(values: &[f64], bins: usize) -> Result<Vec<HistogramBin>, CltError> {
    let (mut lo, mut hi) = range_of(values).ok_or(CltError::EmptyResults)?;
    if bins == 0 {
        return Ok(Vec::new());
    }
    if hi <= lo {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0_usize; bins];
    for x in values {
        let idx = (((x - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let total = values.len() as f64;
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count,
            density: count as f64 / (total * width),
        })
        .collect())
}

fn range_of(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), x| (lo.min(*x), hi.max(*x))),
    )
}
