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

/*! # uniform-clt

Monte Carlo verification of the Central Limit Theorem: each trial sums `n` independent uniform[0, 1) draws,
`m` trials are collected, and the empirical distribution is compared against the normal approximation
N(n/2, n/12) in a histogram overlay.

Every trial owns its own seeded pseudo random number generator, so a result set is a pure function of `(n, m, base_seed)`.
*/

/// The Monte Carlo engine: sampler, experiment runner, and summary statistics.
pub mod mc;

mod errors;
/// Functions which may fail return a `CltError`, preconditions included.
pub use self::errors::CltError;

/// Configuration loading, reproducibility watermark, plot export and experiment orchestration.
pub mod io;

#[macro_use]
extern crate log;
