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

use crate::errors::{CltError, IoSnafu};
use crate::mc::{
    density_histogram, summarize, theoretical_curve, HistogramBin, SummaryStatistics,
};
use plotters::prelude::*;
use snafu::ResultExt;
use std::error::Error;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

/// Number of bins of the histogram
pub const HISTOGRAM_BINS: usize = 30;
/// Number of points of the theoretical density curve
pub const CURVE_POINTS: usize = 100;

const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);

/// A histogram of the experiment normalized as a density, overlaid with the normal approximation N(n/2, n/12).
///
/// Everything is computed on initialization, so a plot that could be built can always be drawn.
#[derive(Clone, Debug)]
pub struct HistogramPlot {
    n: usize,
    m: usize,
    tag: Option<String>,
    bins: Vec<HistogramBin>,
    curve: Vec<(f64, f64)>,
    stats: SummaryStatistics,
}

impl HistogramPlot {
    /// Prepares the plot of the provided trial values, which requires at least two values.
    /// The optional tag is printed in the statistics box.
    pub fn new(values: &[f64], n: usize, m: usize, tag: Option<&str>) -> Result<Self, CltError> {
        let stats = summarize(values, n)?;
        Ok(Self {
            n,
            m,
            tag: tag.map(str::to_string),
            bins: density_histogram(values, HISTOGRAM_BINS)?,
            curve: theoretical_curve(values, n, CURVE_POINTS)?,
            stats,
        })
    }

    pub fn title(&self) -> String {
        format!(
            "Central Limit Theorem Verification (n={} variables, M={} trials)",
            self.n, self.m
        )
    }

    /// Content of the statistics box
    pub fn annotation(&self) -> String {
        match &self.tag {
            Some(tag) => format!(
                "{}\nGit commit: {}",
                self.stats,
                tag.chars().take(8).collect::<String>()
            ),
            None => format!("{}", self.stats),
        }
    }

    pub fn stats(&self) -> &SummaryStatistics {
        &self.stats
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn curve(&self) -> &[(f64, f64)] {
        &self.curve
    }

    /// Saves the plot as an SVG file, creating the parent directories as needed.
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), CltError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent).context(IoSnafu {
                action: "creating output directory",
                path: parent.to_path_buf(),
            })?;
        }

        self.draw(path).map_err(|e| CltError::Plot {
            details: e.to_string(),
        })?;

        info!("Histogram saved to {}", path.display());
        Ok(())
    }

    fn draw(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let (x_min, x_max) = match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => (first.start, last.end),
            _ => return Err("histogram has no bins".into()),
        };
        let y_max = self
            .bins
            .iter()
            .map(|b| b.density)
            .chain(self.curve.iter().map(|(_, y)| *y))
            .fold(0.0_f64, f64::max)
            .max(f64::EPSILON)
            * 1.1;

        let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(self.title(), ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Sum of Random Variables")
            .y_desc("Probability Density")
            .draw()?;

        chart
            .draw_series(self.bins.iter().map(|b| {
                Rectangle::new(
                    [(b.start, 0.0), (b.end, b.density)],
                    LIGHT_GREEN.mix(0.7).filled(),
                )
            }))?
            .label("Experimental Data")
            .legend(|(x, y)| {
                Rectangle::new([(x, y - 5), (x + 20, y + 5)], LIGHT_GREEN.mix(0.7).filled())
            });

        // Bar edges
        chart.draw_series(self.bins.iter().map(|b| {
            Rectangle::new([(b.start, 0.0), (b.end, b.density)], BLACK.stroke_width(1))
        }))?;

        chart
            .draw_series(LineSeries::new(
                self.curve.iter().copied(),
                RED.stroke_width(2),
            ))?
            .label("Theoretical Normal Distribution")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        for (i, line) in self.annotation().lines().enumerate() {
            root.draw(&Text::new(
                line.to_string(),
                (90, 60 + 18 * i as i32),
                ("sans-serif", 14).into_font(),
            ))?;
        }

        root.present()?;
        Ok(())
    }
}

/// Path of the plot of an experiment: `<dir>/central_limit_theorem_<config>_n<n>_m<m>[_<tag>].svg`.
///
/// The name only depends on its inputs, so rerunning an experiment overwrites its previous plot.
pub fn output_path<P: AsRef<Path>>(
    dir: P,
    config_name: &str,
    n: usize,
    m: usize,
    tag: Option<&str>,
) -> PathBuf {
    let file_name = match tag {
        Some(tag) => format!(
            "central_limit_theorem_{config_name}_n{n}_m{m}_{}.svg",
            tag.chars().take(8).collect::<String>()
        ),
        None => format!("central_limit_theorem_{config_name}_n{n}_m{m}.svg"),
    };
    dir.as_ref().join(file_name)
}
