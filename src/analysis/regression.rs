use crate::analysis::statistics::mean;
use log::warn;
use serde::{Deserialize, Serialize};

/// Result of an ordinary least-squares fit `y = slope × x + intercept`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressionFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination.
    pub r2: f64,
}

impl RegressionFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Change over ten units of `x`; for a yearly trend this is the change per decade.
    pub fn change_per_decade(&self) -> f64 {
        self.slope * 10.0
    }
}

/// Ordinary least-squares regression of `ys` on `xs`.
///
/// Degenerate inputs never divide by zero:
/// - fewer than two points, or slices of different length → all zeros;
/// - no variance in `xs` → slope 0, intercept = mean of `ys`, r² 0;
/// - no variance in `ys` → r² 0.
///
/// ```
/// use climate_profile::linear_regression;
///
/// let fit = linear_regression(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]);
/// assert_eq!(fit.slope, 2.0);
/// assert_eq!(fit.intercept, 1.0);
/// assert_eq!(fit.r2, 1.0);
///
/// let fit = linear_regression(&[1.0], &[3.0]);
/// assert_eq!((fit.slope, fit.intercept, fit.r2), (0.0, 0.0, 0.0));
/// ```
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> RegressionFit {
    if xs.len() != ys.len() {
        warn!(
            "Regression inputs differ in length ({} vs {}), returning empty fit",
            xs.len(),
            ys.len()
        );
        return RegressionFit::default();
    }
    if xs.len() < 2 {
        return RegressionFit::default();
    }

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let (sxx, sxy) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(sxx, sxy), (x, y)| {
            let dx = x - mean_x;
            (sxx + dx * dx, sxy + dx * (y - mean_y))
        });

    if sxx == 0.0 {
        return RegressionFit {
            slope: 0.0,
            intercept: mean_y,
            r2: 0.0,
        };
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let ss_tot: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
        .sum();
    let r2 = if ss_tot == 0.0 {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    };

    RegressionFit {
        slope,
        intercept,
        r2,
    }
}
