use crate::analysis::regression::{linear_regression, RegressionFit};
use crate::types::variable::Variable;
use serde::{Deserialize, Serialize};

/// One year's aggregated value of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    /// Mean of the variable's valid samples within `year`.
    pub value: f64,
}

/// Year-indexed series of one variable, sorted ascending by year.
///
/// Years without a single valid sample are absent rather than zero, so consecutive
/// points are not guaranteed to be consecutive years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub variable: Variable,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.year).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Least-squares fit of value against year. Gaps from omitted years are
    /// handled naturally since the actual year numbers are used as `x`.
    pub fn fit(&self) -> RegressionFit {
        let xs: Vec<f64> = self.points.iter().map(|p| f64::from(p.year)).collect();
        linear_regression(&xs, &self.values())
    }
}
