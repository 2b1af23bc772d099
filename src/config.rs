//! Tunable parameters for [`crate::ClimateAnalyzer`].

use crate::analysis::statistics::Thresholds;
use crate::error::ClimateError;
use crate::types::window::DEFAULT_TOLERANCE_DAYS;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// Analysis settings. Every field has a default, so a partial JSON document (or
/// `{}`) is a valid configuration.
///
/// ```
/// use climate_profile::AnalysisConfig;
///
/// let config = AnalysisConfig::from_json(r#"{ "default_tolerance": 7 }"#).unwrap();
/// assert_eq!(config.default_tolerance, 7);
/// assert!(!config.wrap_year_boundary);
/// assert_eq!(config.thresholds.heat_celsius, 30.0);
///
/// let config = AnalysisConfig::builder().wrap_year_boundary(true).build();
/// assert_eq!(config.default_tolerance, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct AnalysisConfig {
    /// ± days around the target day-of-year when a request gives no tolerance.
    #[builder(default = DEFAULT_TOLERANCE_DAYS)]
    pub default_tolerance: u32,

    /// Let windows wrap around the year boundary. Off by default so results stay
    /// comparable with the non-wrapping selection.
    #[builder(default)]
    pub wrap_year_boundary: bool,

    #[builder(default)]
    pub thresholds: Thresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AnalysisConfig {
    /// Parses a configuration from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ClimateError> {
        Ok(serde_json::from_str(json)?)
    }
}
