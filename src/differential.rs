//! Scenario-A-minus-scenario-B differences.

use crate::comparison::ScenarioMetrics;

/// `a - b` when both sides are known. A missing side never counts as zero.
pub fn diff(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    Some(a? - b?)
}

/// Differences across the four metric families, always A minus B.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Differences {
    pub total_energy_kwh: Option<f64>,
    pub adjusted_energy_kwh: Option<f64>,
    pub per_request_kwh: Option<f64>,
    pub adjusted_per_request_kwh: Option<f64>,
}

impl Differences {
    /// Difference every metric family of `a` against `b`.
    pub fn between(a: &ScenarioMetrics, b: &ScenarioMetrics) -> Self {
        Self {
            total_energy_kwh: diff(a.total_energy_kwh, b.total_energy_kwh),
            adjusted_energy_kwh: diff(a.adjusted_energy_kwh, b.adjusted_energy_kwh),
            per_request_kwh: diff(a.per_request_kwh, b.per_request_kwh),
            adjusted_per_request_kwh: diff(
                a.adjusted_per_request_kwh,
                b.adjusted_per_request_kwh,
            ),
        }
    }
}
