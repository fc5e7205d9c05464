//! Derived metrics for the baseline and both scenarios.

use crate::differential::Differences;
use crate::loader::MeasurementSet;
use crate::normalize::{IdleRate, Normalizer};
use crate::per_request::per_request;
use crate::schema::{BaselineRecord, ScenarioRecord};

/// Raw, adjusted and per-request energy for one scenario.
///
/// A missing measurement file yields all-`None` energies with zero requests
/// and zero duration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenarioMetrics {
    pub total_energy_kwh: Option<f64>,
    pub total_requests: u64,
    pub duration_seconds: f64,
    pub adjusted_energy_kwh: Option<f64>,
    pub per_request_kwh: Option<f64>,
    pub adjusted_per_request_kwh: Option<f64>,
}

impl ScenarioMetrics {
    pub fn compute(record: Option<&ScenarioRecord>, normalizer: &Normalizer) -> Self {
        let record = record.cloned().unwrap_or_default();
        let adjusted = normalizer.adjusted(record.total_energy_kwh, record.duration_seconds);

        Self {
            total_energy_kwh: record.total_energy_kwh,
            total_requests: record.total_requests,
            duration_seconds: record.duration_seconds,
            adjusted_energy_kwh: adjusted,
            per_request_kwh: per_request(record.total_energy_kwh, record.total_requests),
            adjusted_per_request_kwh: per_request(adjusted, record.total_requests),
        }
    }
}

/// Every number the reports show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    pub baseline_energy_kwh: Option<f64>,
    pub baseline_duration_seconds: f64,
    pub idle_rate: Option<IdleRate>,
    pub scenario_a: ScenarioMetrics,
    pub scenario_b: ScenarioMetrics,
    /// `scenario_a - scenario_b`.
    pub difference: Differences,
}

impl Comparison {
    pub fn compute(measurements: &MeasurementSet) -> Self {
        Self::from_records(
            measurements.baseline.as_ref(),
            measurements.scenario_a.as_ref(),
            measurements.scenario_b.as_ref(),
        )
    }

    pub fn from_records(
        baseline: Option<&BaselineRecord>,
        scenario_a: Option<&ScenarioRecord>,
        scenario_b: Option<&ScenarioRecord>,
    ) -> Self {
        let normalizer = Normalizer::new(baseline);
        if baseline.is_some() && normalizer.rate().is_none() {
            tracing::warn!("baseline has no energy or zero duration; totals are left unadjusted");
        }

        let a = ScenarioMetrics::compute(scenario_a, &normalizer);
        let b = ScenarioMetrics::compute(scenario_b, &normalizer);

        Self {
            baseline_energy_kwh: baseline.and_then(|r| r.energy_kwh),
            baseline_duration_seconds: baseline.map(|r| r.duration_seconds).unwrap_or(0.0),
            idle_rate: normalizer.rate(),
            scenario_a: a,
            scenario_b: b,
            difference: Differences::between(&a, &b),
        }
    }
}
