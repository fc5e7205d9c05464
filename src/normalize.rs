//! Baseline normalization: subtract the idle draw a scenario would have used
//! anyway during its measurement window.

use crate::schema::BaselineRecord;

/// Idle energy draw in kWh per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleRate(pub f64);

impl IdleRate {
    /// Derive the idle rate from a baseline record.
    ///
    /// `None` unless the baseline energy is present and the duration is
    /// strictly positive. No rate is made up from partial data.
    pub fn from_baseline(baseline: &BaselineRecord) -> Option<Self> {
        let energy = baseline.energy_kwh?;
        if baseline.duration_seconds > 0.0 {
            Some(Self(energy / baseline.duration_seconds))
        } else {
            None
        }
    }

    pub fn kwh_per_second(self) -> f64 {
        self.0
    }

    /// Idle energy expected over `seconds`.
    pub fn energy_over(self, seconds: f64) -> f64 {
        self.0 * seconds
    }
}

/// Subtracts time-proportional idle draw from scenario totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Normalizer {
    rate: Option<IdleRate>,
}

impl Normalizer {
    pub fn new(baseline: Option<&BaselineRecord>) -> Self {
        Self {
            rate: baseline.and_then(IdleRate::from_baseline),
        }
    }

    pub fn rate(&self) -> Option<IdleRate> {
        self.rate
    }

    /// Baseline-adjusted energy for a scenario that ran `scenario_seconds`.
    ///
    /// Clamped at zero: a negative remainder means the idle rate overshot for
    /// that window, not that the workload gave energy back. Without a usable
    /// baseline the total is returned unchanged.
    pub fn adjusted(&self, total: Option<f64>, scenario_seconds: f64) -> Option<f64> {
        let total = total?;
        match self.rate {
            Some(rate) => Some((total - rate.energy_over(scenario_seconds)).max(0.0)),
            None => Some(total),
        }
    }
}

/// One-shot form of [`Normalizer::adjusted`].
pub fn adjusted(
    baseline: Option<&BaselineRecord>,
    total: Option<f64>,
    scenario_seconds: f64,
) -> Option<f64> {
    Normalizer::new(baseline).adjusted(total, scenario_seconds)
}
