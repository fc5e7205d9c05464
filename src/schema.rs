//! Measurement records read from the harness and the JSON summary written back.
//!
//! Input records mirror what the energy-metering sidecar and the k6 harness
//! write. Fields may be missing or `null`; energies stay `None` in that case,
//! counts and durations fall back to zero. Unknown fields are ignored.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Idle draw measured with no benchmark workload running.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineRecord {
    /// Energy drawn over the whole idle window, in kWh.
    #[serde(rename = "baseline_energy_kwh", default)]
    pub energy_kwh: Option<f64>,
    /// Length of the idle window (0 if not recorded).
    #[serde(
        rename = "baseline_duration_seconds",
        default,
        deserialize_with = "null_as_default"
    )]
    pub duration_seconds: f64,
}

/// Energy and traffic observed while one scenario ran.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Energy drawn while the scenario ran, in kWh.
    #[serde(default)]
    pub total_energy_kwh: Option<f64>,
    /// Requests served. Accepts whole-number floats such as `1000.0`.
    #[serde(default, deserialize_with = "request_count")]
    pub total_requests: u64,
    /// Length of the scenario window (0 if not recorded).
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_seconds: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Non-negative whole number, written either as an integer or as a float
/// with no fractional part. `null` reads as 0.
fn request_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<serde_json::Number>::deserialize(deserializer)? {
        Some(n) => n,
        None => return Ok(0),
    };
    if let Some(n) = number.as_u64() {
        return Ok(n);
    }
    match number.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        _ => Err(D::Error::custom(format!(
            "invalid request count {}, expected a non-negative whole number",
            number
        ))),
    }
}

// ---------------------------------------------------------------------------
// Output document (energy_comparison.json)
// ---------------------------------------------------------------------------

/// Top-level JSON summary. Contains no timestamps, so identical inputs produce
/// identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDocument {
    /// Where the measurements were read from.
    pub inputs: InputPaths,
    /// Unrounded numbers.
    pub values: ComparisonValues,
    /// Formatted strings for people.
    pub readable: ReadableValues,
    /// Where this run wrote its outputs.
    pub outputs: OutputPaths,
}

/// Where each measurement was read from, whether or not the file existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputPaths {
    /// Baseline measurement file.
    pub baseline_json: String,
    /// Scenario A (the minuend of every difference).
    pub scenario_a: NamedPath,
    /// Scenario B (the subtrahend).
    pub scenario_b: NamedPath,
}

/// A scenario label with its measurement file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPath {
    /// Scenario label, e.g. "DB-only".
    pub label: String,
    /// Measurement file path.
    pub path: String,
}

/// Unrounded numbers. `null` means the value is not available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonValues {
    /// Idle energy over the baseline window.
    pub baseline_energy_kwh: Option<f64>,
    /// Baseline window length (0 if missing).
    pub baseline_duration_seconds: f64,
    /// Idle draw in kWh per second, when the baseline is usable.
    pub baseline_rate_kwh_per_second: Option<f64>,
    /// Scenario A figures.
    pub scenario_a: ScenarioValues,
    /// Scenario B figures.
    pub scenario_b: ScenarioValues,
    /// Scenario A minus scenario B.
    pub difference: DifferenceValues,
}

/// Raw and derived figures for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioValues {
    /// Scenario label, e.g. "Redis-only".
    pub label: String,
    /// Measured energy, before baseline adjustment.
    pub total_energy_kwh: Option<f64>,
    /// Requests served (0 if missing).
    pub total_requests: u64,
    /// Scenario window length (0 if missing).
    pub duration_seconds: f64,
    /// Measured energy minus proportional idle draw, floored at zero.
    pub adjusted_energy_kwh: Option<f64>,
    /// Raw energy per request.
    pub energy_per_request_kwh: Option<f64>,
    /// Adjusted energy per request.
    pub adjusted_energy_per_request_kwh: Option<f64>,
}

/// Scenario A minus scenario B, in the order named by `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferenceValues {
    /// Subtraction order, e.g. "DB-only - Redis-only".
    pub order: String,
    /// Difference of raw totals.
    pub total_energy_kwh: Option<f64>,
    /// Difference of adjusted totals.
    pub adjusted_energy_kwh: Option<f64>,
    /// Difference of raw per-request energy.
    pub per_request_kwh: Option<f64>,
    /// Difference of adjusted per-request energy.
    pub adjusted_per_request_kwh: Option<f64>,
}

/// The same values formatted for people; absent values read `n/a`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadableValues {
    /// Baseline energy in kWh.
    pub baseline_energy: String,
    /// Scenario A strings.
    pub scenario_a: ScenarioReadable,
    /// Scenario B strings.
    pub scenario_b: ScenarioReadable,
    /// Difference strings.
    pub difference: DifferenceReadable,
}

/// Formatted figures for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReadable {
    /// Raw total in kWh.
    pub total_energy: String,
    /// Adjusted total in kWh.
    pub adjusted_total_energy: String,
    /// Raw per-request energy in µWh/req.
    pub per_request_uwh: String,
    /// Adjusted per-request energy in µWh/req.
    pub adjusted_per_request_uwh: String,
}

/// Formatted differences, A minus B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferenceReadable {
    /// Raw total difference in kWh.
    pub total_energy: String,
    /// Adjusted total difference in kWh.
    pub adjusted_total_energy: String,
    /// Raw per-request difference in µWh/req.
    pub per_request_uwh: String,
    /// Adjusted per-request difference in µWh/req.
    pub adjusted_per_request_uwh: String,
}

/// Files written by the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputPaths {
    /// The comparison table.
    pub csv: String,
    /// This document.
    pub json: String,
}
