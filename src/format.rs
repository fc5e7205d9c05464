//! Unit selection and rounding for energy figures.
//!
//! All functions here are pure and total: `None` renders as [`NOT_AVAILABLE`],
//! never as zero or an empty string.

/// Placeholder for a value that could not be computed.
pub const NOT_AVAILABLE: &str = "n/a";

/// Digits kept for total energies.
pub const ENERGY_DIGITS: usize = 6;

/// Digits kept for per-request energies shown in kWh/req.
pub const KWH_PER_REQUEST_DIGITS: usize = 9;

/// Digits kept for per-request energies shown in µWh/req.
pub const MICRO_DIGITS: usize = 1;

/// kWh to µWh.
pub const MICRO_FACTOR: f64 = 1_000_000.0;

pub const KWH: &str = "kWh";
pub const KWH_PER_REQUEST: &str = "kWh/req";
pub const UWH_PER_REQUEST: &str = "µWh/req";

/// Switches to a smaller unit below a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    /// Values strictly below this (in the base unit) use the small unit.
    pub threshold: f64,
    /// How many small units make one base unit.
    pub factor: f64,
    pub base_unit: &'static str,
    pub small_unit: &'static str,
}

/// kWh, dropping to Wh below 0.01 kWh.
pub const ENERGY_SCALE: UnitScale = UnitScale {
    threshold: 0.01,
    factor: 1_000.0,
    base_unit: KWH,
    small_unit: "Wh",
};

/// Round to `digits` decimals, trim trailing zeros, keep one fractional digit.
///
/// `15.0` at 6 digits is `"15.0"`, `0.015` is `"0.015"`.
pub fn round_decimal(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut s = format!("{:.*}", digits, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').len();
        s.truncate(trimmed);
    }
    if s.ends_with('.') {
        s.push('0');
    } else if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// `"<rounded> <unit>"`, no unit switching.
pub fn fmt_value(value: Option<f64>, unit: &str, digits: usize) -> String {
    match value {
        Some(v) => format!("{} {}", round_decimal(v, digits), unit),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Render in the base unit, or in the small unit when below the threshold.
///
/// The comparison is on the signed value, so negative differences render in
/// the small unit.
pub fn fmt_scaled(value: Option<f64>, scale: &UnitScale, digits: usize) -> String {
    match value {
        Some(v) if v < scale.threshold => fmt_value(Some(v * scale.factor), scale.small_unit, digits),
        Some(v) => fmt_value(Some(v), scale.base_unit, digits),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Energy in kWh or Wh, see [`ENERGY_SCALE`].
pub fn fmt_energy_kwh(value: Option<f64>, digits: usize) -> String {
    fmt_scaled(value, &ENERGY_SCALE, digits)
}

/// Per-request kWh shown as µWh/req with one decimal.
pub fn fmt_per_request_uwh(value: Option<f64>) -> String {
    fmt_value(value.map(|v| v * MICRO_FACTOR), UWH_PER_REQUEST, MICRO_DIGITS)
}

/// Per-request kWh kept in kWh/req.
pub fn fmt_per_request_kwh(value: Option<f64>) -> String {
    fmt_value(value, KWH_PER_REQUEST, KWH_PER_REQUEST_DIGITS)
}

/// Seconds without a forced fractional part, e.g. `100` or `12.5`.
pub fn fmt_seconds(seconds: f64) -> String {
    format!("{}", seconds)
}
