//! CSV table, JSON summary, and console digest.
//!
//! The `render_*` and `build_*` functions are pure; only [`write_outputs`]
//! touches the filesystem.

use crate::comparison::{Comparison, ScenarioMetrics};
use crate::config::Config;
use crate::error::{CompareError, Result};
use crate::format::{
    fmt_energy_kwh, fmt_per_request_kwh, fmt_per_request_uwh, fmt_seconds, fmt_value,
    ENERGY_DIGITS, KWH,
};
use crate::loader::MeasurementSet;
use crate::schema::*;

use std::path::{Path, PathBuf};

/// Placeholder for cells that do not apply to a column.
const NOT_APPLICABLE: &str = "-";

/// Files written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// What [`crate::run`] produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub comparison: Comparison,
    pub outputs: Outputs,
    /// Multi-line digest for stdout.
    pub console: String,
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Header plus eight metric rows, five columns each.
pub fn render_table(config: &Config, c: &Comparison) -> Vec<Vec<String>> {
    let (a, b, d) = (&c.scenario_a, &c.scenario_b, &c.difference);
    let energy = |v| fmt_energy_kwh(v, ENERGY_DIGITS);

    let row = |cells: [String; 5]| cells.to_vec();

    vec![
        row([
            "Metric".into(),
            config.scenario_a.label.clone(),
            config.scenario_b.label.clone(),
            config.difference_header(),
            "Notes".into(),
        ]),
        row([
            "Total Requests".into(),
            a.total_requests.to_string(),
            b.total_requests.to_string(),
            NOT_APPLICABLE.into(),
            "Requests processed in scenario".into(),
        ]),
        row([
            "Total Energy".into(),
            energy(a.total_energy_kwh),
            energy(b.total_energy_kwh),
            energy(d.total_energy_kwh),
            "Raw energy during scenario".into(),
        ]),
        row([
            "Baseline Energy".into(),
            energy(c.baseline_energy_kwh),
            NOT_APPLICABLE.into(),
            NOT_APPLICABLE.into(),
            format!(
                "Measured over {}s; proportional subtraction for adjusted values",
                fmt_seconds(c.baseline_duration_seconds)
            ),
        ]),
        row([
            "Adjusted Energy".into(),
            energy(a.adjusted_energy_kwh),
            energy(b.adjusted_energy_kwh),
            energy(d.adjusted_energy_kwh),
            "Adjusted = total - (baseline_rate × scenario_duration)".into(),
        ]),
        row([
            "Energy/Request (kWh/req)".into(),
            fmt_per_request_kwh(a.per_request_kwh),
            fmt_per_request_kwh(b.per_request_kwh),
            fmt_per_request_kwh(d.per_request_kwh),
            "Raw per-request energy".into(),
        ]),
        row([
            "Adjusted Energy/Request (kWh/req)".into(),
            fmt_per_request_kwh(a.adjusted_per_request_kwh),
            fmt_per_request_kwh(b.adjusted_per_request_kwh),
            fmt_per_request_kwh(d.adjusted_per_request_kwh),
            "Adjusted per-request energy".into(),
        ]),
        row([
            "Energy/Request".into(),
            fmt_per_request_uwh(a.per_request_kwh),
            fmt_per_request_uwh(b.per_request_kwh),
            fmt_per_request_uwh(d.per_request_kwh),
            "Same as above, in µWh for readability".into(),
        ]),
        row([
            "Adjusted Energy/Request".into(),
            fmt_per_request_uwh(a.adjusted_per_request_kwh),
            fmt_per_request_uwh(b.adjusted_per_request_kwh),
            fmt_per_request_uwh(d.adjusted_per_request_kwh),
            "Adjusted per-request, in µWh".into(),
        ]),
    ]
}

/// Encode table rows as comma-separated text, quoting only where needed.
pub fn render_csv(rows: &[Vec<String>]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| CompareError::Csv(csv::Error::from(e.into_error())))
}

// ---------------------------------------------------------------------------
// JSON summary
// ---------------------------------------------------------------------------

fn path_string(path: &Path) -> String {
    path.display().to_string()
}

fn scenario_values(label: &str, m: &ScenarioMetrics) -> ScenarioValues {
    ScenarioValues {
        label: label.to_string(),
        total_energy_kwh: m.total_energy_kwh,
        total_requests: m.total_requests,
        duration_seconds: m.duration_seconds,
        adjusted_energy_kwh: m.adjusted_energy_kwh,
        energy_per_request_kwh: m.per_request_kwh,
        adjusted_energy_per_request_kwh: m.adjusted_per_request_kwh,
    }
}

fn scenario_readable(m: &ScenarioMetrics) -> ScenarioReadable {
    ScenarioReadable {
        total_energy: fmt_value(m.total_energy_kwh, KWH, ENERGY_DIGITS),
        adjusted_total_energy: fmt_value(m.adjusted_energy_kwh, KWH, ENERGY_DIGITS),
        per_request_uwh: fmt_per_request_uwh(m.per_request_kwh),
        adjusted_per_request_uwh: fmt_per_request_uwh(m.adjusted_per_request_kwh),
    }
}

/// Structured summary: input paths, unrounded values, readable strings, and
/// output paths.
pub fn build_document(
    config: &Config,
    measurements: &MeasurementSet,
    c: &Comparison,
) -> ComparisonDocument {
    let d = &c.difference;

    ComparisonDocument {
        inputs: InputPaths {
            baseline_json: path_string(&measurements.baseline_path),
            scenario_a: NamedPath {
                label: config.scenario_a.label.clone(),
                path: path_string(&measurements.scenario_a_path),
            },
            scenario_b: NamedPath {
                label: config.scenario_b.label.clone(),
                path: path_string(&measurements.scenario_b_path),
            },
        },
        values: ComparisonValues {
            baseline_energy_kwh: c.baseline_energy_kwh,
            baseline_duration_seconds: c.baseline_duration_seconds,
            baseline_rate_kwh_per_second: c.idle_rate.map(|r| r.kwh_per_second()),
            scenario_a: scenario_values(&config.scenario_a.label, &c.scenario_a),
            scenario_b: scenario_values(&config.scenario_b.label, &c.scenario_b),
            difference: DifferenceValues {
                order: config.difference_order(),
                total_energy_kwh: d.total_energy_kwh,
                adjusted_energy_kwh: d.adjusted_energy_kwh,
                per_request_kwh: d.per_request_kwh,
                adjusted_per_request_kwh: d.adjusted_per_request_kwh,
            },
        },
        readable: ReadableValues {
            baseline_energy: fmt_value(c.baseline_energy_kwh, KWH, ENERGY_DIGITS),
            scenario_a: scenario_readable(&c.scenario_a),
            scenario_b: scenario_readable(&c.scenario_b),
            difference: DifferenceReadable {
                total_energy: fmt_value(d.total_energy_kwh, KWH, ENERGY_DIGITS),
                adjusted_total_energy: fmt_value(d.adjusted_energy_kwh, KWH, ENERGY_DIGITS),
                per_request_uwh: fmt_per_request_uwh(d.per_request_kwh),
                adjusted_per_request_uwh: fmt_per_request_uwh(d.adjusted_per_request_kwh),
            },
        },
        outputs: OutputPaths {
            csv: path_string(&config.csv_path()),
            json: path_string(&config.json_path()),
        },
    }
}

// ---------------------------------------------------------------------------
// Console digest
// ---------------------------------------------------------------------------

/// Short line-oriented digest of the baseline, both scenarios, and the key
/// differences.
pub fn render_console(config: &Config, c: &Comparison) -> String {
    let energy = |v| fmt_energy_kwh(v, ENERGY_DIGITS);
    let (a, b, d) = (&c.scenario_a, &c.scenario_b, &c.difference);
    let (la, lb) = (&config.scenario_a.label, &config.scenario_b.label);
    let width = ["Baseline", la.as_str(), lb.as_str()]
        .iter()
        .map(|l| l.len() + 1)
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(8);
    lines.push("[compare] Energy comparison:".to_string());
    lines.push(format!(
        "  {:<width$} {} over {}s",
        "Baseline:",
        energy(c.baseline_energy_kwh),
        fmt_seconds(c.baseline_duration_seconds),
        width = width,
    ));
    for (label, m) in [(la, a), (lb, b)] {
        lines.push(format!(
            "  {:<width$} {} (adjusted: {})",
            format!("{}:", label),
            energy(m.total_energy_kwh),
            energy(m.adjusted_energy_kwh),
            width = width,
        ));
    }
    lines.push(format!(
        "  Diff ({}): total={}, adjusted={}",
        config.difference_order(),
        energy(d.total_energy_kwh),
        energy(d.adjusted_energy_kwh),
    ));
    lines.push(format!(
        "  Per-request adjusted: {}={}, {}={}",
        la,
        fmt_per_request_uwh(a.adjusted_per_request_kwh),
        lb,
        fmt_per_request_uwh(b.adjusted_per_request_kwh),
    ));
    lines.push(format!(
        "[compare] Written {} and {}",
        config.csv_path().display(),
        config.json_path().display()
    ));
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| CompareError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the CSV table and then the JSON summary, overwriting both.
///
/// Both are rendered in memory first. If writing the JSON fails, the CSV from
/// this run is left in place and the error is returned.
pub fn write_outputs(
    config: &Config,
    measurements: &MeasurementSet,
    c: &Comparison,
) -> Result<Outputs> {
    let csv_bytes = render_csv(&render_table(config, c))?;
    let document = build_document(config, measurements, c);
    let json = serde_json::to_string_pretty(&document).map_err(CompareError::Json)?;

    let dir = config.results_dir();
    std::fs::create_dir_all(dir).map_err(|source| CompareError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let outputs = Outputs {
        csv: config.csv_path(),
        json: config.json_path(),
    };
    write_file(&outputs.csv, &csv_bytes)?;
    write_file(&outputs.json, json.as_bytes())?;

    tracing::info!(
        csv = %outputs.csv.display(),
        json = %outputs.json.display(),
        "comparison written"
    );
    Ok(outputs)
}
