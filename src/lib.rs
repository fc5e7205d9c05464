//! Energy comparison of load-test scenarios against an idle baseline.
//!
//! The benchmark harness drops three JSON files into a results directory: an
//! idle baseline and one record per scenario (DB-only and Redis-cached). This
//! crate loads them, subtracts the time-proportional idle draw, derives
//! per-request figures and the A-minus-B differences, and writes a CSV table
//! plus a JSON summary next to the inputs.
//!
//! Everything between [`loader`] and [`report`] is pure arithmetic over the
//! typed records in [`schema`].

pub mod comparison;
pub mod config;
pub mod differential;
pub mod error;
pub mod format;
pub mod loader;
pub mod normalize;
pub mod per_request;
pub mod report;
pub mod schema;

pub use comparison::{Comparison, ScenarioMetrics};
pub use config::{Config, ScenarioSpec};
pub use error::{CompareError, Result};
pub use loader::MeasurementSet;
pub use report::{Outputs, RunSummary};

/// Load, compute, and write every output for the directory in `config`.
///
/// Malformed input aborts before anything is written. See [`report::write_outputs`]
/// for what a write failure leaves behind.
pub fn run(config: &Config) -> Result<RunSummary> {
    let measurements = MeasurementSet::load(config)?;
    let comparison = Comparison::compute(&measurements);
    let outputs = report::write_outputs(config, &measurements, &comparison)?;

    Ok(RunSummary {
        console: report::render_console(config, &comparison),
        comparison,
        outputs,
    })
}
