//! Reads measurement records from the results directory.

use crate::config::Config;
use crate::error::{CompareError, Result};
use crate::schema::{BaselineRecord, ScenarioRecord};

use serde::de::DeserializeOwned;
use std::io;
use std::path::{Path, PathBuf};

/// Read and parse one JSON record.
///
/// Returns `Ok(None)` if the file does not exist. A file that exists but does
/// not parse as `T` is an error, never treated as absent.
pub fn load_record<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "measurement file not found; its metrics will read n/a");
            return Ok(None);
        }
        Err(source) => {
            return Err(CompareError::ReadInput {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let record = serde_json::from_str(&contents).map_err(|source| {
        CompareError::MalformedInput {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!(path = %path.display(), "loaded measurement file");
    Ok(Some(record))
}

/// Everything the comparison reads, plus where it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSet {
    pub baseline: Option<BaselineRecord>,
    pub scenario_a: Option<ScenarioRecord>,
    pub scenario_b: Option<ScenarioRecord>,
    pub baseline_path: PathBuf,
    pub scenario_a_path: PathBuf,
    pub scenario_b_path: PathBuf,
}

impl MeasurementSet {
    /// Load the baseline and both scenarios named by `config`.
    ///
    /// All three files are read before returning, so a malformed file fails
    /// the whole set.
    pub fn load(config: &Config) -> Result<Self> {
        let baseline_path = config.baseline_path();
        let scenario_a_path = config.scenario_a_path();
        let scenario_b_path = config.scenario_b_path();

        Ok(Self {
            baseline: load_record(&baseline_path)?,
            scenario_a: load_record(&scenario_a_path)?,
            scenario_b: load_record(&scenario_b_path)?,
            baseline_path,
            scenario_a_path,
            scenario_b_path,
        })
    }

    /// Build a set from in-memory records, with empty provenance paths.
    pub fn from_records(
        baseline: Option<BaselineRecord>,
        scenario_a: Option<ScenarioRecord>,
        scenario_b: Option<ScenarioRecord>,
    ) -> Self {
        Self {
            baseline,
            scenario_a,
            scenario_b,
            ..Default::default()
        }
    }
}
