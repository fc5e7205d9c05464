//! Results directory layout and scenario naming.
//!
//! The harness writes its measurement files into one directory and expects the
//! comparison outputs next to them. Only the directory is configurable from the
//! environment; file names follow the harness conventions.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable that overrides [`DEFAULT_RESULTS_DIR`].
pub const RESULTS_DIR_ENV: &str = "RESULTS_DIR";

/// Where the benchmark container mounts the k6 results volume.
pub const DEFAULT_RESULTS_DIR: &str = "/usr/src/app/k6/results";

pub const BASELINE_FILE: &str = "baseline_energy.json";
pub const CSV_FILE: &str = "energy_comparison.csv";
pub const JSON_FILE: &str = "energy_comparison.json";

/// One side of the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSpec {
    /// Column header in the table and label in the console digest.
    pub label: String,
    /// Short label used in the difference header, e.g. `DB` in `DB-Redis`.
    pub short: String,
    /// Measurement file name inside the results directory.
    pub file: String,
}

impl ScenarioSpec {
    pub fn new(label: &str, short: &str, file: &str) -> Self {
        Self {
            label: label.to_string(),
            short: short.to_string(),
            file: file.to_string(),
        }
    }

    /// The k6 `db_only` scenario.
    pub fn db_only() -> Self {
        Self::new("DB-only", "DB", "energy_result_k6_db.json")
    }

    /// The k6 `redis_cache` scenario.
    pub fn redis_only() -> Self {
        Self::new("Redis-only", "Redis", "energy_result_k6_redis.json")
    }
}

/// Paths and scenario naming for one comparison run.
///
/// Differences are always `scenario_a - scenario_b`. Swapping the two flips
/// every sign in the outputs, so keep the order stable across runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub results_dir: PathBuf,
    pub baseline_file: String,
    pub scenario_a: ScenarioSpec,
    pub scenario_b: ScenarioSpec,
    pub csv_file: String,
    pub json_file: String,
}

impl Config {
    /// Default harness layout rooted at `results_dir`.
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            baseline_file: BASELINE_FILE.to_string(),
            scenario_a: ScenarioSpec::db_only(),
            scenario_b: ScenarioSpec::redis_only(),
            csv_file: CSV_FILE.to_string(),
            json_file: JSON_FILE.to_string(),
        }
    }

    /// Default layout, with the directory taken from `RESULTS_DIR` if set.
    pub fn from_env() -> Self {
        Self::from_results_dir_var(std::env::var_os(RESULTS_DIR_ENV))
    }

    /// Default layout for a raw `RESULTS_DIR` value. Unset or empty falls back
    /// to [`DEFAULT_RESULTS_DIR`].
    pub fn from_results_dir_var(value: Option<OsString>) -> Self {
        let dir = value
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR));
        Self::new(dir)
    }

    /// Replace both scenarios. `a` is the minuend of every difference.
    pub fn with_scenarios(mut self, a: ScenarioSpec, b: ScenarioSpec) -> Self {
        self.scenario_a = a;
        self.scenario_b = b;
        self
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    pub fn baseline_path(&self) -> PathBuf {
        self.results_dir.join(&self.baseline_file)
    }

    pub fn scenario_a_path(&self) -> PathBuf {
        self.results_dir.join(&self.scenario_a.file)
    }

    pub fn scenario_b_path(&self) -> PathBuf {
        self.results_dir.join(&self.scenario_b.file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.results_dir.join(&self.csv_file)
    }

    pub fn json_path(&self) -> PathBuf {
        self.results_dir.join(&self.json_file)
    }

    /// Human label for the subtraction order, e.g. `DB-only - Redis-only`.
    pub fn difference_order(&self) -> String {
        format!("{} - {}", self.scenario_a.label, self.scenario_b.label)
    }

    /// Table header for the difference column, e.g. `Difference (DB-Redis)`.
    pub fn difference_header(&self) -> String {
        format!(
            "Difference ({}-{})",
            self.scenario_a.short, self.scenario_b.short
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_DIR)
    }
}
