//! Shared test utilities for staging measurement fixtures.

use std::path::{Path, PathBuf};

use energy_compare::schema::{BaselineRecord, ScenarioRecord};
use energy_compare::Config;
use tempfile::TempDir;

// =============================================================================
// Fixture root path
// =============================================================================

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

// =============================================================================
// Staging
// =============================================================================

/// Copy `data/<name>/` into a fresh temp dir so runs can write outputs there.
pub fn stage_fixture(name: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let src = data_dir().join(name);
    for entry in std::fs::read_dir(&src).expect("failed to list fixture dir") {
        let entry = entry.expect("failed to read fixture entry");
        std::fs::copy(entry.path(), dir.path().join(entry.file_name()))
            .expect("failed to copy fixture file");
    }
    dir
}

pub fn config_for(dir: &Path) -> Config {
    Config::new(dir)
}

pub fn write_file(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("failed to write fixture file");
}

pub fn write_json(dir: &Path, name: &str, value: serde_json::Value) {
    let text = serde_json::to_string_pretty(&value).expect("failed to serialize fixture");
    write_file(dir, name, &text);
}

// =============================================================================
// Records
// =============================================================================

pub fn baseline(energy_kwh: f64, duration_seconds: f64) -> BaselineRecord {
    BaselineRecord {
        energy_kwh: Some(energy_kwh),
        duration_seconds,
    }
}

pub fn scenario(total_energy_kwh: f64, total_requests: u64, duration_seconds: f64) -> ScenarioRecord {
    ScenarioRecord {
        total_energy_kwh: Some(total_energy_kwh),
        total_requests,
        duration_seconds,
    }
}

// =============================================================================
// Helpers
// =============================================================================

pub fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.unwrap_or_else(|| panic!("expected {}, got None", expected));
    assert!(
        (actual - expected).abs() <= 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}

pub fn read_to_string(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}
