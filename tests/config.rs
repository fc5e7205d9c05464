//! Results directory layout.

use energy_compare::config::{
    BASELINE_FILE, CSV_FILE, DEFAULT_RESULTS_DIR, JSON_FILE, RESULTS_DIR_ENV,
};
use energy_compare::{Config, ScenarioSpec};
use std::ffi::OsString;
use std::path::PathBuf;

#[test]
fn default_layout() {
    let config = Config::new("/tmp/results");
    assert_eq!(config.baseline_path(), PathBuf::from("/tmp/results").join(BASELINE_FILE));
    assert_eq!(
        config.scenario_a_path(),
        PathBuf::from("/tmp/results/energy_result_k6_db.json")
    );
    assert_eq!(
        config.scenario_b_path(),
        PathBuf::from("/tmp/results/energy_result_k6_redis.json")
    );
    assert_eq!(config.csv_path(), PathBuf::from("/tmp/results").join(CSV_FILE));
    assert_eq!(config.json_path(), PathBuf::from("/tmp/results").join(JSON_FILE));
}

#[test]
fn default_directory_is_the_container_volume() {
    assert_eq!(Config::default().results_dir(), PathBuf::from(DEFAULT_RESULTS_DIR).as_path());
}

#[test]
fn difference_is_db_minus_redis() {
    let config = Config::new("/r");
    assert_eq!(config.difference_order(), "DB-only - Redis-only");
    assert_eq!(config.difference_header(), "Difference (DB-Redis)");
}

#[test]
fn swapped_scenarios_swap_the_order() {
    let config = Config::new("/r").with_scenarios(ScenarioSpec::redis_only(), ScenarioSpec::db_only());
    assert_eq!(config.difference_order(), "Redis-only - DB-only");
    assert_eq!(config.scenario_a_path(), PathBuf::from("/r/energy_result_k6_redis.json"));
}

// =============================================================================
// RESULTS_DIR
// =============================================================================

#[test]
fn unset_results_dir_uses_default() {
    let config = Config::from_results_dir_var(None);
    assert_eq!(config.results_dir(), PathBuf::from(DEFAULT_RESULTS_DIR).as_path());
}

#[test]
fn empty_results_dir_uses_default() {
    let config = Config::from_results_dir_var(Some(OsString::new()));
    assert_eq!(config.results_dir(), PathBuf::from(DEFAULT_RESULTS_DIR).as_path());
}

#[test]
fn results_dir_overrides_default() {
    let config = Config::from_results_dir_var(Some(OsString::from("/x")));
    assert_eq!(config.results_dir(), PathBuf::from("/x").as_path());
    assert_eq!(config.csv_path(), PathBuf::from("/x").join(CSV_FILE));
    assert_eq!(config.baseline_path(), PathBuf::from("/x").join(BASELINE_FILE));
}

#[test]
fn env_variable_name() {
    assert_eq!(RESULTS_DIR_ENV, "RESULTS_DIR");
}
