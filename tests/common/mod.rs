#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use payout_core::{
    config::{Config, ConfigManager},
    core::{DashboardManager, FixedClock},
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Day the seeded data is viewed from: the morning after the latest payout.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 21).expect("valid reference date")
}

pub fn fixed_clock() -> FixedClock {
    FixedClock::at_date(reference_date())
}

/// Seeded in-memory dashboard viewed at [`reference_date`].
pub fn seeded_dashboard() -> DashboardManager {
    DashboardManager::with_seed_data(Config::default(), Arc::new(fixed_clock()))
}

/// Config manager rooted in a unique temporary directory.
pub fn temp_config_manager() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
