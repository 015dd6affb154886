use std::sync::Arc;

use payout_core::{
    config::Config,
    core::{services::TimeRange, DashboardManager},
    errors::DashboardError,
};

mod common;

#[test]
fn saved_preferences_drive_the_dashboard() {
    let manager = common::temp_config_manager();
    let config = Config {
        page_size: 25,
        default_time_range: TimeRange::AllTime,
        default_tax_rate: 8.0,
        ..Config::default()
    };
    manager.save(&config).expect("save");

    let loaded = manager.load().expect("load");
    let dashboard = DashboardManager::with_seed_data(loaded, Arc::new(common::fixed_clock()));

    let page = dashboard
        .transaction_page(&Default::default())
        .expect("page");
    assert_eq!(page.items.len(), 25);
    assert_eq!(page.total_pages, 2);

    let report = dashboard.analytics(None).expect("report");
    assert_eq!(report.range, TimeRange::AllTime);
    assert_eq!(dashboard.new_invoice_draft().tax_rate, Some(8.0));
}

#[test]
fn invalid_values_are_never_written() {
    let manager = common::temp_config_manager();
    let config = Config {
        default_tax_rate: 150.0,
        ..Config::default()
    };
    let err = manager.save(&config).expect_err("tax out of range");
    assert!(matches!(err, DashboardError::Config(_)));
    assert!(!manager.path().exists());
}

#[test]
fn malformed_file_surfaces_serde_error() {
    let manager = common::temp_config_manager();
    std::fs::write(manager.path(), "{ not json").expect("write");
    assert!(matches!(manager.load(), Err(DashboardError::Serde(_))));
}
