pub mod dashboard_manager;
pub mod pagination;
pub mod services;
pub mod time;

pub use dashboard_manager::DashboardManager;
pub use time::{Clock, FixedClock, SystemClock};
