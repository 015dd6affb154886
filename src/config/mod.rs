use chrono::NaiveDate;
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::core::pagination::DEFAULT_PAGE_SIZE;
use crate::core::services::invoice_service::DEFAULT_DUE_IN_DAYS;
use crate::core::services::TimeRange;
use crate::domain::{DateFormat, NotificationPreferences};
use crate::errors::DashboardError;
use crate::seed::AVAILABLE_BALANCE;

const DEFAULT_DIR_NAME: &str = ".payout_core";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "PAYOUT_CORE_HOME";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application-specific data directory, defaulting to `~/.payout_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Dashboard preferences shared by every service caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub timezone: String,
    pub date_format: DateFormat,
    pub page_size: usize,
    pub default_time_range: TimeRange,
    pub default_tax_rate: f64,
    pub due_in_days: i64,
    pub available_balance: f64,
    pub notifications: NotificationPreferences,
    /// Two-factor authentication; off until the user enrolls.
    pub two_factor_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            timezone: "America/New_York".into(),
            date_format: DateFormat::default(),
            page_size: DEFAULT_PAGE_SIZE,
            default_time_range: TimeRange::default(),
            default_tax_rate: 0.0,
            due_in_days: DEFAULT_DUE_IN_DAYS,
            available_balance: AVAILABLE_BALANCE,
            notifications: NotificationPreferences::default(),
            two_factor_enabled: false,
        }
    }
}

impl Config {
    /// Renders `date` with the preferred layout.
    pub fn format_date(&self, date: NaiveDate) -> String {
        self.date_format.format(date)
    }

    /// Rejects values the services cannot work with.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.page_size == 0 {
            return Err(DashboardError::Config("page_size must be at least 1".into()));
        }
        if !(0.0..=100.0).contains(&self.default_tax_rate) {
            return Err(DashboardError::Config(
                "default_tax_rate must be between 0 and 100".into(),
            ));
        }
        if self.due_in_days < 0 {
            return Err(DashboardError::Config(
                "due_in_days cannot be negative".into(),
            ));
        }
        if !self.available_balance.is_finite() || self.available_balance < 0.0 {
            return Err(DashboardError::Config(
                "available_balance must be a non-negative amount".into(),
            ));
        }
        Ok(())
    }
}

/// Loads and stores [`Config`] as JSON under the application data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, DashboardError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, DashboardError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the stored config, falling back to defaults when none was saved yet.
    pub fn load(&self) -> Result<Config, DashboardError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), DashboardError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), DashboardError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
