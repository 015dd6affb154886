use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::UnknownVariant;

/// Date layouts offered under language and region preferences.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
    #[serde(rename = "DD MMM YYYY")]
    DayMonthName,
}

impl DateFormat {
    pub const ALL: [DateFormat; 4] = [
        DateFormat::MonthDayYear,
        DateFormat::DayMonthYear,
        DateFormat::Iso,
        DateFormat::DayMonthName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::Iso => "YYYY-MM-DD",
            DateFormat::DayMonthName => "DD MMM YYYY",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::DayMonthYear => "%d/%m/%Y",
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::DayMonthName => "%d %b %Y",
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFormat {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DateFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownVariant::new("date format", value))
    }
}

/// Notification switches on the account settings page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub transaction_alerts: bool,
    pub marketing_emails: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            transaction_alerts: true,
            marketing_emails: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_formats_the_same_day() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let rendered: Vec<String> = DateFormat::ALL.iter().map(|f| f.format(day)).collect();
        assert_eq!(
            rendered,
            vec!["01/05/2025", "05/01/2025", "2025-01-05", "05 Jan 2025"]
        );
    }

    #[test]
    fn date_format_parses_its_label() {
        assert_eq!("yyyy-mm-dd".parse::<DateFormat>(), Ok(DateFormat::Iso));
        assert!("DD.MM.YYYY".parse::<DateFormat>().is_err());
        assert_eq!(
            serde_json::to_string(&DateFormat::DayMonthName).unwrap(),
            "\"DD MMM YYYY\""
        );
    }

    #[test]
    fn marketing_emails_are_opt_in() {
        let prefs: NotificationPreferences = serde_json::from_str(r#"{"push":false}"#).unwrap();
        assert!(!prefs.push);
        assert!(prefs.email);
        assert!(!prefs.marketing_emails);
    }
}
