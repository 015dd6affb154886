//! Revenue trend, distributions and period comparison for the analytics tab.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::common::{round_cents, UnknownVariant};
use crate::domain::{Transaction, TransactionStatus};

/// Look-back window selected on the analytics tab.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "all")]
    AllTime,
}

impl TimeRange {
    /// Length of the window in days; `None` for the unbounded range.
    pub fn days(&self) -> Option<i64> {
        match self {
            TimeRange::Last7Days => Some(7),
            TimeRange::Last30Days => Some(30),
            TimeRange::Last90Days => Some(90),
            TimeRange::AllTime => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
            TimeRange::Last90Days => "90d",
            TimeRange::AllTime => "all",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "7d" => Ok(TimeRange::Last7Days),
            "30d" => Ok(TimeRange::Last30Days),
            "90d" => Ok(TimeRange::Last90Days),
            "all" => Ok(TimeRange::AllTime),
            _ => Err(UnknownVariant::new("time range", value)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRevenue {
    /// Short month label such as `Jan 2025`.
    pub month: String,
    pub year: i32,
    pub month_number: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodShare {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCount {
    pub status: TransactionStatus,
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SummaryStats {
    pub total_revenue: f64,
    pub avg_transaction: f64,
    /// Percentage of filtered transactions that completed.
    pub success_rate: f64,
    /// Percent change of revenue against the preceding window of equal length.
    pub revenue_change: f64,
    pub total_transactions: usize,
}

/// Chart-ready aggregates for one time range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsReport {
    pub range: TimeRange,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub payment_methods: Vec<MethodShare>,
    pub status_distribution: Vec<StatusCount>,
    pub stats: SummaryStats,
}

pub struct AnalyticsService;

impl AnalyticsService {
    /// Builds every aggregate for `range` ending at `now`. Deterministic for fixed inputs.
    pub fn report(
        transactions: &[Transaction],
        range: TimeRange,
        now: DateTime<Utc>,
    ) -> AnalyticsReport {
        let cutoff = Self::cutoff(range, now);
        let filtered: Vec<&Transaction> = transactions
            .iter()
            .filter(|txn| cutoff.map_or(true, |cutoff| start_of_day(txn.date) >= cutoff))
            .collect();

        let status_distribution = Self::status_distribution(&filtered);
        let completed: Vec<&Transaction> = filtered
            .iter()
            .copied()
            .filter(|txn| txn.is_completed())
            .collect();

        let total_revenue = revenue(&completed);
        let avg_transaction = ratio(total_revenue, completed.len() as f64);
        let success_rate = ratio(completed.len() as f64, filtered.len() as f64) * 100.0;
        let previous_revenue = Self::previous_revenue(transactions, range, cutoff);
        let revenue_change = ratio(total_revenue - previous_revenue, previous_revenue) * 100.0;

        let report = AnalyticsReport {
            range,
            monthly_revenue: Self::monthly_revenue(&completed),
            payment_methods: Self::payment_methods(&completed),
            status_distribution,
            stats: SummaryStats {
                total_revenue,
                avg_transaction,
                success_rate,
                revenue_change,
                total_transactions: filtered.len(),
            },
        };
        debug!(
            range = %range,
            total_transactions = report.stats.total_transactions,
            total_revenue = report.stats.total_revenue,
            "analytics report"
        );
        report
    }

    /// Earliest instant included in `range`; `None` means unbounded.
    pub fn cutoff(range: TimeRange, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        range.days().map(|days| now - Duration::days(days))
    }

    fn previous_revenue(
        transactions: &[Transaction],
        range: TimeRange,
        cutoff: Option<DateTime<Utc>>,
    ) -> f64 {
        let (Some(days), Some(cutoff)) = (range.days(), cutoff) else {
            return 0.0;
        };
        let start = cutoff - Duration::days(days);
        let previous: Vec<&Transaction> = transactions
            .iter()
            .filter(|txn| {
                let at = start_of_day(txn.date);
                txn.is_completed() && at >= start && at < cutoff
            })
            .collect();
        revenue(&previous)
    }

    fn monthly_revenue(completed: &[&Transaction]) -> Vec<MonthlyRevenue> {
        let mut months: BTreeMap<(i32, u32), f64> = BTreeMap::new();
        for txn in completed {
            *months
                .entry((txn.date.year(), txn.date.month()))
                .or_insert(0.0) += txn.amount;
        }
        months
            .into_iter()
            .map(|((year, month_number), revenue)| MonthlyRevenue {
                month: month_label(year, month_number),
                year,
                month_number,
                revenue,
            })
            .collect()
    }

    fn payment_methods(completed: &[&Transaction]) -> Vec<MethodShare> {
        let mut shares: Vec<MethodShare> = Vec::new();
        for txn in completed {
            match shares.iter_mut().find(|share| share.name == txn.method) {
                Some(share) => share.value += txn.amount,
                None => shares.push(MethodShare {
                    name: txn.method.clone(),
                    value: txn.amount,
                }),
            }
        }
        for share in &mut shares {
            share.value = round_cents(share.value);
        }
        shares
    }

    fn status_distribution(filtered: &[&Transaction]) -> Vec<StatusCount> {
        TransactionStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                name: status.label().to_string(),
                value: filtered.iter().filter(|txn| txn.status == *status).count(),
            })
            .collect()
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn revenue(transactions: &[&Transaction]) -> f64 {
    transactions.iter().map(|txn| txn.amount).sum()
}

/// Division that yields 0 instead of NaN or infinity.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    let value = numerator / denominator;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{year}-{month:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        start_of_day(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    fn txn(id: &str, day: (i32, u32, u32), amount: f64, status: TransactionStatus) -> Transaction {
        Transaction::new(
            id,
            NaiveDate::from_ymd_opt(day.0, day.1, day.2).unwrap(),
            "payout",
            amount,
            status,
            "PayPal",
        )
    }

    #[test]
    fn summary_counts_only_completed_revenue() {
        let txns = vec![
            txn("A", (2025, 1, 18), 100.0, TransactionStatus::Completed),
            txn("B", (2025, 1, 18), 50.0, TransactionStatus::Pending),
        ];
        let report = AnalyticsService::report(&txns, TimeRange::Last7Days, at(2025, 1, 20));
        assert_eq!(report.stats.total_revenue, 100.0);
        assert_eq!(report.stats.avg_transaction, 100.0);
        assert_eq!(report.stats.success_rate, 50.0);
        assert_eq!(report.stats.total_transactions, 2);
    }

    #[test]
    fn no_completed_transactions_yields_zeroes() {
        let txns = vec![txn("A", (2025, 1, 18), 50.0, TransactionStatus::Failed)];
        let report = AnalyticsService::report(&txns, TimeRange::Last7Days, at(2025, 1, 20));
        assert_eq!(report.stats.avg_transaction, 0.0);
        assert_eq!(report.stats.success_rate, 0.0);
        assert_eq!(report.stats.revenue_change, 0.0);

        let empty = AnalyticsService::report(&[], TimeRange::AllTime, at(2025, 1, 20));
        assert_eq!(empty.stats, SummaryStats::default());
        assert!(empty.monthly_revenue.is_empty());
    }

    #[test]
    fn cutoff_is_inclusive() {
        let txns = vec![
            txn("IN", (2025, 1, 13), 10.0, TransactionStatus::Completed),
            txn("OUT", (2025, 1, 12), 10.0, TransactionStatus::Completed),
        ];
        let report = AnalyticsService::report(&txns, TimeRange::Last7Days, at(2025, 1, 20));
        assert_eq!(report.stats.total_transactions, 1);
    }

    #[test]
    fn revenue_change_compares_previous_window() {
        let txns = vec![
            txn("NOW", (2025, 1, 18), 150.0, TransactionStatus::Completed),
            txn("PREV", (2025, 1, 8), 100.0, TransactionStatus::Completed),
            txn("PREV-PENDING", (2025, 1, 9), 900.0, TransactionStatus::Pending),
            txn("TOO-OLD", (2025, 1, 5), 1000.0, TransactionStatus::Completed),
        ];
        let report = AnalyticsService::report(&txns, TimeRange::Last7Days, at(2025, 1, 20));
        assert_eq!(report.stats.revenue_change, 50.0);
    }

    #[test]
    fn all_time_never_reports_change() {
        let txns = vec![txn("A", (2020, 1, 1), 10.0, TransactionStatus::Completed)];
        let report = AnalyticsService::report(&txns, TimeRange::AllTime, at(2025, 1, 20));
        assert_eq!(report.stats.total_revenue, 10.0);
        assert_eq!(report.stats.revenue_change, 0.0);
    }

    #[test]
    fn monthly_revenue_is_chronological() {
        let txns = vec![
            txn("A", (2025, 1, 5), 10.0, TransactionStatus::Completed),
            txn("B", (2024, 12, 5), 20.0, TransactionStatus::Completed),
            txn("C", (2024, 12, 6), 5.0, TransactionStatus::Completed),
            txn("D", (2024, 11, 6), 99.0, TransactionStatus::Failed),
        ];
        let report = AnalyticsService::report(&txns, TimeRange::AllTime, at(2025, 1, 20));
        let labels: Vec<(&str, f64)> = report
            .monthly_revenue
            .iter()
            .map(|m| (m.month.as_str(), m.revenue))
            .collect();
        assert_eq!(labels, vec![("Dec 2024", 25.0), ("Jan 2025", 10.0)]);
    }

    #[test]
    fn method_shares_keep_first_seen_order_and_round() {
        let mut a = txn("A", (2025, 1, 5), 10.005, TransactionStatus::Completed);
        a.method = "Card".into();
        let b = txn("B", (2025, 1, 6), 20.0, TransactionStatus::Completed);
        let mut c = txn("C", (2025, 1, 7), 0.111, TransactionStatus::Completed);
        c.method = "Card".into();
        let report = AnalyticsService::report(&[a, b, c], TimeRange::AllTime, at(2025, 1, 20));
        let names: Vec<&str> = report
            .payment_methods
            .iter()
            .map(|share| share.name.as_str())
            .collect();
        assert_eq!(names, vec!["Card", "PayPal"]);
        assert_eq!(report.payment_methods[0].value, 10.12);
    }

    #[test]
    fn status_distribution_lists_every_status() {
        let txns = vec![txn("A", (2025, 1, 18), 1.0, TransactionStatus::Pending)];
        let report = AnalyticsService::report(&txns, TimeRange::Last30Days, at(2025, 1, 20));
        let counts: Vec<(&str, usize)> = report
            .status_distribution
            .iter()
            .map(|entry| (entry.name.as_str(), entry.value))
            .collect();
        assert_eq!(
            counts,
            vec![("Completed", 0), ("Pending", 1), ("Failed", 0)]
        );
    }

    #[test]
    fn time_range_parses_labels() {
        assert_eq!("90d".parse::<TimeRange>().unwrap(), TimeRange::Last90Days);
        assert_eq!(TimeRange::default(), TimeRange::Last30Days);
        assert!("1y".parse::<TimeRange>().is_err());
        let json = serde_json::to_string(&TimeRange::AllTime).unwrap();
        assert_eq!(json, "\"all\"");
    }
}
