//! Sample collections the dashboard boots with.
//!
//! Payout method, invoice and API key ids are fixed so callers and tests can
//! address seeded entities directly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    Activity, ActivityStatus, ApiKey, Invoice, InvoiceLineItem, InvoiceStatus, InvoiceTotals,
    PayoutMethod, PayoutMethodKind, Session, Transaction, TransactionStatus,
};

/// Balance shown on the summary card and offered for payout requests.
pub const AVAILABLE_BALANCE: f64 = 8450.0;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    timestamp(year, month, day, hour, minute).and_utc()
}

/// Stable id for the `n`-th seeded entity of a kind.
pub fn seed_id(kind: u16, n: u16) -> Uuid {
    Uuid::from_u128(((kind as u128) << 64) | n as u128)
}

const PAYOUT_KIND: u16 = 1;
const INVOICE_KIND: u16 = 2;
const API_KEY_KIND: u16 = 3;

pub fn transactions() -> Vec<Transaction> {
    use TransactionStatus::{Completed, Failed, Pending};
    let rows: [(&str, (i32, u32, u32), &str, f64, TransactionStatus, &str); 30] = [
        ("TXN001", (2025, 1, 20), "Monthly payout - January", 2500.00, Completed, "Bank Transfer"),
        ("TXN002", (2025, 1, 15), "Payout request", 1200.50, Pending, "PayPal"),
        ("TXN003", (2025, 1, 10), "Commission earnings", 850.75, Completed, "Bank Transfer"),
        ("TXN004", (2025, 1, 5), "Affiliate revenue", 1450.00, Completed, "PayPal"),
        ("TXN005", (2024, 12, 28), "Year-end payout", 5000.00, Completed, "Bank Transfer"),
        ("TXN006", (2024, 12, 22), "Holiday bonus payout", 3500.00, Completed, "Card"),
        ("TXN007", (2024, 12, 15), "Mid-month payout", 750.00, Failed, "Card"),
        ("TXN008", (2024, 12, 10), "Service fees refund", 125.50, Completed, "PayPal"),
        ("TXN009", (2024, 12, 1), "Monthly payout - December", 3200.00, Completed, "Bank Transfer"),
        ("TXN010", (2024, 11, 28), "Quarterly bonus", 4200.00, Completed, "Bank Transfer"),
        ("TXN011", (2024, 11, 20), "Referral earnings", 680.25, Completed, "PayPal"),
        ("TXN012", (2024, 11, 15), "Sales commission", 920.00, Pending, "Bank Transfer"),
        ("TXN013", (2024, 11, 10), "Bonus payment", 1500.00, Completed, "PayPal"),
        ("TXN014", (2024, 11, 5), "Consulting fees", 2100.00, Completed, "Bank Transfer"),
        ("TXN015", (2024, 11, 1), "Monthly payout - November", 2800.00, Completed, "Bank Transfer"),
        ("TXN016", (2024, 10, 28), "Freelance project", 3400.00, Completed, "Card"),
        ("TXN017", (2024, 10, 22), "Partnership revenue", 1850.00, Completed, "PayPal"),
        ("TXN018", (2024, 10, 18), "Service contract", 2250.00, Pending, "Bank Transfer"),
        ("TXN019", (2024, 10, 15), "Referral bonus", 450.00, Completed, "PayPal"),
        ("TXN020", (2024, 10, 10), "Marketing commission", 1100.00, Completed, "Card"),
        ("TXN021", (2024, 10, 5), "Performance bonus", 1800.00, Completed, "Bank Transfer"),
        ("TXN022", (2024, 10, 1), "Monthly payout - October", 2650.00, Completed, "Bank Transfer"),
        ("TXN023", (2024, 9, 28), "Consulting services", 2900.00, Completed, "PayPal"),
        ("TXN024", (2024, 9, 22), "Project milestone", 3100.00, Completed, "Bank Transfer"),
        ("TXN025", (2024, 9, 18), "Affiliate earnings", 720.00, Failed, "Card"),
        ("TXN026", (2024, 9, 15), "Sales commission Q3", 4500.00, Completed, "Bank Transfer"),
        ("TXN027", (2024, 9, 10), "Service fees", 890.00, Completed, "PayPal"),
        ("TXN028", (2024, 9, 5), "Contract payment", 2400.00, Pending, "Bank Transfer"),
        ("TXN029", (2024, 9, 1), "Monthly payout - September", 2750.00, Completed, "Bank Transfer"),
        ("TXN030", (2024, 8, 28), "Sponsorship revenue", 5500.00, Completed, "Card"),
    ];
    rows.into_iter()
        .map(|(id, (y, m, d), description, amount, status, method)| {
            Transaction::new(id, date(y, m, d), description, amount, status, method)
        })
        .collect()
}

pub fn payout_methods() -> Vec<PayoutMethod> {
    let rows = [
        (PayoutMethodKind::Bank, "Chase Checking", "••••4532"),
        (PayoutMethodKind::Paypal, "PayPal Account", "user@example.com"),
        (PayoutMethodKind::Card, "Visa Debit", "••••8901"),
        (PayoutMethodKind::Bank, "Bank of America", "••••7623"),
        (PayoutMethodKind::Card, "Mastercard", "••••3456"),
        (PayoutMethodKind::Paypal, "PayPal Business", "business@company.com"),
    ];
    rows.into_iter()
        .enumerate()
        .map(|(idx, (kind, name, details))| PayoutMethod {
            id: seed_id(PAYOUT_KIND, idx as u16 + 1),
            kind,
            name: name.into(),
            details: details.into(),
            is_default: idx == 0,
        })
        .collect()
}

fn seeded_invoice(
    n: u16,
    client: (&str, &str, &str),
    dates: (NaiveDate, NaiveDate),
    status: InvoiceStatus,
    items: Vec<InvoiceLineItem>,
    notes: &str,
    created_at: DateTime<Utc>,
) -> Invoice {
    let totals = InvoiceTotals::compute(&items, 10.0);
    Invoice {
        id: seed_id(INVOICE_KIND, n),
        invoice_number: format!("INV-2025-{n:03}"),
        client_name: client.0.into(),
        client_email: client.1.into(),
        client_address: Some(client.2.into()),
        issue_date: dates.0,
        due_date: dates.1,
        status,
        items,
        subtotal: totals.subtotal,
        tax: totals.tax,
        total: totals.total,
        notes: Some(notes.into()),
        created_at,
    }
}

pub fn invoices() -> Vec<Invoice> {
    vec![
        seeded_invoice(
            1,
            (
                "Acme Corporation",
                "billing@acme.com",
                "123 Business St, New York, NY 10001",
            ),
            (date(2025, 1, 15), date(2025, 2, 15)),
            InvoiceStatus::Paid,
            vec![
                InvoiceLineItem::new("Web Development Services", 40.0, 150.0),
                InvoiceLineItem::new("UI/UX Design", 20.0, 120.0),
            ],
            "Payment received. Thank you!",
            utc(2025, 1, 15, 10, 0),
        ),
        seeded_invoice(
            2,
            (
                "Tech Solutions Inc",
                "finance@techsol.com",
                "456 Innovation Ave, San Francisco, CA 94102",
            ),
            (date(2025, 1, 20), date(2025, 2, 20)),
            InvoiceStatus::Sent,
            vec![
                InvoiceLineItem::new("Consulting Services", 30.0, 200.0),
                InvoiceLineItem::new("System Architecture", 15.0, 250.0),
            ],
            "Payment due within 30 days",
            utc(2025, 1, 20, 14, 30),
        ),
        seeded_invoice(
            3,
            (
                "Digital Marketing Pro",
                "accounts@dmp.com",
                "789 Marketing Blvd, Los Angeles, CA 90001",
            ),
            (date(2025, 1, 10), date(2025, 1, 25)),
            InvoiceStatus::Overdue,
            vec![
                InvoiceLineItem::new("SEO Services", 1.0, 5000.0),
                InvoiceLineItem::new("Content Writing", 50.0, 50.0),
            ],
            "Please remit payment as soon as possible",
            utc(2025, 1, 10, 9, 15),
        ),
    ]
}

pub fn activities() -> Vec<Activity> {
    let rows = [
        ("Password Changed", "Password successfully updated", "192.168.1.1", "New York, US", timestamp(2025, 1, 20, 10, 30), ActivityStatus::Success),
        ("API Key Created", "New API key 'Production Server' created", "192.168.1.1", "New York, US", timestamp(2025, 1, 20, 9, 15), ActivityStatus::Success),
        ("Login Attempt", "Failed login attempt from unrecognized device", "192.168.1.50", "London, UK", timestamp(2025, 1, 19, 15, 45), ActivityStatus::Failed),
        ("Email Updated", "Email address changed to newemail@example.com", "192.168.1.1", "New York, US", timestamp(2025, 1, 18, 14, 20), ActivityStatus::Success),
        ("Session Revoked", "Active session on Chrome/Windows was revoked", "192.168.1.3", "London, UK", timestamp(2025, 1, 17, 11, 0), ActivityStatus::Warning),
        ("Profile Updated", "Personal information updated", "192.168.1.1", "New York, US", timestamp(2025, 1, 16, 16, 10), ActivityStatus::Success),
    ];
    rows.into_iter()
        .enumerate()
        .map(
            |(idx, (action, description, ip_address, location, timestamp, status))| Activity {
                id: (idx + 1).to_string(),
                action: action.into(),
                description: description.into(),
                ip_address: ip_address.into(),
                location: location.into(),
                timestamp,
                status,
            },
        )
        .collect()
}

pub fn api_keys() -> Vec<ApiKey> {
    vec![
        ApiKey {
            id: seed_id(API_KEY_KIND, 1),
            name: "Production API Key".into(),
            key: "pk_live_51Hxxxxxxxxxxxxxxxxxxxxxxxxxxxxx".into(),
            created: date(2024, 1, 15),
            last_used: Some(utc(2025, 1, 20, 8, 0)),
        },
        ApiKey {
            id: seed_id(API_KEY_KIND, 2),
            name: "Development Key".into(),
            key: "pk_test_51Hxxxxxxxxxxxxxxxxxxxxxxxxxxxxx".into(),
            created: date(2024, 1, 10),
            last_used: Some(utc(2025, 1, 13, 8, 0)),
        },
    ]
}

/// Signed-in devices; the first one is the session viewing the dashboard.
pub fn sessions() -> Vec<Session> {
    let rows = [
        ("Chrome on macOS", "New York, US", "192.168.1.1", utc(2025, 1, 21, 0, 0)),
        ("Safari on iPhone", "New York, US", "192.168.1.2", utc(2025, 1, 20, 22, 0)),
        ("Chrome on Windows", "London, UK", "192.168.1.3", utc(2025, 1, 20, 0, 0)),
    ];
    rows.into_iter()
        .enumerate()
        .map(|(idx, (device, location, ip_address, last_active))| Session {
            id: (idx + 1).to_string(),
            device: device.into(),
            location: location.into(),
            ip_address: ip_address.into(),
            last_active,
            is_current: idx == 0,
        })
        .collect()
}
