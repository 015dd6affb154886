pub mod activity;
pub mod api_key;
pub mod common;
pub mod invoice;
pub mod payout;
pub mod preferences;
pub mod session;
pub mod transaction;

pub use activity::{Activity, ActivityStatus};
pub use api_key::ApiKey;
pub use common::{
    round_cents, Displayable, Identifiable, NamedEntity, StatusFilter, UnknownVariant,
};
pub use invoice::{Invoice, InvoiceDraft, InvoiceLineItem, InvoiceStatus, InvoiceTotals};
pub use payout::{PayoutMethod, PayoutMethodKind};
pub use preferences::{DateFormat, NotificationPreferences};
pub use session::Session;
pub use transaction::{Transaction, TransactionStatus};
