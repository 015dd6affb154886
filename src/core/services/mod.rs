pub mod activity_service;
pub mod analytics_service;
pub mod api_key_service;
pub mod invoice_service;
pub mod payout_service;
pub mod session_service;
pub mod settings_service;
pub mod transaction_service;

pub use activity_service::ActivityService;
pub use analytics_service::{AnalyticsReport, AnalyticsService, TimeRange};
pub use api_key_service::ApiKeyService;
pub use invoice_service::InvoiceService;
pub use payout_service::PayoutService;
pub use session_service::SessionService;
pub use settings_service::SettingsService;
pub use transaction_service::{TransactionService, TransactionView};

use crate::domain::InvoiceStatus;
use crate::errors::DashboardError;
use crate::validation::ValidationErrors;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Invoice cannot move from {from} to {to}")]
    InvalidTransition {
        from: InvoiceStatus,
        to: InvoiceStatus,
    },
    #[error("{0} not found")]
    NotFound(String),
    #[error("The current session cannot be revoked")]
    CurrentSession,
}

impl ServiceError {
    /// Field errors carried by a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ServiceError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
