#![doc(test(attr(deny(warnings))))]

//! Payout Core holds the business rules behind a payout dashboard: transaction
//! search and paging, invoice totals and lifecycle, revenue analytics, the
//! payout method registry, and validation for every settings form.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod seed;
pub mod storage;
pub mod utils;
pub mod validation;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Payout Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
