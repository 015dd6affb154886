//! Search, status filtering and paging for the transaction history.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::pagination::{self, Page};
use crate::domain::{StatusFilter, Transaction, TransactionStatus};

/// View state of the transaction table, owned by the presentation layer.
///
/// Changing the search text or the status filter always returns to the first page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionView {
    pub search: String,
    pub status: StatusFilter<TransactionStatus>,
    pub page: usize,
}

impl Default for TransactionView {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            page: 1,
        }
    }
}

impl TransactionView {
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            status: self.status,
            page: 1,
        }
    }

    pub fn with_status(&self, status: StatusFilter<TransactionStatus>) -> Self {
        Self {
            search: self.search.clone(),
            status,
            page: 1,
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            search: self.search.clone(),
            status: self.status,
            page,
        }
    }
}

/// Stateless queries over a transaction collection.
pub struct TransactionService;

impl TransactionService {
    /// Transactions matching `search` (id or description, case-insensitive) and `status`,
    /// in input order.
    pub fn filter<'a>(
        transactions: &'a [Transaction],
        search: &str,
        status: StatusFilter<TransactionStatus>,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| txn.matches_search(search) && status.matches(&txn.status))
            .collect()
    }

    /// Filters with the view's criteria and slices out the view's page.
    pub fn query(
        transactions: &[Transaction],
        view: &TransactionView,
        page_size: usize,
    ) -> Page<Transaction> {
        let matches = Self::filter(transactions, &view.search, view.status);
        let page = pagination::paginate(&matches, view.page, page_size).map(Transaction::clone);
        debug!(
            search = %view.search,
            requested_page = view.page,
            page = page.page,
            total_items = page.total_items,
            "transaction query"
        );
        page
    }

    /// Looks up a single transaction for the details dialog.
    pub fn find<'a>(transactions: &'a [Transaction], id: &str) -> Option<&'a Transaction> {
        transactions.iter().find(|txn| txn.id == id)
    }
}
