use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::core::pagination::Page;
use crate::core::services::payout_service::PayoutRequest;
use crate::core::services::{
    AnalyticsReport, AnalyticsService, InvoiceService, PayoutService, ServiceError,
    ServiceResult, TimeRange, TransactionService, TransactionView,
};
use crate::core::time::Clock;
use crate::domain::{
    Invoice, InvoiceDraft, InvoiceStatus, PayoutMethod, PayoutMethodKind, StatusFilter,
    Transaction,
};
use crate::seed;
use crate::storage::{InMemoryRepository, Repository};
use crate::validation::forms::PaymentMethodForm;

/// Couples the stateless services with the repositories that hold each collection.
///
/// Every write goes through [`Repository::modify`], so the read and the
/// replacement of a collection happen under one lock.
pub struct DashboardManager {
    config: Config,
    clock: Arc<dyn Clock>,
    transactions: Arc<dyn Repository<Transaction>>,
    invoices: Arc<dyn Repository<Invoice>>,
    payout_methods: Arc<dyn Repository<PayoutMethod>>,
}

impl DashboardManager {
    pub fn new(
        config: Config,
        clock: Arc<dyn Clock>,
        transactions: Arc<dyn Repository<Transaction>>,
        invoices: Arc<dyn Repository<Invoice>>,
        payout_methods: Arc<dyn Repository<PayoutMethod>>,
    ) -> Self {
        Self {
            config,
            clock,
            transactions,
            invoices,
            payout_methods,
        }
    }

    /// In-memory dashboard preloaded with the sample collections.
    pub fn with_seed_data(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            config,
            clock,
            Arc::new(InMemoryRepository::new(seed::transactions())),
            Arc::new(InMemoryRepository::new(seed::invoices())),
            Arc::new(InMemoryRepository::new(seed::payout_methods())),
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transaction_page(&self, view: &TransactionView) -> ServiceResult<Page<Transaction>> {
        let transactions = self.transactions.list()?;
        Ok(TransactionService::query(
            &transactions,
            view,
            self.config.page_size,
        ))
    }

    pub fn analytics(&self, range: Option<TimeRange>) -> ServiceResult<AnalyticsReport> {
        let transactions = self.transactions.list()?;
        let range = range.unwrap_or(self.config.default_time_range);
        Ok(AnalyticsService::report(
            &transactions,
            range,
            self.clock.now(),
        ))
    }

    pub fn invoices(
        &self,
        search: &str,
        status: StatusFilter<InvoiceStatus>,
    ) -> ServiceResult<Vec<Invoice>> {
        let invoices = self.invoices.list()?;
        Ok(InvoiceService::filter(&invoices, search, status)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Form defaults, using the configured tax rate and payment terms.
    pub fn new_invoice_draft(&self) -> InvoiceDraft {
        let mut draft = InvoiceService::default_draft(self.clock.as_ref(), self.config.due_in_days);
        draft.tax_rate = Some(self.config.default_tax_rate);
        draft
    }

    pub fn create_invoice(&self, draft: &InvoiceDraft) -> ServiceResult<Invoice> {
        let invoice = InvoiceService::create(draft, self.clock.as_ref())?;
        self.invoices
            .modify(&mut |current| InvoiceService::prepend(current, invoice.clone()))?;
        Ok(invoice)
    }

    pub fn duplicate_invoice(&self, id: Uuid) -> ServiceResult<Invoice> {
        let source = self.invoice(id)?;
        let copy = InvoiceService::duplicate(&source, self.clock.as_ref());
        self.invoices
            .modify(&mut |current| InvoiceService::prepend(current, copy.clone()))?;
        info!(source = %source.invoice_number, copy = %copy.invoice_number, "invoice duplicated");
        Ok(copy)
    }

    /// Applies the transition to the stored invoice under the repository's write lock.
    pub fn update_invoice_status(&self, id: Uuid, status: InvoiceStatus) -> ServiceResult<Invoice> {
        let mut outcome: ServiceResult<Invoice> =
            Err(ServiceError::NotFound(format!("Invoice {id}")));
        self.invoices.modify(&mut |current| {
            let Some(invoice) = current.iter().find(|inv| inv.id == id) else {
                return current.to_vec();
            };
            let next = InvoiceService::transition(invoice, status).and_then(|updated| {
                InvoiceService::replace(current, updated.clone()).map(|next| (updated, next))
            });
            match next {
                Ok((updated, next)) => {
                    outcome = Ok(updated);
                    next
                }
                Err(err) => {
                    outcome = Err(err);
                    current.to_vec()
                }
            }
        })?;
        outcome
    }

    fn invoice(&self, id: Uuid) -> ServiceResult<Invoice> {
        self.invoices
            .get(&id)?
            .ok_or_else(|| ServiceError::NotFound(format!("Invoice {id}")))
    }

    pub fn payout_methods(&self) -> ServiceResult<Vec<PayoutMethod>> {
        Ok(self.payout_methods.list()?)
    }

    /// Returns the method as stored, which is the default only when the registry was empty.
    pub fn add_payout_method(&self, form: &PaymentMethodForm) -> ServiceResult<PayoutMethod> {
        let method = PayoutService::method_from_form(form)?;
        let mut added = method.clone();
        self.payout_methods.modify(&mut |current| {
            let next = PayoutService::add(current, method.clone());
            if let Some(stored) = next.last() {
                added = stored.clone();
            }
            next
        })?;
        Ok(added)
    }

    pub fn set_default_payout_method(&self, id: Uuid) -> ServiceResult<Vec<PayoutMethod>> {
        Ok(self
            .payout_methods
            .modify(&mut |current| PayoutService::set_default(current, id))?)
    }

    pub fn remove_payout_method(&self, id: Uuid) -> ServiceResult<Vec<PayoutMethod>> {
        Ok(self
            .payout_methods
            .modify(&mut |current| PayoutService::remove(current, id))?)
    }

    pub fn request_payout(
        &self,
        amount: &str,
        method: Option<PayoutMethodKind>,
    ) -> ServiceResult<PayoutRequest> {
        PayoutService::validate_request(amount, method, self.config.available_balance)
    }
}
