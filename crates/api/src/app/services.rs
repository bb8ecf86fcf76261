//! Application services: the ledger, its store and the auth gate wired
//! together behind one handle shared by every route.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use thiserror::Error;

use faturas_auth::{CredentialTable, SessionStore};
use faturas_core::{DomainError, InvoiceId};
use faturas_ledger::{
    summarize, DuplicatePolicy, Invoice, InvoiceDraft, Ledger, LedgerFilter, Summary,
    UpsertIdentity, UpsertOutcome,
};
use faturas_store::{LedgerStore, StoreError};
use faturas_suppliers::{Supplier, SupplierRegistry};

/// Failure of a service call: a domain rule, the storage medium, or the
/// process itself (poisoned lock).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

pub struct AppServices {
    ledger: RwLock<Ledger>,
    registry: RwLock<SupplierRegistry>,
    store: Box<dyn LedgerStore>,
    credentials: CredentialTable,
    sessions: Arc<SessionStore>,
}

impl AppServices {
    /// Wire the services: load whatever the store holds and seed the
    /// default supplier list.
    pub fn new(
        store: Box<dyn LedgerStore>,
        policy: DuplicatePolicy,
        credentials: CredentialTable,
    ) -> Self {
        let records = store.load();
        tracing::info!(records = records.len(), "ledger loaded");

        Self {
            ledger: RwLock::new(Ledger::from_records(records, policy)),
            registry: RwLock::new(SupplierRegistry::with_defaults()),
            store,
            credentials,
            sessions: Arc::new(SessionStore::new()),
        }
    }

    pub fn sessions(&self) -> Arc<SessionStore> {
        Arc::clone(&self.sessions)
    }

    /// Whether the credential gate is configured at all.
    pub fn auth_disabled(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn login(&self, username: &str, password: &str) -> Result<String, ServiceError> {
        let principal = self.credentials.verify(username, password)?;
        tracing::info!(username = %principal.username, "session opened");
        Ok(self.sessions.issue(principal))
    }

    /// Apply one mutation to the ledger and persist the whole record set.
    ///
    /// The mutation runs on a copy; the in-memory state only advances once
    /// the store accepted the replacement, so a failed write leaves both
    /// sides on the previous record set.
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Ledger, &SupplierRegistry) -> Result<T, DomainError>,
    ) -> Result<T, ServiceError> {
        let registry = self
            .registry
            .read()
            .map_err(|_| ServiceError::internal("registry lock poisoned"))?;
        let mut guard = self
            .ledger
            .write()
            .map_err(|_| ServiceError::internal("ledger lock poisoned"))?;

        let mut next = guard.clone();
        let out = f(&mut next, &registry)?;
        self.store.replace_all(next.records())?;
        *guard = next;
        Ok(out)
    }

    pub fn submit_invoice(&self, draft: InvoiceDraft) -> Result<UpsertOutcome, ServiceError> {
        self.mutate(|ledger, registry| ledger.upsert(draft, UpsertIdentity::ByPeriod, registry))
    }

    pub fn edit_invoice(
        &self,
        id: InvoiceId,
        draft: InvoiceDraft,
    ) -> Result<UpsertOutcome, ServiceError> {
        self.mutate(|ledger, registry| ledger.upsert(draft, UpsertIdentity::Edit(id), registry))
    }

    /// Delete by key; unknown keys report `deleted: false`, not an error.
    pub fn delete_invoice(&self, id: InvoiceId) -> Result<bool, ServiceError> {
        self.mutate(|ledger, _| Ok(ledger.delete(id)))
    }

    /// Current record set, display-ordered and filtered.
    pub fn list_invoices(
        &self,
        filter: &LedgerFilter,
        today: NaiveDate,
    ) -> Result<Vec<Invoice>, ServiceError> {
        let guard = self
            .ledger
            .read()
            .map_err(|_| ServiceError::internal("ledger lock poisoned"))?;
        Ok(guard
            .sorted_for_display(today)
            .into_iter()
            .filter(|r| filter.matches(r, today))
            .cloned()
            .collect())
    }

    pub fn summary(&self, filter: &LedgerFilter, today: NaiveDate) -> Result<Summary, ServiceError> {
        let guard = self
            .ledger
            .read()
            .map_err(|_| ServiceError::internal("ledger lock poisoned"))?;
        Ok(summarize(guard.records(), filter, today))
    }

    pub fn latest_per_supplier(&self) -> Result<Vec<Invoice>, ServiceError> {
        let guard = self
            .ledger
            .read()
            .map_err(|_| ServiceError::internal("ledger lock poisoned"))?;
        Ok(guard.latest_per_supplier().into_iter().cloned().collect())
    }

    pub fn list_suppliers(&self) -> Result<Vec<Supplier>, ServiceError> {
        let guard = self
            .registry
            .read()
            .map_err(|_| ServiceError::internal("registry lock poisoned"))?;
        Ok(guard.sorted().into_iter().cloned().collect())
    }

    pub fn register_supplier(&self, supplier: Supplier) -> Result<(), ServiceError> {
        let mut guard = self
            .registry
            .write()
            .map_err(|_| ServiceError::internal("registry lock poisoned"))?;
        guard.register(supplier)?;
        Ok(())
    }
}
