use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use faturas_core::{DomainError, DomainResult, InvoiceId};
use faturas_suppliers::SupplierRegistry;

use crate::invoice::{Invoice, InvoiceDraft};
use crate::sla::classify;

/// How a save decides "this is the same logical invoice".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertIdentity {
    /// New submission: match on (supplier, period) unless exempt.
    ByPeriod,
    /// Explicit edit target: replace this record in place.
    Edit(InvoiceId),
}

/// What to do when a non-exempt supplier already has an invoice in the
/// submitted period. Variants of the original dashboards disagree;
/// `Overwrite` is the default, `Reject` reproduces the warn-and-block flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Overwrite,
    Reject,
}

/// What an upsert did to the record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// Appended as a new record.
    Inserted(InvoiceId),
    /// Replaced the explicit edit target.
    Replaced(InvoiceId),
    /// Overwrote the existing (supplier, period) match.
    Overwrote(InvoiceId),
}

impl UpsertOutcome {
    pub fn id(&self) -> InvoiceId {
        match self {
            UpsertOutcome::Inserted(id)
            | UpsertOutcome::Replaced(id)
            | UpsertOutcome::Overwrote(id) => *id,
        }
    }
}

/// The invoice ledger: owns the record set and every mutation applied to it.
///
/// Constructed at session start and passed explicitly into each command
/// handler; all operations are local and synchronous, and the whole record
/// set is handed to the persistence collaborator after each mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    records: Vec<Invoice>,
    #[serde(default)]
    policy: DuplicatePolicy,
}

impl Ledger {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            records: Vec::new(),
            policy,
        }
    }

    /// Rebuild from whatever the store loaded.
    pub fn from_records(records: Vec<Invoice>, policy: DuplicatePolicy) -> Self {
        Self { records, policy }
    }

    pub fn records(&self) -> &[Invoice] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn get(&self, id: InvoiceId) -> Option<&Invoice> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Save a submitted field set.
    ///
    /// With an explicit edit target the addressed record is replaced in
    /// place, keeping its id and position (record count never changes).
    /// Otherwise the identity policy applies: a (supplier, period) match for
    /// a non-exempt supplier is overwritten or rejected per
    /// [`DuplicatePolicy`]; exempt suppliers and unmatched drafts append.
    pub fn upsert(
        &mut self,
        draft: InvoiceDraft,
        identity: UpsertIdentity,
        registry: &SupplierRegistry,
    ) -> DomainResult<UpsertOutcome> {
        match identity {
            UpsertIdentity::Edit(id) => {
                let slot = self
                    .records
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or(DomainError::NotFound)?;
                *slot = draft.into_invoice(id)?;
                Ok(UpsertOutcome::Replaced(id))
            }
            UpsertIdentity::ByPeriod => {
                // Validate first so a rejected draft never half-applies.
                let candidate = draft.into_invoice(InvoiceId::new())?;

                let same_slot = self.records.iter().position(|r| {
                    r.period == candidate.period
                        && r.supplier.eq_ignore_ascii_case(&candidate.supplier)
                });

                match same_slot {
                    Some(idx) if !registry.is_duplicate_exempt(&candidate.supplier) => {
                        match self.policy {
                            DuplicatePolicy::Reject => Err(DomainError::conflict(format!(
                                "supplier '{}' already has an invoice in {}",
                                candidate.supplier, candidate.period
                            ))),
                            DuplicatePolicy::Overwrite => {
                                // Replace, not merge; the id stays stable.
                                let kept = self.records[idx].id;
                                self.records[idx] = Invoice {
                                    id: kept,
                                    ..candidate
                                };
                                Ok(UpsertOutcome::Overwrote(kept))
                            }
                        }
                    }
                    _ => {
                        let id = candidate.id;
                        self.records.push(candidate);
                        Ok(UpsertOutcome::Inserted(id))
                    }
                }
            }
        }
    }

    /// Remove the record with the given key; unknown keys are a no-op.
    pub fn delete(&mut self, id: InvoiceId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// Records ordered for table rendering: urgency bucket first, then due
    /// date (records without one last), then insertion order.
    pub fn sorted_for_display(&self, today: NaiveDate) -> Vec<&Invoice> {
        let mut out: Vec<(usize, &Invoice)> = self.records.iter().enumerate().collect();
        out.sort_by_key(|(idx, r)| {
            (
                classify(r.status, r.due_date, today),
                r.due_date.is_none(),
                r.due_date,
                *idx,
            )
        });
        out.into_iter().map(|(_, r)| r).collect()
    }

    /// At-a-glance supplier view: the record with the latest competency per
    /// supplier, insertion order breaking ties. Output keeps the order in
    /// which suppliers first appear in the ledger.
    pub fn latest_per_supplier(&self) -> Vec<&Invoice> {
        let mut order: Vec<String> = Vec::new();
        let mut best: std::collections::HashMap<String, &Invoice> =
            std::collections::HashMap::new();

        for record in &self.records {
            let key = record.supplier.to_uppercase();
            let replace = match best.get(&key) {
                None => {
                    order.push(key.clone());
                    true
                }
                // Strictly later periods only: equal periods keep the
                // earlier insertion, which makes ties deterministic.
                Some(current) => record.period > current.period,
            };
            if replace {
                best.insert(key, record);
            }
        }

        order.into_iter().map(|key| best[&key]).collect()
    }
}
