//! # Storage Layer
//!
//! Persistence for invoices is a small key-value surface: two JSON
//! documents behind the [`StorageBackend`] trait.
//!
//! ## Design Rationale
//!
//! The backend is abstracted behind a trait to:
//! - Enable **testing** with `MemoryBackend` (no filesystem needed)
//! - Keep the numbering/dedup logic **decoupled** from where bytes land
//! - Make failure injection possible for the write-error paths
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one JSON file per key under
//!   the app data directory
//! - [`memory::MemoryBackend`]: in-memory storage for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── invoices.json    # JSON array of invoices, newest first
//! ├── sequence.json    # { "year": 2024, "count": 7 }
//! └── config.json      # issuer details (see config.rs)
//! ```
//!
//! ## Consistency
//!
//! [`InvoiceStore`] wraps the backend in a `Mutex` and performs the whole
//! "load list, dedup, assign next number, prepend, persist list, commit
//! counter" sequence inside one critical section. Computing the number and
//! committing it as two independent read-modify-write cycles would let
//! interleaved saves collide on or skip a number; holding the lock across
//! the pair rules that out.
//!
//! Reads fail open: a missing or unparseable document degrades to "no
//! history" / "counter starts at 1" instead of erroring. Writes propagate
//! errors to the caller, which must not treat the record as saved.

use crate::error::{Result, TourbillError};
use crate::model::{Invoice, InvoiceDraft, SequenceState};
use crate::sequence;
use chrono::{Datelike, Local};
use std::sync::Mutex;

pub mod fs;
pub mod memory;

/// Key for the invoice list document.
pub const INVOICES_KEY: &str = "invoices.json";
/// Key for the year-scoped sequence counter document.
pub const SEQUENCE_KEY: &str = "sequence.json";

/// Abstract key-value persistence used by [`InvoiceStore`].
///
/// Implementations store opaque strings; all JSON encoding happens in the
/// store itself.
pub trait StorageBackend {
    /// Fetch the raw document for a key, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write (create or replace) the document for a key.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the document for a key. Deleting an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Durable, append-only invoice collection plus the sequence counter that
/// stamps each saved invoice with its `HK-<year>-NNN` number.
pub struct InvoiceStore<B: StorageBackend> {
    backend: Mutex<B>,
}

impl<B: StorageBackend> InvoiceStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Mutex::new(backend),
        }
    }

    /// All saved invoices, most recently saved first.
    ///
    /// Never errors: an empty, missing or corrupt list reads as empty.
    pub fn read_all(&self) -> Vec<Invoice> {
        self.read_all_with_health().0
    }

    /// Like [`read_all`](Self::read_all), but also reports whether a stored
    /// document was present yet unreadable, so callers can warn the user
    /// that history was degraded rather than genuinely empty.
    pub fn read_all_with_health(&self) -> (Vec<Invoice>, bool) {
        let backend = match self.backend.lock() {
            Ok(guard) => guard,
            Err(_) => return (Vec::new(), true),
        };
        Self::load_list(&*backend)
    }

    /// Provisional preview of the number the next save would take.
    ///
    /// This is a read-only estimate. The binding assignment happens inside
    /// [`append`](Self::append); a save that races this preview may be
    /// stamped with a later number. Never errors: on any storage failure
    /// the preview degrades to `HK-<year>-001`.
    pub fn peek_next_number(&self) -> String {
        let year = Local::now().year();
        let state = match self.backend.lock() {
            Ok(backend) => Self::load_sequence(&*backend),
            Err(_) => None,
        };
        let seq = sequence::next_in_year(state.as_ref(), year);
        sequence::format_number(year, seq)
    }

    /// Persist a draft, assigning its invoice number atomically.
    ///
    /// If an invoice with the draft's `id` is already stored, the call is
    /// an idempotent no-op: the existing record is returned, nothing is
    /// rewritten and the counter does not advance. This makes a double-tap
    /// on "save" harmless.
    ///
    /// On a write failure the error surfaces to the caller and the draft
    /// must not be considered saved: a failed counter commit rolls the
    /// list back to its pre-append document, so an `Err` never leaves the
    /// record durably stored.
    pub fn append(&self, draft: InvoiceDraft) -> Result<Invoice> {
        let mut backend = self
            .backend
            .lock()
            .map_err(|_| TourbillError::Store("storage lock poisoned".to_string()))?;

        let prior_doc = match backend.get(INVOICES_KEY) {
            Ok(doc) => doc,
            Err(_) => None,
        };
        let mut invoices: Vec<Invoice> = prior_doc
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default();
        if let Some(existing) = invoices.iter().find(|inv| inv.id == draft.id) {
            return Ok(existing.clone());
        }

        let year = Local::now().year();
        let state = Self::load_sequence(&*backend);
        let seq = sequence::next_in_year(state.as_ref(), year);
        let invoice = draft.into_invoice(sequence::format_number(year, seq));

        invoices.insert(0, invoice.clone());
        let list_doc = serde_json::to_string_pretty(&invoices)?;
        backend.set(INVOICES_KEY, &list_doc)?;

        // List first, counter second: if the list write fails the counter
        // has not moved and no number is burned. If the counter write
        // fails instead, restore the prior list before surfacing the
        // error, otherwise the "failed" record would stay stored and the
        // next save would reuse its number.
        let committed = SequenceState { year, count: seq };
        let seq_doc = serde_json::to_string(&committed)?;
        if let Err(e) = backend.set(SEQUENCE_KEY, &seq_doc) {
            let _ = match &prior_doc {
                Some(doc) => backend.set(INVOICES_KEY, doc),
                None => backend.remove(INVOICES_KEY),
            };
            return Err(e);
        }

        Ok(invoice)
    }

    /// Delete both the invoice list and the sequence state. A full reset,
    /// not part of the normal save/share flow.
    pub fn clear_all(&self) -> Result<()> {
        let mut backend = self
            .backend
            .lock()
            .map_err(|_| TourbillError::Store("storage lock poisoned".to_string()))?;
        backend.remove(INVOICES_KEY)?;
        backend.remove(SEQUENCE_KEY)?;
        Ok(())
    }

    fn load_list(backend: &B) -> (Vec<Invoice>, bool) {
        match backend.get(INVOICES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(invoices) => (invoices, false),
                Err(_) => (Vec::new(), true),
            },
            Ok(None) => (Vec::new(), false),
            Err(_) => (Vec::new(), true),
        }
    }

    fn load_sequence(backend: &B) -> Option<SequenceState> {
        match backend.get(SEQUENCE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::fixtures::FlakyBackend;
    use super::memory::MemoryBackend;
    use super::*;
    use crate::model::{Currency, PaymentMethod};

    fn draft(name: &str, distance: Option<&str>) -> InvoiceDraft {
        InvoiceDraft::new(
            "2024-05-01".into(),
            name.into(),
            "Colombo".into(),
            "Galle".into(),
            distance.map(|s| s.to_string()),
            "200".into(),
            Currency::Usd,
            PaymentMethod::Cash,
            None,
        )
    }

    fn current_year() -> i32 {
        Local::now().year()
    }

    #[test]
    fn test_read_all_empty_store() {
        let store = InvoiceStore::new(MemoryBackend::new());
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_peek_on_empty_store() {
        let store = InvoiceStore::new(MemoryBackend::new());
        let expected = format!("HK-{}-001", current_year());
        assert_eq!(store.peek_next_number(), expected);
    }

    #[test]
    fn test_append_assigns_sequential_numbers() {
        let store = InvoiceStore::new(MemoryBackend::new());
        let year = current_year();

        let first = store.append(draft("A", None)).unwrap();
        let second = store.append(draft("B", None)).unwrap();
        let third = store.append(draft("C", Some("120"))).unwrap();

        assert_eq!(first.invoice_number, format!("HK-{}-001", year));
        assert_eq!(second.invoice_number, format!("HK-{}-002", year));
        assert_eq!(third.invoice_number, format!("HK-{}-003", year));
    }

    #[test]
    fn test_read_all_is_newest_first() {
        let store = InvoiceStore::new(MemoryBackend::new());
        store.append(draft("A", None)).unwrap();
        store.append(draft("B", None)).unwrap();
        store.append(draft("C", None)).unwrap();

        let all = store.read_all();
        let names: Vec<&str> = all.iter().map(|i| i.tourist_name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_double_append_same_id_is_noop() {
        let store = InvoiceStore::new(MemoryBackend::new());
        let d = draft("A", None);

        let first = store.append(d.clone()).unwrap();
        let second = store.append(d).unwrap();

        assert_eq!(first.invoice_number, second.invoice_number);
        assert_eq!(store.read_all().len(), 1);
        // Counter did not advance on the duplicate
        let expected = format!("HK-{}-002", current_year());
        assert_eq!(store.peek_next_number(), expected);
    }

    #[test]
    fn test_peek_does_not_persist() {
        let store = InvoiceStore::new(MemoryBackend::new());
        let year = current_year();
        store.peek_next_number();
        store.peek_next_number();
        let saved = store.append(draft("A", None)).unwrap();
        assert_eq!(saved.invoice_number, format!("HK-{}-001", year));
    }

    #[test]
    fn test_year_rollover_resets_sequence() {
        let mut backend = MemoryBackend::new();
        let last_year = current_year() - 1;
        backend
            .set(
                SEQUENCE_KEY,
                &format!("{{\"year\":{},\"count\":41}}", last_year),
            )
            .unwrap();
        backend
            .set(
                INVOICES_KEY,
                &serde_json::to_string(&vec![draft("Old", None)
                    .into_invoice(format!("HK-{}-041", last_year))])
                .unwrap(),
            )
            .unwrap();

        let store = InvoiceStore::new(backend);
        let saved = store.append(draft("New", None)).unwrap();
        assert_eq!(
            saved.invoice_number,
            format!("HK-{}-001", current_year())
        );

        // Prior-year records survive the rollover untouched
        let all = store.read_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].invoice_number, format!("HK-{}-041", last_year));
    }

    #[test]
    fn test_corrupt_list_reads_as_empty() {
        let mut backend = MemoryBackend::new();
        backend.set(INVOICES_KEY, "{ not json").unwrap();
        let store = InvoiceStore::new(backend);

        let (invoices, degraded) = store.read_all_with_health();
        assert!(invoices.is_empty());
        assert!(degraded);
    }

    #[test]
    fn test_corrupt_sequence_falls_back_to_one() {
        let mut backend = MemoryBackend::new();
        backend.set(SEQUENCE_KEY, "garbage").unwrap();
        let store = InvoiceStore::new(backend);
        let expected = format!("HK-{}-001", current_year());
        assert_eq!(store.peek_next_number(), expected);
    }

    #[test]
    fn test_write_failure_surfaces_and_saves_nothing() {
        let (backend, faults) = FlakyBackend::new();
        let store = InvoiceStore::new(backend);
        store.append(draft("Good", None)).unwrap();

        faults.fail_writes(true);
        let err = store.append(draft("Bad", None));
        assert!(err.is_err());

        faults.fail_writes(false);
        let all = store.read_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].tourist_name, "Good");
        // The failed save burned no number
        let next = store.append(draft("Next", None)).unwrap();
        assert_eq!(
            next.invoice_number,
            format!("HK-{}-002", current_year())
        );
    }

    #[test]
    fn test_counter_write_failure_rolls_back_list() {
        let (backend, faults) = FlakyBackend::new();
        let store = InvoiceStore::new(backend);
        store.append(draft("Good", None)).unwrap();

        // List write succeeds, counter commit fails
        faults.fail_writes_to(Some(SEQUENCE_KEY));
        assert!(store.append(draft("Bad", None)).is_err());

        faults.fail_writes_to(None);
        let all = store.read_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].tourist_name, "Good");

        // Next save takes the number the failed one would have had, and
        // takes it exactly once
        let next = store.append(draft("Next", None)).unwrap();
        assert_eq!(
            next.invoice_number,
            format!("HK-{}-002", current_year())
        );
        let all = store.read_all();
        assert_eq!(all.len(), 2);
        assert_ne!(all[0].invoice_number, all[1].invoice_number);
    }

    #[test]
    fn test_counter_write_failure_on_first_save_leaves_store_empty() {
        let (backend, faults) = FlakyBackend::new();
        let store = InvoiceStore::new(backend);

        faults.fail_writes_to(Some(SEQUENCE_KEY));
        assert!(store.append(draft("Bad", None)).is_err());

        faults.fail_writes_to(None);
        assert!(store.read_all().is_empty());
        let expected = format!("HK-{}-001", current_year());
        assert_eq!(store.peek_next_number(), expected);
    }

    #[test]
    fn test_clear_all_removes_list_and_counter() {
        let store = InvoiceStore::new(MemoryBackend::new());
        store.append(draft("A", None)).unwrap();
        store.append(draft("B", None)).unwrap();

        store.clear_all().unwrap();

        assert!(store.read_all().is_empty());
        let expected = format!("HK-{}-001", current_year());
        assert_eq!(store.peek_next_number(), expected);
    }
}
