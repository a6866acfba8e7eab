//! # API Facade
//!
//! Single entry point for every invoicing operation, regardless of the UI
//! driving it. The facade dispatches to the command layer and returns
//! structured [`CmdResult`] values; it performs no I/O of its own and
//! never writes to stdout or stderr.
//!
//! `TourbillApi<B: StorageBackend>` is generic over the storage backend:
//! production wires in `FileBackend`, tests use `MemoryBackend`.

use crate::commands;
use crate::config::IssuerConfig;
use crate::error::Result;
use crate::export::{PdfEngine, ShareSink};
use crate::model::InvoiceDraft;
use crate::store::{InvoiceStore, StorageBackend};
use std::path::Path;

pub struct TourbillApi<B: StorageBackend> {
    store: InvoiceStore<B>,
    issuer: IssuerConfig,
}

impl<B: StorageBackend> TourbillApi<B> {
    pub fn new(backend: B, issuer: IssuerConfig) -> Self {
        Self {
            store: InvoiceStore::new(backend),
            issuer,
        }
    }

    /// Validate and persist a draft; the invoice number is assigned
    /// atomically by the store as part of the save.
    pub fn save_invoice(&self, draft: InvoiceDraft) -> Result<commands::CmdResult> {
        commands::create::run(&self.store, draft)
    }

    /// Saved invoices, newest first.
    pub fn history(&self) -> Result<commands::CmdResult> {
        commands::history::run(&self.store)
    }

    /// Provisional preview of the next invoice number.
    pub fn preview_number(&self) -> Result<commands::CmdResult> {
        commands::preview::run(&self.store)
    }

    /// HTML document for a saved invoice.
    pub fn render_invoice(&self, invoice_number: &str) -> Result<commands::CmdResult> {
        commands::render::run(&self.store, &self.issuer, invoice_number)
    }

    /// PDF export + share hand-off for a saved invoice.
    pub fn export_invoice<E: PdfEngine, S: ShareSink>(
        &self,
        engine: &E,
        sink: &S,
        invoice_number: &str,
        out_dir: &Path,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, &self.issuer, engine, sink, invoice_number, out_dir)
    }

    /// Wipe all invoices and the counter. Guarded by `skip_confirm`.
    pub fn purge(&self, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::purge::run(&self.store, skip_confirm)
    }

    pub fn issuer(&self) -> &IssuerConfig {
        &self.issuer
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
