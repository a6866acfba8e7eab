use crate::error::{Result, TourbillError};
use crate::model::Invoice;
use crate::store::{InvoiceStore, StorageBackend};
use std::path::PathBuf;

pub mod create;
pub mod export;
pub mod history;
pub mod preview;
pub mod purge;
pub mod render;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command: typed payloads plus user-facing
/// messages. The CLI decides how any of this reaches a terminal.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub invoices: Vec<Invoice>,
    pub rendered: Option<String>,
    pub exported: Option<PathBuf>,
    pub preview_number: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_invoices(mut self, invoices: Vec<Invoice>) -> Self {
        self.invoices = invoices;
        self
    }

    pub fn with_rendered(mut self, html: String) -> Self {
        self.rendered = Some(html);
        self
    }

    pub fn with_exported(mut self, path: PathBuf) -> Self {
        self.exported = Some(path);
        self
    }

    pub fn with_preview_number(mut self, number: String) -> Self {
        self.preview_number = Some(number);
        self
    }
}

pub(crate) fn find_invoice<B: StorageBackend>(
    store: &InvoiceStore<B>,
    number: &str,
) -> Result<Invoice> {
    store
        .read_all()
        .into_iter()
        .find(|inv| inv.invoice_number == number)
        .ok_or_else(|| TourbillError::InvoiceNotFound(number.to_string()))
}
