use crate::commands::{find_invoice, CmdResult};
use crate::config::IssuerConfig;
use crate::error::Result;
use crate::render;
use crate::store::{InvoiceStore, StorageBackend};

/// Produce the HTML document for a saved invoice, looked up by its number.
pub fn run<B: StorageBackend>(
    store: &InvoiceStore<B>,
    issuer: &IssuerConfig,
    invoice_number: &str,
) -> Result<CmdResult> {
    let invoice = find_invoice(store, invoice_number)?;
    let html = render::render(&invoice, issuer)?;
    Ok(CmdResult::default()
        .with_invoices(vec![invoice])
        .with_rendered(html))
}
