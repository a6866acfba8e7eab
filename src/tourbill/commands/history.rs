use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{InvoiceStore, StorageBackend};

/// List saved invoices, most recently saved first. A corrupt stored list
/// degrades to an empty history with a warning, never a hard failure.
pub fn run<B: StorageBackend>(store: &InvoiceStore<B>) -> Result<CmdResult> {
    let (invoices, degraded) = store.read_all_with_health();

    let mut result = CmdResult::default().with_invoices(invoices);
    if degraded {
        result.add_message(CmdMessage::warning(
            "Stored history could not be read; showing an empty list.",
        ));
    } else if result.invoices.is_empty() {
        result.add_message(CmdMessage::info("No invoices yet."));
    }
    Ok(result)
}
