use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{InvoiceStore, StorageBackend};

/// Delete the entire invoice history and the sequence counter. A reset
/// tool, deliberately kept off the normal save/share path.
pub fn run<B: StorageBackend>(store: &InvoiceStore<B>, skip_confirm: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !skip_confirm {
        result.add_message(CmdMessage::warning(
            "This deletes all invoices and resets the counter. Re-run with --yes to confirm.",
        ));
        return Ok(result);
    }

    store.clear_all()?;
    result.add_message(CmdMessage::success("All invoice data cleared."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::{Currency, InvoiceDraft, PaymentMethod};
    use crate::store::memory::MemoryBackend;

    fn seed(store: &InvoiceStore<MemoryBackend>) {
        let draft = InvoiceDraft::new(
            "2024-05-01".into(),
            "Jane".into(),
            "Colombo".into(),
            "Kandy".into(),
            None,
            "150".into(),
            Currency::Usd,
            PaymentMethod::Cash,
            None,
        );
        create::run(store, draft).unwrap();
    }

    #[test]
    fn test_purge_without_confirm_is_noop() {
        let store = InvoiceStore::new(MemoryBackend::new());
        seed(&store);
        run(&store, false).unwrap();
        assert_eq!(store.read_all().len(), 1);
    }

    #[test]
    fn test_purge_with_confirm_clears_everything() {
        let store = InvoiceStore::new(MemoryBackend::new());
        seed(&store);
        run(&store, true).unwrap();
        assert!(store.read_all().is_empty());
        assert!(store.peek_next_number().ends_with("-001"));
    }
}
