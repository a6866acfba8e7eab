use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TourbillError};
use crate::model::InvoiceDraft;
use crate::store::{InvoiceStore, StorageBackend};

/// Save a drafted invoice. Validation happens before any state change: a
/// draft with a missing required field is rejected and nothing partial is
/// ever written. The invoice number is assigned by the store, atomically
/// with the append.
pub fn run<B: StorageBackend>(store: &InvoiceStore<B>, draft: InvoiceDraft) -> Result<CmdResult> {
    validate(&draft)?;

    let invoice = store.append(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Invoice {} saved for {}",
        invoice.invoice_number, invoice.tourist_name
    )));
    result.invoices.push(invoice);
    Ok(result)
}

fn validate(draft: &InvoiceDraft) -> Result<()> {
    let required = [
        ("tourist name", &draft.tourist_name),
        ("pickup location", &draft.pickup_location),
        ("drop location", &draft.drop_location),
        ("amount", &draft.amount),
        ("date", &draft.date),
    ];
    for (label, value) in required {
        if value.trim().is_empty() {
            return Err(TourbillError::Api(format!("Missing required field: {}", label)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Currency, PaymentMethod};
    use crate::store::memory::MemoryBackend;

    fn draft(tourist: &str) -> InvoiceDraft {
        InvoiceDraft::new(
            "2024-05-01".into(),
            tourist.into(),
            "Colombo".into(),
            "Kandy".into(),
            None,
            "150".into(),
            Currency::Usd,
            PaymentMethod::Cash,
            None,
        )
    }

    #[test]
    fn test_create_saves_and_reports_number() {
        let store = InvoiceStore::new(MemoryBackend::new());
        let result = run(&store, draft("Jane Miller")).unwrap();

        assert_eq!(result.invoices.len(), 1);
        assert!(result.invoices[0].invoice_number.starts_with("HK-"));
        assert_eq!(store.read_all().len(), 1);
    }

    #[test]
    fn test_missing_required_field_rejected_before_save() {
        let store = InvoiceStore::new(MemoryBackend::new());
        let err = run(&store, draft("   "));

        assert!(matches!(err, Err(TourbillError::Api(_))));
        assert!(store.read_all().is_empty());
        // Counter untouched by the rejected draft
        let first = run(&store, draft("Jane Miller")).unwrap();
        assert!(first.invoices[0].invoice_number.ends_with("-001"));
    }
}
