use crate::commands::{find_invoice, CmdMessage, CmdResult};
use crate::config::IssuerConfig;
use crate::error::Result;
use crate::export::{self, PdfEngine, ShareSink};
use crate::store::{InvoiceStore, StorageBackend};
use std::path::Path;

/// Export a saved invoice as a PDF and hand it to the share sink.
pub fn run<B: StorageBackend, E: PdfEngine, S: ShareSink>(
    store: &InvoiceStore<B>,
    issuer: &IssuerConfig,
    engine: &E,
    sink: &S,
    invoice_number: &str,
    out_dir: &Path,
) -> Result<CmdResult> {
    let invoice = find_invoice(store, invoice_number)?;
    let shared = export::export(engine, sink, &invoice, issuer, out_dir)?;

    let mut result = CmdResult::default().with_exported(shared.clone());
    result.add_message(CmdMessage::success(format!(
        "Exported {} to {}",
        invoice.invoice_number,
        shared.display()
    )));
    result.invoices.push(invoice);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::TourbillError;
    use crate::model::{Currency, InvoiceDraft, PaymentMethod};
    use crate::store::memory::MemoryBackend;
    use std::fs;
    use std::path::PathBuf;

    struct FakeEngine;
    impl PdfEngine for FakeEngine {
        fn html_to_pdf(&self, html: &str, work_dir: &Path) -> Result<PathBuf> {
            fs::create_dir_all(work_dir)?;
            let path = work_dir.join("tmp-out.pdf");
            fs::write(&path, html.as_bytes())?;
            Ok(path)
        }
    }

    struct NullSink;
    impl ShareSink for NullSink {
        fn share(&self, _file: &Path, _mime: &str, _title: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_export_saved_invoice() {
        let store = InvoiceStore::new(MemoryBackend::new());
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
        let saved = create::run(&store, draft).unwrap().invoices.remove(0);

        let dir = tempfile::tempdir().unwrap();
        let result = run(
            &store,
            &IssuerConfig::default(),
            &FakeEngine,
            &NullSink,
            &saved.invoice_number,
            dir.path(),
        )
        .unwrap();

        let exported = result.exported.unwrap();
        assert!(exported.exists());
        assert!(exported
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(&saved.invoice_number));
    }

    #[test]
    fn test_export_unknown_number_errors() {
        let store = InvoiceStore::new(MemoryBackend::new());
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &store,
            &IssuerConfig::default(),
            &FakeEngine,
            &NullSink,
            "HK-2024-999",
            dir.path(),
        );
        assert!(matches!(err, Err(TourbillError::InvoiceNotFound(_))));
    }
}
