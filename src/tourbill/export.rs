//! Export pipeline: rendered markup to a shareable PDF file.
//!
//! Two collaborators are external and sit behind traits: the engine that
//! turns HTML into PDF bytes ([`PdfEngine`]) and the platform hand-off
//! that presents the finished file ([`ShareSink`]). Production wires in
//! [`WkhtmltopdfEngine`] and [`OpenerShare`]; tests inject fakes.
//!
//! The engine drops its output under an arbitrary name. Export then tries
//! to copy it to a human-readable `<invoice-no>_<date>.pdf`; if that copy
//! fails for any reason the original file is shared instead. A failed
//! rename alone must never abort an export.

use crate::config::IssuerConfig;
use crate::error::{Result, TourbillError};
use crate::model::Invoice;
use crate::render;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

pub const PDF_MIME: &str = "application/pdf";

/// Opaque "HTML in, PDF file out" rendering engine.
pub trait PdfEngine {
    /// Convert markup to a PDF somewhere under `work_dir` and return the
    /// path of the produced file. The name is the engine's choice.
    fn html_to_pdf(&self, html: &str, work_dir: &Path) -> Result<PathBuf>;
}

/// Platform sharing primitive: receives a finished file, a MIME type and
/// a dialog title.
pub trait ShareSink {
    fn share(&self, file: &Path, mime: &str, title: &str) -> Result<()>;
}

/// Production engine shelling out to `wkhtmltopdf`.
pub struct WkhtmltopdfEngine;

impl PdfEngine for WkhtmltopdfEngine {
    fn html_to_pdf(&self, html: &str, work_dir: &Path) -> Result<PathBuf> {
        if !work_dir.exists() {
            fs::create_dir_all(work_dir).map_err(TourbillError::Io)?;
        }
        let stem = Uuid::new_v4();
        let html_path = work_dir.join(format!("render-{}.html", stem));
        let pdf_path = work_dir.join(format!("render-{}.pdf", stem));
        fs::write(&html_path, html).map_err(TourbillError::Io)?;

        let status = Command::new("wkhtmltopdf")
            .arg("--quiet")
            .arg(&html_path)
            .arg(&pdf_path)
            .status()
            .map_err(|e| {
                TourbillError::Export(format!("failed to run wkhtmltopdf: {}", e))
            })?;
        // The intermediate markup is scratch either way
        let _ = fs::remove_file(&html_path);

        if !status.success() {
            return Err(TourbillError::Export(format!(
                "wkhtmltopdf exited with {}",
                status
            )));
        }
        Ok(pdf_path)
    }
}

/// Hands the file to the desktop opener, the closest CLI equivalent of a
/// mobile share sheet.
pub struct OpenerShare;

impl ShareSink for OpenerShare {
    fn share(&self, file: &Path, _mime: &str, _title: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        let mut cmd = {
            let mut c = Command::new("open");
            c.arg(file);
            c
        };
        #[cfg(target_os = "windows")]
        let mut cmd = {
            let mut c = Command::new("cmd");
            c.arg("/C").arg("start").arg("").arg(file);
            c
        };
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut cmd = {
            let mut c = Command::new("xdg-open");
            c.arg(file);
            c
        };

        let status = cmd
            .status()
            .map_err(|e| TourbillError::Export(format!("failed to open {:?}: {}", file, e)))?;
        if !status.success() {
            return Err(TourbillError::Export(format!(
                "opener exited with {}",
                status
            )));
        }
        Ok(())
    }
}

/// Render, convert and share one invoice. Returns the path that was
/// actually shared (pretty name, or the engine's original on fallback).
pub fn export<E: PdfEngine, S: ShareSink>(
    engine: &E,
    sink: &S,
    invoice: &Invoice,
    issuer: &IssuerConfig,
    out_dir: &Path,
) -> Result<PathBuf> {
    let html = render::render(invoice, issuer)?;
    let raw = engine.html_to_pdf(&html, out_dir)?;

    let pretty = out_dir.join(pretty_filename(invoice));
    let shared = if raw == pretty {
        raw
    } else {
        match fs::copy(&raw, &pretty) {
            Ok(_) => pretty,
            // Fall back to the engine's own output rather than failing
            Err(_) => raw,
        }
    };

    let title = format!("Share Invoice {}", invoice.invoice_number);
    sink.share(&shared, PDF_MIME, &title)?;
    Ok(shared)
}

/// `<invoice-no>_<date>.pdf`, with anything outside `[A-Za-z0-9-_]` in the
/// number replaced by `-`.
pub fn pretty_filename(invoice: &Invoice) -> String {
    let safe_number: String = invoice
        .invoice_number
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{}_{}.pdf", safe_number, invoice.date)
}
