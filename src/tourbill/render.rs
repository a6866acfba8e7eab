//! Invoice document rendering.
//!
//! A pure transform: one invoice plus the issuer details in, one
//! self-contained A4 HTML page out. No I/O happens here; turning the
//! markup into PDF bytes is the export layer's job.
//!
//! The layout always carries a decorative "PAID" stamp, whatever the
//! actual payment state. That matches the shipped document and stays
//! until the product says otherwise.

use crate::config::IssuerConfig;
use crate::error::Result;
use crate::model::Invoice;
use once_cell::sync::Lazy;
use tera::{Context, Tera};

// Embed template at compile time to ensure availability
const INVOICE_TEMPLATE: &str = include_str!("../../templates/invoice.tera");

const TEMPLATE_NAME: &str = "invoice.html";

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, INVOICE_TEMPLATE)
        .expect("embedded invoice template must parse");
    tera
});

/// Render the single-page invoice document.
///
/// Deterministic: identical inputs produce byte-identical markup. Optional
/// fields (`distance`, `notes`) are omitted from the output entirely when
/// absent rather than rendered as blanks.
pub fn render(invoice: &Invoice, issuer: &IssuerConfig) -> Result<String> {
    let mut context = Context::new();
    context.insert("invoice", invoice);
    context.insert("issuer", issuer);
    let html = TEMPLATES.render(TEMPLATE_NAME, &context)?;
    Ok(html)
}
