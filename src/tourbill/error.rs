use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourbillError {
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Api error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TourbillError>;
