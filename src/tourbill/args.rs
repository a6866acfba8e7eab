use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tourbill::model::{Currency, PaymentMethod};

#[derive(Parser, Debug)]
#[command(name = "tourbill")]
#[command(about = "Tour-trip invoicing with sequential numbers and PDF export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory (default: the user data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new invoice for one trip
    #[command(alias = "n")]
    New {
        /// Tourist the trip is billed to
        #[arg(long)]
        tourist: String,

        /// Pickup location
        #[arg(long)]
        pickup: String,

        /// Drop-off location
        #[arg(long = "drop")]
        drop_off: String,

        /// Trip date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Distance covered, in km
        #[arg(long)]
        distance: Option<String>,

        /// Amount billed (display string, no arithmetic is done on it)
        #[arg(long)]
        amount: String,

        /// Currency: USD, EUR, LKR or GBP
        #[arg(long, default_value = "USD")]
        currency: Currency,

        /// Payment method: cash, card or bank-transfer
        #[arg(long, default_value = "cash")]
        payment: PaymentMethod,

        /// Free-text notes shown on the document
        #[arg(long)]
        notes: Option<String>,
    },

    /// List saved invoices, newest first
    #[command(alias = "ls")]
    History,

    /// Show the provisional next invoice number
    Preview,

    /// Render a saved invoice as HTML
    Render {
        /// Invoice number, e.g. HK-2024-007
        invoice_number: String,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Export a saved invoice as PDF and open it
    Export {
        /// Invoice number, e.g. HK-2024-007
        invoice_number: String,
    },

    /// Delete all invoices and reset the counter
    Purge {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
