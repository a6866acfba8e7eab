use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Currencies the invoice form accepts. Amounts are display strings; no
/// arithmetic or conversion is ever performed on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "LKR")]
    Lkr,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Lkr => "LKR",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "LKR" => Ok(Currency::Lkr),
            "GBP" => Ok(Currency::Gbp),
            other => Err(format!(
                "Unknown currency '{}' (expected USD, EUR, LKR or GBP)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
        };
        f.write_str(label)
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "bank-transfer" | "bank transfer" | "bank" => Ok(PaymentMethod::BankTransfer),
            other => Err(format!(
                "Unknown payment method '{}' (expected cash, card or bank-transfer)",
                other
            )),
        }
    }
}

/// One billed trip, as persisted. Field names serialize in camelCase so the
/// stored JSON matches the documented shape (`invoiceNumber`, `touristName`, …).
///
/// Invoices are append-only: once saved they are never edited or deleted
/// (short of a full purge), and `invoice_number` is assigned exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub tourist_name: String,
    pub pickup_location: String,
    pub drop_location: String,
    /// Derived display string: `<pickup> → <drop>`.
    pub route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    pub amount: String,
    pub currency: Currency,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp, epoch milliseconds.
    pub created_at: i64,
}

/// Form data for an invoice that has not been saved yet. The invoice number
/// is deliberately absent: it is assigned atomically at save time, not here.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    pub id: String,
    pub date: String,
    pub tourist_name: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub distance: Option<String>,
    pub amount: String,
    pub currency: Currency,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    pub created_at: i64,
}

impl InvoiceDraft {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: String,
        tourist_name: String,
        pickup_location: String,
        drop_location: String,
        distance: Option<String>,
        amount: String,
        currency: Currency,
        payment_method: PaymentMethod,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            tourist_name,
            pickup_location,
            drop_location,
            // Empty-string form input means "not provided"
            distance: distance.filter(|s| !s.trim().is_empty()),
            amount,
            currency,
            payment_method,
            notes: notes.filter(|s| !s.trim().is_empty()),
            created_at: Utc::now().timestamp_millis(),
        }
    }

    pub fn route(&self) -> String {
        format!("{} → {}", self.pickup_location, self.drop_location)
    }

    /// Promote the draft to a persisted record with its assigned number.
    pub fn into_invoice(self, invoice_number: String) -> Invoice {
        let route = self.route();
        Invoice {
            id: self.id,
            invoice_number,
            date: self.date,
            tourist_name: self.tourist_name,
            pickup_location: self.pickup_location,
            drop_location: self.drop_location,
            route,
            distance: self.distance,
            amount: self.amount,
            currency: self.currency,
            payment_method: self.payment_method,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

/// Year-scoped counter behind invoice numbers. A stored state for a
/// different year is treated as count 0; it is overwritten, never archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceState {
    pub year: i32,
    pub count: u32,
}
