use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{InvoiceStore, StorageBackend};

/// Show the number the next save would take. Provisional by design: the
/// binding number is assigned inside the save itself, so a save that lands
/// in between may shift this.
pub fn run<B: StorageBackend>(store: &InvoiceStore<B>) -> Result<CmdResult> {
    let number = store.peek_next_number();
    let mut result = CmdResult::default().with_preview_number(number.clone());
    result.add_message(CmdMessage::info(format!(
        "Next invoice number (provisional): {}",
        number
    )));
    Ok(result)
}
