//! `barsheet queue` subcommands.

use std::fmt::Write as _;

use crate::error::SessionError;
use crate::session::Session;

/// Places `copies` copies of a barcode on the sheet.
///
/// Stops early when the sheet fills up. That is only an error when not a
/// single copy fit.
///
/// # Errors
///
/// Returns an error when `id` is unknown, nothing is selected, or the sheet
/// is already full.
pub fn add(session: &mut Session<'_>, id: Option<&str>, copies: u32) -> Result<String, String> {
    if let Some(id) = id {
        if !session.select_entry(id) {
            return Err(format!("Barcode {id} not found"));
        }
    }

    let mut out = String::new();
    let mut added = 0;
    for _ in 0..copies {
        match session.enqueue_current() {
            Ok(item) => {
                added += 1;
                let _ = writeln!(out, "Added {} as {}", item.id(), item.print_id);
            }
            Err(e @ SessionError::QueueFull { .. }) if added > 0 => {
                let _ = writeln!(out, "Stopped after {added} of {copies}: {e}");
                break;
            }
            Err(e) => return Err(e.to_string()),
        }
    }
    let _ = writeln!(out, "{} slot(s) free", session.remaining_slots());
    Ok(out)
}

/// Removes one placement.
///
/// # Errors
///
/// Returns an error when no placement has `print_id`.
pub fn remove(session: &mut Session<'_>, print_id: &str) -> Result<String, String> {
    if session.dequeue(print_id) {
        Ok(format!("Removed {print_id}\n"))
    } else {
        Err(format!("No sheet slot with print id {print_id}"))
    }
}

/// Empties the sheet.
#[must_use]
pub fn clear(session: &mut Session<'_>) -> String {
    let count = session.queue().len();
    session.clear_queue();
    format!("Cleared {count} sheet slot(s)\n")
}

/// Lists placements in sheet order.
#[must_use]
pub fn list(session: &Session<'_>) -> String {
    if session.queue().is_empty() {
        return "Print sheet is empty.\n".to_string();
    }
    let mut out = String::new();
    for (slot, item) in session.queue().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {}  {}  {}",
            slot + 1,
            item.id(),
            item.entry.label_or_dash(),
            item.print_id
        );
    }
    out
}
