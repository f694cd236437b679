//! `barsheet history`, `show`, `delete`, and `clear-history` commands.

use std::fmt::Write as _;

use crate::model::Entry;
use crate::session::Session;

/// Lists every barcode as a table, marking the current one with `*`.
#[must_use]
pub fn list(session: &Session<'_>) -> String {
    let history = session.history();
    if history.is_empty() {
        return "No barcodes generated yet.\n".to_string();
    }

    let current = session.current().map(|e| e.id.as_str());
    let label_width = history.iter().map(|e| e.label_or_dash().chars().count()).max().unwrap_or(5).max(5);

    let mut out = String::new();
    let _ = writeln!(out, "  {:<9}  {:<label_width$}  CREATED", "ID", "LABEL");
    for entry in history {
        let marker = if current == Some(entry.id.as_str()) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<9}  {:<label_width$}  {}",
            entry.id,
            entry.label_or_dash(),
            entry.created_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }
    out
}

/// Shows one barcode, selecting it first when `id` is given.
///
/// # Errors
///
/// Returns an error when `id` is not in the history.
pub fn show(session: &mut Session<'_>, id: Option<&str>) -> Result<String, String> {
    if let Some(id) = id {
        if !session.select_entry(id) {
            return Err(format!("Barcode {id} not found"));
        }
    }
    let Some(entry) = session.current() else {
        return Ok("No barcodes generated yet.\n".to_string());
    };
    let placements = session.queue().iter().filter(|item| item.id() == entry.id).count();
    Ok(describe(entry, placements))
}

/// Deletes a barcode and every sheet placement of it.
///
/// Placements are removed even when the history no longer knows the id.
///
/// # Errors
///
/// Returns an error when `id` is neither in the history nor on the sheet.
pub fn delete(session: &mut Session<'_>, id: &str) -> Result<String, String> {
    let in_history = session.find(id).is_some();
    let before = session.queue().len();
    session.delete_entry(id);
    let removed = before - session.queue().len();
    if !in_history && removed == 0 {
        return Err(format!("Barcode {id} not found"));
    }
    Ok(format!("Deleted {id} (removed {removed} sheet slot(s))\n"))
}

/// Erases all barcodes and the print sheet.
#[must_use]
pub fn clear(session: &mut Session<'_>) -> String {
    let count = session.history().len();
    session.clear_history();
    format!("Cleared {count} barcode(s)\n")
}

fn describe(entry: &Entry, placements: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Barcode: {}", entry.id);
    let _ = writeln!(out, "Label: {}", entry.label_or_dash());
    let _ = writeln!(out, "Format: {}", entry.format);
    let _ = writeln!(out, "Created: {}", entry.created_at.to_rfc3339());
    let _ = writeln!(out, "On sheet: {placements} slot(s)");
    out
}
