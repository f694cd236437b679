//! `barsheet sheet` command: a text preview of the A4 label sheet.

use std::fmt::Write as _;

use crate::model::{BarcodeFormat, QueueSlotItem, RenderOptions, SHEET_CAPACITY, SHEET_COLUMNS};
use crate::session::Session;

const CELL_WIDTH: usize = 14;

/// Renders the sheet as a grid of `SHEET_COLUMNS` cells per row, filled in
/// queue order, with empty trailing cells.
#[must_use]
pub fn run(session: &Session<'_>) -> String {
    render(&session.sheet_slots(), RenderOptions::default())
}

fn render(slots: &[Option<&QueueSlotItem>], options: RenderOptions) -> String {
    let used = slots.iter().filter(|s| s.is_some()).count();
    let border = format!("+{}\n", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(SHEET_COLUMNS));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "A4 sheet: {used}/{SHEET_CAPACITY} slots used ({}, module {}px, height {}px)",
        BarcodeFormat::default(),
        options.module_width,
        options.height
    );
    out.push_str(&border);
    for row in slots.chunks(SHEET_COLUMNS) {
        let ids = row.iter().map(|slot| match slot {
            Some(item) if options.display_value => item.id().to_string(),
            Some(_) => "|||||||||".to_string(),
            None => String::new(),
        });
        push_row(&mut out, ids);
        let labels = row.iter().copied().map(|slot| {
            slot.and_then(|item| item.entry.label.as_deref())
                .map(|l| truncate(l, CELL_WIDTH - 2))
                .unwrap_or_default()
        });
        push_row(&mut out, labels);
        out.push_str(&border);
    }
    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>) {
    out.push('|');
    for cell in cells {
        let _ = write!(out, " {cell:<width$} |", width = CELL_WIDTH - 2);
    }
    out.push('\n');
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max - 1).collect();
        cut.push('~');
        cut
    }
}
