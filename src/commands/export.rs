//! `barsheet export` command.

use crate::error::SessionError;
use crate::session::Session;

/// Serializes a barcode (default: the current one) as pretty JSON.
///
/// # Errors
///
/// Returns an error when `id` is unknown or nothing has been generated.
pub fn entry(session: &mut Session<'_>, id: Option<&str>) -> Result<String, String> {
    if let Some(id) = id {
        if !session.select_entry(id) {
            return Err(format!("Barcode {id} not found"));
        }
    }
    let current = session.current().ok_or_else(|| SessionError::NoEntry.to_string())?;
    to_json(current)
}

/// Serializes the print sheet, in slot order, as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn queue(session: &Session<'_>) -> Result<String, String> {
    to_json(session.queue())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| format!("Failed to serialize export: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::DEFAULT_RETRY_BUDGET;
    use crate::context::ServiceContext;
    use crate::model::{Entry, QueueSlotItem};

    #[test]
    fn exports_current_entry() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        let generated = session.generate(Some("Asset 1")).unwrap();

        let json = entry(&mut session, None).unwrap();
        let parsed: Entry = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, generated);
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn export_without_entries_fails() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        assert_eq!(entry(&mut session, None).unwrap_err(), "no barcode selected");
    }

    #[test]
    fn exports_queue_in_order() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        session.enqueue_current().unwrap();
        session.enqueue_current().unwrap();

        let json = queue(&session).unwrap();
        let parsed: Vec<QueueSlotItem> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, session.queue());
        assert!(json.contains("\"printId\": \"print-1\""));
    }
}
