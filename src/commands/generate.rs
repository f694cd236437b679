//! `barsheet generate` command.

use crate::session::Session;

/// Allocates a new barcode and reports its id.
///
/// # Errors
///
/// Returns the allocation failure message when no unique id could be drawn.
pub fn run(session: &mut Session<'_>, label: Option<&str>) -> Result<String, String> {
    let entry = session.generate(label).map_err(|e| e.to_string())?;
    Ok(match &entry.label {
        Some(label) => format!("Generated {} \"{label}\"\n", entry.id),
        None => format!("Generated {}\n", entry.id),
    })
}
