//! Live print-slot id source.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Issues a random v4 UUID per sheet placement.
///
/// Placements of the same barcode share its 9-digit id, so removal by slot
/// relies on these values never repeating within a queue.
pub struct LiveIdGenerator;

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}
