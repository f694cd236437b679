//! Encoding tag and rendering parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Barcode symbology an entry is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarcodeFormat {
    /// Code 128, the only supported symbology.
    #[default]
    #[serde(rename = "CODE128")]
    Code128,
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code128 => f.write_str("CODE128"),
        }
    }
}

/// Presentation parameters handed to whatever draws the symbol.
///
/// The core never reads anything back from the renderer; these values only
/// travel outward alongside an entry's `id` and `label`. The text sheet
/// preview reports the dimensions in its header and honors `display_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of a single bar module, in pixels.
    pub module_width: u32,
    /// Bar height, in pixels.
    pub height: u32,
    /// Whether the digits are printed beneath the bars.
    pub display_value: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { module_width: 2, height: 60, display_value: true }
    }
}
