//! Palette extraction from arbitrary text containing hex color codes

use crate::color::table::ColorTable;
use crate::io::error::{Result, WithPath};
use std::path::Path;
use tracing::debug;

const HEX_DIGITS: usize = 6;

/// Collect every `#?RRGGBB` token in `text`, left to right
///
/// Matches never overlap: scanning resumes after the end of each match.
/// Tokens found without a leading `#` are returned with one prefixed.
pub fn extract_hex_codes(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut codes = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let has_hash = bytes.get(i) == Some(&b'#');
        let start = if has_hash { i + 1 } else { i };

        match bytes.get(start..start + HEX_DIGITS) {
            Some(run) if run.iter().all(u8::is_ascii_hexdigit) => {
                // Every byte in `run` is ASCII, so this cannot fail
                if let Ok(digits) = std::str::from_utf8(run) {
                    codes.push(format!("#{digits}"));
                }
                i = start + HEX_DIGITS;
            }
            _ => i += 1,
        }
    }

    codes
}

/// Read a text file and build a color table from the codes it contains
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - No color codes are found
pub fn extract_colors(path: &Path) -> Result<ColorTable> {
    let text = std::fs::read_to_string(path).with_path(path)?;
    let codes = extract_hex_codes(&text);
    debug!(path = %path.display(), count = codes.len(), "extracted palette");
    ColorTable::from_hex(&codes)
}
