//! Price normalization for textual catalog prices.

/// Decimal-zero suffixes the catalog service appends to whole prices.
const ZERO_SUFFIXES: [&str; 2] = [".00", ".0"];

/// Converts a textual catalog price into the smallest currency unit.
///
/// Known decimal-zero suffixes are stripped before parsing. Anything that
/// still fails to parse, or parses negative, resolves to `0` so that a single
/// malformed price never drops the item from the catalog.
pub fn parse_price(raw: &str) -> i64 {
    let mut text = raw.trim();
    for suffix in ZERO_SUFFIXES {
        if let Some(stripped) = text.strip_suffix(suffix) {
            text = stripped;
            break;
        }
    }

    match text.parse::<i64>() {
        Ok(value) if value >= 0 => value,
        _ => 0,
    }
}
