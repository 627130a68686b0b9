//! Best-effort parsing of the comma-delimited PLU catalog.
//!
//! The first line is a header and is always skipped. Every other line is split
//! on `,` and trimmed; field 0 is the code, field 1 the description, and any
//! further fields are ignored. Lines that don't yield both are dropped.

use crate::models::ProduceItem;

/// Parse a single data row, returning `None` for short or blank rows.
pub fn parse_line(line: &str) -> Option<ProduceItem> {
    let mut fields = line.split(',').map(str::trim);
    let code = fields.next()?;
    let description = fields.next()?;

    if code.is_empty() || description.is_empty() {
        return None;
    }

    Some(ProduceItem::new(code, description))
}

/// Parse a whole catalog resource, header row first.
pub fn parse_catalog(text: &str) -> Vec<ProduceItem> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter_map(|(index, line)| {
            let item = parse_line(line);
            if item.is_none() && !line.trim().is_empty() {
                tracing::debug!(line = index + 1, "Skipping malformed catalog row");
            }
            item
        })
        .collect()
}
