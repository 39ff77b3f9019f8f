//! Parser for Litematica material list exports.
//!
//! Litematica writes its material list as a fixed ASCII table:
//!
//! ```text
//! +--------------------------------------+-------+---------+-----------+
//! | Material List for placement 'House'  |
//! +--------------------------------------+-------+---------+-----------+
//! | Item                                 | Total | Missing | Available |
//! +--------------------------------------+-------+---------+-----------+
//! | Oak Planks                           |   128 |     128 |         0 |
//! +--------------------------------------+-------+---------+-----------+
//! ```
//!
//! The title is only looked for on the second non-blank line. Moving it
//! anywhere else in the report makes the list fall back to the default title.

use std::num::IntErrorKind;

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::error::{ParseError, ParseResult};
use crate::models::{MaterialItem, MaterialList};

lazy_static! {
    static ref TITLE_PATTERN: Regex =
        Regex::new(r"Material List for placement '(.+?)'").unwrap();
}

const HEADER_COLUMNS: [&str; 4] = ["Item", "Total", "Missing", "Available"];

/// Minimum segment count of an item row: leading empty cell, name, total, missing, available
const MIN_ROW_SEGMENTS: usize = 5;

/// Parses a Litematica material list export.
///
/// Blank lines are ignored everywhere. Item ids are derived from the position
/// of the row among the non-blank lines, so they are stable for one text but
/// change if the text is edited.
///
/// # Errors
/// [`ParseError::HeaderNotFound`] if no line names all four columns,
/// [`ParseError::NoItemsFound`] if no row below the header could be read.
pub fn parse_material_list(text: &str) -> ParseResult<MaterialList> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    debug!("Parsing material list with {} non-blank lines", lines.len());

    let title = extract_title(&lines);

    let header_index = lines
        .iter()
        .position(|line| is_header_line(line))
        .ok_or(ParseError::HeaderNotFound)?;
    debug!("Found header on line {header_index}");

    // The line right after the header is the separator; it is skipped without checking
    let mut items = Vec::new();
    for (index, line) in lines.iter().enumerate().skip(header_index + 2) {
        if is_bottom_border(line) {
            debug!("Reached bottom border on line {index}");
            break;
        }

        match parse_row(index, line) {
            Some(item) => items.push(item),
            None => debug!("Skipping line {index}: not enough columns"),
        }
    }

    if items.is_empty() {
        return Err(ParseError::NoItemsFound);
    }

    debug!("Parsed {} items for '{title}'", items.len());
    Ok(MaterialList { title, items })
}

fn extract_title(lines: &[&str]) -> String {
    lines
        .get(1)
        .and_then(|line| TITLE_PATTERN.captures(line))
        .and_then(|captures| captures.get(1))
        .map(|title| title.as_str().to_string())
        .unwrap_or_else(|| MaterialList::DEFAULT_TITLE.to_string())
}

fn is_header_line(line: &str) -> bool {
    HEADER_COLUMNS.iter().all(|column| line.contains(column))
}

fn is_bottom_border(line: &str) -> bool {
    line.starts_with("+--") || line.contains("---+")
}

fn parse_row(index: usize, line: &str) -> Option<MaterialItem> {
    let segments: Vec<&str> = line.split('|').map(str::trim).collect();
    if segments.len() < MIN_ROW_SEGMENTS {
        return None;
    }

    let name = segments[1].to_string();
    let total = parse_count(segments[2]);
    let raw_missing = parse_count(segments[3]);
    let available = parse_count(segments[4]);

    Some(MaterialItem {
        id: format!("item-{index}"),
        name,
        total,
        missing: effective_missing(total, raw_missing, available),
        available,
        collected: total.saturating_sub(raw_missing),
        hidden: false,
    })
}

/// Nets the available stock against whichever baseline is still outstanding.
///
/// A fresh export reports `missing == total` even when the player already
/// holds some of the material, so available stock is taken off the total.
/// Otherwise the report already reflects placed blocks and available stock is
/// taken off the reported missing amount.
pub fn effective_missing(total: u32, raw_missing: u32, available: u32) -> u32 {
    if raw_missing == total {
        total.saturating_sub(available)
    } else {
        raw_missing.saturating_sub(available)
    }
}

/// Reads the leading decimal digits of a cell, defaulting to 0.
///
/// Trailing text after the digits is ignored. Negative numbers and empty
/// cells read as 0; values too large for a count saturate at `u32::MAX`.
pub fn parse_count(cell: &str) -> u32 {
    let digits = cell.strip_prefix('+').unwrap_or(cell);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<u32>() {
        Ok(value) => value,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            warn!("Count '{cell}' is out of range, using {}", u32::MAX);
            u32::MAX
        }
        Err(e) => {
            warn!("Failed to parse count '{cell}', using 0: {e}");
            0
        }
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
