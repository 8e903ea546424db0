//! Field Extractor
//!
//! Turns located field nodes into clean strings and ordered lists.

mod utils;

use scraper::ElementRef;
use tracing::warn;

use crate::selectors::{CELL_SELECTOR, ROW_SELECTOR};
use crate::tools::clean::split_lines;
use crate::tools::tokenize::tokenize;
use crate::types::{DirectionRecord, IngredientRecord, RawIngredientLine};
use utils::*;

pub use crate::tools::locate::element_text as extract_text;

/// Raw ingredient rows of a table, in document order.
///
/// The first data cell of a row is the amount, the second the name. Rows
/// with fewer than two cells or with an empty name are skipped.
pub fn extract_ingredients(table: ElementRef<'_>) -> Vec<RawIngredientLine> {
    table
        .select(&ROW_SELECTOR)
        .filter_map(|row| {
            let mut cells = row.select(&CELL_SELECTOR);
            let amount = extract_text(&cells.next()?);
            let name = extract_text(&cells.next()?);
            if name.is_empty() {
                return None;
            }
            Some(RawIngredientLine { amount, name })
        })
        .collect()
}

/// Direction steps of a block, in document order.
///
/// `<br>` and block-level children count as line breaks; blank lines are
/// dropped.
pub fn extract_directions(block: ElementRef<'_>) -> Vec<String> {
    let mut text = String::new();
    push_block_text(block, &mut text);
    split_lines(&text)
}

/// Tokenize a raw row into a record. An unreadable amount keeps the row with
/// quantity 1 and the whole amount text as unit.
pub fn to_ingredient(line: RawIngredientLine) -> IngredientRecord {
    let (quantity, unit) = match tokenize(&line.amount) {
        Ok(parts) => parts,
        Err(e) => {
            warn!(ingredient = %line.name, error = %e, "defaulting unreadable quantity");
            (1, line.amount.trim().to_string())
        }
    };
    IngredientRecord {
        name: line.name,
        quantity,
        unit,
        description: String::new(),
    }
}

pub fn ingredients(table: ElementRef<'_>) -> Vec<IngredientRecord> {
    extract_ingredients(table)
        .into_iter()
        .map(to_ingredient)
        .collect()
}

pub fn directions(block: ElementRef<'_>) -> Vec<DirectionRecord> {
    extract_directions(block)
        .into_iter()
        .map(|description| DirectionRecord {
            description,
            time: None,
        })
        .collect()
}
