//! Quantity/Unit Tokenizer


use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TokenizeError;

/// Leading run of ASCII digits and whitespace. May match the empty string.
static LEADING_QUANTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s]*").expect("valid quantity regex"));

const IMPLICIT_QUANTITY: u32 = 1;

/// Split an amount cell like `"500 g"` into `(500, "g")`.
///
/// Text without leading digits counts as one of whatever it says:
/// `"etwas Salz"` becomes `(1, "etwas Salz")`.
pub fn tokenize(text: &str) -> Result<(u32, String), TokenizeError> {
    let end = LEADING_QUANTITY.find(text).map_or(0, |m| m.end());
    let (run, rest) = text.split_at(end);
    let unit = rest.trim().to_string();

    let run = run.trim();
    if run.is_empty() {
        return Ok((IMPLICIT_QUANTITY, unit));
    }

    let quantity = run.parse::<u32>().map_err(|source| TokenizeError {
        input: text.to_string(),
        source,
    })?;
    Ok((quantity, unit))
}
