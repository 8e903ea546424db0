//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for table rows.
pub static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("valid row selector"));

/// Selector for data cells (header cells are not ingredient data).
pub static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("valid cell selector"));

/// Selector for `<h1>` tags.
pub static H1_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("valid h1 selector"));

/// Selector for `<h2>` tags.
pub static H2_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2").expect("valid h2 selector"));

/// Selector for `<div>` tags.
pub static DIV_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div").expect("valid div selector"));
