//! Markup Locator
//!
//! Generic lookups over a parsed document. Site adapters combine these into
//! the four recipe fields; see [`crate::adapters`].


use std::fmt;

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tools::clean::clean;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Ingredients,
    Directions,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Ingredients => "ingredients table",
            Field::Directions => "directions block",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("field not found: {field}")]
pub struct FieldNotFound {
    pub field: Field,
}

impl FieldNotFound {
    pub fn new(field: Field) -> Self {
        Self { field }
    }
}

/// Borrowed handles to the field nodes of one document.
#[derive(Debug, Clone, Copy)]
pub struct LocatedFields<'a> {
    pub title: ElementRef<'a>,
    pub description: ElementRef<'a>,
    pub ingredients: ElementRef<'a>,
    pub directions: ElementRef<'a>,
}

/// First element matched by the first selector that matches anything.
///
/// Selectors are tried in priority order; within one selector the earliest
/// element in document order wins.
pub fn first_match<'a>(doc: &'a Html, selectors: &[&Selector]) -> Option<ElementRef<'a>> {
    selectors.iter().find_map(|sel| doc.select(sel).next())
}

/// Like [`first_match`], but skip elements whose cleaned text is empty.
pub fn first_with_text<'a>(doc: &'a Html, selectors: &[&Selector]) -> Option<ElementRef<'a>> {
    selectors
        .iter()
        .find_map(|sel| doc.select(sel).find(|el| !element_text(el).is_empty()))
}

pub fn require(el: Option<ElementRef<'_>>, field: Field) -> Result<ElementRef<'_>, FieldNotFound> {
    el.ok_or(FieldNotFound::new(field))
}

/// First heading matched by `headings` whose text equals `label`, ignoring
/// case and surrounding whitespace.
pub fn heading_with_text<'a>(
    doc: &'a Html,
    headings: &Selector,
    label: &str,
) -> Option<ElementRef<'a>> {
    doc.select(headings)
        .find(|h| element_text(h).to_lowercase() == label.to_lowercase())
}

/// Content block that follows `heading`: its first following sibling matching
/// `block`. When the heading is wrapped (e.g. in a header div) with no such
/// sibling, the ancestors are tried from the innermost outwards.
pub fn block_after<'a>(heading: ElementRef<'a>, block: &Selector) -> Option<ElementRef<'a>> {
    let mut current = Some(heading);
    while let Some(el) = current {
        let found = el
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| block.matches(sibling));
        if found.is_some() {
            return found;
        }
        current = el.parent().and_then(ElementRef::wrap);
    }
    None
}

/// Cleaned text content of an element.
pub fn element_text(el: &ElementRef<'_>) -> String {
    clean(&el.text().collect::<String>())
}
