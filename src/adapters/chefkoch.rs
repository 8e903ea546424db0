//! chefkoch.de

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::SiteAdapter;
use crate::selectors::{DIV_SELECTOR, H1_SELECTOR, H2_SELECTOR};
use crate::tools::locate::{
    block_after, first_match, first_with_text, heading_with_text, require, Field, FieldNotFound,
    LocatedFields,
};

static HEADER_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article.recipe-header h1").expect("valid title selector"));
static HEADER_TEXT: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("article.recipe-header p.recipe-text").expect("valid description selector")
});
static RECIPE_TEXT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p.recipe-text").expect("valid description selector"));
static HEADER_PARAGRAPH: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article.recipe-header p").expect("valid description selector"));
static INGREDIENTS_TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.ingredients").expect("valid ingredients selector"));

/// Heading that introduces the directions block.
const PREPARATION_HEADING: &str = "Zubereitung";

pub struct ChefkochAdapter;

impl SiteAdapter for ChefkochAdapter {
    fn name(&self) -> &'static str {
        "chefkoch"
    }

    fn hosts(&self) -> &[&'static str] {
        &["chefkoch.de", "www.chefkoch.de"]
    }

    fn locate<'a>(&self, doc: &'a Html) -> Result<LocatedFields<'a>, FieldNotFound> {
        let title = require(
            first_with_text(doc, &[&*HEADER_TITLE, &*H1_SELECTOR]),
            Field::Title,
        )?;
        let description = require(
            first_match(doc, &[&*HEADER_TEXT, &*RECIPE_TEXT, &*HEADER_PARAGRAPH]),
            Field::Description,
        )?;
        let ingredients = require(first_match(doc, &[&*INGREDIENTS_TABLE]), Field::Ingredients)?;
        let directions = require(
            heading_with_text(doc, &H2_SELECTOR, PREPARATION_HEADING)
                .and_then(|heading| block_after(heading, &DIV_SELECTOR)),
            Field::Directions,
        )?;

        Ok(LocatedFields {
            title,
            description,
            ingredients,
            directions,
        })
    }
}
