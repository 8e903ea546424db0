use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, ScrapeError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Domain(pub String);

impl Domain {
    /// Canonicalize host to a stable key: lowercase + IDNA/Punycode
    fn canonicalize(host: &str) -> String {
        let lower = host.trim_end_matches('.').to_ascii_lowercase();
        idna::domain_to_ascii(&lower).unwrap_or(lower)
    }

    pub fn from_url(url: &Url) -> Option<Self> {
        url.host_str()
            .filter(|h| !h.is_empty())
            .map(|h| Domain(Self::canonicalize(h)))
    }

    /// Build a Domain from raw user text (CLI, API callers, etc.)
    pub fn from_raw(host: &str) -> Self {
        Domain(Self::canonicalize(host))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed absolute http(s) URL together with its canonical host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeTarget {
    url: Url,
    host: Domain,
}

impl ScrapeTarget {
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw.trim()).map_err(|_| ScrapeError::InvalidUrl(raw.into()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ScrapeError::InvalidUrl(raw.into()));
        }
        let host = Domain::from_url(&url).ok_or_else(|| ScrapeError::InvalidUrl(raw.into()))?;
        Ok(Self { url, host })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn host(&self) -> &Domain {
        &self.host
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    Vegan,
    Vegetarian,
    Fish,
    Seafood,
    Poultry,
    Beef,
    Pork,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
    Drink,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeTag {
    Quick,
    Easy,
    Healthy,
    Cheap,
    Spicy,
    Sweet,
    Salty,
    Savory,
    Satisfying,
    Filling,
    Light,
    Heavy,
}

/// One ingredient row as it appears on the page, before tokenizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIngredientLine {
    pub amount: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionRecord {
    pub description: String,
    /// Minutes, when the page states one for this step.
    pub time: Option<u32>,
}

/// Scrape result, shaped like the store's `RecipeCreate` payload.
///
/// Identity, owner and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub name: String,
    pub description: String,
    pub diet_type: DietType,
    pub meal_type: MealType,
    #[serde(default)]
    pub tags: BTreeSet<RecipeTag>,
    pub ingredients: Vec<IngredientRecord>,
    pub directions: Vec<DirectionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_canonicalizes_host() {
        let target = ScrapeTarget::parse("https://WWW.Chefkoch.DE/rezepte/123/pfannkuchen.html")
            .unwrap();
        assert_eq!(target.host(), &Domain("www.chefkoch.de".into()));
    }

    #[test]
    fn target_rejects_non_http_schemes_and_garbage() {
        assert!(matches!(
            ScrapeTarget::parse("ftp://chefkoch.de/x"),
            Err(ScrapeError::InvalidUrl(_))
        ));
        assert!(matches!(
            ScrapeTarget::parse("not a url"),
            Err(ScrapeError::InvalidUrl(_))
        ));
    }

    #[test]
    fn record_serializes_with_store_field_names() {
        let record = RecipeRecord {
            name: "Pancakes".into(),
            description: String::new(),
            diet_type: DietType::default(),
            meal_type: MealType::default(),
            tags: BTreeSet::from([RecipeTag::Quick]),
            ingredients: vec![],
            directions: vec![],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["dietType"], "other");
        assert_eq!(json["mealType"], "other");
        assert_eq!(json["tags"], serde_json::json!(["quick"]));
    }
}
