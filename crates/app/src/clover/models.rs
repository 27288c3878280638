//! Clover wire models
//!
//! Only the fields the catalog needs are decoded; everything else in the
//! payload is ignored.

use serde::{Deserialize, Deserializer};

/// Paged list envelope: `{"elements": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Elements<T> {
    #[serde(default = "Vec::new")]
    pub elements: Vec<T>,
}

/// An expanded relation. Clover nests these in an `elements` envelope, but
/// a bare list is accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Expanded<T> {
    Envelope(Elements<T>),
    List(Vec<T>),
}

impl<T> Expanded<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Envelope(envelope) => envelope.elements,
            Self::List(list) => list,
        }
    }
}

impl<T> Default for Expanded<T> {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CloverCategory {
    #[serde(deserialize_with = "remote_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CloverCategoryRef {
    #[serde(deserialize_with = "remote_id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CloverVariant {
    #[serde(deserialize_with = "remote_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Minor units.
    #[serde(default)]
    pub price: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloverItem {
    #[serde(deserialize_with = "remote_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Minor units. Absent for items priced per variant.
    #[serde(default)]
    pub price: Option<i64>,

    #[serde(default)]
    pub variants: Option<Expanded<CloverVariant>>,

    #[serde(default)]
    pub categories: Option<Expanded<CloverCategoryRef>>,
}

impl CloverItem {
    /// Variants declared on the item; empty when the field is absent.
    #[must_use]
    pub fn variants(&self) -> Vec<CloverVariant> {
        self.variants
            .clone()
            .map(Expanded::into_vec)
            .unwrap_or_default()
    }

    /// Category references declared on the item; empty when absent.
    #[must_use]
    pub fn category_ids(&self) -> Vec<String> {
        self.categories
            .clone()
            .map(Expanded::into_vec)
            .unwrap_or_default()
            .into_iter()
            .map(|category| category.id)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CloverModifier {
    #[serde(deserialize_with = "remote_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub price: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloverModifierGroup {
    #[serde(deserialize_with = "remote_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "minRequired")]
    pub min_required: Option<u32>,

    #[serde(default, rename = "maxAllowed")]
    pub max_allowed: Option<u32>,

    #[serde(default)]
    pub modifiers: Option<Expanded<CloverModifier>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

/// Clover ids are opaque strings, but fixtures and older payloads use
/// integers.
fn remote_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
