//! The input document model: a raw Draft.js ContentState.
//!
//! This mirrors the JSON produced by `convertToRaw` in the editor: an ordered
//! list of blocks, each carrying offset-based style and entity ranges, plus a
//! shared entity map. Everything here is immutable input for the duration of
//! one export call.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;

/// A full editor document: blocks plus the shared entity map.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentState {
    pub blocks: Vec<Block>,
    #[serde(rename = "entityMap", deserialize_with = "null_as_default")]
    pub entity_map: HashMap<String, Entity>,
}

impl ContentState {
    /// Parse a raw ContentState from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One paragraph-like unit of the document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Block {
    pub key: String,
    pub text: String,
    #[serde(rename = "type")]
    pub block_type: String,
    /// List-nesting level for wrapped block types.
    pub depth: usize,
    #[serde(rename = "inlineStyleRanges", deserialize_with = "null_as_default")]
    pub style_ranges: Vec<StyleRange>,
    #[serde(rename = "entityRanges", deserialize_with = "null_as_default")]
    pub entity_ranges: Vec<EntityRange>,
    /// Free-form payload, consulted by atomic-block matching.
    #[serde(deserialize_with = "null_as_default")]
    pub data: serde_json::Map<String, Value>,
}

impl Default for Block {
    fn default() -> Self {
        Self {
            key: String::new(),
            text: String::new(),
            block_type: "unstyled".to_string(),
            depth: 0,
            style_ranges: Vec::new(),
            entity_ranges: Vec::new(),
            data: serde_json::Map::new(),
        }
    }
}

/// An inline formatting annotation over `[offset, offset + length)`.
/// Style ranges may overlap arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: String,
}

/// A rich annotation over `[offset, offset + length)`, resolved through the
/// entity map. Entity ranges must nest cleanly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: EntityKey,
}

/// An entity-map key, given either as a number or as text.
///
/// Draft.js serializes range keys as integers but map keys as JSON strings;
/// both forms normalize to the same decimal string for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EntityKey {
    Number(i64),
    Text(String),
}

impl EntityKey {
    /// The normalized form used for entity-map lookup.
    pub fn lookup_key(&self) -> Cow<'_, str> {
        match self {
            EntityKey::Number(n) => Cow::Owned(n.to_string()),
            EntityKey::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKey::Number(n) => write!(f, "{n}"),
            EntityKey::Text(s) => f.write_str(s),
        }
    }
}

/// A shared annotation descriptor: the decorator selector plus its payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub mutability: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl Entity {
    pub fn new(entity_type: impl Into<String>, data: Value) -> Self {
        Self {
            entity_type: entity_type.into(),
            mutability: None,
            data,
        }
    }
}

/// Two descriptors are equal iff type and payload are deeply equal;
/// mutability is an editor concern and does not affect output.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.entity_type == other.entity_type && self.data == other.data
    }
}

/// Accept an explicit `null` wherever a missing field would default.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
