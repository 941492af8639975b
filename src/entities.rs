//! Entity decorators: pluggable renderers for entity types.

use serde_json::Value;

use crate::content::Entity;
use crate::dom::{Document, NodeId};
use crate::error::{Error, Result};

/// Renders one entity type into a markup element.
///
/// A decorator receives the element currently open and returns the node the
/// entity's contents should be appended into. It may create nothing and hand
/// the parent back (see [`Null`]).
pub trait EntityDecorator {
    fn render(&self, doc: &mut Document, parent: NodeId, entity: &Entity) -> Result<NodeId>;
}

/// Renders `LINK` entities as `<a href="…">`, with an optional fixed class.
#[derive(Debug, Clone, Default)]
pub struct Link {
    class_name: Option<String>,
}

impl Link {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
        }
    }
}

impl EntityDecorator for Link {
    fn render(&self, doc: &mut Document, parent: NodeId, entity: &Entity) -> Result<NodeId> {
        let url = entity
            .data
            .get("url")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MissingEntityData("url".to_string()))?;

        let mut attrs = vec![("href".to_string(), url.to_string())];
        if let Some(class_name) = &self.class_name {
            attrs.push(("class".to_string(), class_name.clone()));
        }
        Ok(doc.append_element(parent, "a", attrs))
    }
}

/// Inert decorator: the entity's contents render directly into the parent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Null;

impl EntityDecorator for Null {
    fn render(&self, _doc: &mut Document, parent: NodeId, _entity: &Entity) -> Result<NodeId> {
        Ok(parent)
    }
}
