//! Entity Stack Machine.
//!
//! Replays start/stop-entity commands against a single nesting stack. A stop
//! command whose descriptor does not match the top of the stack means two
//! entity ranges cross, which the flat range data cannot express as a tree.

use std::collections::HashMap;

use crate::config::DecoratorMap;
use crate::content::{Entity, EntityKey};
use crate::dom::{Document, NodeId};
use crate::error::{Error, Result};
use crate::util::fetch_or_default;

use super::commands::Command;

pub struct EntityState<'a> {
    decorators: &'a DecoratorMap,
    entity_map: &'a HashMap<String, Entity>,
    root: NodeId,
    stack: Vec<(NodeId, &'a Entity)>,
}

impl<'a> EntityState<'a> {
    pub fn new(
        root: NodeId,
        decorators: &'a DecoratorMap,
        entity_map: &'a HashMap<String, Entity>,
    ) -> Self {
        Self {
            decorators,
            entity_map,
            root,
            stack: Vec::new(),
        }
    }

    pub fn apply(&mut self, doc: &mut Document, command: &Command) -> Result<()> {
        match command {
            Command::StartEntity(key) => self.start(doc, key),
            Command::StopEntity(key) => self.stop(key),
            _ => Ok(()),
        }
    }

    /// The element the next text or style segment must be appended into.
    pub fn current_parent(&self) -> NodeId {
        self.stack.last().map_or(self.root, |(element, _)| *element)
    }

    fn start(&mut self, doc: &mut Document, key: &EntityKey) -> Result<()> {
        let entity = self.entity_for(key)?;
        let decorator = self
            .decorators
            .resolve(&entity.entity_type)
            .ok_or_else(|| Error::UnknownEntity(entity.entity_type.clone()))?;
        let element = decorator.render(doc, self.current_parent(), entity)?;
        self.stack.push((element, entity));
        Ok(())
    }

    fn stop(&mut self, key: &EntityKey) -> Result<()> {
        let entity = self.entity_for(key)?;
        let mismatch = match self.stack.last() {
            Some((_, open)) if *open == entity => None,
            Some((_, open)) => Some(describe(open)),
            None => Some("no open entity".to_string()),
        };
        match mismatch {
            None => {
                self.stack.pop();
                Ok(())
            }
            Some(expected) => Err(Error::InvalidEntity {
                expected,
                found: describe(entity),
            }),
        }
    }

    fn entity_for(&self, key: &EntityKey) -> Result<&'a Entity> {
        fetch_or_default(self.entity_map, &key.lookup_key())
            .ok_or_else(|| Error::UnknownEntity(key.to_string()))
    }
}

fn describe(entity: &Entity) -> String {
    format!("{}({})", entity.entity_type, entity.data)
}
