//! Fetched schema collections.

use serde::{Deserialize, Serialize};

use crate::{Attribute, Entity};

/// Raw entity and attribute records as retrieved from a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    pub entities: Vec<Entity>,
    pub attributes: Vec<Attribute>,
}

impl SchemaSnapshot {
    pub fn new(entities: Vec<Entity>, attributes: Vec<Attribute>) -> Self {
        Self {
            entities,
            attributes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.attributes.is_empty()
    }
}

/// An entity paired with every attribute it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityWithAttributes {
    pub entity: Entity,
    pub attributes: Vec<Attribute>,
}

impl EntityWithAttributes {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            attributes: Vec::new(),
        }
    }

    /// Find an attribute of this entity by identifier.
    pub fn attribute(&self, id: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id == id)
    }
}
