//! Entity records.

use serde::{Deserialize, Deserializer, Serialize};

/// Where a schema record was defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Built into the server code.
    Code,
    /// Defined at runtime as data (extensions, custom resources).
    Data,
}

impl Provenance {
    fn parse(s: &str) -> Self {
        match s {
            "code" => Provenance::Code,
            _ => Provenance::Data,
        }
    }
}

impl<'de> Deserialize<'de> for Provenance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Provenance::parse(&s))
    }
}

/// Kind tag of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A primitive value type (`string`, `dateTime`, ...).
    Primitive,
    /// A top-level resource.
    Resource,
    /// Anything else (complex data types, abstract shapes).
    #[serde(other)]
    Other,
}

/// A named resource-shape definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier, also the generated container name.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntityKind>,
    #[serde(default, rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Provenance>,
}

impl Entity {
    /// Create an entity with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            kind: None,
            source: None,
        }
    }

    /// Set the kind tag.
    pub fn kind(mut self, kind: EntityKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the provenance tag.
    pub fn source(mut self, source: Provenance) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns true if this entity is a primitive value type.
    pub fn is_primitive(&self) -> bool {
        self.kind == Some(EntityKind::Primitive)
    }

    /// Returns true if this entity explicitly marks itself as not a resource.
    pub fn is_non_resource(&self) -> bool {
        self.kind == Some(EntityKind::Other)
    }

    /// Returns true if this entity is defined in server code.
    pub fn is_from_code(&self) -> bool {
        self.source == Some(Provenance::Code)
    }
}
