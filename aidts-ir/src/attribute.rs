//! Attribute records.

use serde::{Deserialize, Serialize};

use crate::{Provenance, WILDCARD};

/// Reference to another schema record by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

impl TypeRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resource_type: None,
        }
    }
}

/// Back-reference from an attribute to its owning entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// One member of an entity, or a marker for a nested auxiliary container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: String,
    /// Owning entity.
    pub resource: ResourceRef,
    /// Location of the member; a `*` segment declares a container only.
    pub path: Vec<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_ref: Option<TypeRef>,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default)]
    pub is_collection: bool,
    #[serde(default)]
    pub is_required: bool,
    /// Permitted target entities for polymorphic references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refers: Option<Vec<String>>,
    /// Embedded JSON-Schema fragment, compiled separately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Provenance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_url: Option<String>,
}

impl Attribute {
    /// Create an attribute owned by `entity` at the given path.
    ///
    /// The identifier follows the server convention of `Entity.path.segments`.
    pub fn new<S: Into<String>>(entity: &str, path: impl IntoIterator<Item = S>) -> Self {
        let path: Vec<String> = path.into_iter().map(Into::into).collect();
        Self {
            id: format!("{}.{}", entity, path.join(".")),
            resource: ResourceRef {
                id: entity.to_string(),
                resource_type: Some("Entity".to_string()),
            },
            path,
            type_ref: None,
            enum_values: None,
            is_collection: false,
            is_required: false,
            refers: None,
            schema: None,
            description: None,
            source: None,
            extension_url: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn type_id(mut self, id: impl Into<String>) -> Self {
        self.type_ref = Some(TypeRef::new(id));
        self
    }

    pub fn enum_values<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn collection(mut self) -> Self {
        self.is_collection = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn refers<S: Into<String>>(mut self, targets: impl IntoIterator<Item = S>) -> Self {
        self.refers = Some(targets.into_iter().map(Into::into).collect());
        self
    }

    pub fn schema(mut self, schema: serde_json::Value) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn source(mut self, source: Provenance) -> Self {
        self.source = Some(source);
        self
    }

    pub fn extension_url(mut self, url: impl Into<String>) -> Self {
        self.extension_url = Some(url.into());
        self
    }

    /// Identifier of the owning entity.
    pub fn entity_id(&self) -> &str {
        &self.resource.id
    }

    /// Identifier of the declared type, if any.
    pub fn declared_type(&self) -> Option<&str> {
        self.type_ref.as_ref().map(|t| t.id.as_str())
    }

    /// Returns true if the path ends in a wildcard segment.
    pub fn is_container_marker(&self) -> bool {
        self.path.last().is_some_and(|s| s == WILDCARD)
    }

    /// Path segments with every wildcard removed.
    pub fn named_path(&self) -> Vec<&str> {
        self.path
            .iter()
            .map(String::as_str)
            .filter(|s| *s != WILDCARD)
            .collect()
    }

    /// Key used to order attributes of equal depth.
    pub fn sort_key(&self) -> String {
        self.path.join("_")
    }

    /// Returns true if this attribute is defined in server code.
    pub fn is_from_code(&self) -> bool {
        self.source == Some(Provenance::Code)
    }
}
