//! Ordering & Assembly: deterministic grouping of input records and of the
//! final declaration set.

use std::{cmp::Ordering, collections::BTreeMap};

use aidts_ir::{Attribute, Entity, EntityWithAttributes, SchemaSnapshot};
use indexmap::IndexMap;

use super::{
    builder::DeclarationBuilder,
    types::{CompiledSchema, Declarations},
};

/// Input records grouped by owning entity.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    /// One group per distinct entity identifier, sorted ascending.
    pub groups: Vec<EntityWithAttributes>,
    /// Attributes whose owning entity was not fetched, sorted by identifier.
    pub orphans: Vec<Attribute>,
    /// Identifiers of entity records dropped because an earlier record had
    /// the same identifier.
    pub duplicate_entities: Vec<String>,
}

/// Group attributes under their owning entity and normalize order.
///
/// Entities are sorted ascending by identifier. Within a group attributes are
/// sorted by descending path length, then by the path segments joined with
/// `_`. Input order never influences the result.
pub fn group_entities(snapshot: &SchemaSnapshot) -> Grouping {
    let mut by_id: BTreeMap<&str, Vec<&Entity>> = BTreeMap::new();
    for entity in &snapshot.entities {
        by_id.entry(entity.id.as_str()).or_default().push(entity);
    }

    let mut duplicate_entities = Vec::new();
    let mut groups: BTreeMap<&str, EntityWithAttributes> = BTreeMap::new();
    for (id, mut records) in by_id {
        // Records sharing an id: keep a canonical one so shuffling cannot
        // change which survives.
        records.sort_by(|a, b| canonical(a).cmp(&canonical(b)));
        if records.len() > 1 {
            duplicate_entities.push(id.to_string());
        }
        groups.insert(id, EntityWithAttributes::new(records[0].clone()));
    }

    let mut orphans = Vec::new();
    for attribute in &snapshot.attributes {
        match groups.get_mut(attribute.entity_id()) {
            Some(group) => group.attributes.push(attribute.clone()),
            None => orphans.push(attribute.clone()),
        }
    }

    let mut groups: Vec<EntityWithAttributes> = groups.into_values().collect();
    for group in &mut groups {
        group.attributes.sort_by(compare_attributes);
    }
    orphans.sort_by(|a, b| a.id.cmp(&b.id));

    Grouping {
        groups,
        orphans,
        duplicate_entities,
    }
}

/// Attribute order within one entity group.
pub fn compare_attributes(a: &Attribute, b: &Attribute) -> Ordering {
    b.path
        .len()
        .cmp(&a.path.len())
        .then_with(|| a.sort_key().cmp(&b.sort_key()))
        .then_with(|| a.id.cmp(&b.id))
        .then_with(|| canonical(a).cmp(&canonical(b)))
}

/// Stable textual form used to break ties between otherwise equal records.
fn canonical<T: serde::Serialize>(record: &T) -> String {
    serde_json::to_string(record).unwrap_or_default()
}

/// Combine the finished builder with compiled schema declarations.
///
/// A compiled schema whose name collides with a container is dropped; members
/// already reference the container in that case.
pub fn assemble(
    builder: DeclarationBuilder,
    schema_interfaces: IndexMap<String, CompiledSchema>,
) -> Declarations {
    let (aliases, containers) = builder.finish();
    let schema_derived = schema_interfaces
        .into_values()
        .filter(|schema| containers.binary_search_by(|c| c.name.cmp(&schema.name)).is_err())
        .collect();

    Declarations {
        aliases,
        containers,
        schema_derived,
    }
}
