//! Declaration Builder: accumulates containers and primitive aliases.

use std::collections::BTreeMap;

use aidts_ir::Entity;
use indexmap::IndexMap;

use super::{
    catalog::{
        BUILTIN_PRIMITIVES, ID_TYPE, META_TYPE, NUMERIC_PRIMITIVES, base_containers,
        is_abstract_entity, is_generic_auxiliary, is_generic_container, resource_type_param,
    },
    types::{Container, Member, PrimitiveAlias, TypeExpr},
};

/// Outcome of appending a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Append {
    /// The member was added to an existing container.
    Added,
    /// A new auxiliary container was created to hold the member.
    CreatedContainer,
    /// A member of that name already existed; the new one was ignored.
    Duplicate,
}

/// Owned mapping from container name to declaration.
///
/// Populated in two passes: [`declare_entity`](Self::declare_entity) fixes the
/// shape and parameterization of every entity container up front, then
/// [`append_member`](Self::append_member) adds resolved members.
#[derive(Debug, Clone)]
pub struct DeclarationBuilder {
    aliases: BTreeMap<String, PrimitiveAlias>,
    containers: IndexMap<String, Container>,
}

impl DeclarationBuilder {
    /// Create a builder seeded with the base containers.
    pub fn new() -> Self {
        let containers = base_containers()
            .into_iter()
            .map(|c| (c.name.clone(), c))
            .collect();
        Self {
            aliases: BTreeMap::new(),
            containers,
        }
    }

    /// Pass 1: declare the alias or container for one entity.
    ///
    /// Returns false if a declaration of that name already existed.
    pub fn declare_entity(&mut self, entity: &Entity) -> bool {
        if entity.is_primitive() {
            return self.declare_primitive(entity);
        }
        if self.containers.contains_key(&entity.id) {
            return false;
        }

        let mut container = Container::new(&entity.id).with_doc(entity.description.clone());
        if is_generic_container(&entity.id) {
            container = container.generic(resource_type_param());
        }
        if !is_abstract_entity(&entity.id) && !entity.is_non_resource() {
            container = container
                .member(Member::new("resourceType", TypeExpr::literal(&entity.id)).readonly())
                .member(Member::new("id", TypeExpr::named(ID_TYPE)).optional())
                .member(Member::new("meta", TypeExpr::named(META_TYPE)).optional());
        }

        self.containers.insert(entity.id.clone(), container);
        true
    }

    fn declare_primitive(&mut self, entity: &Entity) -> bool {
        if BUILTIN_PRIMITIVES.contains(&entity.id.as_str()) {
            return true;
        }
        if self.aliases.contains_key(&entity.id) {
            return false;
        }

        let target = if NUMERIC_PRIMITIVES.contains(&entity.id.as_str()) {
            TypeExpr::named("number")
        } else {
            TypeExpr::named("string")
        };
        self.aliases.insert(
            entity.id.clone(),
            PrimitiveAlias {
                name: entity.id.clone(),
                target,
                doc: entity.description.clone(),
            },
        );
        true
    }

    /// Make sure a container of this name exists.
    pub fn ensure_container(&mut self, name: &str) -> &Container {
        self.containers
            .entry(name.to_string())
            .or_insert_with(|| auxiliary(name))
    }

    /// Pass 2: append a member, first writer wins.
    pub fn append_member(&mut self, container: &str, member: Member) -> Append {
        match self.containers.get_mut(container) {
            Some(existing) => {
                if existing.insert(member) {
                    Append::Added
                } else {
                    Append::Duplicate
                }
            }
            None => {
                self.containers
                    .insert(container.to_string(), auxiliary(container).member(member));
                Append::CreatedContainer
            }
        }
    }

    pub fn container(&self, name: &str) -> Option<&Container> {
        self.containers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.containers.contains_key(name)
    }

    /// Returns true if the named container is, or would be created, generic.
    pub fn is_generic(&self, name: &str) -> bool {
        match self.containers.get(name) {
            Some(container) => container.is_generic(),
            None => is_generic_auxiliary(name),
        }
    }

    pub fn alias(&self, name: &str) -> Option<&PrimitiveAlias> {
        self.aliases.get(name)
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Consume the builder, returning aliases and containers sorted by name.
    pub fn finish(self) -> (Vec<PrimitiveAlias>, Vec<Container>) {
        let aliases = self.aliases.into_values().collect();
        let mut containers: Vec<Container> = self.containers.into_values().collect();
        containers.sort_by(|a, b| a.name.cmp(&b.name));
        (aliases, containers)
    }
}

impl Default for DeclarationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn auxiliary(name: &str) -> Container {
    let container = Container::new(name);
    if is_generic_auxiliary(name) {
        container.generic(resource_type_param())
    } else {
        container
    }
}
