//! Type Resolver: decides the declared type of one attribute's member.

use std::collections::HashMap;

use aidts_ir::{Attribute, Entity, EntityWithAttributes};
use indexmap::IndexMap;
use tracing::trace;

use super::{
    builder::DeclarationBuilder,
    catalog::{MAP_MARKER, REFERENCE_BASE, REFERENCE_MARKER, family_of},
    path::{MemberTarget, container_name},
    types::{CompiledSchema, Member, TypeExpr},
};

/// Attributes of one entity, keyed by identifier.
#[derive(Debug)]
pub struct AttributeIndex<'a> {
    by_id: HashMap<&'a str, &'a Attribute>,
}

impl<'a> AttributeIndex<'a> {
    pub fn new(group: &'a EntityWithAttributes) -> Self {
        let mut by_id = HashMap::with_capacity(group.attributes.len());
        for attribute in &group.attributes {
            by_id.entry(attribute.id.as_str()).or_insert(attribute);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Attribute> {
        self.by_id.get(id).copied()
    }
}

/// Which rule produced a resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Enumeration,
    Reference,
    GenericElement,
    NestedContainer,
    SchemaDerived,
    Map,
    Recursive,
    TypeParameter,
    Declared,
    Unknown,
}

/// Resolves attribute types against the declarations built so far.
#[derive(Debug)]
pub struct Resolver<'a> {
    entity: &'a Entity,
    attributes: &'a AttributeIndex<'a>,
    builder: &'a DeclarationBuilder,
    schema_interfaces: &'a IndexMap<String, CompiledSchema>,
}

impl<'a> Resolver<'a> {
    pub fn new(
        entity: &'a Entity,
        attributes: &'a AttributeIndex<'a>,
        builder: &'a DeclarationBuilder,
        schema_interfaces: &'a IndexMap<String, CompiledSchema>,
    ) -> Self {
        Self {
            entity,
            attributes,
            builder,
            schema_interfaces,
        }
    }

    /// Build the member for an attribute along with the rule that typed it.
    pub fn member(&self, attribute: &Attribute, target: &MemberTarget) -> (Member, Rule) {
        let (ty, rule) = self.resolve(attribute, target);
        let mut member = Member::new(&target.member, ty).doc(self.docs(attribute));
        if !attribute.is_required {
            member = member.optional();
        }
        (member, rule)
    }

    /// Resolve the member type, wrapping collections.
    pub fn resolve(&self, attribute: &Attribute, target: &MemberTarget) -> (TypeExpr, Rule) {
        let (item, rule) = self.resolve_item(attribute, target);
        trace!(attribute = %attribute.id, ?rule, "resolved member type");
        if attribute.is_collection {
            (TypeExpr::array(item), rule)
        } else {
            (item, rule)
        }
    }

    /// Resolve the item type; rules are tried in priority order.
    fn resolve_item(&self, attribute: &Attribute, target: &MemberTarget) -> (TypeExpr, Rule) {
        if let Some(values) = attribute.enum_values.as_deref()
            && !values.is_empty()
        {
            let literals = values.iter().map(TypeExpr::literal).collect();
            return (TypeExpr::union(literals), Rule::Enumeration);
        }

        let declared = attribute.declared_type();

        if declared == Some(REFERENCE_MARKER) {
            let arg = match attribute.refers.as_deref() {
                Some(targets) if !targets.is_empty() => {
                    TypeExpr::union(targets.iter().map(TypeExpr::named).collect())
                }
                _ => TypeExpr::Unknown,
            };
            return (
                TypeExpr::parameterized(REFERENCE_BASE, vec![arg]),
                Rule::Reference,
            );
        }

        let family = family_of(&self.entity.id);
        if let Some(family) = family
            && target.named_path == family.element_path
        {
            return (
                TypeExpr::parameterized(family.item_container, vec![TypeExpr::TypeParameter]),
                Rule::GenericElement,
            );
        }

        if self.builder.contains(&target.property_interface) {
            return (
                self.reference(&target.property_interface, &target.container),
                Rule::NestedContainer,
            );
        }

        if self.schema_interfaces.contains_key(&target.property_interface) {
            return (
                TypeExpr::named(&target.property_interface),
                Rule::SchemaDerived,
            );
        }

        let Some(declared) = declared else {
            return (TypeExpr::Unknown, Rule::Unknown);
        };

        // Only reached when no nested container exists for this path.
        if declared == MAP_MARKER {
            return (TypeExpr::map(TypeExpr::Unknown), Rule::Map);
        }

        if let Some(other) = self.attributes.get(declared) {
            let name = container_name(&self.entity.id, &other.named_path());
            return (self.reference(&name, &target.container), Rule::Recursive);
        }

        if let Some(family) = family
            && target.named_path == family.parameter_slot
        {
            return (TypeExpr::TypeParameter, Rule::TypeParameter);
        }

        (TypeExpr::named(declared), Rule::Declared)
    }

    /// Reference a container by name from inside `enclosing`.
    ///
    /// Generic containers are applied to the enclosing container's own type
    /// parameter; outside a generic container the parameter's default applies.
    fn reference(&self, name: &str, enclosing: &str) -> TypeExpr {
        if self.builder.is_generic(name) && self.builder.is_generic(enclosing) {
            TypeExpr::parameterized(name, vec![TypeExpr::TypeParameter])
        } else {
            TypeExpr::named(name)
        }
    }

    fn docs(&self, attribute: &Attribute) -> Option<String> {
        if let Some(description) = &attribute.description {
            return Some(description.clone());
        }
        if self.entity.is_from_code() && !attribute.is_from_code() {
            return Some(match &attribute.extension_url {
                Some(url) => format!("NOTE: from extension {}", url),
                None => "NOTE: from extension".to_string(),
            });
        }
        None
    }
}
