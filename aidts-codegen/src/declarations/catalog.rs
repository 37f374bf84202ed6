//! Fixed names and shapes every generated declaration set relies on.

use super::types::{Container, Member, TypeExpr, TypeParam};

/// Base container every resource satisfies.
pub const RESOURCE_BASE: &str = "AidboxResource";
/// Generic reference-by-id container.
pub const REFERENCE_BASE: &str = "AidboxReference";

/// Declared-type identifier marking a polymorphic resource reference.
pub const REFERENCE_MARKER: &str = "Reference";
/// Declared-type identifier marking a string-keyed map.
pub const MAP_MARKER: &str = "Map";

/// Schema-defined abstract entities whose containers carry no implicit members.
pub const ABSTRACT_ENTITIES: [&str; 2] = ["Reference", "Resource"];
/// Top-level members implied on every resource container.
pub const IMPLICIT_MEMBERS: [&str; 2] = ["id", "meta"];

/// Primitive entities already built into the target type system.
pub const BUILTIN_PRIMITIVES: [&str; 3] = ["string", "boolean", "number"];
/// Primitive entities aliased to the numeric base type.
pub const NUMERIC_PRIMITIVES: [&str; 4] = ["unsignedInt", "positiveInt", "integer", "decimal"];

/// Type of the implicit identifier member.
pub const ID_TYPE: &str = "id";
/// Type of the implicit metadata member.
pub const META_TYPE: &str = "Meta";

/// A generic top-level container together with the auxiliary container that
/// carries its type parameter down into nested members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericFamily {
    /// Entity identifier of the generic container.
    pub container: &'static str,
    /// Path of the element-collection field.
    pub element_path: &'static [&'static str],
    /// Name of the generic auxiliary container describing one element.
    pub item_container: &'static str,
    /// Path whose type is the free type parameter.
    pub parameter_slot: &'static [&'static str],
}

pub const GENERIC_FAMILIES: &[GenericFamily] = &[GenericFamily {
    container: "Bundle",
    element_path: &["entry"],
    item_container: "BundleEntry",
    parameter_slot: &["entry", "resource"],
}];

/// Returns true if the entity is `Reference` or `Resource`.
pub fn is_abstract_entity(entity_id: &str) -> bool {
    ABSTRACT_ENTITIES.contains(&entity_id)
}

/// Generic family whose top-level container is this entity.
pub fn family_of(entity_id: &str) -> Option<&'static GenericFamily> {
    GENERIC_FAMILIES.iter().find(|f| f.container == entity_id)
}

/// Returns true if a top-level container of this name is generic.
pub fn is_generic_container(name: &str) -> bool {
    family_of(name).is_some()
}

/// Returns true if an auxiliary container of this name is generic.
pub fn is_generic_auxiliary(name: &str) -> bool {
    GENERIC_FAMILIES.iter().any(|f| f.item_container == name)
}

/// The one type parameter used by every generic container.
pub fn resource_type_param() -> TypeParam {
    TypeParam {
        constraint: Some(TypeExpr::named(RESOURCE_BASE)),
        default: Some(TypeExpr::named(RESOURCE_BASE)),
    }
}

/// Base containers present in every output.
pub fn base_containers() -> [Container; 2] {
    let resource = Container::new(RESOURCE_BASE)
        .member(Member::new("resourceType", TypeExpr::named("string")))
        .member(Member::new("id", TypeExpr::named(ID_TYPE)).optional())
        .member(Member::new("meta", TypeExpr::named(META_TYPE)).optional());

    let reference = Container::new(REFERENCE_BASE)
        .generic(resource_type_param())
        .member(Member::new(
            "resourceType",
            TypeExpr::indexed(TypeExpr::TypeParameter, "resourceType"),
        ))
        .member(Member::new("id", TypeExpr::named(ID_TYPE)))
        .member(Member::new("display", TypeExpr::named("string")).optional());

    [resource, reference]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_lookup() {
        assert!(is_generic_container("Bundle"));
        assert!(!is_generic_container("BundleEntry"));
        assert!(is_generic_auxiliary("BundleEntry"));
        assert!(!is_generic_auxiliary("PatientName"));
        assert_eq!(family_of("Bundle").map(|f| f.item_container), Some("BundleEntry"));
    }

    #[test]
    fn test_base_containers() {
        let [resource, reference] = base_containers();
        assert_eq!(resource.name, RESOURCE_BASE);
        assert!(!resource.is_generic());
        assert!(resource.get("id").unwrap().optional);

        assert_eq!(reference.name, REFERENCE_BASE);
        assert!(reference.is_generic());
        assert!(!reference.get("id").unwrap().optional);
        assert!(reference.get("display").unwrap().optional);
    }
}
