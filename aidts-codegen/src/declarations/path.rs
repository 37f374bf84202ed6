//! Path Normalizer: attribute path → (container name, member name).

use aidts_core::path_to_pascal_case;
use aidts_ir::WILDCARD;

use super::catalog::{IMPLICIT_MEMBERS, is_abstract_entity};

/// Where a member-producing attribute lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTarget {
    /// Container receiving the member.
    pub container: String,
    /// Raw member name (last named segment).
    pub member: String,
    /// Name a container describing this member's own shape would carry.
    pub property_interface: String,
    /// Path segments with wildcards removed.
    pub named_path: Vec<String>,
}

/// Result of normalizing one attribute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedPath {
    /// The attribute declares a member.
    Member(MemberTarget),
    /// The attribute only establishes that a container exists.
    ContainerOnly { container: String },
    /// The attribute is implicit on every container and is not redeclared.
    Suppressed,
}

/// Normalize an attribute path owned by `entity_id`.
///
/// Wildcard segments carry no naming information and are stripped. A path
/// ending in a wildcard declares the container named after the remaining
/// segments without adding a member to it.
pub fn normalize<S: AsRef<str>>(entity_id: &str, path: &[S]) -> NormalizedPath {
    let named: Vec<String> = path
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| *s != WILDCARD)
        .map(str::to_string)
        .collect();

    if named.len() == 1
        && IMPLICIT_MEMBERS.contains(&named[0].as_str())
        && !is_abstract_entity(entity_id)
    {
        return NormalizedPath::Suppressed;
    }

    let marker = path.last().is_some_and(|s| s.as_ref() == WILDCARD);
    let split = named.split_last().filter(|_| !marker);
    let Some((member, parents)) = split else {
        return NormalizedPath::ContainerOnly {
            container: container_name(entity_id, &named),
        };
    };

    NormalizedPath::Member(MemberTarget {
        container: container_name(entity_id, parents),
        member: member.clone(),
        property_interface: container_name(entity_id, &named),
        named_path: named.clone(),
    })
}

/// Container name for an entity plus a chain of nested segments.
pub fn container_name<S: AsRef<str>>(entity_id: &str, segments: &[S]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(segments.len() + 1);
    parts.push(entity_id);
    parts.extend(segments.iter().map(|s| s.as_ref()));
    path_to_pascal_case(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(entity: &str, path: &[&str]) -> MemberTarget {
        match normalize(entity, path) {
            NormalizedPath::Member(target) => target,
            other => panic!("expected member, got {:?}", other),
        }
    }

    #[test]
    fn test_top_level_member() {
        let target = member("Patient", &["gender"]);
        assert_eq!(target.container, "Patient");
        assert_eq!(target.member, "gender");
        assert_eq!(target.property_interface, "PatientGender");
    }

    #[test]
    fn test_nested_member() {
        let target = member("Patient", &["contact", "name", "family"]);
        assert_eq!(target.container, "PatientContactName");
        assert_eq!(target.member, "family");
        assert_eq!(target.property_interface, "PatientContactNameFamily");
    }

    #[test]
    fn test_inner_wildcard_is_stripped() {
        let target = member("Bundle", &["entry", "*", "resource"]);
        assert_eq!(target.container, "BundleEntry");
        assert_eq!(target.member, "resource");
        assert_eq!(target.named_path, ["entry", "resource"]);
    }

    #[test]
    fn test_trailing_wildcard_declares_container_only() {
        assert_eq!(
            normalize("Patient", &["name", "*"]),
            NormalizedPath::ContainerOnly {
                container: "PatientName".to_string()
            }
        );
        assert_eq!(
            normalize("Patient", &["*"]),
            NormalizedPath::ContainerOnly {
                container: "Patient".to_string()
            }
        );
    }

    #[test]
    fn test_hyphenated_segments_in_container_names() {
        let target = member("AidboxConfig", &["auth-keys", "secret"]);
        assert_eq!(target.container, "AidboxConfigAuthKeys");
        assert_eq!(target.member, "secret");
    }

    #[test]
    fn test_implicit_members_are_suppressed() {
        assert_eq!(normalize("Patient", &["id"]), NormalizedPath::Suppressed);
        assert_eq!(normalize("Patient", &["meta"]), NormalizedPath::Suppressed);
        assert_eq!(normalize("Patient", &["meta", "*"]), NormalizedPath::Suppressed);
    }

    #[test]
    fn test_implicit_members_kept_on_abstract_entities() {
        assert_eq!(member("Reference", &["id"]).container, "Reference");
        assert_eq!(member("Resource", &["meta"]).member, "meta");
    }

    #[test]
    fn test_nested_id_is_not_suppressed() {
        let target = member("Patient", &["contact", "id"]);
        assert_eq!(target.container, "PatientContact");
        assert_eq!(target.member, "id");
    }
}
