//! Language-agnostic declaration model.

use indexmap::IndexMap;

/// A type expression attached to a member or alias.
///
/// Generic applications, type parameters and the unknown fallback are
/// explicit variants; rendering to concrete syntax is left to the target
/// language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A concrete named type (`Patient`, `string`, `id`).
    Named(String),
    /// A generic type applied to arguments (`AidboxReference<Patient>`).
    Parameterized { name: String, args: Vec<TypeExpr> },
    /// The free type parameter of the enclosing generic container.
    TypeParameter,
    /// A string literal type.
    Literal(String),
    /// A union of alternatives, in the order given.
    Union(Vec<TypeExpr>),
    /// Zero or more items.
    Array(Box<TypeExpr>),
    /// A string-keyed mapping to the given value type.
    Map(Box<TypeExpr>),
    /// Property lookup on another type (`T['resourceType']`).
    Indexed { target: Box<TypeExpr>, key: String },
    /// Type information unavailable.
    Unknown,
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn parameterized(name: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        Self::Parameterized {
            name: name.into(),
            args,
        }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    pub fn array(inner: TypeExpr) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn map(value: TypeExpr) -> Self {
        Self::Map(Box::new(value))
    }

    pub fn indexed(target: TypeExpr, key: impl Into<String>) -> Self {
        Self::Indexed {
            target: Box::new(target),
            key: key.into(),
        }
    }

    /// Build a union, collapsing a single alternative to itself.
    pub fn union(mut alternatives: Vec<TypeExpr>) -> Self {
        if alternatives.len() == 1 {
            alternatives.remove(0)
        } else {
            Self::Union(alternatives)
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns true if rendering this type involves type-argument brackets.
    pub fn has_type_arguments(&self) -> bool {
        match self {
            Self::Parameterized { .. } | Self::Map(_) => true,
            Self::Array(inner) => inner.has_type_arguments(),
            Self::Indexed { target, .. } => target.has_type_arguments(),
            Self::Union(alternatives) => alternatives.iter().any(Self::has_type_arguments),
            Self::Named(_) | Self::TypeParameter | Self::Literal(_) | Self::Unknown => false,
        }
    }
}

/// A declared type parameter (`T extends AidboxResource = AidboxResource`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParam {
    pub constraint: Option<TypeExpr>,
    pub default: Option<TypeExpr>,
}

/// A member of a container declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Raw member name; quoting is applied at render time.
    pub name: String,
    pub ty: TypeExpr,
    pub optional: bool,
    pub readonly: bool,
    pub doc: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            readonly: false,
            doc: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }
}

/// A named container declaration with uniquely named members.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub name: String,
    pub type_param: Option<TypeParam>,
    pub doc: Option<String>,
    members: IndexMap<String, Member>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_param: None,
            doc: None,
            members: IndexMap::new(),
        }
    }

    pub fn generic(mut self, param: TypeParam) -> Self {
        self.type_param = Some(param);
        self
    }

    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.insert(member);
        self
    }

    pub fn is_generic(&self) -> bool {
        self.type_param.is_some()
    }

    /// Insert a member unless one with the same name exists.
    ///
    /// Returns false when the member was ignored.
    pub fn insert(&mut self, member: Member) -> bool {
        if self.members.contains_key(&member.name) {
            return false;
        }
        self.members.insert(member.name.clone(), member);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// An alias from a primitive entity to a base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveAlias {
    pub name: String,
    pub target: TypeExpr,
    pub doc: Option<String>,
}

/// Output of an external schema compiler for one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSchema {
    /// Declared name, the attribute's property-interface name.
    pub name: String,
    /// Attribute the schema fragment came from.
    pub attribute_id: String,
    /// Rendered declaration text.
    pub source: String,
}

/// The complete, ordered declaration set for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    /// Primitive aliases, sorted by name.
    pub aliases: Vec<PrimitiveAlias>,
    /// Containers, sorted by name.
    pub containers: Vec<Container>,
    /// Schema-derived declarations in compile order.
    pub schema_derived: Vec<CompiledSchema>,
}

impl Declarations {
    pub fn container(&self, name: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.name == name)
    }

    pub fn alias(&self, name: &str) -> Option<&PrimitiveAlias> {
        self.aliases.iter().find(|a| a.name == name)
    }
}
