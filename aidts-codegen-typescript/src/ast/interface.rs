//! `export interface` declarations.

use aidts_codegen::{
    Container, Member, TypeParam,
    builder::{Fragment, Renderable},
};
use aidts_core::property_name;

use crate::type_expr::{render_type, render_type_param};

/// One property line of an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub readonly: bool,
    pub doc: Option<String>,
}

impl Property {
    pub fn required(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            readonly: false,
            doc: None,
        }
    }

    pub fn optional(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::required(name, ty)
        }
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    /// `readonly name?: type;`, with the name quoted when needed.
    fn declaration(&self) -> String {
        format!(
            "{}{}{}: {};",
            if self.readonly { "readonly " } else { "" },
            property_name(&self.name),
            if self.optional { "?" } else { "" },
            self.ty
        )
    }
}

impl From<&Member> for Property {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            ty: render_type(&member.ty),
            optional: member.optional,
            readonly: member.readonly,
            doc: member.doc.clone(),
        }
    }
}

/// An exported interface with an optional string index signature.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    params: String,
    doc: Option<String>,
    properties: Vec<Property>,
    rest: Option<String>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: String::new(),
            doc: None,
            properties: Vec::new(),
            rest: None,
        }
    }

    pub fn generic(mut self, param: &TypeParam) -> Self {
        self.params = render_type_param(param);
        self
    }

    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Accept any other string key with values of type `ty`.
    pub fn rest(mut self, ty: impl Into<String>) -> Self {
        self.rest = Some(ty.into());
        self
    }
}

impl From<&Container> for Interface {
    fn from(container: &Container) -> Self {
        let mut interface = Interface::new(&container.name).with_doc(container.doc.clone());
        if let Some(param) = &container.type_param {
            interface = interface.generic(param);
        }
        container
            .members()
            .fold(interface, |interface, member| interface.property(member.into()))
    }
}

impl Renderable for Interface {
    fn fragments(&self) -> Vec<Fragment> {
        let head = format!("export interface {}{}", self.name, self.params);
        let mut out: Vec<Fragment> = self.doc.iter().map(Fragment::doc).collect();

        if self.properties.is_empty() && self.rest.is_none() {
            out.push(Fragment::line(format!("{} {{}}", head)));
            return out;
        }

        let mut body = Vec::new();
        for property in &self.properties {
            if let Some(doc) = &property.doc {
                body.push(Fragment::doc(doc));
            }
            body.push(Fragment::line(property.declaration()));
        }
        if let Some(ty) = &self.rest {
            body.push(Fragment::line(format!("[key: string]: {};", ty)));
        }
        out.push(Fragment::block(format!("{} {{", head), body, "}"));
        out
    }
}
