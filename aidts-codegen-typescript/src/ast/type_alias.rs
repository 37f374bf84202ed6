use aidts_codegen::{
    PrimitiveAlias,
    builder::{Fragment, Renderable},
};

use crate::type_expr::render_type;

/// `export type Name = Target;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub name: String,
    pub target: String,
    pub doc: Option<String>,
}

impl From<&PrimitiveAlias> for TypeAlias {
    fn from(alias: &PrimitiveAlias) -> Self {
        Self {
            name: alias.name.clone(),
            target: render_type(&alias.target),
            doc: alias.doc.clone(),
        }
    }
}

impl Renderable for TypeAlias {
    fn fragments(&self) -> Vec<Fragment> {
        let line = Fragment::line(format!("export type {} = {};", self.name, self.target));
        match &self.doc {
            Some(doc) => vec![Fragment::doc(doc), line],
            None => vec![line],
        }
    }
}

#[cfg(test)]
mod tests {
    use aidts_codegen::{TypeExpr, builder::render};

    use super::*;

    #[test]
    fn test_numeric_alias() {
        let alias = PrimitiveAlias {
            name: "decimal".to_string(),
            target: TypeExpr::named("number"),
            doc: None,
        };
        assert_eq!(render(&TypeAlias::from(&alias)), "export type decimal = number;\n");
    }

    #[test]
    fn test_documented_alias() {
        let alias = PrimitiveAlias {
            name: "uri".to_string(),
            target: TypeExpr::named("string"),
            doc: Some("String of characters used to identify a name or a resource".to_string()),
        };
        assert_eq!(
            render(&TypeAlias::from(&alias)),
            "/** String of characters used to identify a name or a resource */\nexport type uri = string;\n"
        );
    }
}
