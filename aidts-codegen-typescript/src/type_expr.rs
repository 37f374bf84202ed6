//! TypeScript syntax for [`TypeExpr`].

use aidts_codegen::{TypeExpr, TypeParam};

/// Name of the single type parameter generic containers declare.
pub const TYPE_PARAMETER: &str = "T";

/// Render a type expression as TypeScript.
///
/// Collections of generic applications use `Array<..>` so nested angle
/// brackets stay unambiguous; everything else uses the `X[]` form.
pub fn render_type(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Named(name) => name.clone(),
        TypeExpr::Parameterized { name, args } => {
            let args: Vec<String> = args.iter().map(render_type).collect();
            format!("{}<{}>", name, args.join(", "))
        }
        TypeExpr::TypeParameter => TYPE_PARAMETER.to_string(),
        TypeExpr::Literal(value) => string_literal(value),
        TypeExpr::Union(alternatives) if alternatives.is_empty() => "never".to_string(),
        TypeExpr::Union(alternatives) => alternatives
            .iter()
            .map(render_type)
            .collect::<Vec<_>>()
            .join(" | "),
        TypeExpr::Array(inner) => {
            let rendered = render_type(inner);
            if inner.has_type_arguments() {
                format!("Array<{}>", rendered)
            } else if matches!(&**inner, TypeExpr::Union(alternatives) if alternatives.len() > 1) {
                format!("({})[]", rendered)
            } else {
                format!("{}[]", rendered)
            }
        }
        TypeExpr::Map(value) => format!("Record<string, {}>", render_type(value)),
        TypeExpr::Indexed { target, key } => {
            format!("{}[{}]", render_type(target), string_literal(key))
        }
        TypeExpr::Unknown => "any".to_string(),
    }
}

/// Render a type parameter declaration (`<T extends X = X>`).
pub fn render_type_param(param: &TypeParam) -> String {
    let mut out = format!("<{}", TYPE_PARAMETER);
    if let Some(constraint) = &param.constraint {
        out.push_str(" extends ");
        out.push_str(&render_type(constraint));
    }
    if let Some(default) = &param.default {
        out.push_str(" = ");
        out.push_str(&render_type(default));
    }
    out.push('>');
    out
}

/// Single-quoted string literal type.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
