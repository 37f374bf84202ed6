//! JSON-Schema fragment compiler.
//!
//! Covers the subset of JSON Schema that Aidbox attaches to attributes. Object
//! roots become an exported interface, anything else an exported type alias.

use aidts_codegen::{SchemaCompileError, SchemaCompiler, builder::SourceWriter};
use aidts_core::property_name;
use serde_json::{Map, Value};

use crate::{
    ast::{Interface, Property},
    type_expr::string_literal,
};

/// Compiles JSON-Schema fragments to TypeScript declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaCompiler;

impl JsonSchemaCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl SchemaCompiler for JsonSchemaCompiler {
    fn compile(&self, name: &str, fragment: &Value) -> Result<String, SchemaCompileError> {
        let root = compile_schema(fragment, "#")?;
        let description = fragment
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);

        let mut writer = SourceWriter::new();
        match root {
            TsType::Object(shape) => {
                let mut interface = shape
                    .properties
                    .iter()
                    .fold(Interface::new(name), |i, field| i.property(field.to_property()))
                    .with_doc(description);
                if let Some(additional) = &shape.additional {
                    interface = interface.rest(additional.render());
                }
                writer.emit(&interface);
            }
            other => {
                if let Some(doc) = description {
                    writer.doc(&doc);
                }
                writer.line(&format!("export type {} = {};", name, other.render()));
            }
        }
        Ok(writer.finish())
    }
}

/// Intermediate TypeScript type built from a schema.
#[derive(Debug, Clone, PartialEq)]
enum TsType {
    /// Keyword or literal text, rendered as-is.
    Atom(String),
    Array(Box<TsType>),
    Object(ObjectShape),
    Union(Vec<TsType>),
    Intersection(Vec<TsType>),
}

#[derive(Debug, Clone, PartialEq)]
struct ObjectShape {
    properties: Vec<Field>,
    additional: Option<Box<TsType>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Field {
    name: String,
    ty: TsType,
    optional: bool,
    doc: Option<String>,
}

impl Field {
    fn to_property(&self) -> Property {
        let property = if self.optional {
            Property::optional(&self.name, self.ty.render())
        } else {
            Property::required(&self.name, self.ty.render())
        };
        property.with_doc(self.doc.clone())
    }
}

impl TsType {
    fn atom(text: &str) -> Self {
        Self::Atom(text.to_string())
    }

    fn union(mut alternatives: Vec<TsType>) -> Self {
        if alternatives.len() == 1 {
            alternatives.remove(0)
        } else {
            Self::Union(alternatives)
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Atom(text) => text.clone(),
            Self::Array(inner) => match **inner {
                Self::Union(_) | Self::Intersection(_) => format!("({})[]", inner.render()),
                _ => format!("{}[]", inner.render()),
            },
            Self::Object(shape) => shape.render_inline(),
            Self::Union(alternatives) => join(alternatives, " | ", false),
            Self::Intersection(parts) => join(parts, " & ", true),
        }
    }
}

fn join(types: &[TsType], separator: &str, wrap_unions: bool) -> String {
    types
        .iter()
        .map(|t| match t {
            TsType::Union(_) if wrap_unions => format!("({})", t.render()),
            _ => t.render(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

impl ObjectShape {
    fn render_inline(&self) -> String {
        let mut parts: Vec<String> = self
            .properties
            .iter()
            .map(|p| {
                let optional = if p.optional { "?" } else { "" };
                format!("{}{}: {}", property_name(&p.name), optional, p.ty.render())
            })
            .collect();
        if let Some(additional) = &self.additional {
            if parts.is_empty() {
                return format!("Record<string, {}>", additional.render());
            }
            parts.push(format!("[key: string]: {}", additional.render()));
        }
        if parts.is_empty() {
            "{}".to_string()
        } else {
            format!("{{ {} }}", parts.join("; "))
        }
    }
}

fn compile_schema(schema: &Value, pointer: &str) -> Result<TsType, SchemaCompileError> {
    let object = match schema {
        Value::Bool(true) => return Ok(TsType::atom("any")),
        Value::Bool(false) => return Ok(TsType::atom("never")),
        Value::Object(object) => object,
        _ => {
            return Err(SchemaCompileError::Invalid {
                pointer: pointer.to_string(),
                message: "schema must be an object or a boolean".to_string(),
            });
        }
    };

    if object.contains_key("$ref") {
        return Err(SchemaCompileError::UnsupportedKeyword {
            keyword: "$ref".to_string(),
            pointer: pointer.to_string(),
        });
    }

    if let Some(values) = object.get("enum") {
        let Value::Array(values) = values else {
            return Err(invalid(pointer, "`enum` must be an array"));
        };
        let literals = values
            .iter()
            .map(|v| literal(v, pointer))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(TsType::union(literals));
    }
    if let Some(value) = object.get("const") {
        return literal(value, pointer);
    }

    for keyword in ["anyOf", "oneOf"] {
        if let Some(alternatives) = object.get(keyword) {
            return Ok(TsType::union(compile_all(alternatives, keyword, pointer)?));
        }
    }
    if let Some(parts) = object.get("allOf") {
        let mut parts = compile_all(parts, "allOf", pointer)?;
        return Ok(if parts.len() == 1 {
            parts.remove(0)
        } else {
            TsType::Intersection(parts)
        });
    }

    match object.get("type") {
        Some(Value::String(name)) => compile_typed(name, object, pointer),
        Some(Value::Array(names)) => {
            let mut alternatives = Vec::with_capacity(names.len());
            for name in names {
                let Some(name) = name.as_str() else {
                    return Err(invalid(pointer, "`type` entries must be strings"));
                };
                alternatives.push(compile_typed(name, object, pointer)?);
            }
            Ok(TsType::union(alternatives))
        }
        Some(_) => Err(invalid(pointer, "`type` must be a string or an array")),
        None if object.contains_key("properties")
            || object.contains_key("additionalProperties") =>
        {
            compile_object(object, pointer)
        }
        None if object.contains_key("items") => compile_array(object, pointer),
        None => Ok(TsType::atom("any")),
    }
}

fn compile_typed(
    name: &str,
    object: &Map<String, Value>,
    pointer: &str,
) -> Result<TsType, SchemaCompileError> {
    match name {
        "string" => Ok(TsType::atom("string")),
        "number" | "integer" => Ok(TsType::atom("number")),
        "boolean" => Ok(TsType::atom("boolean")),
        "null" => Ok(TsType::atom("null")),
        "object" => compile_object(object, pointer),
        "array" => compile_array(object, pointer),
        other => Err(SchemaCompileError::UnknownType {
            name: other.to_string(),
            pointer: pointer.to_string(),
        }),
    }
}

fn compile_object(
    object: &Map<String, Value>,
    pointer: &str,
) -> Result<TsType, SchemaCompileError> {
    let required: Vec<&str> = match object.get("required") {
        Some(Value::Array(names)) => names.iter().filter_map(Value::as_str).collect(),
        Some(_) => return Err(invalid(pointer, "`required` must be an array")),
        None => Vec::new(),
    };

    let mut properties = Vec::new();
    match object.get("properties") {
        Some(Value::Object(props)) => {
            for (name, schema) in props {
                let child = format!("{}/properties/{}", pointer, escape_pointer(name));
                properties.push(Field {
                    name: name.clone(),
                    ty: compile_schema(schema, &child)?,
                    optional: !required.contains(&name.as_str()),
                    doc: schema
                        .get("description")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                });
            }
        }
        Some(_) => return Err(invalid(pointer, "`properties` must be an object")),
        None => {}
    }

    // Open objects without declared properties accept anything.
    let additional = match object.get("additionalProperties") {
        Some(Value::Bool(false)) => None,
        Some(Value::Bool(true)) => Some(TsType::atom("any")),
        Some(schema) => Some(compile_schema(
            schema,
            &format!("{}/additionalProperties", pointer),
        )?),
        None if properties.is_empty() => Some(TsType::atom("any")),
        None => None,
    };

    Ok(TsType::Object(ObjectShape {
        properties,
        additional: additional.map(Box::new),
    }))
}

fn compile_array(
    object: &Map<String, Value>,
    pointer: &str,
) -> Result<TsType, SchemaCompileError> {
    let item = match object.get("items") {
        Some(Value::Array(_)) => {
            return Err(SchemaCompileError::UnsupportedKeyword {
                keyword: "items (tuple form)".to_string(),
                pointer: pointer.to_string(),
            });
        }
        Some(schema) => compile_schema(schema, &format!("{}/items", pointer))?,
        None => TsType::atom("any"),
    };
    Ok(TsType::Array(Box::new(item)))
}

fn compile_all(
    schemas: &Value,
    keyword: &str,
    pointer: &str,
) -> Result<Vec<TsType>, SchemaCompileError> {
    let Value::Array(schemas) = schemas else {
        return Err(invalid(pointer, &format!("`{}` must be an array", keyword)));
    };
    schemas
        .iter()
        .enumerate()
        .map(|(i, schema)| compile_schema(schema, &format!("{}/{}/{}", pointer, keyword, i)))
        .collect()
}

fn literal(value: &Value, pointer: &str) -> Result<TsType, SchemaCompileError> {
    match value {
        Value::String(s) => Ok(TsType::Atom(string_literal(s))),
        Value::Number(n) => Ok(TsType::Atom(n.to_string())),
        Value::Bool(b) => Ok(TsType::Atom(b.to_string())),
        Value::Null => Ok(TsType::atom("null")),
        _ => Err(invalid(pointer, "only scalar literals are supported")),
    }
}

fn invalid(pointer: &str, message: &str) -> SchemaCompileError {
    SchemaCompileError::Invalid {
        pointer: pointer.to_string(),
        message: message.to_string(),
    }
}

fn escape_pointer(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn compile(name: &str, schema: Value) -> String {
        JsonSchemaCompiler::new()
            .compile(name, &schema)
            .expect("schema should compile")
    }

    #[test]
    fn test_object_root_becomes_interface() {
        let code = compile(
            "AidboxConfigAuth",
            json!({
                "type": "object",
                "description": "Auth settings",
                "required": ["issuer"],
                "properties": {
                    "issuer": {"type": "string"},
                    "keys": {"type": "array", "items": {"type": "string"}},
                    "token-ttl": {"type": "integer", "description": "Seconds"}
                }
            }),
        );
        insta::assert_snapshot!(code, @r"
        /** Auth settings */
        export interface AidboxConfigAuth {
          issuer: string;
          keys?: string[];
          /** Seconds */
          'token-ttl'?: number;
        }
        ");
    }

    #[test]
    fn test_scalar_root_becomes_alias() {
        assert_eq!(
            compile("PatientStatus", json!({"enum": ["active", "inactive"]})),
            "export type PatientStatus = 'active' | 'inactive';\n"
        );
        assert_eq!(
            compile("PatientFlag", json!({"type": ["string", "null"]})),
            "export type PatientFlag = string | null;\n"
        );
        assert_eq!(
            compile("PatientVersion", json!({"const": 2})),
            "export type PatientVersion = 2;\n"
        );
    }

    #[test]
    fn test_combinators() {
        assert_eq!(
            compile(
                "PatientValue",
                json!({"anyOf": [{"type": "string"}, {"type": "array", "items": {"type": "number"}}]})
            ),
            "export type PatientValue = string | number[];\n"
        );
        assert_eq!(
            compile(
                "PatientMixed",
                json!({"allOf": [
                    {"type": "object", "properties": {"a": {"type": "string"}}},
                    {"oneOf": [{"const": "x"}, {"const": "y"}]}
                ]})
            ),
            "export type PatientMixed = { a?: string } & ('x' | 'y');\n"
        );
    }

    #[test]
    fn test_additional_properties() {
        assert_eq!(
            compile(
                "PatientLabels",
                json!({"type": "array", "items": {"type": "object", "additionalProperties": {"type": "string"}}})
            ),
            "export type PatientLabels = Record<string, string>[];\n"
        );
        let code = compile(
            "PatientExtra",
            json!({"type": "object", "properties": {"a": {"type": "boolean"}}, "additionalProperties": true}),
        );
        assert_eq!(
            code,
            "export interface PatientExtra {\n  a?: boolean;\n  [key: string]: any;\n}\n"
        );
    }

    #[test]
    fn test_free_form_object() {
        assert_eq!(
            compile("PatientData", json!({"type": "object"})),
            "export interface PatientData {\n  [key: string]: any;\n}\n"
        );
        assert_eq!(compile("PatientAnything", json!({})), "export type PatientAnything = any;\n");
    }

    #[test]
    fn test_ref_is_rejected() {
        let err = JsonSchemaCompiler::new()
            .compile("X", &json!({"type": "object", "properties": {"a": {"$ref": "#/defs/a"}}}))
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaCompileError::UnsupportedKeyword { ref pointer, .. } if pointer == "#/properties/a"
        ));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = JsonSchemaCompiler::new()
            .compile("X", &json!({"type": "date"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown schema type `date` at #");
    }
}
