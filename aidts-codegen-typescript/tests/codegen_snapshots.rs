//! Snapshot tests for the generated TypeScript file.

use aidts_codegen::Pipeline;
use aidts_codegen_typescript::{Generator, JsonSchemaCompiler};
use aidts_ir::{Attribute, Entity, EntityKind, Provenance, SchemaSnapshot};
use serde_json::json;

fn generate(snapshot: SchemaSnapshot) -> String {
    let ctx = Pipeline::new()
        .schema_compiler(JsonSchemaCompiler::new())
        .run(snapshot)
        .expect("Pipeline failed");
    Generator::from_context(ctx)
        .expect("Declarations missing")
        .render()
}

fn resource(id: &str) -> Entity {
    Entity::new(id).kind(EntityKind::Resource)
}

#[test]
fn test_patient_scenarios() {
    let code = generate(SchemaSnapshot::new(
        vec![
            resource("Patient").description("Information about an individual"),
            Entity::new("string").kind(EntityKind::Primitive),
            Entity::new("positiveInt").kind(EntityKind::Primitive),
        ],
        vec![
            Attribute::new("Patient", ["id"]).type_id("id"),
            Attribute::new("Patient", ["name", "*"]),
            Attribute::new("Patient", ["name", "family"]).type_id("string"),
            Attribute::new("Patient", ["name"]).collection(),
            Attribute::new("Patient", ["gender"])
                .type_id("code")
                .enum_values(["male", "female", "other", "unknown"]),
            Attribute::new("Patient", ["generalPractitioner"])
                .type_id("Reference")
                .refers(["Organization", "Practitioner"])
                .collection(),
            Attribute::new("Patient", ["multipleBirth"]).type_id("positiveInt"),
        ],
    ));

    insta::assert_snapshot!(code, @r"
    // Aidbox TypeScript annotations, generated by aidts. Do not edit.

    export type positiveInt = number;

    export interface AidboxReference<T extends AidboxResource = AidboxResource> {
      resourceType: T['resourceType'];
      id: id;
      display?: string;
    }

    export interface AidboxResource {
      resourceType: string;
      id?: id;
      meta?: Meta;
    }

    /** Information about an individual */
    export interface Patient {
      readonly resourceType: 'Patient';
      id?: id;
      meta?: Meta;
      gender?: 'male' | 'female' | 'other' | 'unknown';
      generalPractitioner?: Array<AidboxReference<Organization | Practitioner>>;
      multipleBirth?: positiveInt;
      name?: PatientName[];
    }

    export interface PatientName {
      family?: string;
    }
    ");
}

#[test]
fn test_bundle_generic_family() {
    let code = generate(SchemaSnapshot::new(
        vec![resource("Bundle")],
        vec![
            Attribute::new("Bundle", ["entry"]).collection(),
            Attribute::new("Bundle", ["entry", "resource"]).type_id("Resource"),
            Attribute::new("Bundle", ["entry", "search", "mode"]).enum_values(["match", "include"]),
            Attribute::new("Bundle", ["entry", "search"]),
        ],
    ));

    insta::assert_snapshot!(code, @r"
    // Aidbox TypeScript annotations, generated by aidts. Do not edit.

    export interface AidboxReference<T extends AidboxResource = AidboxResource> {
      resourceType: T['resourceType'];
      id: id;
      display?: string;
    }

    export interface AidboxResource {
      resourceType: string;
      id?: id;
      meta?: Meta;
    }

    export interface Bundle<T extends AidboxResource = AidboxResource> {
      readonly resourceType: 'Bundle';
      id?: id;
      meta?: Meta;
      entry?: Array<BundleEntry<T>>;
    }

    export interface BundleEntry<T extends AidboxResource = AidboxResource> {
      resource?: T;
      search?: BundleEntrySearch;
    }

    export interface BundleEntrySearch {
      mode?: 'match' | 'include';
    }
    ");
}

#[test]
fn test_schema_derived_and_extensions() {
    let code = generate(SchemaSnapshot::new(
        vec![
            resource("AidboxConfig").source(Provenance::Code),
        ],
        vec![
            Attribute::new("AidboxConfig", ["auth-keys"])
                .type_id("string")
                .source(Provenance::Data)
                .extension_url("http://example.org/auth-keys"),
            Attribute::new("AidboxConfig", ["labels"]).type_id("Map"),
            Attribute::new("AidboxConfig", ["settings"])
                .source(Provenance::Code)
                .description("Runtime settings")
                .schema(json!({
                    "type": "object",
                    "required": ["mode"],
                    "properties": {
                        "mode": {"enum": ["dev", "prod"]},
                        "retries": {"type": "integer"}
                    }
                })),
            Attribute::new("AidboxConfig", ["broken"])
                .source(Provenance::Code)
                .schema(json!({"$ref": "#/definitions/x"})),
        ],
    ));

    insta::assert_snapshot!(code, @r"
    // Aidbox TypeScript annotations, generated by aidts. Do not edit.

    export interface AidboxConfig {
      readonly resourceType: 'AidboxConfig';
      id?: id;
      meta?: Meta;
      /** NOTE: from extension http://example.org/auth-keys */
      'auth-keys'?: string;
      broken?: any;
      /** NOTE: from extension */
      labels?: Record<string, any>;
      /** Runtime settings */
      settings?: AidboxConfigSettings;
    }

    export interface AidboxReference<T extends AidboxResource = AidboxResource> {
      resourceType: T['resourceType'];
      id: id;
      display?: string;
    }

    export interface AidboxResource {
      resourceType: string;
      id?: id;
      meta?: Meta;
    }

    export interface AidboxConfigSettings {
      mode: 'dev' | 'prod';
      retries?: number;
    }
    ");
}

#[test]
fn test_output_is_stable_under_shuffling() {
    let snapshot = SchemaSnapshot::new(
        vec![resource("Patient"), resource("Encounter")],
        vec![
            Attribute::new("Patient", ["name", "given"]).type_id("string").collection(),
            Attribute::new("Patient", ["name"]).collection(),
            Attribute::new("Encounter", ["subject"])
                .type_id("Reference")
                .refers(["Patient"]),
            Attribute::new("Patient", ["active"]).type_id("boolean"),
        ],
    );
    let mut shuffled = snapshot.clone();
    shuffled.attributes.reverse();
    shuffled.entities.reverse();

    assert_eq!(generate(snapshot.clone()), generate(shuffled));
    assert_eq!(generate(snapshot.clone()), generate(snapshot));
}
