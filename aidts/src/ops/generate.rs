//! Generate operation - schema retrieval, declaration pipeline, file output.

use aidts_client::{Auth, FetchMode, SchemaClient, read_snapshot};
use aidts_codegen::Pipeline;
use aidts_codegen_typescript::{Generator, JsonSchemaCompiler};
use aidts_config::{Credentials, Mode, Settings, Source};
use aidts_ir::SchemaSnapshot;
use eyre::{Context, Result};
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing the file.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Loads the schema snapshot, runs the pipeline and renders the
/// declarations to the configured output file.
pub async fn generate(settings: &Settings, opts: GenerateOptions) -> Result<GenerateReport> {
    let source = describe(&settings.source);
    info!(%source, "loading schema");
    let snapshot = load(&settings.source).await?;

    let ctx = Pipeline::new()
        .schema_compiler(JsonSchemaCompiler::new())
        .run(snapshot)
        .wrap_err("Pipeline failed")?;

    // Each warning was already logged by the phase that raised it.
    let warning_count = ctx.warning_count();
    let info_count = ctx.info_count();

    let generator = Generator::from_context(ctx)?;
    let declarations = generator.declarations();
    let alias_count = declarations.aliases.len();
    let container_count = declarations.containers.len();
    let schema_count = declarations.schema_derived.len();

    let result = if opts.dry_run {
        let file = generator.preview(&settings.output);
        GenerationResult::Preview(PreviewFile {
            path: file.path().display().to_string(),
            content: file.content().to_string(),
        })
    } else {
        let generated = generator
            .generate(&settings.output)
            .wrap_err("Failed to write declarations")?;
        GenerationResult::Written {
            path: generated.path,
            write: generated.write,
        }
    };

    Ok(GenerateReport {
        source,
        alias_count,
        container_count,
        schema_count,
        warning_count,
        info_count,
        result,
    })
}

async fn load(source: &Source) -> Result<SchemaSnapshot> {
    match source {
        Source::Remote {
            base_url,
            mode,
            page_size,
            credentials,
        } => {
            let client = SchemaClient::new(base_url.as_str())?
                .auth(auth(credentials))
                .mode(fetch_mode(*mode, *page_size));
            client
                .fetch_snapshot()
                .await
                .wrap_err_with(|| format!("Failed to fetch schema from {}", base_url))
        }
        Source::Local { dir } => read_snapshot(dir)
            .wrap_err_with(|| format!("Failed to read snapshot from {}", dir.display())),
    }
}

fn auth(credentials: &Credentials) -> Auth {
    match credentials {
        Credentials::Anonymous => Auth::None,
        Credentials::Header(value) => Auth::Header(value.clone()),
        Credentials::Basic { username, password } => Auth::Basic {
            username: username.clone(),
            password: password.clone(),
        },
    }
}

fn fetch_mode(mode: Mode, page_size: u32) -> FetchMode {
    match mode {
        Mode::Dump => FetchMode::Dump,
        Mode::Bundle => FetchMode::Bundle { page_size },
    }
}

fn describe(source: &Source) -> String {
    match source {
        Source::Remote { base_url, .. } => base_url.clone(),
        Source::Local { dir } => dir.display().to_string(),
    }
}
