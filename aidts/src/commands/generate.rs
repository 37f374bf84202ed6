use std::path::{Path, PathBuf};

use aidts_config::{Config, Mode, Overrides};
use clap::{Args, ValueEnum};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

/// Retrieval mode accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Bulk NDJSON export (`/$dump`)
    Dump,
    /// Paginated search bundles
    Bundle,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Dump => Mode::Dump,
            ModeArg::Bundle => Mode::Bundle,
        }
    }
}

#[derive(Args)]
pub struct GenerateCommand {
    /// File to write the declarations to
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Aidbox base URL, e.g. http://localhost:8888
    #[arg(short = 'u', long)]
    pub base_url: Option<String>,

    /// Authorization header value sent verbatim
    #[arg(long, value_name = "HEADER")]
    pub auth: Option<String>,

    /// Basic auth username
    #[arg(long, requires = "password")]
    pub username: Option<String>,

    /// Basic auth password
    #[arg(long, requires = "username")]
    pub password: Option<String>,

    /// How to retrieve Entity and Attribute records
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Records per page in bundle mode
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Read Entity.ndjson and Attribute.ndjson from a directory instead of a server
    #[arg(long, conflicts_with = "base_url")]
    pub input_dir: Option<PathBuf>,

    /// Path to aidts.toml (defaults to ./aidts.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the declarations instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub async fn run(&self) -> Result<()> {
        let config = Config::discover(self.config.as_deref(), Path::new(".")).unwrap_or_exit();
        let settings = config.resolve(self.overrides()).unwrap_or_exit();

        let report = ops::generate(
            &settings,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )
        .await?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            mode: self.mode.map(Mode::from),
            page_size: self.page_size,
            auth_header: self.auth.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            output_file: self.output_file.clone(),
            input_dir: self.input_dir.clone(),
        }
    }
}
