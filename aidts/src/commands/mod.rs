mod generate;

use clap::Parser;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for aidts_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "aidts")]
#[command(version)]
#[command(about = "Generate TypeScript annotations for an Aidbox resource model")]
pub(crate) struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,

    /// Log per-attribute decisions (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        self.generate.run().await
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["aidts", "-o", "aidbox.ts", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
