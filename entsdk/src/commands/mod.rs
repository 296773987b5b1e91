mod backends;
mod check;
mod completions;
mod generate;

use backends::BackendsCommand;
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

use crate::logging;

/// Extension trait for exiting on definition errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for entsdk_defs::Result<T> {
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
#[command(name = "entsdk")]
#[command(version)]
#[command(about = "Generate client SDK stubs from entity definitions")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose);

        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Backends(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate client SDK files from entities.toml
    Generate(GenerateCommand),

    /// Load entities.toml and summarize it without generating code
    Check(CheckCommand),

    /// List available backends
    Backends(BackendsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
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
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "entsdk",
            "-vv",
            "generate",
            "-d",
            "defs/entities.toml",
            "-b",
            "ue4",
            "--vector-encoding",
            "fixed-point",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.defs.to_str(), Some("defs/entities.toml"));
                assert_eq!(cmd.backend.as_deref(), Some("ue4"));
                assert_eq!(
                    cmd.vector_encoding,
                    Some(entsdk_core::VectorEncoding::FixedPoint)
                );
                assert!(cmd.namespace.is_none());
                assert!(cmd.dry_run);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_rejects_unknown_vector_encoding() {
        let result = Cli::try_parse_from(["entsdk", "generate", "--vector-encoding", "half"]);
        assert!(result.is_err());
    }
}
