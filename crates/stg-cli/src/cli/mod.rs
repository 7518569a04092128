use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `stg` binary.
#[derive(Debug, Parser)]
#[command(name = "stg", version, about = "Stagecraft - content checks and stage index")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Content root (defaults to config, then the current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            root: self.root.clone(),
        }
    }

    /// The command to run; a bare `stg` runs the CI check.
    #[must_use]
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::root_commands::{CheckArgs, ServeArgs};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_runs_check() {
        let cli = Cli::try_parse_from(["stg"]).expect("cli should parse");
        assert!(matches!(
            cli.into_command(),
            Commands::Check(CheckArgs { report: false })
        ));
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["stg", "--root", "/srv/content", "--verbose", "index"])
            .expect("cli should parse");
        assert!(cli.verbose);
        assert_eq!(cli.global_flags().root.as_deref(), Some(Path::new("/srv/content")));
        assert!(matches!(cli.command, Some(Commands::Index)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["stg", "check", "--format", "raw", "--quiet"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn serve_accepts_host_and_port() {
        let cli = Cli::try_parse_from(["stg", "serve", "--host", "0.0.0.0", "--port", "8080"])
            .expect("cli should parse");
        let Some(Commands::Serve(ServeArgs { host, port })) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(host.as_deref(), Some("0.0.0.0"));
        assert_eq!(port, Some(8080));
    }

    #[test]
    fn file_requires_path() {
        assert!(Cli::try_parse_from(["stg", "file"]).is_err());
        let cli = Cli::try_parse_from(["stg", "file", "project_1_a/1_1_b.html"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Some(Commands::File(args)) if args.path == "project_1_a/1_1_b.html"
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["stg", "--format", "table", "index"]).is_err());
    }
}
