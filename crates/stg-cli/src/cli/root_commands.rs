use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate the content tree (default when no command is given).
    Check(CheckArgs),
    /// Print the grouped stage index.
    Index,
    /// Show one indexed stage and its embedded metadata.
    File(FileArgs),
    /// Serve the JSON query API.
    Serve(ServeArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Self::Check(CheckArgs::default())
    }
}

#[derive(Clone, Debug, Default, Args)]
pub struct CheckArgs {
    /// Print the full report in the output format instead of issue lines
    #[arg(long)]
    pub report: bool,
}

#[derive(Clone, Debug, Args)]
pub struct FileArgs {
    /// Stage path relative to the content root
    pub path: String,
}

#[derive(Clone, Debug, Default, Args)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config and PORT)
    #[arg(long)]
    pub port: Option<u16>,
}
