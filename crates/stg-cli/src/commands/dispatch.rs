use stg_config::StagecraftConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to its handler. Returns the process exit code.
pub fn dispatch(
    command: &Commands,
    config: &StagecraftConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<i32> {
    match command {
        Commands::Check(args) => commands::check::handle(args, config, flags),
        Commands::Index => commands::index::handle(config, flags),
        Commands::File(args) => commands::file::handle(args, config, flags),
        Commands::Serve(args) => commands::serve::handle(args, config),
    }
}
