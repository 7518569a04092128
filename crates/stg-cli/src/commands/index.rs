use anyhow::Context;
use stg_config::StagecraftConfig;
use stg_scan::ContentScanner;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `stg index`.
pub fn handle(config: &StagecraftConfig, flags: &GlobalFlags) -> anyhow::Result<i32> {
    let index = ContentScanner::from_config(config)
        .build_index()
        .context("failed to scan files")?;
    output(&index, flags.format)?;
    Ok(0)
}
