use anyhow::Context;
use serde::Serialize;
use serde_json::{Map, Value};
use stg_config::StagecraftConfig;
use stg_core::StageSummary;
use stg_scan::{ContentScanner, EmbeddedMetadata};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FileArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FileResponse {
    #[serde(flatten)]
    summary: StageSummary,
    metadata: Option<Map<String, Value>>,
}

/// Handle `stg file <path>`.
pub fn handle(
    args: &FileArgs,
    config: &StagecraftConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<i32> {
    let scanner = ContentScanner::from_config(config);
    let summary = scanner
        .find_stage(&args.path)
        .context("failed to scan files")?
        .ok_or_else(|| anyhow::anyhow!("file not found: {}", args.path))?;

    let metadata = match scanner.stage_metadata(&args.path) {
        Ok(EmbeddedMetadata::Valid(object)) => Some(object),
        Ok(EmbeddedMetadata::Malformed(reason)) => {
            tracing::warn!(path = %args.path, %reason, "embedded metadata is malformed");
            None
        }
        Ok(EmbeddedMetadata::Absent) => None,
        Err(error) => {
            return Err(error).with_context(|| format!("failed to read {}", args.path));
        }
    };

    output(&FileResponse { summary, metadata }, flags.format)?;
    Ok(0)
}
