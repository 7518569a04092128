use anyhow::Context;
use stg_config::StagecraftConfig;
use stg_core::ValidationReport;
use stg_scan::ContentScanner;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::output::output;

/// Handle `stg check` (and bare `stg`). Returns the process exit code.
pub fn handle(
    args: &CheckArgs,
    config: &StagecraftConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<i32> {
    let scanner = ContentScanner::from_config(config);
    let report = scanner.validate().with_context(|| {
        format!(
            "failed to scan content root {}",
            config.content.root.display()
        )
    })?;

    if args.report {
        output(&report, flags.format)?;
    } else {
        print_issues(&report);
    }

    Ok(report.exit_code())
}

/// Issue lines go to stderr; the summary line goes to stdout.
fn print_issues(report: &ValidationReport) {
    if !report.is_valid() {
        println!("Errors:");
    }
    for line in report.messages() {
        eprintln!("{line}");
    }
    println!("{}", report.summary());
}
