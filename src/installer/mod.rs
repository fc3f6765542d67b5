//! The install operation.
//!
//! One shot: verify the bundled assets exist, then copy them into the
//! target directory. A missing source at the root is fatal before anything
//! is written; an error mid-copy aborts the run and may leave the
//! destination partially populated (no rollback, no cleanup).

pub mod copy;

use colored::Colorize;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::{AkError, Result};
use crate::utils::format_size;
use copy::{CopyStats, copy_recursive};

/// Outcome of a successful install.
#[derive(Debug, Serialize)]
pub struct InstallReport {
    pub target: String,
    pub files_copied: usize,
    pub dirs_created: usize,
    pub bytes_copied: u64,
}

/// Run the install and render the result for the current output mode.
pub fn run(ctx: &AppContext) -> Result<()> {
    if !ctx.robot_mode && !ctx.quiet {
        println!("{}", "Installing Agent Kit...".bold());
        println!(
            "{}",
            format!(
                "Copying skills and workflows to {}...",
                ctx.target_dir.display()
            )
            .cyan()
        );
    }

    let report = install(ctx)?;

    if ctx.robot_mode {
        return emit_json(&robot_ok(&report));
    }

    if !ctx.quiet {
        println!(
            "{} Installation complete! Skills and workflows are ready to use.",
            "✓".green().bold()
        );
        let mut layout = HumanLayout::new();
        layout
            .blank()
            .kv("Target", &report.target)
            .kv("Files copied", &report.files_copied.to_string())
            .kv("Directories", &report.dirs_created.to_string())
            .kv("Size", &format_size(report.bytes_copied))
            .blank()
            .push_line(
                "Try running: @agent-kit/workflows/audit"
                    .dimmed()
                    .to_string(),
            );
        emit_human(layout);
    }

    Ok(())
}

/// Verify the bundled assets and copy them into the target directory.
///
/// Missing assets at the root fail here, before any destination path is
/// created. Deeper nodes that vanish mid-traversal are skipped silently by
/// the copy (see [`copy::copy_recursive`]); the two tiers stay separate.
/// Prints nothing; the caller owns presentation, and only `main` turns
/// errors into an exit code.
pub fn install(ctx: &AppContext) -> Result<InstallReport> {
    if !ctx.assets_dir.exists() {
        return Err(AkError::MissingAssets(ctx.assets_dir.clone()));
    }

    info!(
        source = %ctx.assets_dir.display(),
        target = %ctx.target_dir.display(),
        "installing bundled assets"
    );

    let mut stats = CopyStats::default();
    copy_recursive(&ctx.assets_dir, &ctx.target_dir, &mut stats)?;

    Ok(InstallReport {
        target: ctx.target_dir.display().to_string(),
        files_copied: stats.files_copied,
        dirs_created: stats.dirs_created,
        bytes_copied: stats.bytes_copied,
    })
}
