use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{AkError, Result};

/// Fixed name of the destination directory under the caller's cwd, and of
/// the bundled tree under `assets/`.
pub const AGENT_DIR_NAME: &str = ".agent";

/// Environment override for the bundled asset directory.
pub const ASSETS_DIR_ENV: &str = "AK_ASSETS_DIR";

const ASSETS_SUBDIR: &str = "assets";

/// Resolved paths and output settings for one run.
///
/// The root path pair is constructed once here and never mutated; child
/// pairs are derived per directory entry during the copy.
pub struct AppContext {
    pub assets_dir: PathBuf,
    pub target_dir: PathBuf,
    pub robot_mode: bool,
    pub quiet: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let assets_dir = find_assets_dir()?;
        let target_dir = std::env::current_dir()?.join(AGENT_DIR_NAME);

        Ok(Self {
            assets_dir,
            target_dir,
            robot_mode: cli.robot,
            quiet: cli.quiet,
        })
    }
}

fn find_assets_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ASSETS_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let exe = std::env::current_exe()?;
    assets_dir_from_exe(&exe)
}

/// The bundled assets live at `<install-root>/assets/.agent`, one level
/// above the directory holding the binary, so the installer finds them
/// regardless of where it is invoked from.
fn assets_dir_from_exe(exe: &Path) -> Result<PathBuf> {
    let install_root = exe.parent().and_then(Path::parent).ok_or_else(|| {
        AkError::Config(format!(
            "cannot resolve installation root from {}",
            exe.display()
        ))
    })?;
    Ok(install_root.join(ASSETS_SUBDIR).join(AGENT_DIR_NAME))
}
