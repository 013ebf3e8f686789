//! External collaborators for a dist run: rustup, Homebrew, cross and cargo.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::process::Command;

use super::build::BuildMode;

/// The commands a dist pass shells out to, behind a seam so the loop can be
/// exercised without a toolchain on the host.
pub trait BuildTools {
    /// `rustup target add` for the triple. Idempotent on the rustup side.
    fn ensure_rust_target(&mut self, triple: &str) -> Result<()>;

    /// Family-specific system packages. Only the windows-gnu family needs
    /// anything (the MinGW cross linker); every other family is a no-op.
    fn install_prereqs(&mut self, triple: &str) -> Result<()>;

    /// Release build of the distributed package for the triple.
    fn build(&mut self, mode: BuildMode, triple: &str) -> Result<()>;
}

pub struct SystemTools {
    repo_root: PathBuf,
    package: String,
}

impl SystemTools {
    pub fn new(repo_root: PathBuf, package: String) -> Self {
        Self { repo_root, package }
    }
}

impl BuildTools for SystemTools {
    fn ensure_rust_target(&mut self, triple: &str) -> Result<()> {
        run_cmd(Command::new("rustup").args(["target", "add", triple]))
    }

    fn install_prereqs(&mut self, triple: &str) -> Result<()> {
        if triple.ends_with("windows-gnu") {
            return run_cmd(Command::new("brew").args(["install", "mingw-w64"]));
        }
        Ok(())
    }

    fn build(&mut self, mode: BuildMode, triple: &str) -> Result<()> {
        let driver = match mode {
            BuildMode::Cross => "cross",
            BuildMode::Native => "cargo",
        };
        run_cmd(
            Command::new(driver)
                .current_dir(&self.repo_root)
                .args(["build", "--release", "-p", &self.package, "--target", triple]),
        )
    }
}

/// Install the cross helper if it is not already on PATH. Runs once before
/// the target loop.
pub fn ensure_cross_installed() -> Result<()> {
    if which::which("cross").is_ok() {
        return Ok(());
    }
    eprintln!("[info] `cross` not found; installing");
    run_cmd(Command::new("cargo").args(["install", "cross"]))
}

fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Spawning command")?;
    if !status.success() {
        bail!("Command failed with status {status}");
    }
    Ok(())
}
