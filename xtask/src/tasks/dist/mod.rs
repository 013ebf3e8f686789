//! Release cross-builds for the bls-tools binary.
//!
//! One sequential pass over the target mapping: make sure the Rust target
//! and any family-specific prerequisites are present, build in release mode
//! with the right driver, then copy the binary into `bin/<platform>/<arch>/`.
//! A failing target never stops the rest of the run, and the process exits 0
//! even if every target failed; callers read the per-target report.

pub mod build;
pub mod error;
pub mod stage;
pub mod targets;
pub mod tools;

use anyhow::Result;
use std::path::PathBuf;

use self::error::DistError;
use self::targets::DistConfig;
use self::tools::{BuildTools, SystemTools};

pub fn run(only: Vec<String>) -> Result<()> {
    let root = crate::util::repo::repo_root()?;
    let cfg = DistConfig::standard(root);

    tools::ensure_cross_installed()?;

    let mut sys = SystemTools::new(cfg.repo_root.clone(), cfg.bin_name.clone());
    run_loop(&cfg, &only, &mut sys)
}

/// Process every requested triple. Per-target failures are logged and
/// tallied, never propagated; the final line prints unconditionally.
pub fn run_loop(cfg: &DistConfig, only: &[String], tools: &mut dyn BuildTools) -> Result<()> {
    let requested: Vec<&str> = if only.is_empty() {
        cfg.mapping.iter().map(|t| t.triple).collect()
    } else {
        only.iter().map(String::as_str).collect()
    };

    let mut failed = 0usize;
    for triple in &requested {
        match dist_one(cfg, triple, tools) {
            Ok(dest) => eprintln!("[ok] {triple}: staged {}", dest.display()),
            Err(e) => {
                eprintln!("[fail] {triple}: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        eprintln!("[info] {failed}/{} target(s) failed", requested.len());
    }
    eprintln!("[done] dist pass complete");
    Ok(())
}

fn dist_one(
    cfg: &DistConfig,
    triple: &str,
    tools: &mut dyn BuildTools,
) -> Result<PathBuf, DistError> {
    let spec = cfg.resolve(triple)?;
    eprintln!(
        "[step] {} -> {}/{}",
        spec.triple,
        spec.platform.as_str(),
        spec.arch.as_str()
    );

    // Both setup steps are best-effort: the target support or the cross
    // linker may already be installed.
    if let Err(e) = tools.ensure_rust_target(triple) {
        eprintln!("[warn] rustup target add {triple}: {e:#}; continuing");
    }
    if let Err(e) = tools.install_prereqs(triple) {
        eprintln!("[warn] prerequisites for {triple}: {e:#}; continuing");
    }

    let mode = build::mode_for(triple);
    tools.build(mode, triple).map_err(|reason| DistError::Build {
        triple: triple.to_string(),
        reason,
    })?;

    let src = build::built_binary_path(&cfg.repo_root, triple, &cfg.bin_name);
    stage::stage_artifact(&cfg.repo_root, spec, &cfg.bin_name, &src)
}
