use anyhow::{bail, Result};

/// Check that the tools a dist run shells out to are on PATH.
pub fn run() -> Result<()> {
    let mut ok = true;

    for tool in ["cargo", "rustup"] {
        if which::which(tool).is_err() {
            eprintln!("[FAIL] missing `{tool}` in PATH");
            ok = false;
        } else {
            eprintln!("[OK] {tool}");
        }
    }

    // These are installed on demand by `dist`, so absence is only a note.
    for tool in ["cross", "brew"] {
        if which::which(tool).is_err() {
            eprintln!("[note] `{tool}` not found; `dist` installs or expects it on demand");
        } else {
            eprintln!("[OK] {tool}");
        }
    }

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}
