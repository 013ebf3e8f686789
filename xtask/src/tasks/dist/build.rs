use std::path::{Path, PathBuf};

/// Which driver compiles a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    /// `cross build` — containerized toolchain with the right linker.
    Cross,
    /// Plain `cargo build` on the host toolchain.
    Native,
}

/// The cross driver only covers the glibc Linux family; every other family
/// links fine with the host toolchain.
pub fn mode_for(triple: &str) -> BuildMode {
    if triple.ends_with("unknown-linux-gnu") {
        BuildMode::Cross
    } else {
        BuildMode::Native
    }
}

/// Where cargo/cross leave the release binary for a triple.
///
/// The windows-msvc arm is never in the standard mapping, but the naming
/// convention covers it, so the check stays aligned with rustc's.
pub fn built_binary_path(repo_root: &Path, triple: &str, bin_name: &str) -> PathBuf {
    let mut name = bin_name.to_string();
    if triple.ends_with("windows-gnu") || triple.ends_with("windows-msvc") {
        name.push_str(".exe");
    }
    repo_root
        .join("target")
        .join(triple)
        .join("release")
        .join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_driver_only_for_linux_gnu_family() {
        assert_eq!(mode_for("x86_64-unknown-linux-gnu"), BuildMode::Cross);
        assert_eq!(mode_for("aarch64-unknown-linux-gnu"), BuildMode::Cross);
        assert_eq!(mode_for("aarch64-apple-darwin"), BuildMode::Native);
        assert_eq!(mode_for("x86_64-apple-darwin"), BuildMode::Native);
        assert_eq!(mode_for("x86_64-pc-windows-gnu"), BuildMode::Native);
        // musl is not the gnu family
        assert_eq!(mode_for("x86_64-unknown-linux-musl"), BuildMode::Native);
    }

    #[test]
    fn release_path_follows_cargo_convention() {
        let path = built_binary_path(Path::new("/repo"), "x86_64-unknown-linux-gnu", "bls-tools");
        assert_eq!(
            path,
            Path::new("/repo/target/x86_64-unknown-linux-gnu/release/bls-tools")
        );
    }

    #[test]
    fn exe_suffix_for_both_windows_abis_only() {
        let exe = |triple: &str| {
            built_binary_path(Path::new("."), triple, "bls-tools")
                .to_string_lossy()
                .ends_with(".exe")
        };
        assert!(exe("x86_64-pc-windows-gnu"));
        assert!(exe("x86_64-pc-windows-msvc"));
        assert!(!exe("x86_64-unknown-linux-gnu"));
        assert!(!exe("aarch64-apple-darwin"));
    }
}
