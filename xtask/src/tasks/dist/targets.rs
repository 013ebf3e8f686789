//! Target registry — single source of truth for what a dist run builds and
//! where each artifact lands.

use std::path::PathBuf;

use super::error::DistError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Darwin,
    Win32,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Win32 => "win32",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arch {
    Arm64,
    X64,
}

impl Arch {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arm64 => "arm64",
            Self::X64 => "x64",
        }
    }
}

/// One row of the target mapping: a compiler triple and the
/// `bin/<platform>/<arch>` slot its binary is staged into.
#[derive(Clone, Copy, Debug)]
pub struct TargetSpec {
    pub triple: &'static str,
    pub platform: Platform,
    pub arch: Arch,
}

/// All targets a full dist run builds.
pub static TARGET_MAPPING: &[TargetSpec] = &[
    TargetSpec {
        triple: "aarch64-unknown-linux-gnu",
        platform: Platform::Linux,
        arch: Arch::Arm64,
    },
    TargetSpec {
        triple: "aarch64-apple-darwin",
        platform: Platform::Darwin,
        arch: Arch::Arm64,
    },
    TargetSpec {
        triple: "x86_64-apple-darwin",
        platform: Platform::Darwin,
        arch: Arch::X64,
    },
    TargetSpec {
        triple: "x86_64-pc-windows-gnu",
        platform: Platform::Win32,
        arch: Arch::X64,
    },
    TargetSpec {
        triple: "x86_64-unknown-linux-gnu",
        platform: Platform::Linux,
        arch: Arch::X64,
    },
];

/// Immutable inputs for one dist pass. Tests construct custom mappings;
/// production uses [`DistConfig::standard`].
pub struct DistConfig {
    pub bin_name: String,
    pub repo_root: PathBuf,
    pub mapping: Vec<TargetSpec>,
}

impl DistConfig {
    pub fn standard(repo_root: PathBuf) -> Self {
        Self {
            bin_name: "bls-tools".to_string(),
            repo_root,
            mapping: TARGET_MAPPING.to_vec(),
        }
    }

    pub fn resolve(&self, triple: &str) -> Result<&TargetSpec, DistError> {
        self.mapping
            .iter()
            .find(|t| t.triple == triple)
            .ok_or_else(|| DistError::UnknownTarget(triple.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_five_targets_resolve_to_documented_pairs() {
        let cfg = DistConfig::standard(PathBuf::from("."));
        let cases = [
            ("aarch64-unknown-linux-gnu", "linux", "arm64"),
            ("aarch64-apple-darwin", "darwin", "arm64"),
            ("x86_64-apple-darwin", "darwin", "x64"),
            ("x86_64-pc-windows-gnu", "win32", "x64"),
            ("x86_64-unknown-linux-gnu", "linux", "x64"),
        ];
        for (triple, platform, arch) in cases {
            let spec = cfg.resolve(triple).unwrap();
            assert_eq!(spec.platform.as_str(), platform, "{triple}");
            assert_eq!(spec.arch.as_str(), arch, "{triple}");
        }
    }

    #[test]
    fn unknown_triple_is_rejected() {
        let cfg = DistConfig::standard(PathBuf::from("."));
        let err = cfg.resolve("riscv64gc-unknown-linux-gnu").unwrap_err();
        assert!(matches!(err, DistError::UnknownTarget(_)));
    }

    #[test]
    fn custom_mapping_is_honored() {
        let cfg = DistConfig {
            bin_name: "demo".to_string(),
            repo_root: PathBuf::from("."),
            mapping: vec![TargetSpec {
                triple: "x86_64-unknown-freebsd",
                platform: Platform::Linux,
                arch: Arch::X64,
            }],
        };
        assert!(cfg.resolve("x86_64-unknown-freebsd").is_ok());
        assert!(cfg.resolve("x86_64-unknown-linux-gnu").is_err());
    }
}
