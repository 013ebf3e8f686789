use std::fs;
use std::path::{Path, PathBuf};

use super::error::DistError;
use super::targets::{Platform, TargetSpec};

/// Copy a built binary into `bin/<platform>/<arch>/`, creating the directory
/// tree as needed. Re-runs overwrite the previous artifact; there is no
/// versioning.
pub fn stage_artifact(
    repo_root: &Path,
    spec: &TargetSpec,
    bin_name: &str,
    src: &Path,
) -> Result<PathBuf, DistError> {
    if !src.is_file() {
        return Err(DistError::ArtifactMissing {
            path: src.to_path_buf(),
        });
    }

    let dest_dir = repo_root
        .join("bin")
        .join(spec.platform.as_str())
        .join(spec.arch.as_str());
    fs::create_dir_all(&dest_dir).map_err(|source| DistError::StageDir {
        dir: dest_dir.clone(),
        source,
    })?;

    let mut dest_name = bin_name.to_string();
    if spec.platform == Platform::Win32 {
        dest_name.push_str(".exe");
    }
    let dest = dest_dir.join(dest_name);

    fs::copy(src, &dest).map_err(|source| DistError::Copy {
        src: src.to_path_buf(),
        dest: dest.clone(),
        source,
    })?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::dist::targets::Arch;

    fn spec(platform: Platform) -> TargetSpec {
        TargetSpec {
            triple: "test-triple",
            platform,
            arch: Arch::X64,
        }
    }

    #[test]
    fn stages_into_platform_keyed_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("built");
        fs::write(&src, b"binary").unwrap();

        let dest = stage_artifact(tmp.path(), &spec(Platform::Linux), "bls-tools", &src).unwrap();
        assert_eq!(dest, tmp.path().join("bin/linux/x64/bls-tools"));
        assert!(dest.is_file());
    }

    #[test]
    fn win32_destination_gets_exe_suffix() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("built.exe");
        fs::write(&src, b"binary").unwrap();

        let dest = stage_artifact(tmp.path(), &spec(Platform::Win32), "bls-tools", &src).unwrap();
        assert_eq!(dest, tmp.path().join("bin/win32/x64/bls-tools.exe"));
    }

    #[test]
    fn non_windows_destination_has_no_suffix() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("built");
        fs::write(&src, b"binary").unwrap();

        let dest = stage_artifact(tmp.path(), &spec(Platform::Darwin), "bls-tools", &src).unwrap();
        assert_eq!(dest, tmp.path().join("bin/darwin/x64/bls-tools"));
    }

    #[test]
    fn missing_source_reports_artifact_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("never-built");

        let err = stage_artifact(tmp.path(), &spec(Platform::Linux), "bls-tools", &src).unwrap_err();
        assert!(matches!(err, DistError::ArtifactMissing { .. }));
    }

    #[test]
    fn restaging_over_existing_tree_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("built");
        fs::write(&src, b"first").unwrap();

        stage_artifact(tmp.path(), &spec(Platform::Linux), "bls-tools", &src).unwrap();
        fs::write(&src, b"second").unwrap();
        let dest = stage_artifact(tmp.path(), &spec(Platform::Linux), "bls-tools", &src).unwrap();

        assert_eq!(fs::read(dest).unwrap(), b"second");
    }
}
