use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Per-target failures surfaced at the dist loop boundary. Best-effort setup
/// steps (rustup target add, system prerequisites) are not represented here;
/// they are logged and dropped where they happen.
#[derive(Debug, Error)]
pub enum DistError {
    #[error("no platform mapping for target `{0}`")]
    UnknownTarget(String),

    #[error("build failed for {triple}: {reason:#}")]
    Build {
        triple: String,
        reason: anyhow::Error,
    },

    #[error("expected build output missing: {}", .path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("creating {}: {source}", .dir.display())]
    StageDir { dir: PathBuf, source: io::Error },

    #[error("copying {} to {}: {source}", .src.display(), .dest.display())]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        source: io::Error,
    },
}
