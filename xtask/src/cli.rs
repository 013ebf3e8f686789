use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "bls-tools repo developer tasks (release cross-builds, tooling checks)")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Build bls-tools in release mode for every mapped target triple and
    /// stage the binaries under bin/<platform>/<arch>/.
    Dist {
        /// Restrict the run to these triples (repeatable). A triple without a
        /// platform mapping is reported as a per-target failure.
        #[arg(long = "target")]
        targets: Vec<String>,
    },

    /// Check that the host has the tools a dist run shells out to.
    Doctor,
}
