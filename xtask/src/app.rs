use anyhow::Result;

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    match cli.cmd {
        crate::cli::Cmd::Dist { targets } => crate::tasks::dist::run(targets),
        crate::cli::Cmd::Doctor => crate::tasks::doctor::run(),
    }
}
