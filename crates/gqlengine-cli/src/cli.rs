use clap::CommandFactory;
use crate::commands;

/// Validate and execute GraphQL documents against SDL schemas.
#[derive(clap::Parser, Debug)]
#[command(name = "gqlengine", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable debug logging (overrides the LOG_LEVEL environment variable).",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand, print usage.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
