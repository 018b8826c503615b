mod exec;
mod validate;

use crate::Cli;
use crate::CommandResult;
use exec::ExecCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlengine")]
pub(crate) enum CommandEnum {
    /// Build a schema from SDL files and validate query documents against it.
    Validate(Box<ValidateCmd>),

    /// Execute a query document against an SDL schema and a JSON root value.
    Exec(Box<ExecCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Validate(cmd) => cmd.run(cli).await,
            Self::Exec(cmd) => cmd.run(cli).await,
        }
    }
}
