mod profile;
mod validate;
mod walk;

use crate::Cli;
use crate::CommandResult;
use profile::ProfileCmd;
use validate::ValidateCmd;
use walk::WalkCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "json")]
pub(crate) enum CommandEnum {
    Profile(Box<ProfileCmd>),
    Validate(Box<ValidateCmd>),
    Walk(Box<WalkCmd>),
}
impl CommandEnum {
    pub(crate) fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Profile(cmd) => cmd.run(cli),
            Self::Validate(cmd) => cmd.run(cli),
            Self::Walk(cmd) => cmd.run(cli),
        }
    }
}
