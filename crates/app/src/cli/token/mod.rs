use clap::{Args, Subcommand};

mod issue;
mod verify;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    Issue(issue::IssueTokenArgs),
    Verify(verify::VerifyTokenArgs),
}

pub(crate) async fn run(command: TokenCommand) -> Result<(), String> {
    match command.command {
        TokenSubcommand::Issue(args) => issue::run(args).await,
        TokenSubcommand::Verify(args) => verify::run(args).await,
    }
}
