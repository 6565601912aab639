use clap::{Parser, Subcommand};

mod key;
mod token;

#[derive(Debug, Parser)]
#[command(name = "turnstile-app", about = "Turnstile CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Key(key::KeyCommand),
    Token(token::TokenCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Key(command) => key::run(command),
            Commands::Token(command) => token::run(command).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_token_issue() {
        let parsed = Cli::try_parse_from([
            "turnstile-app",
            "token",
            "issue",
            "--subject",
            "member-1",
            "--signing-secret",
            "c2lnbmluZy1zZWNyZXQtZm9yLXR1cm5zdGlsZS10ZXN0cw==",
        ]);

        assert!(parsed.is_ok(), "expected token issue to parse: {parsed:?}");
    }

    #[test]
    fn key_generate_bounds_byte_count() {
        let parse = |bytes: &str| {
            Cli::try_parse_from(["turnstile-app", "key", "generate", "--bytes", bytes])
        };

        assert!(parse("64").is_ok(), "64 bytes is within range");
        assert!(parse("1024").is_ok(), "upper bound is inclusive");
        assert!(parse("16").is_err(), "keys below the minimum are refused");
        assert!(parse("1025").is_err(), "oversized keys are refused");
        assert!(
            parse("18446744073709551615").is_err(),
            "huge counts must not reach the allocator"
        );
    }
}
