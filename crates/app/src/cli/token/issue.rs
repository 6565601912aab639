use clap::Args;
use turnstile::SubjectId;
use turnstile_app::{context::AppContext, qr::SigningConfig};

#[derive(Debug, Args)]
pub(crate) struct IssueTokenArgs {
    /// Member identifier the token should be bound to
    #[arg(long)]
    subject: String,

    #[command(flatten)]
    signing: SigningConfig,
}

pub(crate) async fn run(args: IssueTokenArgs) -> Result<(), String> {
    let subject =
        SubjectId::new(args.subject).map_err(|error| format!("invalid subject: {error}"))?;

    let app = AppContext::from_signing_config(&args.signing)
        .map_err(|error| format!("failed to load signing configuration: {error}"))?;

    let issued = app
        .qr
        .issue_token(&subject)
        .await
        .map_err(|error| format!("failed to issue token: {error}"))?;

    println!("subject: {}", issued.subject);
    println!("issued_at: {}", issued.issued_at);
    println!("expires_at: {}", issued.expires_at);
    println!("token: {}", issued.token);

    Ok(())
}
