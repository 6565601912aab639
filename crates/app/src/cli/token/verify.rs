use clap::Args;
use turnstile_app::{context::AppContext, qr::SigningConfig};

#[derive(Debug, Args)]
pub(crate) struct VerifyTokenArgs {
    /// Token string read from a QR code
    #[arg(long)]
    token: String,

    #[command(flatten)]
    signing: SigningConfig,
}

pub(crate) async fn run(args: VerifyTokenArgs) -> Result<(), String> {
    let app = AppContext::from_signing_config(&args.signing)
        .map_err(|error| format!("failed to load signing configuration: {error}"))?;

    match app.qr.verify_token(&args.token).await {
        Ok(subject) => {
            println!("valid: true");
            println!("subject: {subject}");

            Ok(())
        }
        Err(error) => Err(format!(
            "valid: false ({})",
            error.token_error().kind()
        )),
    }
}
