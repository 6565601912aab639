use clap::Args;
use turnstile::{SigningKey, key::MIN_SIGNING_KEY_BYTES};

/// Upper bound for `--bytes`.
const MAX_GENERATED_KEY_BYTES: usize = 1024;

#[derive(Debug, Args)]
pub(crate) struct GenerateKeyArgs {
    /// Number of random secret bytes
    #[arg(long, default_value_t = MIN_SIGNING_KEY_BYTES, value_parser = parse_key_len)]
    bytes: usize,
}

fn parse_key_len(value: &str) -> Result<usize, String> {
    let len: usize = value
        .parse()
        .map_err(|error| format!("invalid byte count {value:?}: {error}"))?;

    if (MIN_SIGNING_KEY_BYTES..=MAX_GENERATED_KEY_BYTES).contains(&len) {
        Ok(len)
    } else {
        Err(format!(
            "byte count must be between {MIN_SIGNING_KEY_BYTES} and {MAX_GENERATED_KEY_BYTES}"
        ))
    }
}

pub(crate) fn run(args: &GenerateKeyArgs) -> Result<(), String> {
    let key = SigningKey::generate(args.bytes)
        .map_err(|error| format!("failed to generate signing secret: {error}"))?;

    println!("QR_SIGNING_SECRET={}", key.to_base64());
    println!("store this secret now; every issuer and verifier must share it");

    Ok(())
}
