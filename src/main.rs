use std::path::PathBuf;

use dotenvy::dotenv;
use shamir_recovery::{Config, shares::load_share_document};
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

// Reconstructs the secret of every share file given through `SHARE_FILES` or as arguments.
// Run via
// ```
// cargo run -- fixtures/sample.json fixtures/submission.json
// ```
fn main() -> Result<(), anyhow::Error> {
    if let Err(err) = dotenv()
        && !err.not_found()
    {
        return Err(anyhow::anyhow!("Error while loading .env file: {err}"));
    }

    let mut config = match Config::parse_environment() {
        Ok(c) => c,
        Err(e) => {
            return Err(anyhow::anyhow!(
                "Failed to parse environment variables for configuration: {e}"
            ));
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(Into::<LevelFilter>::into(config.log_level)),
        )
        .init();

    config
        .share_files
        .extend(std::env::args().skip(1).map(PathBuf::from));
    if config.share_files.is_empty() {
        return Err(anyhow::anyhow!(
            "No share file given, pass paths as arguments or through SHARE_FILES"
        ));
    }

    let verification = config.verification();
    let mut failures = 0;
    for path in &config.share_files {
        let secret = load_share_document(path)
            .and_then(|document| document.recover_secret(verification));
        match secret {
            Ok(secret) => {
                info!("Recovered secret from {}", path.display());
                println!("{}: {secret}", path.display());
            }
            Err(e) => {
                error!("Failed to recover secret from {}: {e}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(anyhow::anyhow!(
            "{failures} of {} share files could not be processed",
            config.share_files.len()
        ));
    }

    Ok(())
}
