use std::io;
use std::process::ExitCode;

use gemlist::{ModelLister, config};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Prints the matching models on stdout. Any failure is reported as a single
/// `Error: ...` line on stderr and exits with status 1.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the listing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    config::load_dotenv();

    let lister = ModelLister::new(gemlist::default_backend());
    match lister.run(config::env_lookup, &mut io::stdout()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(?err, "listing failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
