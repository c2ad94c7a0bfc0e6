//! Demo binary: runs the fixed proxy-pattern scenario with the simulated
//! one-second network latency and prints the narration.

use tracing_subscriber::EnvFilter;
use vidcache::demo::{self, DemoError};
use vidcache::remote::Latency;

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    // Cache hit/miss commentary shows at the default `debug` level;
    // RUST_LOG overrides it.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vidcache=debug")),
        )
        .init();

    let mut narration = String::new();
    demo::run(Latency::simulated_network(), &mut narration).await?;
    print!("{narration}");

    Ok(())
}
