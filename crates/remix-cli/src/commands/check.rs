//! Check command - connectivity diagnostics for the inference endpoint.

use remix_ai::{AiConfig, LmStudioClient};

pub(crate) async fn run() -> miette::Result<()> {
    let config = AiConfig::from_env();
    let client = LmStudioClient::new(config);

    println!("Checking inference endpoint at {}...", client.base_url());

    match client.check_connection().await {
        Ok(()) => {
            println!("Endpoint is reachable.");
            println!("Model: {}", client.model());
            Ok(())
        }
        Err(e) => {
            println!("Endpoint check failed.");
            println!();
            println!("Make sure:");
            println!("  1. LM Studio is running");
            println!("  2. The local server is started");
            println!("  3. A model is loaded");
            Err(miette::miette!("{e}"))
        }
    }
}
