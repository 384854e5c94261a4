//! `vyomnetra ask`: answer one message and exit.

use vyomnetra_config::AppConfig;
use vyomnetra_dispatch::Dispatcher;

pub async fn run(message: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let dispatcher = Dispatcher::from_config(&config)?;

    let exchange = dispatcher.respond(message).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&exchange)?);
    } else {
        println!("{}", exchange.response);
    }

    Ok(())
}
