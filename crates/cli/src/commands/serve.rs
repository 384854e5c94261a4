//! `vyomnetra serve`: start the HTTP chat endpoint.

use vyomnetra_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("🔭 VyomNetra");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Chat:      POST /api/space-chat");
    println!(
        "   AI answers: {}",
        if config.has_model_key() {
            config.model.model.as_str()
        } else {
            "off (set GOOGLE_API_KEY)"
        }
    );

    vyomnetra_gateway::start(config).await?;

    Ok(())
}
