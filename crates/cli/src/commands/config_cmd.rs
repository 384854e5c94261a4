//! `vyomnetra config`: starter config and validation.

use vyomnetra_config::AppConfig;

pub fn run(check: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !check {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    println!("🔍 Validating configuration...");
    let path = AppConfig::config_dir().join("config.toml");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config loaded ({})", path.display());
            if !config.has_model_key() {
                println!("   ⚠️  No GOOGLE_API_KEY set; general questions use static facts");
            }
            if config.sources.nasa_api_key == "DEMO_KEY" {
                println!("   ⚠️  Using NASA DEMO_KEY (low rate limit)");
            }

            println!();
            println!("   Model:    {}", config.model.model);
            println!("   Gateway:  {}:{}", config.gateway.host, config.gateway.port);
            println!("   Timeouts: feeds {}s, model {}s", config.sources.timeout_secs, config.model.timeout_secs);
            Ok(())
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            Err(e.into())
        }
    }
}
