//! `postcraft gateway` — Start the HTTP API server.

use postcraft_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("📝 Postcraft Gateway");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Provider:  {} ({})", config.default_provider, config.default_model);
    println!("   AI path:   {}", if config.generation.use_ai { "on" } else { "off" });

    postcraft_gateway::start(config).await?;

    Ok(())
}
