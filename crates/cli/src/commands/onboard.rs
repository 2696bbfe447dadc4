//! `postcraft onboard` — First-time setup.

use postcraft_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");

    println!("📝 Postcraft — First-Time Setup");
    println!("===============================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
        return Ok(());
    }

    std::fs::write(&config_path, AppConfig::default_toml())?;
    println!("✅ Created config.toml at: {}", config_path.display());
    println!("\n📝 Next steps:");
    println!("   1. Set CLOUDFLARE_ACCOUNT_ID and CLOUDFLARE_API_TOKEN for Workers AI,");
    println!("      or pick another provider in {}", config_path.display());
    println!("   2. Run: postcraft generate --topic \"Remote Work\"");
    println!("   3. Or serve the API: postcraft gateway\n");
    println!("   Without credentials, posts come from the built-in templates.\n");

    Ok(())
}
