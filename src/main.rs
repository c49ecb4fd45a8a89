use clap::Parser;
use nm_post_install::utils::{logger, validation::Validate};
use nm_post_install::{CliConfig, HookConfig, HookEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nm-post-install hook");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let hook_config = HookConfig::from_cli(config)?;
    let engine = HookEngine::new(hook_config);

    match engine.run() {
        Ok(installed) => {
            tracing::info!("✅ Post-install hook completed successfully");
            tracing::info!("📁 Autostart entry installed to: {}", installed.display());
        }
        Err(e) => {
            tracing::error!("❌ Post-install hook failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
