use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use buzzword_backend::config::{Config, ConfigError};
use buzzword_backend::routes::create_app;
use buzzword_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("buzzword_backend=debug,tower_http=debug")),
        )
        .init();

    // Load configuration - try multiple paths
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.jsonld".to_string()),
        exe_dir.join("conf.yaml").to_str().map(|s| s.to_string()),
        exe_dir.join("conf.jsonld").to_str().map(|s| s.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut loaded = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                loaded = Some((cfg, path.clone()));
                break;
            }
            Err(ConfigError::NotFound(_)) => {
                tracing::debug!("No config at {}", path);
            }
            Err(e) => {
                return Err(anyhow::anyhow!("Invalid configuration in {}: {}", path, e));
            }
        }
    }

    let mut config = match loaded {
        Some((cfg, path)) => {
            info!("Loaded configuration from: {}", path);
            cfg
        }
        None => {
            warn!("No config file found (tried {:?}), using defaults", config_paths);
            Config::default()
        }
    };
    config.fill_credentials_from_env();

    let app_state = AppState::new(config.clone())?;
    if !app_state.translator.is_configured() {
        warn!("Chat completion credential missing; /api/translate will fail");
    }
    if !app_state.tts.is_configured() {
        warn!("Speech credential missing; /api/text-to-speech will fail");
    }

    let app = create_app(app_state);

    // Start server
    let addr = config.system_config.socket_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
