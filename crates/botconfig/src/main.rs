use anyhow::{Context, Result};
use botconfig::Settings;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let settings = Settings::from_env().context("failed to load settings")?;
    info!(
        "generating bot config from {} (mode={:?}, first={})",
        settings.subgraph_url, settings.mode, settings.first
    );

    match botconfig::run(&settings).await {
        Ok(config) => {
            info!(
                "bot config written to {} with {} pairs",
                settings.output.display(),
                config.queries.len()
            );
            Ok(())
        }
        Err(e) => {
            error!("failed to generate bot config: {e}");
            Err(e.into())
        }
    }
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("botconfig=info"));

    fmt().with_env_filter(env_filter).with_target(false).init();
}
