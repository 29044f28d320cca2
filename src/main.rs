use napkins_web::config::{self, Config};
use napkins_web::server;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// Initializes the tracing subscriber from the loaded configuration.
///
/// `LOG_FORMAT=json` switches to line-delimited JSON for log collectors;
/// the default is human-readable text.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::new(&config.log_level);

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
