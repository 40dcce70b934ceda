use anyhow::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod scenario;

use appointment_cell::services::AppointmentRegistryService;
use shared_config::AppConfig;

fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    let config = AppConfig::from_env();

    // Logs go to stderr so the walkthrough on stdout stays clean
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Starting clinic demo (cancellation policy: {})",
        config.cancellation_policy
    );

    let registry = AppointmentRegistryService::from_config(&config);
    for line in scenario::run(&registry)? {
        println!("{}", line);
    }

    Ok(())
}
