mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() {
    startup::init_tracing();

    tracing::info!("Starting FAQ bot");

    if let Err(e) = run().await {
        tracing::error!("Bot crashed with error: {:?}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Guarding FAQ channel {}", config.faq_channel_id);

    bot::start::start_bot(&config).await
}
