//! Probes the client backend and reports whether it answers.

use dotenvy::dotenv;

use bank_admin::gateway::errors::GatewayResult;
use bank_admin::gateway::{ClientReader, HttpGateway};
use bank_admin::load_api_config;

async fn check<R>(gateway: &R) -> GatewayResult<String>
where
    R: ClientReader + ?Sized,
{
    let count = gateway.ping().await?;
    Ok(format!("Connection succeeded: {count} clients retrieved."))
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let api_config = match load_api_config() {
        Ok(api_config) => api_config,
        Err(err) => {
            log::error!("Error loading api config: {}", err);
            std::process::exit(1);
        }
    };

    let gateway = match HttpGateway::new(&api_config) {
        Ok(gateway) => gateway,
        Err(err) => {
            log::error!("Failed to build the gateway: {err}");
            std::process::exit(1);
        }
    };

    log::info!("Checking {}", gateway.base_url());

    match check(&gateway).await {
        Ok(report) => println!("{report}"),
        Err(err) => {
            eprintln!("Connection error: {err}");
            std::process::exit(1);
        }
    }
}
