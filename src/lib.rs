pub mod domain;
#[cfg(feature = "client")]
pub mod dto;
pub mod forms;
#[cfg(feature = "client")]
pub mod gateway;
pub mod models;
#[cfg(feature = "client")]
pub mod services;

/// Loads the backend settings.
///
/// Sources, later ones winning: `config/default.yaml`, `config/{APP_ENV}.yaml`
/// (optional, `APP_ENV` defaults to `local`) and `APP_*` environment variables.
#[cfg(feature = "client")]
pub fn load_api_config() -> Result<models::config::ApiConfig, config::ConfigError> {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    config::Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize::<models::config::ApiConfig>()
}
