use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub api: ApiSettings,
    pub credentials: CredentialSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Full URL of the dashboard statistics endpoint.
    pub stats_endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CredentialSettings {
    /// Key-value JSON file holding the operator's `token`.
    pub store_path: String,
}

/// Load `config/dashboard.{toml,...}`, overridable through `DASHBOARD__*`
/// environment variables (e.g. `DASHBOARD__API__STATS_ENDPOINT`).
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = defaults()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn defaults() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.listen_addr", "0.0.0.0:8080")?
        .set_default("credentials.store_path", "token-store.json")?)
}
