use serde::Deserialize;

/// Configuration options for the storefront server.
///
/// Loaded from `config/default.yaml`, an optional `config/<APP_ENV>.yaml`
/// overlay and `APP__`-prefixed environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind the HTTP listener to.
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Populate an empty catalog with the festival collection on startup.
    #[serde(default = "default_seed_catalog")]
    pub seed_catalog: bool,
}

fn default_seed_catalog() -> bool {
    true
}
