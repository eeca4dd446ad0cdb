use dotenv::dotenv;
use std::{env, net::SocketAddr, time::Duration};

use crate::utils::errors::SettingsError;

pub const MONGODB_ENDPOINT_VAR: &str = "MONGODB_ENDPOINT";
pub const MONGODB_DATABASE_VAR: &str = "MONGODB_DATABASE";
pub const MONGODB_COLLECTION_VAR: &str = "MONGODB_COLLECTION";
pub const MONGODB_TIMEOUT_VAR: &str = "MONGODB_TIMEOUT_SECS";
pub const APP_PORT_VAR: &str = "APP_PORT";
pub const METRICS_ADDR_VAR: &str = "METRICS_ADDR";

pub const DEFAULT_DATABASE: &str = "enbuild";
pub const DEFAULT_COLLECTION: &str = "MlDataset";
pub const DEFAULT_PORT: &str = ":8081";
pub const DEFAULT_DB_TIMEOUT: Duration = Duration::from_secs(10);

/// Process configuration, built once at start-up and handed to the
/// components that need it.
#[derive(Debug, Clone)]
pub struct Settings {
    /// `host:port` the HTTP server binds to.
    pub listen_addr: String,
    pub mongodb_endpoint: String,
    pub database: String,
    pub collection: String,
    /// Upper bound for every database round trip (ping included).
    pub db_timeout: Duration,
    pub metrics_addr: Option<SocketAddr>,
}

impl Settings {
    pub fn new() -> Result<Self, SettingsError> {
        dotenv().ok(); // loads `.env` file automatically

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mongodb_endpoint =
            get(MONGODB_ENDPOINT_VAR).ok_or(SettingsError::Missing(MONGODB_ENDPOINT_VAR))?;

        let database = get(MONGODB_DATABASE_VAR).unwrap_or_else(|| {
            log::info!(
                "missing environment variable: {MONGODB_DATABASE_VAR} defaulting to {DEFAULT_DATABASE}"
            );
            DEFAULT_DATABASE.to_string()
        });

        let collection = get(MONGODB_COLLECTION_VAR).unwrap_or_else(|| {
            log::info!(
                "missing environment variable: {MONGODB_COLLECTION_VAR} defaulting to {DEFAULT_COLLECTION}"
            );
            DEFAULT_COLLECTION.to_string()
        });

        let port = get(APP_PORT_VAR).unwrap_or_else(|| DEFAULT_PORT.to_string());
        let listen_addr = normalize_listen_addr(&port).ok_or_else(|| SettingsError::Invalid {
            var: APP_PORT_VAR,
            value: port.clone(),
        })?;

        let db_timeout = match get(MONGODB_TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(SettingsError::Invalid {
                    var: MONGODB_TIMEOUT_VAR,
                    value: raw,
                })?,
            None => DEFAULT_DB_TIMEOUT,
        };

        let metrics_addr = get(METRICS_ADDR_VAR)
            .map(|raw| {
                raw.trim().parse::<SocketAddr>().map_err(|_| SettingsError::Invalid {
                    var: METRICS_ADDR_VAR,
                    value: raw,
                })
            })
            .transpose()?;

        Ok(Self {
            listen_addr,
            mongodb_endpoint,
            database,
            collection,
            db_timeout,
            metrics_addr,
        })
    }
}

/// Accepts `8081`, `:8081` or `host:port`; a bare port binds all interfaces.
fn normalize_listen_addr(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let (host, port) = match raw.rsplit_once(':') {
        Some(("", port)) => ("0.0.0.0", port),
        Some((host, port)) => (host, port),
        None => ("0.0.0.0", raw),
    };
    port.parse::<u16>().ok()?;
    Some(format!("{host}:{port}"))
}
