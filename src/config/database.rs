use bson::doc;
use mongodb::{Client, Database};
use std::env;

use crate::error::ConfigError;

pub const DEFAULT_DATABASE: &str = "minglin";

/// Connection settings for the backend's MongoDB instance.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    /// Explicit database name. When unset the URI's default database is used.
    pub database: Option<String>,
}

impl DatabaseConfig {
    /// Reads `MONGO_URI` (or `MONGODB_URI`) and `MONGODB_DATABASE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let uri = ["MONGO_URI", "MONGODB_URI"]
            .into_iter()
            .filter_map(&lookup)
            .find(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingUri)?;

        let database = lookup("MONGODB_DATABASE").filter(|name| !name.trim().is_empty());

        Ok(Self { uri, database })
    }

    fn database_for(&self, client: &Client) -> Database {
        match &self.database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        }
    }
}

/// Builds a client for the configured URI. Fails only on a malformed URI or
/// unresolvable SRV record; the driver does not contact the server yet.
pub async fn open(config: &DatabaseConfig) -> Result<(Client, Database), mongodb::error::Error> {
    let client = Client::with_uri_str(&config.uri).await?;
    let db = config.database_for(&client);
    Ok((client, db))
}

/// Round-trips a `ping` so an unreachable or unauthorised server is reported
/// before any work is issued against it.
pub async fn ping(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
