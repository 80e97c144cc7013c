use tracing::{error, info};

use crate::config::database::DatabaseConfig;
use crate::error::{ConfigError, ResetError};
use crate::services::store::{Connector, MongoConnector, RecordKind, RecordStore};

/// Deleted-counts from one reset run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClearReport {
    pub users: u64,
    pub businesses: u64,
    pub deals: u64,
}

impl ClearReport {
    pub fn count(&self, kind: RecordKind) -> u64 {
        match kind {
            RecordKind::User => self.users,
            RecordKind::Business => self.businesses,
            RecordKind::Deal => self.deals,
        }
    }

    pub fn total(&self) -> u64 {
        self.users + self.businesses + self.deals
    }

    fn record(&mut self, kind: RecordKind, deleted: u64) {
        match kind {
            RecordKind::User => self.users = deleted,
            RecordKind::Business => self.businesses = deleted,
            RecordKind::Deal => self.deals = deleted,
        }
    }
}

/// Deletes every record from each collection in [`RecordKind::ALL`] order.
///
/// Stops at the first failed delete. Collections already cleared stay cleared.
pub async fn clear_database<S: RecordStore>(store: &S) -> Result<ClearReport, ResetError> {
    let mut report = ClearReport::default();

    for kind in RecordKind::ALL {
        let deleted = store
            .delete_all(kind)
            .await
            .map_err(|source| ResetError::Delete { kind, source })?;

        info!(collection = kind.collection_name(), "Deleted {} {}", deleted, kind.label());
        report.record(kind, deleted);
    }

    info!("Database cleared successfully");
    Ok(report)
}

/// Connects, clears the database and always disconnects afterwards.
///
/// Failures are logged here once and returned unchanged. Once a handle has
/// been acquired it is released exactly once, even when the server turns out
/// to be unreachable. Nothing is deleted unless the store verifies.
pub async fn run<C: Connector>(connector: &C) -> Result<ClearReport, ResetError> {
    let store = match connector.connect().await {
        Ok(store) => store,
        Err(source) => return Err(log_failure(ResetError::Connect(source))),
    };

    let outcome = clear_verified(&store).await.map_err(log_failure);

    store.disconnect().await;
    info!("Disconnected from database");

    outcome
}

/// Runs against MongoDB with settings read by the binary. A configuration
/// error is logged and reported like any other failure.
pub async fn run_configured(
    config: Result<DatabaseConfig, ConfigError>,
) -> Result<ClearReport, ResetError> {
    match config {
        Ok(config) => run(&MongoConnector::new(config)).await,
        Err(err) => Err(log_failure(err.into())),
    }
}

async fn clear_verified<S: RecordStore>(store: &S) -> Result<ClearReport, ResetError> {
    store.verify().await.map_err(ResetError::Connect)?;
    info!("Connected to database");

    clear_database(store).await
}

/// Process exit status for a finished run.
pub fn exit_code(outcome: &Result<ClearReport, ResetError>) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn log_failure(err: ResetError) -> ResetError {
    error!("Error clearing database: {}", err);
    err
}
