use async_trait::async_trait;
use mongodb::{Client, Database};
use std::fmt;

use crate::config::database::{self, DatabaseConfig};
use crate::error::StoreError;
use crate::modules::{business, deal, user};

/// The record collections wiped by a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    User,
    Business,
    Deal,
}

impl RecordKind {
    /// Deletion order.
    pub const ALL: [RecordKind; 3] = [RecordKind::User, RecordKind::Business, RecordKind::Deal];

    pub fn collection_name(self) -> &'static str {
        match self {
            RecordKind::User => user::crud::COLLECTION_NAME,
            RecordKind::Business => business::crud::COLLECTION_NAME,
            RecordKind::Deal => deal::crud::COLLECTION_NAME,
        }
    }

    /// Plural noun used in log output.
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::User => "users",
            RecordKind::Business => "businesses",
            RecordKind::Deal => "deals",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An open session against the data store.
///
/// `disconnect` takes the store by value, so a released handle cannot be
/// reused or released twice.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Confirms the store is reachable. Runs after the handle is acquired, so a
    /// failure here still ends in `disconnect`.
    async fn verify(&self) -> Result<(), StoreError>;

    /// Removes every record of `kind` and returns how many were removed.
    async fn delete_all(&self, kind: RecordKind) -> Result<u64, StoreError>;

    async fn disconnect(self);
}

#[async_trait]
pub trait Connector: Send + Sync {
    type Store: RecordStore;

    /// Acquires a handle. An error here means no handle exists to release.
    async fn connect(&self) -> Result<Self::Store, StoreError>;
}

pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    pub fn new(client: Client, db: Database) -> Self {
        Self { client, db }
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn verify(&self) -> Result<(), StoreError> {
        database::ping(&self.db).await?;
        Ok(())
    }

    async fn delete_all(&self, kind: RecordKind) -> Result<u64, StoreError> {
        let deleted = match kind {
            RecordKind::User => user::crud::UserCrud::new(&self.db).delete_all().await?,
            RecordKind::Business => business::crud::BusinessCrud::new(&self.db).delete_all().await?,
            RecordKind::Deal => deal::crud::DealCrud::new(&self.db).delete_all().await?,
        };
        Ok(deleted)
    }

    async fn disconnect(self) {
        self.client.shutdown().await;
    }
}

pub struct MongoConnector {
    config: DatabaseConfig,
}

impl MongoConnector {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Connector for MongoConnector {
    type Store = MongoStore;

    async fn connect(&self) -> Result<MongoStore, StoreError> {
        let (client, db) = database::open(&self.config).await?;
        Ok(MongoStore::new(client, db))
    }
}
