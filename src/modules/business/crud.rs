use crate::modules::business::model::Business;
use bson::doc;
use mongodb::{Collection, Database};

pub const COLLECTION_NAME: &str = "businesses";

pub struct BusinessCrud {
    collection: Collection<Business>,
}

impl BusinessCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    pub async fn insert_many(&self, businesses: Vec<Business>) -> Result<usize, mongodb::error::Error> {
        let result = self.collection.insert_many(businesses).await?;
        Ok(result.inserted_ids.len())
    }

    pub async fn count(&self) -> Result<u64, mongodb::error::Error> {
        self.collection.count_documents(doc! {}).await
    }

    pub async fn delete_all(&self) -> Result<u64, mongodb::error::Error> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
