use crate::modules::deal::model::Deal;
use bson::doc;
use mongodb::{Collection, Database};

pub const COLLECTION_NAME: &str = "deals";

pub struct DealCrud {
    collection: Collection<Deal>,
}

impl DealCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    pub async fn insert_many(&self, deals: Vec<Deal>) -> Result<usize, mongodb::error::Error> {
        let result = self.collection.insert_many(deals).await?;
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
