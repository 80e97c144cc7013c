use crate::modules::user::model::User;
use bson::doc;
use mongodb::{Collection, Database};

pub const COLLECTION_NAME: &str = "users";

pub struct UserCrud {
    collection: Collection<User>,
}

impl UserCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    pub async fn insert_many(&self, users: Vec<User>) -> Result<usize, mongodb::error::Error> {
        let result = self.collection.insert_many(users).await?;
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
