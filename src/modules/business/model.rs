use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Business profile owned by a user with the `business` role.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Business {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact_phone: String,
    pub logo: Option<String>,
    pub owner_user: ObjectId,
    pub created_at: bson::DateTime,
}

impl Business {
    pub fn new(name: String, owner_user: ObjectId) -> Self {
        Self {
            id: None,
            name,
            description: String::new(),
            contact_phone: String::new(),
            logo: None,
            owner_user,
            created_at: bson::DateTime::now(),
        }
    }
}
