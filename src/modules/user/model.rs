use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Business,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub phone: String,
    #[serde(default)]
    pub preferences: Vec<String>,
    pub notifications_push: bool,
    pub created_at: bson::DateTime,
}

impl User {
    pub fn new(username: String, email: String, role: UserRole, phone: String) -> Self {
        Self {
            id: None,
            username,
            email,
            role,
            phone,
            preferences: Vec::new(),
            notifications_push: true,
            created_at: bson::DateTime::now(),
        }
    }
}
