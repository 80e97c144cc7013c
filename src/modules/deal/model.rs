use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Deal {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub business: ObjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub cta: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub end_time: DateTime<Utc>,
    pub is_active: bool,
    pub views: u32,
    pub clicks: u32,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl Deal {
    pub fn new(business: ObjectId, title: String, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: None,
            business,
            title,
            description: String::new(),
            category: String::new(),
            cta: String::new(),
            start_time,
            end_time,
            is_active: true,
            views: 0,
            clicks: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
