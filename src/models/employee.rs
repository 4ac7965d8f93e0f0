use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Persisted shape of an employee record. The store assigns `_id` on insert;
/// `created_at`/`updated_at` are store-internal and never leave the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub salary: f64,
    pub age: f64,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn new(name: String, salary: f64, age: f64) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name,
            salary,
            age,
            created_at: now,
            updated_at: now,
        }
    }
}
