//! Latest bulletin and event teasers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::helpers::parse_backend_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestBulletin {
    pub id: i64,
    pub title: String,
    pub date_created: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestEvent {
    pub name: String,
    pub date_created: String,
}

impl LatestBulletin {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_backend_timestamp(&self.date_created)
    }
}

impl LatestEvent {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_backend_timestamp(&self.date_created)
    }
}
