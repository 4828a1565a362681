//! Event models

use serde::{Deserialize, Serialize};

use super::Paginated;

/// A single event entry linking out to its page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub event_group_id: i64,
    pub name: String,
    pub link_url: String,
}

/// A titled group of events with a cover photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventGroup {
    pub id: i64,
    pub title: String,
    pub photo_file_name: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Page of event groups
pub type EventGroupResponse = Paginated<EventGroup>;
