//! Home page models: intro text, carousel and achievements

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::helpers::parse_backend_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeText {
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselPhoto {
    pub id: i64,
    pub photo_file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    pub link: String,
    #[serde(default)]
    pub images: Vec<AchievementImage>,
}

/// Image attached to an achievement
///
/// `achievement_id` refers back to the owning achievement by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementImage {
    pub id: i64,
    pub photo_file_name: String,
    pub achievement_id: i64,
}

/// Achievement payload for creation; images are uploaded file names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementToUpload {
    pub text: String,
    pub link: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Achievement {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.date_created.as_deref().and_then(parse_backend_timestamp)
    }

    /// Upload payload carrying the same text, link and image file names
    pub fn to_upload(&self) -> AchievementToUpload {
        AchievementToUpload {
            text: self.text.clone(),
            link: self.link.clone(),
            images: self.images.iter().map(|i| i.photo_file_name.clone()).collect(),
        }
    }
}
