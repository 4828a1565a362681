//! Article models
//!
//! Article content is the rich-text editor's HTML, stored and passed as is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Paginated;
use crate::utils::helpers::{parse_backend_timestamp, strip_html, truncate_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    /// HTML produced by the rich-text editor
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    /// File names of images embedded in `content`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Output of the rich-text editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorData {
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// Bare HTML payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlData {
    pub html: String,
}

/// Response wrapping a single piece of stored content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub content: String,
}

/// Page of articles
pub type ArticlePage = Paginated<Article>;

impl Article {
    /// Short plain-text teaser for listings
    ///
    /// Uses the stored snippet when the backend provides one, otherwise
    /// derives it from the HTML content.
    pub fn plain_snippet(&self, max_len: usize) -> String {
        match self.snippet.as_deref().map(str::trim) {
            Some(snippet) if !snippet.is_empty() => truncate_text(snippet, max_len),
            _ => truncate_text(&strip_html(&self.content), max_len),
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.date_created.as_deref().and_then(parse_backend_timestamp)
    }

    /// Editor payload for this article's content
    pub fn editor_data(&self) -> EditorData {
        EditorData {
            html: self.content.clone(),
            images: self.photos.clone(),
        }
    }
}
