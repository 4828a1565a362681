//! Resource models
//!
//! Resources form a three-level tree: a resource holds groups, and each
//! group holds links.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub groups: Vec<ResourceGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ResourceLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCategory {
    pub id: i64,
    pub name: String,
}

impl Resource {
    /// All links of the resource, in group order
    pub fn links(&self) -> impl Iterator<Item = &ResourceLink> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }
}
