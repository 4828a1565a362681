//! Executive board models
//!
//! A cadence is one term of the executive board. Executive members hold
//! memberships in one or more cadences.

use serde::{Deserialize, Serialize};

/// A member's role within one cadence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub full_name: String,
    pub department: String,
    pub cadence_id: i64,
    pub position: i32,
    pub role: String,
    pub photo_file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub phone: String,
    pub about: String,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

/// Cadence as sent when creating or editing a board term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cadence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub position: i32,
    #[serde(default)]
    pub member_ids: Vec<i64>,
}

/// Flattened view of an executive member inside one cadence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadenceMember {
    pub executive_member_id: i64,
    pub full_name: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub about: String,
    pub role: String,
    pub position: i32,
    pub photo_file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadenceWithMembers {
    pub id: i64,
    pub name: String,
    pub position: i32,
    #[serde(default)]
    pub members: Vec<CadenceMember>,
}

impl CadenceWithMembers {
    /// Members ordered by their board position; ties keep backend order
    pub fn members_by_position(&self) -> Vec<&CadenceMember> {
        let mut members: Vec<&CadenceMember> = self.members.iter().collect();
        members.sort_by_key(|m| m.position);
        members
    }
}

impl ExecutiveMember {
    /// The membership held in `cadence_id`, if any
    pub fn membership_in(&self, cadence_id: i64) -> Option<&Membership> {
        self.memberships.iter().find(|m| m.cadence_id == cadence_id)
    }
}
