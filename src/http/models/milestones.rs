//! Request and response models for the milestone configuration routes

use crate::definitions::groups::GroupConfig;
use serde::{Deserialize, Serialize};

/// Version reported in milestone configuration envelopes
pub const CONFIG_VERSION: &str = "1.0";

/// Timestamp reported in milestone configuration envelopes
pub const CONFIG_LAST_UPDATED: &str = "2025-01-02T00:00:00Z";

/// Query parameters for requesting a milestone configuration
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestonesQuery {
    /// The group to load the configuration for, the server falls
    /// back to a default group when this is omitted
    pub group_id: Option<String>,
}

/// Envelope wrapping a [GroupConfig] with versioning metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestonesResponse {
    pub group_id: String,
    pub version: &'static str,
    pub last_updated: &'static str,
    pub config: GroupConfig,
}

/// Listing of the currently known group identifiers
#[derive(Debug, Serialize)]
pub struct GroupListResponse {
    pub groups: Vec<String>,
    pub count: usize,
}

/// Acknowledgement returned after a configuration write
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub message: String,
    pub group_id: String,
}
