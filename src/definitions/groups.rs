//! Seed group milestone configurations embedded in the binary,
//! used to populate the registry at startup

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Seed group definitions (3)
const GROUP_DEFINITIONS: &str = include_str!("../resources/data/groupConfigs.json");

/// Milestone configuration for a single group.
///
/// Field values are stored as raw JSON: the server requires the six
/// top-level keys to be present but deliberately does not validate
/// their contents, whatever the client sends is stored and served
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfig {
    /// Skill level thresholds of interest (e.g. 70, 90, 99)
    pub level_milestones: Value,
    /// Named quest/achievement capes to track
    pub quest_milestones: Value,
    /// Named diary/achievement tiers
    pub achievement_milestones: Value,
    /// Substrings matched against drop names
    pub rare_drops: Value,
    /// Boss names to track kill counts for
    pub boss_kills: Value,
    /// Arbitrary named numeric goals keyed by label
    pub custom_milestones: Value,
}

impl GroupConfig {
    /// Top-level keys a configuration body must contain, in the
    /// order they are checked when validating a write
    pub const REQUIRED_FIELDS: [&'static str; 6] = [
        "levelMilestones",
        "questMilestones",
        "achievementMilestones",
        "rareDrops",
        "bossKills",
        "customMilestones",
    ];
}

/// A seed entry pairing a group identifier with its configuration
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDefinition {
    pub group_id: String,
    pub config: GroupConfig,
}

/// Loads the embedded seed definitions in their declared order
pub fn seed_groups() -> anyhow::Result<Vec<GroupDefinition>> {
    debug!("Loading seed group configs");
    let values: Vec<GroupDefinition> =
        serde_json::from_str(GROUP_DEFINITIONS).context("Failed to load seed group configs")?;
    debug!("Loaded {} seed group config(s)", values.len());
    Ok(values)
}
