pub mod augment;
pub mod catalog;
pub mod error;
pub mod guide;
pub mod plan;
pub mod query;
pub mod registry;
pub mod settings;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use error::{PlaybookError, SettingsError};
pub use plan::{plan_feature, FeaturePlan, FeatureRequest, Phase};
pub use query::{get_playbook, list_playbooks};
pub use registry::Registry;
pub use settings::Settings;

// --- Types ---

/// A named, categorized template. `template` is passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybookRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub template: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybookSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
}

impl From<&PlaybookRecord> for PlaybookSummary {
    fn from(record: &PlaybookRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
        }
    }
}

/// Result of `list_playbooks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybookListing {
    pub total_playbooks: usize,
    pub playbooks: Vec<PlaybookSummary>,
    pub categories: BTreeSet<String>,
}

/// A found playbook plus its id-specific augmentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybookDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub template: serde_json::Value,
    pub usage_instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_structure: Option<serde_json::Value>,
}

/// Result of `get_playbook`. An unknown id is data, not a fault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PlaybookLookup {
    Found(PlaybookDetail),
    NotFound {
        error: String,
        available_playbooks: Vec<String>,
    },
}

impl PlaybookLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, PlaybookLookup::Found(_))
    }
}
