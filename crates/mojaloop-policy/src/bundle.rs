use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Schema version string used by the bundle and each policy/whitelist in it.
pub const SCHEMA_VERSION: &str = "1_0";

/// An anchore-cli compatible policy bundle.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyBundle {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,

    /// Unix timestamp in seconds of when the bundle was generated
    pub last_updated: i64,

    #[serde(default)]
    pub blacklisted_images: Vec<ImageReference>,

    pub mappings: Vec<MappingRule>,
    pub policies: Vec<Policy>,

    #[serde(default)]
    pub whitelisted_images: Vec<ImageReference>,

    #[serde(default)]
    pub whitelists: Vec<Whitelist>,
}

/// Binds an image pattern to the policies and whitelists evaluated against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRule {
    pub comment: String,
    pub id: Uuid,
    pub image: ImageSelector,
    pub name: String,
    pub policy_ids: Vec<Uuid>,
    pub registry: String,
    pub repository: String,
    #[serde(default)]
    pub whitelist_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSelector {
    #[serde(rename = "type")]
    pub kind: ImageMatchType,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMatchType {
    Tag,
    Digest,
    Id,
}

/// Image entry for the reserved black/white image lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageReference {
    pub id: Uuid,
    pub name: String,
    pub registry: String,
    pub repository: String,
    pub image: ImageSelector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub comment: String,
    pub id: Uuid,
    pub name: String,
    pub rules: Vec<PolicyRule>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRule {
    pub action: RuleAction,
    pub comment: String,
    pub gate: Gate,
    pub id: Uuid,
    #[serde(default)]
    pub params: Vec<RuleParam>,
    pub trigger: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleParam {
    pub name: String,
    pub value: String,
}

/// Outcome a rule contributes when its trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleAction {
    Go,
    Warn,
    Stop,
}

/// Check category evaluated against a scanned image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    Always,
    Dockerfile,
    Files,
    Licenses,
    Metadata,
    Npms,
    Gems,
    Packages,
    PasswdFile,
    SecretScans,
    Vulnerabilities,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Whitelist {
    pub comment: String,
    pub id: Uuid,
    pub items: Vec<WhitelistItem>,
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhitelistItem {
    pub comment: String,
    pub gate: Gate,
    pub id: Uuid,
    /// Opaque trigger instance id reported by the scanner
    pub trigger_id: String,
}

impl PolicyBundle {
    pub fn policy(&self, id: &Uuid) -> Option<&Policy> {
        self.policies.iter().find(|p| &p.id == id)
    }

    pub fn whitelist(&self, id: &Uuid) -> Option<&Whitelist> {
        self.whitelists.iter().find(|w| &w.id == id)
    }
}
