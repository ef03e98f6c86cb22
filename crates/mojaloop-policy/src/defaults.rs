//! The built-in `mojaloop-default` bundle.
//!
//! Based on the Docker CIS 1.13.0 image content checks. Edit the bundle
//! here; `BundleValidator` catches dangling mapping ids at generation time.

use crate::bundle::{
    Gate, ImageMatchType, ImageSelector, MappingRule, Policy, PolicyBundle, PolicyRule,
    RuleAction, SCHEMA_VERSION,
};
use uuid::Uuid;

pub const BUNDLE_ID: &str = "mojaloop-default";
pub const BUNDLE_DESCRIPTION: &str =
    "Mojaloop default Anchore policy, based on the Docker CIS 1.13.0 image content checks.";

pub const DEFAULT_MAPPING_ID: Uuid = Uuid::from_u128(0x042d5b75_ed9d_4fb7_8d41_ec174102f696);
pub const CIS_FILE_CHECKS_ID: Uuid = Uuid::from_u128(0xf2de1d56_c7f1_4b5a_92e0_135a27feae45);

const SUID_RULE_ID: Uuid = Uuid::from_u128(0x41b657bb_86e5_43ba_8f35_18edc3a465f9);
const SECRET_SCAN_RULE_ID: Uuid = Uuid::from_u128(0xc0e5e302_764d_4b19_9fbd_5c7b0b558673);

/// Wildcard matching every registry, repository and tag
const MATCH_ALL: &str = "*";

/// Build the default bundle stamped with `last_updated` (Unix seconds).
pub fn mojaloop_default(last_updated: i64) -> PolicyBundle {
    PolicyBundle {
        id: BUNDLE_ID.to_string(),
        name: BUNDLE_ID.to_string(),
        version: SCHEMA_VERSION.to_string(),
        description: BUNDLE_DESCRIPTION.to_string(),
        last_updated,
        blacklisted_images: vec![],
        mappings: vec![default_mapping()],
        policies: vec![cis_file_checks()],
        whitelisted_images: vec![],
        whitelists: vec![],
    }
}

fn default_mapping() -> MappingRule {
    MappingRule {
        comment: "default mapping that matches all registry/repo:tag images".to_string(),
        id: DEFAULT_MAPPING_ID,
        image: ImageSelector {
            kind: ImageMatchType::Tag,
            value: MATCH_ALL.to_string(),
        },
        name: "default".to_string(),
        policy_ids: vec![CIS_FILE_CHECKS_ID],
        registry: MATCH_ALL.to_string(),
        repository: MATCH_ALL.to_string(),
        whitelist_ids: vec![],
    }
}

/// Docker CIS sections 4.8 and 4.10.
fn cis_file_checks() -> Policy {
    Policy {
        comment: "Docker CIS section 4.8 and 4.10 checks.".to_string(),
        id: CIS_FILE_CHECKS_ID,
        name: "CIS File Checks".to_string(),
        rules: vec![
            PolicyRule {
                action: RuleAction::Warn,
                comment: "section 4.8".to_string(),
                gate: Gate::Files,
                id: SUID_RULE_ID,
                params: vec![],
                trigger: "suid_or_guid_set".to_string(),
            },
            PolicyRule {
                action: RuleAction::Warn,
                comment: "section 4.10".to_string(),
                gate: Gate::SecretScans,
                id: SECRET_SCAN_RULE_ID,
                params: vec![],
                trigger: "content_regex_checks".to_string(),
            },
        ],
        version: SCHEMA_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::BundleValidator;

    #[test]
    fn test_default_bundle_identity() {
        let bundle = mojaloop_default(1_700_000_000);

        assert_eq!(bundle.id, "mojaloop-default");
        assert_eq!(bundle.name, "mojaloop-default");
        assert_eq!(bundle.version, "1_0");
        assert_eq!(bundle.last_updated, 1_700_000_000);
    }

    #[test]
    fn test_default_bundle_passes_validation() {
        let bundle = mojaloop_default(1);
        assert!(BundleValidator::validate(&bundle).is_ok());
    }

    #[test]
    fn test_default_mapping_references_cis_file_checks() {
        let bundle = mojaloop_default(1);
        let mapping = &bundle.mappings[0];

        assert_eq!(mapping.policy_ids, vec![CIS_FILE_CHECKS_ID]);
        assert!(mapping.whitelist_ids.is_empty());
        assert_eq!(
            bundle.policy(&CIS_FILE_CHECKS_ID).map(|p| p.name.as_str()),
            Some("CIS File Checks")
        );
    }

    #[test]
    fn test_cis_rules_are_warnings() {
        let policy = cis_file_checks();

        assert_eq!(policy.rules.len(), 2);
        assert!(policy.rules.iter().all(|r| r.action == RuleAction::Warn));
        assert_eq!(policy.rules[0].gate, Gate::Files);
        assert_eq!(policy.rules[1].gate, Gate::SecretScans);
    }

    #[test]
    fn test_reserved_image_lists_empty() {
        let bundle = mojaloop_default(1);
        assert!(bundle.blacklisted_images.is_empty());
        assert!(bundle.whitelisted_images.is_empty());
        assert!(bundle.whitelists.is_empty());
    }
}
