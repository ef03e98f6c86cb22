use crate::bundle::PolicyBundle;
use crate::error::PolicyError;
use crate::matcher::ImageMatcher;
use std::collections::HashSet;
use uuid::Uuid;

/// Referential and structural checks the scanner relies on but never
/// reports. A bundle failing these is silently replaced by the scanner's
/// default policy.
pub struct BundleValidator;

impl BundleValidator {
    pub fn validate(bundle: &PolicyBundle) -> Result<(), PolicyError> {
        if bundle.policies.is_empty() {
            return Err(PolicyError::Integrity(
                "Bundle must contain at least one policy".to_string(),
            ));
        }

        Self::ensure_unique("mapping", bundle.mappings.iter().map(|m| m.id))?;
        Self::ensure_unique("policy", bundle.policies.iter().map(|p| p.id))?;
        Self::ensure_unique("whitelist", bundle.whitelists.iter().map(|w| w.id))?;

        Self::validate_references(bundle)?;

        for mapping in &bundle.mappings {
            ImageMatcher::for_mapping(mapping)?;
        }

        Ok(())
    }

    /// Every id a mapping references must exist in the bundle
    fn validate_references(bundle: &PolicyBundle) -> Result<(), PolicyError> {
        for mapping in &bundle.mappings {
            for id in &mapping.policy_ids {
                if bundle.policy(id).is_none() {
                    return Err(PolicyError::Integrity(format!(
                        "Mapping '{}' references unknown policy {}",
                        mapping.name, id
                    )));
                }
            }

            for id in &mapping.whitelist_ids {
                if bundle.whitelist(id).is_none() {
                    return Err(PolicyError::Integrity(format!(
                        "Mapping '{}' references unknown whitelist {}",
                        mapping.name, id
                    )));
                }
            }
        }

        Ok(())
    }

    fn ensure_unique(kind: &str, ids: impl Iterator<Item = Uuid>) -> Result<(), PolicyError> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(PolicyError::Integrity(format!(
                    "Duplicate {} id {}",
                    kind, id
                )));
            }
        }
        Ok(())
    }
}
