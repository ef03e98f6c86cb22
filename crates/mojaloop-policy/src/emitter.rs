use crate::bundle::PolicyBundle;
use crate::defaults;
use crate::error::{PolicyError, Result};
use crate::validator::BundleValidator;
use std::path::Path;

/// Render a bundle as two-space indented JSON, keys in declaration order.
pub fn render(bundle: &PolicyBundle) -> Result<String> {
    Ok(serde_json::to_string_pretty(bundle)?)
}

/// Validate, render and write `bundle` to `path`, replacing any existing file.
pub fn write_bundle(bundle: &PolicyBundle, path: &Path) -> Result<()> {
    BundleValidator::validate(bundle)?;

    let json = render(bundle)?;
    std::fs::write(path, json.as_bytes()).map_err(|source| PolicyError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        bytes = json.len(),
        policies = bundle.policies.len(),
        "Policy bundle written"
    );
    Ok(())
}

/// Build the default bundle stamped with the current time and write it to `path`.
pub fn generate(path: &Path) -> Result<PolicyBundle> {
    let bundle = defaults::mojaloop_default(chrono::Utc::now().timestamp());
    tracing::debug!(last_updated = bundle.last_updated, "Built {} bundle", bundle.id);

    write_bundle(&bundle, path)?;
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_two_space_indent() {
        let json = render(&defaults::mojaloop_default(1_600_000_000)).expect("render failed");

        assert!(json.starts_with("{\n  \"id\": \"mojaloop-default\",\n  \"name\""));
        assert!(json.contains("\n  \"last_updated\": 1600000000,\n"));
        assert!(json.contains("\n      \"image\": {\n        \"type\": \"tag\",\n        \"value\": \"*\"\n      },"));
        assert!(!json.ends_with('\n'));
    }

    #[test]
    fn test_render_top_level_key_order() {
        let json = render(&defaults::mojaloop_default(1)).expect("render failed");

        let keys = [
            "\"id\"",
            "\"name\"",
            "\"version\"",
            "\"description\"",
            "\"last_updated\"",
            "\"blacklisted_images\"",
            "\"mappings\"",
            "\"policies\"",
            "\"whitelisted_images\"",
            "\"whitelists\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\n  {}", k)).expect("missing key"))
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn test_empty_lists_render_inline() {
        let json = render(&defaults::mojaloop_default(1)).expect("render failed");

        assert!(json.contains("\"blacklisted_images\": [],"));
        assert!(json.contains("\"whitelist_ids\": []"));
        assert!(json.contains("\"params\": [],"));
        assert!(json.ends_with("\"whitelists\": []\n}"));
    }

    #[test]
    fn test_generate_stamps_current_time() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("policy.json");

        let before = chrono::Utc::now().timestamp();
        let bundle = generate(&path).expect("generate failed");
        let after = chrono::Utc::now().timestamp();

        assert!(bundle.last_updated >= before && bundle.last_updated <= after);
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_bundle_not_written() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("policy.json");

        let mut bundle = defaults::mojaloop_default(1);
        bundle.policies.clear();

        assert!(write_bundle(&bundle, &path).is_err());
        assert!(!path.exists(), "No file should be written for an invalid bundle");
    }
}
