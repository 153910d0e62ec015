//! JSON payload arguments.

use std::fs;

use serde_json::Value;

/// Read a `--json` argument: inline JSON, or `@path` to read it from a file.
pub(crate) fn read_json(argument: &str) -> Result<Value, String> {
    let text = match argument.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .map_err(|error| format!("failed to read {path}: {error}"))?,
        None => argument.to_owned(),
    };

    serde_json::from_str(&text).map_err(|error| format!("invalid JSON payload: {error}"))
}

/// Overlay the top-level keys of `patch` onto `base`.
pub(crate) fn merge_top_level(base: Value, patch: Value) -> Result<Value, String> {
    let (Value::Object(mut base), Value::Object(patch)) = (base, patch) else {
        return Err("edit payload must be a JSON object".to_string());
    };

    base.extend(patch);

    Ok(Value::Object(base))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn merge_replaces_only_given_keys() -> TestResult {
        let merged = merge_top_level(
            json!({ "id": "1", "title": "Desserts", "extra": true }),
            json!({ "title": "Sweets" }),
        )?;

        assert_eq!(merged, json!({ "id": "1", "title": "Sweets", "extra": true }));

        Ok(())
    }

    #[test]
    fn merge_rejects_non_objects() {
        let result = merge_top_level(json!({ "id": "1" }), json!(["title"]));

        assert!(result.is_err(), "arrays cannot patch records");
    }

    #[test]
    fn reads_payload_from_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("category.json");
        fs::write(&path, r#"{"title":"Grills"}"#)?;

        let value = read_json(&format!("@{}", path.display()))?;

        assert_eq!(value, json!({ "title": "Grills" }));

        Ok(())
    }
}
