//! Keep an existing config file in step with the current `Config` fields.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every config file is expected to carry, with the value written when
/// one is missing.
fn expected_fields() -> AppResult<Vec<(String, Value)>> {
    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;

    let map = defaults
        .as_mapping()
        .ok_or_else(|| AppError::Config("default config is not a mapping".into()))?;

    Ok(map
        .iter()
        .filter_map(|(k, v)| k.as_str().map(|k| (k.to_string(), v.clone())))
        .collect())
}

fn read_mapping(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let yaml: Value = if content.trim().is_empty() {
        Value::Mapping(Default::default())
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?
    };

    if !yaml.is_mapping() {
        return Err(AppError::Config(format!(
            "{} does not contain a key/value mapping",
            path.display()
        )));
    }
    Ok(yaml)
}

/// Names of the fields missing from the config file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let yaml = read_mapping(path)?;
    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config("config is not a mapping".into()))?;

    Ok(expected_fields()?
        .into_iter()
        .filter(|(k, _)| !map.contains_key(k.as_str()))
        .map(|(k, _)| k)
        .collect())
}

/// Add every missing field with its default value, leaving existing values
/// alone. Returns the names of the fields that were added.
pub fn fill_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let mut yaml = read_mapping(path)?;
    let map = yaml
        .as_mapping_mut()
        .ok_or_else(|| AppError::Config("config is not a mapping".into()))?;

    let mut added = Vec::new();
    for (k, v) in expected_fields()? {
        if !map.contains_key(k.as_str()) {
            map.insert(Value::String(k.clone()), v);
            added.push(k);
        }
    }

    if !added.is_empty() {
        let serialized =
            serde_yaml::to_string(&yaml).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_and_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rtimetracker.conf");
        fs::write(&path, "data_file: /keep/me.json\n").unwrap();

        let mut missing = missing_fields(&path).unwrap();
        missing.sort();
        assert_eq!(missing, vec!["default_filter", "log_level"]);

        let mut added = fill_missing_fields(&path).unwrap();
        added.sort();
        assert_eq!(added, missing);
        assert!(missing_fields(&path).unwrap().is_empty());

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.data_file, "/keep/me.json");
    }

    #[test]
    fn complete_file_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rtimetracker.conf");
        Config::default().save_to(&path).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        assert!(fill_missing_fields(&path).unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn non_mapping_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rtimetracker.conf");
        fs::write(&path, "- just\n- a list\n").unwrap();
        assert!(matches!(missing_fields(&path), Err(AppError::Config(_))));
    }
}
