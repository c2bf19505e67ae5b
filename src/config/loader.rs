use std::path::{Path, PathBuf};

use super::models::ReportConfig;
use super::Env;

pub const CONFIG_FILENAME: &str = ".intercoder-reliability.yaml";

/// Global (~/) + local YAML merged into the final config.
/// Merging happens on raw values, then the result is deserialized once.
pub fn load_merged(env: &dyn Env, local_path: Option<&Path>) -> ReportConfig {
    let global = load_raw_yaml_global(env);
    let local = local_path.and_then(load_raw_yaml);

    let merged = match (global, local) {
        (Some(g), Some(l)) => deep_merge(g, l),
        (Some(g), None) => g,
        (None, Some(l)) => l,
        (None, None) => return ReportConfig::default(),
    };

    // serde(default) fills fields neither file mentions
    match serde_json::from_value(merged) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring invalid config: {e}");
            ReportConfig::default()
        }
    }
}

/// Global config file path
pub fn global_config_path(env: &dyn Env) -> Option<PathBuf> {
    let home = env.var("HOME").ok()?;
    Some(Path::new(&home).join(CONFIG_FILENAME))
}

fn load_raw_yaml_global(env: &dyn Env) -> Option<serde_json::Value> {
    let path = global_config_path(env)?;
    load_raw_yaml(&path)
}

/// YAML file → raw `serde_json::Value`.
/// Keys absent from the file stay absent so merging preserves the base.
fn load_raw_yaml(path: &Path) -> Option<serde_json::Value> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_yaml::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("failed to parse {}: {e}", path.display());
            None
        }
    }
}

/// Values explicitly present in `over` replace `base`; objects merge recursively.
fn deep_merge(base: serde_json::Value, over: serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match (base, over) {
        (Value::Object(mut b), Value::Object(o)) => {
            for (key, over_val) in o {
                let base_val = b.remove(&key).unwrap_or(Value::Null);
                b.insert(key, deep_merge(base_val, over_val));
            }
            Value::Object(b)
        }
        (base, Value::Null) => base,
        (_, over) => over,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deep_merge_overrides_only_present_keys() {
        let base = json!({ "data_dir": "a", "title": "t" });
        let over = json!({ "title": "u" });
        assert_eq!(deep_merge(base, over), json!({ "data_dir": "a", "title": "u" }));
    }

    #[test]
    fn deep_merge_null_keeps_base() {
        let base = json!({ "output": "x.md" });
        let over = json!({ "output": null });
        assert_eq!(deep_merge(base, over), json!({ "output": "x.md" }));
    }

    #[test]
    fn deep_merge_replaces_arrays() {
        let base = json!({ "definitions": [{ "name": "a", "description": "b" }] });
        let over = json!({ "definitions": [] });
        assert_eq!(deep_merge(base, over), json!({ "definitions": [] }));
    }
}
