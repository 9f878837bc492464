//! Environment variable naming for crmlink configuration.
//!
//! Plain settings map to `CRMLINK__SECTION__KEY`. Values marked
//! `"secret_from_env"` in a config file are looked up as
//! `CRMLINK_SECRET_SECTION_KEY`, falling back to `SECTION_KEY`
//! (e.g. `HUBSPOT_CLIENT_SECRET`).

use std::env;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "CRMLINK";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "CRMLINK_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Marker value that requests injection from the environment.
pub const SECRET_MARKER: &str = "secret_from_env";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path (`server.host`) to `CRMLINK__SERVER__HOST`.
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path (`hubspot.client_secret`) to
/// `CRMLINK_SECRET_HUBSPOT_CLIENT_SECRET`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to the unprefixed name (`HUBSPOT_CLIENT_SECRET`).
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() < 2 {
        return path.to_uppercase();
    }

    let service = parts[0];
    let key = parts[1..].join(SECRET_SEPARATOR);
    format!("{}_{}", service, key).to_uppercase()
}

pub fn get_config_env_var(path: &str) -> Option<String> {
    env::var(config_path_to_env_var(path)).ok()
}

/// Looks up a secret under the prefixed name first, then the legacy name.
pub fn get_secret_env_var(path: &str) -> Option<String> {
    if let Ok(value) = env::var(secret_path_to_env_var(path)) {
        return Some(value);
    }
    env::var(legacy_secret_path_to_env_var(path)).ok()
}

/// Paths containing "secret", "key", "password", "token" or "client_id"
/// are resolved through the secret naming scheme.
pub fn is_secret_path(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    path_lower.contains("secret")
        || path_lower.contains("key")
        || path_lower.contains("password")
        || path_lower.contains("token")
        || path_lower.contains("client_id")
}

pub fn get_env_var(path: &str) -> Option<String> {
    if is_secret_path(path) {
        get_secret_env_var(path)
    } else {
        get_config_env_var(path)
    }
}

/// Replaces every `"secret_from_env"` string in `value` with the matching
/// environment variable. Returns `true` if anything was replaced.
pub fn inject_env_vars(value: &mut serde_json::Value) -> bool {
    use serde_json::Value;

    fn walk(path: Vec<String>, obj: &mut Value) -> bool {
        let mut replaced = false;

        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    replaced |= walk(new_path, v);
                }
            }
            Value::Array(arr) => {
                for (i, v) in arr.iter_mut().enumerate() {
                    let mut new_path = path.clone();
                    new_path.push(i.to_string());
                    replaced |= walk(new_path, v);
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                if let Some(env_val) = get_env_var(&path_str) {
                    *s = env_val;
                    replaced = true;
                } else {
                    warn!(path = %path_str, "No environment variable found for secret_from_env");
                }
            }
            _ => {}
        }

        replaced
    }

    walk(vec![], value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_path_to_env_var() {
        assert_eq!(
            config_path_to_env_var("server.host"),
            "CRMLINK__SERVER__HOST"
        );
        assert_eq!(
            config_path_to_env_var("store.redis_url"),
            "CRMLINK__STORE__REDIS_URL"
        );
    }

    #[test]
    fn test_secret_path_to_env_var() {
        assert_eq!(
            secret_path_to_env_var("hubspot.client_secret"),
            "CRMLINK_SECRET_HUBSPOT_CLIENT_SECRET"
        );
        assert_eq!(
            secret_path_to_env_var("hubspot.client_id"),
            "CRMLINK_SECRET_HUBSPOT_CLIENT_ID"
        );
    }

    #[test]
    fn test_legacy_secret_path_to_env_var() {
        assert_eq!(
            legacy_secret_path_to_env_var("hubspot.client_secret"),
            "HUBSPOT_CLIENT_SECRET"
        );
        assert_eq!(legacy_secret_path_to_env_var("token"), "TOKEN");
    }

    #[test]
    fn test_is_secret_path() {
        assert!(is_secret_path("hubspot.client_secret"));
        assert!(is_secret_path("hubspot.client_id"));
        assert!(!is_secret_path("server.host"));
        assert!(!is_secret_path("store.redis_url"));
    }

    #[test]
    fn inject_replaces_marker_from_prefixed_secret() {
        // Unique path so parallel tests never share the variable.
        env::set_var("CRMLINK_SECRET_INJECTTEST_CLIENT_SECRET", "from-env");
        let mut value = json!({
            "injecttest": { "client_secret": "secret_from_env", "scope": "oauth" }
        });

        assert!(inject_env_vars(&mut value));
        assert_eq!(value["injecttest"]["client_secret"], "from-env");
        assert_eq!(value["injecttest"]["scope"], "oauth");
        env::remove_var("CRMLINK_SECRET_INJECTTEST_CLIENT_SECRET");
    }

    #[test]
    fn inject_leaves_marker_when_variable_missing() {
        let mut value = json!({ "nothere": { "client_secret": "secret_from_env" } });

        assert!(!inject_env_vars(&mut value));
        assert_eq!(value["nothere"]["client_secret"], SECRET_MARKER);
    }
}
