use serde_json::{Map, Value};

/// Key under which the root route publishes the public environment.
pub const PUBLIC_ENV_KEY: &str = "publicEnv";

/// Returns the entry `key` (default [`PUBLIC_ENV_KEY`]) of the root route data.
/// Yields an empty object when the root data has no such entry.
pub fn use_env(root_data: &Value, key: Option<&str>) -> Value {
    let key = key.unwrap_or(PUBLIC_ENV_KEY);
    match root_data.get(key) {
        Some(value) if !value.is_null() => value.clone(),
        _ => Value::Object(Map::new()),
    }
}

pub fn get_env_var(env: &Value, key: &str) -> Option<String> {
    // Check if env is an object at all
    if !env.is_object() {
        log::warn!("Public environment is not loaded");
        return None;
    }

    match env.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(Value::Null) | None => {
            log::warn!("Environment variable '{}' is undefined", key);
            None
        }
        Some(_) => {
            log::warn!("Environment variable '{}' is not a string", key);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_use_env_default_key() {
        let root = json!({ "publicEnv": { "PUBLIC_STORE_DOMAIN": "shop.example.com" } });
        assert_eq!(
            use_env(&root, None),
            json!({ "PUBLIC_STORE_DOMAIN": "shop.example.com" })
        );
    }

    #[test]
    fn test_use_env_custom_key() {
        let root = json!({ "env": { "PUBLIC_A": "1" } });
        assert_eq!(use_env(&root, Some("env")), json!({ "PUBLIC_A": "1" }));
    }

    #[test]
    fn test_use_env_missing_is_empty_object() {
        assert_eq!(use_env(&json!({}), None), json!({}));
        assert_eq!(use_env(&json!({ "publicEnv": null }), None), json!({}));
        assert_eq!(use_env(&json!("not-an-object"), None), json!({}));
    }

    #[test]
    fn test_get_env_var() {
        let env = json!({ "PUBLIC_A": "1" });
        assert_eq!(get_env_var(&env, "PUBLIC_A"), Some("1".to_string()));
        assert_eq!(get_env_var(&env, "PUBLIC_C"), None);
        assert_eq!(get_env_var(&Value::Null, "PUBLIC_A"), None);
    }

    #[test]
    fn test_get_env_var_non_string_is_none() {
        let env = json!({ "PUBLIC_N": 2, "PUBLIC_FLAG": true, "PUBLIC_OBJ": { "a": 1 } });
        assert_eq!(get_env_var(&env, "PUBLIC_N"), None);
        assert_eq!(get_env_var(&env, "PUBLIC_FLAG"), None);
        assert_eq!(get_env_var(&env, "PUBLIC_OBJ"), None);
    }
}
