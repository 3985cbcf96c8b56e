//! Filtering of the server environment down to the variables that are safe
//! to ship to the browser.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::env;

/// Prefix marking a variable as client-safe.
pub const PUBLIC_PREFIX: &str = "PUBLIC_";

pub type PublicEnv = BTreeMap<String, String>;

/// Keeps the `PUBLIC_` entries of `env`. Returns `None` if there are none.
///
/// ```
/// use storefront_backend::env::get_public_env;
///
/// let env = [
///     ("PUBLIC_API_URL", "https://api.example.com"),
///     ("PRIVATE_TOKEN", "1234567890"),
/// ];
/// let public_env = get_public_env(env).unwrap();
/// assert_eq!(public_env.len(), 1);
/// assert_eq!(public_env["PUBLIC_API_URL"], "https://api.example.com");
/// ```
pub fn get_public_env<I, K, V>(env: I) -> Option<PublicEnv>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let public_env: PublicEnv = env
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .filter(|(key, _)| key.starts_with(PUBLIC_PREFIX))
        .collect();

    if public_env.is_empty() {
        None
    } else {
        Some(public_env)
    }
}

/// Same filter over an untyped environment object. Anything that is not a JSON
/// object yields `None`; values are copied unchanged.
pub fn get_public_env_json(env: &Value) -> Option<Map<String, Value>> {
    let Value::Object(entries) = env else {
        return None;
    };

    let public_env: Map<String, Value> = entries
        .iter()
        .filter(|(key, _)| key.starts_with(PUBLIC_PREFIX))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    if public_env.is_empty() {
        None
    } else {
        Some(public_env)
    }
}

/// Applies [`get_public_env`] to the current process environment.
/// Variables whose name or value is not valid unicode are skipped.
pub fn public_env_from_process() -> Option<PublicEnv> {
    get_public_env(env::vars_os().filter_map(|(key, value)| {
        Some((key.into_string().ok()?, value.into_string().ok()?))
    }))
}
