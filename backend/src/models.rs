use crate::env::PublicEnv;
use serde::{Deserialize, Serialize};

/// Payload of the root route, available to every page on the client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RootData {
    #[serde(rename = "publicEnv")]
    pub public_env: Option<PublicEnv>,
}

impl RootData {
    pub fn new(public_env: Option<PublicEnv>) -> Self {
        Self { public_env }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_under_public_env_key() {
        let env = PublicEnv::from([("PUBLIC_A".to_string(), "1".to_string())]);
        let value = serde_json::to_value(RootData::new(Some(env))).unwrap();
        assert_eq!(value, json!({ "publicEnv": { "PUBLIC_A": "1" } }));
    }

    #[test]
    fn test_missing_env_serializes_as_null() {
        let value = serde_json::to_value(RootData::new(None)).unwrap();
        assert_eq!(value, json!({ "publicEnv": null }));
    }
}
