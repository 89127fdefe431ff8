//! JSON bodies returned by the status endpoints.

use serde::Serialize;

use crate::Timestamp;

pub const SERVICE_NAME: &str = "retail-app";
pub const STATUS_OK: &str = "ok";
pub const WELCOME_MESSAGE: &str = "Welcome to RetailCo!";

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub timestamp: Timestamp,
}

impl RootResponse {
    /// Builds the root body stamped with the current time.
    pub fn now() -> Self {
        Self {
            service: SERVICE_NAME,
            status: STATUS_OK,
            timestamp: Timestamp::now(),
        }
    }
}

/// Body of `GET /hello`.
#[derive(Debug, Clone, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
    pub timestamp: Timestamp,
}

impl HelloResponse {
    pub fn now() -> Self {
        Self {
            message: WELCOME_MESSAGE,
            timestamp: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn root_response_has_exact_fields() {
        let json = serde_json::to_value(RootResponse::now()).unwrap();
        assert_eq!(keys(&json), ["service", "status", "timestamp"]);
        assert_eq!(json["service"], "retail-app");
        assert_eq!(json["status"], "ok");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn hello_response_has_exact_fields() {
        let json = serde_json::to_value(HelloResponse::now()).unwrap();
        assert_eq!(keys(&json), ["message", "timestamp"]);
        assert_eq!(json["message"], "Welcome to RetailCo!");
        assert!(json["timestamp"].is_string());
    }
}
