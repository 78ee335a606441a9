//! Response envelopes used by the backend REST API.
//!
//! Every successful backend response wraps its payload in `{ "data": ... }`,
//! optionally with a human-readable `message`.

use serde::{Deserialize, Serialize};

use crate::viewer::Viewer;

/// Generic `{ data, message? }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Response payload
    pub data: T,

    /// Optional status message from the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload with no message.
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    /// Unwrap the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Payload of `GET /auth/me` and `POST /auth/sign-in`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPayload {
    pub user: Viewer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::Role;

    #[test]
    fn test_me_response_deserialization() {
        let json = r#"{
            "data": { "user": { "id": "a-1", "role": "admin", "email": "ops@example.com" } },
            "message": "ok"
        }"#;

        let response: ApiResponse<UserPayload> = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.as_deref(), Some("ok"));

        let user = response.into_data().user;
        assert_eq!(user.id, "a-1");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_missing_data_rejected() {
        let json = r#"{ "message": "Unauthorized" }"#;
        assert!(serde_json::from_str::<ApiResponse<UserPayload>>(json).is_err());
    }

    #[test]
    fn test_message_omitted_when_none() {
        let response = ApiResponse::new(UserPayload {
            user: Viewer::new("c-9", Role::Customer),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["data"]["user"]["role"], "customer");
    }
}
