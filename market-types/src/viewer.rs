//! Viewer identity and role types.
//!
//! A viewer is whoever is looking at the site. Once signed in, the backend
//! reports their identity and role; the role decides which dashboards they
//! may open.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketplace role.
///
/// Unknown role strings are rejected at deserialization time rather than
/// mapped to a fallback, so a malformed session never grants access.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Vendor,
    Customer,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Vendor, Role::Customer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Vendor => "vendor",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a role string the backend never issues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "vendor" => Ok(Role::Vendor),
            "customer" => Ok(Role::Customer),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// The signed-in identity as reported by `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Viewer {
    /// Backend user id (numeric ids are normalized to strings)
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,

    /// Marketplace role
    pub role: Role,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Remaining profile fields, passed through untouched
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

impl Viewer {
    /// Create a viewer with no profile fields.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
            name: None,
            email: None,
            profile: serde_json::Map::new(),
        }
    }

    /// Name to show in the UI, falling back to email and then id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::Vendor).unwrap(), "\"vendor\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"customer\"").unwrap(),
            Role::Customer
        );
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" VENDOR ".parse::<Role>(), Ok(Role::Vendor));
        assert_eq!(
            "superuser".parse::<Role>(),
            Err(UnknownRole("superuser".to_string()))
        );
    }

    #[test]
    fn test_role_as_str_round_trips() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn test_viewer_unknown_role_rejected() {
        let json = r#"{"id": "u1", "role": "superuser"}"#;
        assert!(serde_json::from_str::<Viewer>(json).is_err());
    }

    #[test]
    fn test_viewer_numeric_id_and_profile() {
        let json = r#"{
            "id": 42,
            "role": "vendor",
            "name": "Ada's Catering",
            "phone": "+1 555 0100",
            "avatar": null
        }"#;

        let viewer: Viewer = serde_json::from_str(json).unwrap();
        assert_eq!(viewer.id, "42");
        assert_eq!(viewer.role, Role::Vendor);
        assert_eq!(viewer.display_name(), "Ada's Catering");
        assert_eq!(
            viewer.profile.get("phone"),
            Some(&serde_json::json!("+1 555 0100"))
        );
        assert!(viewer.email.is_none());
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut viewer = Viewer::new("u7", Role::Customer);
        assert_eq!(viewer.display_name(), "u7");

        viewer.email = Some("guest@example.com".to_string());
        assert_eq!(viewer.display_name(), "guest@example.com");
    }
}
