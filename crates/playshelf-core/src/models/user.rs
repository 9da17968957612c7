//! Registered user and session profile.

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// The session holds the [`public_profile`](User::public_profile) variant of
/// this type; the full record including the credential lives only in the
/// user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct User {
    /// Unique; assigned at registration.
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Unique across the directory, compared case-sensitively.
    pub email: String,
    /// Plaintext, acceptable only at demo scope. Production deployments
    /// must substitute a hash; the comparison site is confined to the user
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Copy of this user safe to hold in a session: credential stripped.
    pub fn public_profile(&self) -> User {
        User {
            password: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_profile_strips_password() {
        let user = User {
            id: "1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: Some("hunter2".into()),
            avatar: None,
        };
        let profile = user.public_profile();
        assert!(profile.password.is_none());
        assert_eq!(profile.email, user.email);
    }

    #[test]
    fn password_omitted_from_json_when_absent() {
        let user = User {
            id: "1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: None,
            avatar: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
    }
}
