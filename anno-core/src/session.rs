//! User session profile.

use serde::{Deserialize, Serialize};

/// Profile of a signed-in user.
///
/// The sidebar holds an `Option<Profile>`; a present profile means the
/// user is logged in. Serialized to `localStorage` between visits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Account id, e.g. "acct:demo@example.com".
    pub userid: String,
    /// Name shown in the sidebar header, falls back to [`username`].
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Extract the short username from an account id
/// ("acct:finch@example.com" -> "finch").
pub fn username(userid: &str) -> &str {
    let stripped = userid.strip_prefix("acct:").unwrap_or(userid);
    stripped.split('@').next().unwrap_or(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username() {
        assert_eq!(username("acct:finch@example.com"), "finch");
        assert_eq!(username("finch@example.com"), "finch");
        assert_eq!(username("finch"), "finch");
    }

    #[test]
    fn test_profile_round_trip() {
        let profile = Profile {
            userid: "acct:demo@example.com".to_string(),
            display_name: Some("demo".to_string()),
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(serde_json::from_str::<Profile>(&json).unwrap(), profile);
    }

    #[test]
    fn test_profile_without_display_name() {
        let profile: Profile =
            serde_json::from_str(r#"{ "userid": "acct:demo@example.com" }"#).unwrap();
        assert_eq!(profile.display_name, None);
    }
}
