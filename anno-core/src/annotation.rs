//! Annotation and group models plus the embedded content set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single annotation as shipped in the embedded content set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Annotation {
    /// Stable annotation id, referenced by direct links.
    pub id: String,
    /// Id of the group the annotation was posted in.
    pub group: String,
    /// Author account id, e.g. "acct:finch@example.com".
    pub user: String,
    /// Annotation body text.
    pub text: String,
    /// Creation date.
    pub created: NaiveDate,
    /// Author-supplied tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// An annotation group.
///
/// Public groups are readable by anyone; private groups only by the
/// accounts listed in `members`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub members: Vec<String>,
}

impl Group {
    /// Whether `userid` may view annotations in this group.
    pub fn visible_to(&self, userid: Option<&str>) -> bool {
        self.public || userid.is_some_and(|u| self.members.iter().any(|m| m == u))
    }
}

/// The full set of groups and annotations known to the sidebar.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentSet {
    pub groups: Vec<Group>,
    pub annotations: Vec<Annotation>,
}

impl ContentSet {
    /// Parse a content set from its JSON representation.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn annotation(&self, id: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "groups": [
            { "id": "__world__", "name": "Public", "public": true },
            { "id": "club", "name": "Club", "members": ["acct:demo@example.com"] }
        ],
        "annotations": [
            {
                "id": "a1",
                "group": "__world__",
                "user": "acct:finch@example.com",
                "text": "a note",
                "created": "2025-03-14"
            }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let content = ContentSet::from_json(SAMPLE).unwrap();
        assert_eq!(content.groups.len(), 2);
        assert_eq!(content.annotations.len(), 1);

        let annotation = content.annotation("a1").unwrap();
        assert_eq!(annotation.user, "acct:finch@example.com");
        assert!(annotation.tags.is_empty());
        assert_eq!(annotation.created.to_string(), "2025-03-14");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(ContentSet::from_json("{ not json").is_err());
    }

    #[test]
    fn test_group_lookup() {
        let content = ContentSet::from_json(SAMPLE).unwrap();
        assert_eq!(content.group("club").unwrap().name, "Club");
        assert!(content.group("nope").is_none());
    }

    #[test]
    fn test_public_group_visible_to_everyone() {
        let content = ContentSet::from_json(SAMPLE).unwrap();
        let world = content.group("__world__").unwrap();
        assert!(world.visible_to(None));
        assert!(world.visible_to(Some("acct:anyone@example.com")));
    }

    #[test]
    fn test_private_group_visible_to_members_only() {
        let content = ContentSet::from_json(SAMPLE).unwrap();
        let club = content.group("club").unwrap();
        assert!(!club.visible_to(None));
        assert!(!club.visible_to(Some("acct:finch@example.com")));
        assert!(club.visible_to(Some("acct:demo@example.com")));
    }
}
