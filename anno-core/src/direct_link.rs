//! URL fragment syntax for direct links into the sidebar.

/// A direct link carried in the URL fragment.
///
/// Two syntaxes are recognized:
/// - `#annotations:<id>` selects a single annotation
/// - `#annotations:group:<id>` focuses a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectLink {
    Annotation(String),
    Group(String),
}

impl DirectLink {
    /// Parse a `window.location` fragment. The leading `#` is optional.
    /// Fragments that are not direct links yield `None`.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let rest = fragment.strip_prefix('#').unwrap_or(fragment);
        let rest = rest.strip_prefix("annotations:")?;
        if let Some(group) = rest.strip_prefix("group:") {
            (!group.is_empty()).then(|| Self::Group(group.to_string()))
        } else {
            (!rest.is_empty()).then(|| Self::Annotation(rest.to_string()))
        }
    }
}
