//! The sidebar's current selection state.

/// Which annotations and/or group the sidebar is focused on.
///
/// An empty selection means "show everything". Selecting an annotation
/// keeps the list filtered to the selected ids; focusing a group without
/// selected annotations filters the list to that group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    annotations: Vec<String>,
    group: Option<String>,
}

impl Selection {
    /// Add an annotation id to the selection.
    pub fn select_annotation(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.annotations.contains(&id) {
            self.annotations.push(id);
        }
    }

    /// Focus a group.
    pub fn focus_group(&mut self, id: impl Into<String>) {
        self.group = Some(id.into());
    }

    /// Drop the selection, returning to the "show everything" state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty() && self.group.is_none()
    }

    /// Whether the annotation id is part of the selection.
    pub fn includes(&self, id: &str) -> bool {
        self.annotations.iter().any(|a| a == id)
    }

    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn focused_group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_empty() {
        let selection = Selection::default();
        assert!(selection.is_empty());
        assert!(!selection.includes("a1"));
        assert_eq!(selection.focused_group(), None);
    }

    #[test]
    fn test_select_annotation_deduplicates() {
        let mut selection = Selection::default();
        selection.select_annotation("a1");
        selection.select_annotation("a1");
        selection.select_annotation("a2");
        assert_eq!(selection.annotations(), ["a1", "a2"]);
        assert!(selection.includes("a1"));
        assert!(!selection.is_empty());
    }

    #[test]
    fn test_focus_group() {
        let mut selection = Selection::default();
        selection.focus_group("club");
        assert_eq!(selection.focused_group(), Some("club"));
        assert!(!selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::default();
        selection.select_annotation("a1");
        selection.focus_group("club");
        selection.clear();
        assert_eq!(selection, Selection::default());
    }
}
