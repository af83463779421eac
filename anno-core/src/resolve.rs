//! Resolving direct links against the content set.

use std::fmt;

use crate::annotation::ContentSet;
use crate::direct_link::DirectLink;
use crate::selection::Selection;

/// Which kind of direct-linked resource could not be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentError {
    Annotation,
    Group,
}

impl ContentError {
    /// Lowercase resource name for user-facing text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Annotation => "annotation",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a direct link to the selection it denotes.
///
/// An annotation link requires the annotation to exist and its group to be
/// visible to `userid`; a group link requires the group to exist and be
/// visible. Failures carry the resource kind so the error panel can name
/// what went missing. A missing resource and a permission failure are
/// indistinguishable to the viewer.
pub fn resolve_link(
    link: &DirectLink,
    content: &ContentSet,
    userid: Option<&str>,
) -> Result<Selection, ContentError> {
    let mut selection = Selection::default();
    match link {
        DirectLink::Annotation(id) => {
            let annotation = content.annotation(id).ok_or(ContentError::Annotation)?;
            let visible = content
                .group(&annotation.group)
                .is_some_and(|g| g.visible_to(userid));
            if !visible {
                return Err(ContentError::Annotation);
            }
            selection.select_annotation(id.clone());
            selection.focus_group(annotation.group.clone());
        }
        DirectLink::Group(id) => {
            let visible = content.group(id).is_some_and(|g| g.visible_to(userid));
            if !visible {
                return Err(ContentError::Group);
            }
            selection.focus_group(id.clone());
        }
    }
    Ok(selection)
}
