//! Error panel shown when a direct-linked annotation or group cannot be
//! loaded.

use anno_core::resolve::ContentError;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, IconName, SvgIcon};
use crate::store::SidebarStore;

/// Title line for the panel header.
fn error_title(error_type: ContentError) -> &'static str {
    match error_type {
        ContentError::Annotation => "Annotation unavailable",
        ContentError::Group => "Group unavailable",
    }
}

/// Body text, chosen from the resource kind and login state. Logged-out
/// users get a login suggestion regardless of the resource kind.
fn error_message(error_type: ContentError, is_logged_in: bool) -> String {
    if !is_logged_in {
        return format!(
            "The {error_type} associated with the current URL is unavailable. \
             You may need to log in to see it."
        );
    }
    match error_type {
        ContentError::Group => "The current URL links to a group, but that group cannot be \
             found, or you do not have permission to view the annotations in that group."
            .to_string(),
        ContentError::Annotation => "The current URL links to an annotation, but that \
             annotation cannot be found, or you do not have permission to view it."
            .to_string(),
    }
}

/// Styling for the clear-selection action: primary for logged-in users,
/// secondary next to the login button otherwise.
fn clear_selection_variant(is_logged_in: bool) -> ButtonVariant {
    if is_logged_in {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    }
}

/// Props for SidebarContentError
#[derive(Props, Clone, PartialEq)]
pub struct SidebarContentErrorProps {
    /// Which kind of direct-linked resource failed to load
    #[props(default = ContentError::Annotation)]
    pub error_type: ContentError,
    /// Whether to offer a "Show all annotations" action
    #[props(default = false)]
    pub show_clear_selection: bool,
    /// Launches the login flow for the user
    pub on_login_request: EventHandler<()>,
}

/// Show an error indicating that an annotation or group referenced in the
/// URL could not be fetched.
#[component]
pub fn SidebarContentError(props: SidebarContentErrorProps) -> Element {
    let mut store = use_context::<SidebarStore>();
    let is_logged_in = store.is_logged_in();

    let title = error_title(props.error_type);
    let message = error_message(props.error_type, is_logged_in);
    let on_login_request = props.on_login_request;

    rsx! {
        div {
            style: "margin: 8px; border: 1px solid #dbdbdb; border-radius: 2px; background: #fff;",
            div {
                style: "display: flex; align-items: center; gap: 8px; padding: 8px 12px; \
                        border-bottom: 1px solid #dbdbdb; background: #f9f9f9; color: #7a7a7a;",
                SvgIcon { name: IconName::Restricted, title: "{title}" }
                div {
                    style: "font-weight: bold; flex: 1; color: #3f3f3f;",
                    "{title}"
                }
            }
            div {
                style: "padding: 12px;",
                p {
                    style: "margin: 0 0 12px 0; color: #424242;",
                    "{message}"
                }
                div {
                    style: "display: flex; gap: 8px; justify-content: flex-end;",
                    if props.show_clear_selection {
                        Button {
                            label: "Show all annotations",
                            variant: clear_selection_variant(is_logged_in),
                            onclick: move |_| store.clear_selection(),
                        }
                    }
                    if !is_logged_in {
                        Button {
                            label: "Log in",
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_login_request.call(()),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(
            error_title(ContentError::Annotation),
            "Annotation unavailable"
        );
        assert_eq!(error_title(ContentError::Group), "Group unavailable");
    }

    #[test]
    fn test_logged_out_message_names_the_resource() {
        let message = error_message(ContentError::Annotation, false);
        assert!(message.starts_with("The annotation associated with the current URL"));
        assert!(message.contains("log in"));

        let message = error_message(ContentError::Group, false);
        assert!(message.starts_with("The group associated with the current URL"));
        assert!(message.contains("log in"));
    }

    #[test]
    fn test_logged_in_annotation_message() {
        let message = error_message(ContentError::Annotation, true);
        assert!(message.contains("links to an annotation"));
        assert!(message.contains("do not have permission"));
        assert!(!message.contains("log in"));
    }

    #[test]
    fn test_logged_in_group_message() {
        let message = error_message(ContentError::Group, true);
        assert!(message.contains("links to a group"));
        assert!(message.contains("annotations in that group"));
        assert!(!message.contains("log in"));
    }

    #[test]
    fn test_clear_selection_variant_follows_login_state() {
        assert_eq!(clear_selection_variant(true), ButtonVariant::Primary);
        assert_eq!(clear_selection_variant(false), ButtonVariant::Secondary);
    }
}
