//! Annotation Sidebar
//!
//! Renders the annotation sidebar for a page, including the content-error
//! panel shown when a direct-linked annotation or group cannot be loaded.
//!
//! Data flow:
//! 1. `include_str!` embeds `assets/content.json` into the WASM binary.
//! 2. On mount, the content set is parsed and any persisted session is
//!    restored from `localStorage`.
//! 3. `window.location.hash` is parsed as a direct link
//!    (`#annotations:<id>` or `#annotations:group:<id>`).
//! 4. Whenever the session changes, the direct link is re-resolved: the
//!    resulting selection filters the annotation list, and failures
//!    surface the content-error panel (so a restricted link can succeed
//!    after logging in).

use anno_core::annotation::{Annotation, ContentSet};
use anno_core::direct_link::DirectLink;
use anno_core::resolve::{resolve_link, ContentError};
use anno_core::session::{username, Profile};
use anno_sidebar_ui::components::{
    Button, ButtonVariant, IconName, LoadingSpinner, SidebarContentError, SvgIcon,
};
use anno_sidebar_ui::store::SidebarStore;
use dioxus::prelude::*;

/// Demo groups and annotations baked into the app.
const CONTENT_JSON: &str = include_str!("../assets/content.json");

/// Account established by the demo login flow.
const DEMO_USERID: &str = "acct:demo@example.com";
const DEMO_DISPLAY_NAME: &str = "demo";

/// `localStorage` key holding the serialized session profile.
const SESSION_KEY: &str = "sidebar.session";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sidebar-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut store = use_context_provider(SidebarStore::new);
    let mut content = use_signal(|| None::<ContentSet>);
    // Share the content signal with child components.
    use_context_provider(|| content);
    let mut load_error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let mut direct_link = use_signal(|| None::<DirectLink>);

    // Parse embedded content, restore the session, and read the direct
    // link once on mount.
    use_effect(move || {
        match ContentSet::from_json(CONTENT_JSON) {
            Ok(set) => content.set(Some(set)),
            Err(e) => {
                log::error!("failed to parse embedded content: {e}");
                load_error.set(Some(format!("Failed to load annotation data: {e}")));
            }
        }

        if let Some(profile) = restore_session() {
            log::info!("restored session for {}", profile.userid);
            store.update_profile(Some(profile));
        }

        let link = location_fragment()
            .as_deref()
            .and_then(DirectLink::from_fragment);
        direct_link.set(link);
        loading.set(false);
    });

    // Re-resolve the direct link whenever the session changes.
    use_effect(move || {
        let userid = store.profile.read().as_ref().map(|p| p.userid.clone());
        let link = direct_link.read().clone();
        let Some(link) = link else { return };
        let content = content.read();
        let Some(set) = content.as_ref() else { return };

        match resolve_link(&link, set, userid.as_deref()) {
            Ok(selection) => {
                store.selection.set(selection);
                store.link_error.set(None);
            }
            Err(kind) => {
                log::warn!("direct-linked {kind} could not be resolved");
                store.link_error.set(Some(kind));
            }
        }
    });

    let on_login_request = move |_: ()| {
        log::info!("starting login flow");
        let profile = Profile {
            userid: DEMO_USERID.to_string(),
            display_name: Some(DEMO_DISPLAY_NAME.to_string()),
        };
        persist_session(Some(&profile));
        store.update_profile(Some(profile));
    };

    let on_logout = move |_: ()| {
        log::info!("logging out");
        persist_session(None);
        store.update_profile(None);
    };

    let is_logged_in = store.is_logged_in();
    let user_label = store
        .profile
        .read()
        .as_ref()
        .map(|p| {
            p.display_name
                .clone()
                .unwrap_or_else(|| username(&p.userid).to_string())
        })
        .unwrap_or_default();
    let link_error = (store.link_error)();

    let body = if (loading)() {
        rsx! {
            LoadingSpinner {}
        }
    } else if let Some(message) = load_error.read().as_ref() {
        rsx! {
            div {
                style: "padding: 12px 16px; margin: 8px; background: #FFEBEE; color: #C62828; \
                        border-radius: 4px; border: 1px solid #EF9A9A;",
                strong { "Error: " }
                "{message}"
            }
        }
    } else if let Some(error_type) = link_error {
        rsx! {
            SidebarContentError {
                error_type: error_type,
                show_clear_selection: error_type == ContentError::Annotation,
                on_login_request: on_login_request,
            }
        }
    } else {
        rsx! {
            AnnotationList {}
        }
    };

    rsx! {
        div {
            style: "max-width: 480px; margin: 0 auto; font-family: sans-serif; \
                    border: 1px solid #dbdbdb; background: #fff;",
            div {
                style: "display: flex; align-items: center; gap: 8px; padding: 8px 12px; \
                        border-bottom: 1px solid #dbdbdb; background: #f9f9f9;",
                SvgIcon { name: IconName::Annotate, title: "Annotations" }
                div {
                    style: "font-weight: bold; flex: 1;",
                    "Annotations"
                }
                if is_logged_in {
                    span {
                        style: "font-size: 12px; color: #737373;",
                        "{user_label}"
                    }
                    Button { label: "Log out", onclick: on_logout }
                } else {
                    Button {
                        label: "Log in",
                        variant: ButtonVariant::Primary,
                        onclick: on_login_request,
                    }
                }
            }
            {body}
        }
    }
}

/// The annotation cards visible to the current user, filtered by the
/// selection and ordered newest first.
#[component]
fn AnnotationList() -> Element {
    let store = use_context::<SidebarStore>();
    let content = use_context::<Signal<Option<ContentSet>>>();

    let selection = store.selection.read().clone();
    let userid = store.profile.read().as_ref().map(|p| p.userid.clone());

    let content = content.read();
    let Some(set) = content.as_ref() else {
        return rsx! {
            div {}
        };
    };

    let mut annotations: Vec<&Annotation> = set
        .annotations
        .iter()
        .filter(|a| {
            set.group(&a.group)
                .is_some_and(|g| g.visible_to(userid.as_deref()))
        })
        .filter(|a| {
            if !selection.annotations().is_empty() {
                return selection.includes(&a.id);
            }
            match selection.focused_group() {
                Some(group) => a.group == group,
                None => true,
            }
        })
        .collect();
    annotations.sort_by(|a, b| b.created.cmp(&a.created));

    if annotations.is_empty() {
        return rsx! {
            div {
                style: "padding: 40px 12px; text-align: center; color: #737373;",
                "No annotations to show."
            }
        };
    }

    rsx! {
        div {
            for annotation in annotations {
                AnnotationCard {
                    key: "{annotation.id}",
                    annotation: annotation.clone(),
                    group_name: group_name(set, &annotation.group),
                }
            }
        }
    }
}

/// Props for AnnotationCard
#[derive(Props, Clone, PartialEq)]
struct AnnotationCardProps {
    annotation: Annotation,
    group_name: String,
}

/// One annotation: author, date, group, body text, tags.
#[component]
fn AnnotationCard(props: AnnotationCardProps) -> Element {
    let author = username(&props.annotation.user).to_string();

    rsx! {
        div {
            style: "padding: 8px 12px; border-bottom: 1px solid #eee;",
            div {
                style: "display: flex; gap: 8px; font-size: 12px; color: #737373;",
                span {
                    style: "font-weight: bold; color: #202020;",
                    "{author}"
                }
                span { "{props.annotation.created}" }
                span {
                    style: "margin-left: auto;",
                    "{props.group_name}"
                }
            }
            p {
                style: "margin: 4px 0; font-size: 14px; color: #202020;",
                "{props.annotation.text}"
            }
            if !props.annotation.tags.is_empty() {
                div {
                    style: "display: flex; gap: 4px; flex-wrap: wrap;",
                    for tag in props.annotation.tags.iter() {
                        span {
                            style: "font-size: 11px; background: #eee; border-radius: 2px; \
                                    padding: 1px 6px;",
                            "{tag}"
                        }
                    }
                }
            }
        }
    }
}

/// Display name for a group id; falls back to the id itself.
fn group_name(content: &ContentSet, id: &str) -> String {
    content
        .group(id)
        .map(|g| g.name.clone())
        .unwrap_or_else(|| id.to_string())
}

/// Read the persisted session profile, if any.
fn restore_session() -> Option<Profile> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("ignoring malformed persisted session: {e}");
            None
        }
    }
}

/// Persist the session profile, or clear it when logging out.
fn persist_session(profile: Option<&Profile>) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    let result = match profile {
        Some(profile) => match serde_json::to_string(profile) {
            Ok(json) => storage.set_item(SESSION_KEY, &json),
            Err(e) => {
                log::warn!("failed to serialize session: {e}");
                return;
            }
        },
        None => storage.remove_item(SESSION_KEY),
    };
    if result.is_err() {
        log::warn!("failed to update persisted session");
    }
}

/// Current `window.location` fragment, including the leading `#`.
fn location_fragment() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = ContentSet::from_json(CONTENT_JSON).unwrap();
        assert!(!content.groups.is_empty());
        assert!(!content.annotations.is_empty());
        for annotation in &content.annotations {
            assert!(
                content.group(&annotation.group).is_some(),
                "annotation {} references an unknown group",
                annotation.id
            );
        }
    }

    #[test]
    fn test_group_name_falls_back_to_id() {
        let content = ContentSet::from_json(CONTENT_JSON).unwrap();
        assert_eq!(group_name(&content, "__world__"), "Public");
        assert_eq!(group_name(&content, "nope"), "nope");
    }
}
