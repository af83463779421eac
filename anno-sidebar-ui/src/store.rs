//! Sidebar state managed via Dioxus context.
//!
//! `SidebarStore` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Components retrieve it with
//! `use_context::<SidebarStore>()`.

use anno_core::resolve::ContentError;
use anno_core::selection::Selection;
use anno_core::session::Profile;
use dioxus::prelude::*;

/// Shared state for the annotation sidebar.
#[derive(Clone, Copy)]
pub struct SidebarStore {
    /// Signed-in user's profile (None while logged out)
    pub profile: Signal<Option<Profile>>,
    /// Currently selected annotations / focused group
    pub selection: Signal<Selection>,
    /// Direct-link failure to surface in the sidebar, if any
    pub link_error: Signal<Option<ContentError>>,
}

impl SidebarStore {
    /// Create a new store with default signal values: logged out, empty
    /// selection, no error.
    pub fn new() -> Self {
        Self {
            profile: Signal::new(None),
            selection: Signal::new(Selection::default()),
            link_error: Signal::new(None),
        }
    }

    /// Whether a user session is established. Reads the profile signal,
    /// so callers re-render when the session changes.
    pub fn is_logged_in(&self) -> bool {
        self.profile.read().is_some()
    }

    /// Clear the current selection and dismiss any direct-link error.
    pub fn clear_selection(&mut self) {
        log::debug!("clearing selection");
        self.selection.with_mut(Selection::clear);
        self.link_error.set(None);
    }

    /// Establish or drop the user session.
    pub fn update_profile(&mut self, profile: Option<Profile>) {
        self.profile.set(profile);
    }
}
