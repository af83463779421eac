//! Reusable Dioxus RSX components for the annotation sidebar.

mod button;
mod loading_spinner;
mod sidebar_content_error;
mod svg_icon;

pub use button::{Button, ButtonVariant};
pub use loading_spinner::LoadingSpinner;
pub use sidebar_content_error::SidebarContentError;
pub use svg_icon::{IconName, SvgIcon};
