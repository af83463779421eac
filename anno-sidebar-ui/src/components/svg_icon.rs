//! Inline SVG icons.

use dioxus::prelude::*;

/// Names of the icons bundled with the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    /// Pen used in the sidebar header.
    Annotate,
    /// No-entry sign used for unavailable content.
    Restricted,
}

impl IconName {
    /// Stroke path data, drawn on a 24x24 grid.
    pub(crate) fn path(self) -> &'static str {
        match self {
            Self::Annotate => "M17 3l4 4L8 20l-5 1 1-5L17 3",
            Self::Restricted => "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18M5.6 5.6l12.8 12.8",
        }
    }
}

/// Props for SvgIcon
#[derive(Props, Clone, PartialEq)]
pub struct SvgIconProps {
    /// Which icon to draw
    pub name: IconName,
    /// Accessible label; the icon is decorative when empty
    #[props(default = String::new())]
    pub title: String,
}

/// A 16x16 stroked icon rendered inline.
#[component]
pub fn SvgIcon(props: SvgIconProps) -> Element {
    let path = props.name.path();

    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            role: "img",
            "aria-label": "{props.title}",
            path { d: "{path}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_have_distinct_paths() {
        assert!(!IconName::Annotate.path().is_empty());
        assert!(!IconName::Restricted.path().is_empty());
        assert_ne!(IconName::Annotate.path(), IconName::Restricted.path());
    }
}
