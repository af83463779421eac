//! Text button for sidebar actions.

use dioxus::prelude::*;

/// Visual weight of a [`Button`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Muted action.
    #[default]
    Secondary,
    /// Highlighted call to action.
    Primary,
}

impl ButtonVariant {
    /// Inline style for the variant.
    pub(crate) fn style(self) -> &'static str {
        match self {
            Self::Secondary => {
                "padding: 6px 12px; border: 1px solid #a6a6a6; border-radius: 2px; \
                 background: #f5f5f5; color: #202020; cursor: pointer;"
            }
            Self::Primary => {
                "padding: 6px 12px; border: 1px solid #bd1c2b; border-radius: 2px; \
                 background: #bd1c2b; color: #fff; cursor: pointer;"
            }
        }
    }
}

/// Props for Button
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Visible button text
    pub label: String,
    /// Visual weight, secondary unless set
    #[props(default)]
    pub variant: ButtonVariant,
    /// Activation handler, called with no arguments
    pub onclick: EventHandler<()>,
}

/// Plain text button.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let style = props.variant.style();
    let onclick = props.onclick;

    rsx! {
        button {
            style: "{style}",
            onclick: move |_| onclick.call(()),
            "{props.label}"
        }
    }
}
