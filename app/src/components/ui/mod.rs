//! Small form primitives used by the params panel.

mod arrow_button;
mod button;
mod radio_group;
mod select;

pub use arrow_button::ArrowButton;
pub use button::{Button, ButtonKind, ButtonType};
pub use radio_group::RadioGroup;
pub use select::Select;

use dioxus::prelude::*;

/// Horizontal rule between groups of fields
#[component]
pub fn Separator() -> Element {
    rsx! {
        div { class: "separator" }
    }
}

/// Styled text run.
#[component]
pub fn Text(
    weight: u16,
    size: u16,
    #[props(default)] uppercase: bool,
    children: Element,
) -> Element {
    let class = if uppercase {
        format!("text text-weight-{weight} text-size-{size} text-uppercase")
    } else {
        format!("text text-weight-{weight} text-size-{size}")
    };

    rsx! {
        span { class: "{class}", {children} }
    }
}
