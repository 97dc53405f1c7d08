use article_core::SelectField;
use article_types::SelectOption;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use super::Text;
use crate::outside_click::use_outside_click_close;

/// Dropdown selector with a custom option list.
///
/// The list closes on pick, on a second press of the placeholder, or on a
/// press anywhere outside the selector.
#[component]
pub fn Select(field: SelectField, on_change: EventHandler<SelectOption>) -> Element {
    let mut is_open = use_signal(|| false);
    let root_id = format!("select-{}", field.field.key());

    use_outside_click_close(root_id.clone(), move || is_open(), move || match is_open.try_write() {
        Ok(mut w) => *w = false,
        Err(e) => warn!(error = %e, "Select busy, outside click ignored"),
    });

    let selected = field.selected;
    let open = is_open();
    let placeholder_class = if open {
        format!("select-placeholder select-placeholder_open {}", selected.class_name)
    } else {
        format!("select-placeholder {}", selected.class_name)
    };

    rsx! {
        div { id: "{root_id}", class: "select",
            Text { weight: 800, size: 12, uppercase: true, "{field.title}" }
            div {
                class: "{placeholder_class}",
                role: "button",
                tabindex: "0",
                onclick: move |_| is_open.toggle(),
                if let Some(swatch) = selected.option_class_name {
                    span { class: "swatch {swatch}" }
                }
                span { "{selected.title}" }
            }
            if open {
                ul { class: "select-options", role: "listbox",
                    for option in field.options.iter().copied() {
                        li {
                            key: "{option.value}",
                            class: if option == selected { "select-option select-option_selected" } else { "select-option" },
                            role: "option",
                            onclick: move |_| {
                                is_open.set(false);
                                on_change.call(option);
                            },
                            if let Some(swatch) = option.option_class_name {
                                span { class: "swatch {swatch}" }
                            }
                            span { class: "{option.class_name}", "{option.title}" }
                        }
                    }
                }
            }
        }
    }
}
