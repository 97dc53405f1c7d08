use article_core::RadioGroupField;
use article_types::SelectOption;
use dioxus::prelude::*;

use super::Text;

#[component]
pub fn RadioGroup(field: RadioGroupField, on_change: EventHandler<SelectOption>) -> Element {
    let name = field.name;
    let selected = field.selected;

    rsx! {
        div { class: "radio-group",
            Text { weight: 800, size: 12, uppercase: true, "{field.title}" }
            div { class: "radio-group-items",
                for option in field.options.iter().copied() {
                    div {
                        key: "{option.value}",
                        class: if option == selected { "radio-item radio-item_checked" } else { "radio-item" },
                        input {
                            r#type: "radio",
                            id: "{name}-{option.value}",
                            name: name,
                            value: option.value,
                            checked: option == selected,
                            onchange: move |_| on_change.call(option),
                        }
                        label { r#for: "{name}-{option.value}", class: "{option.class_name}", "{option.title}" }
                    }
                }
            }
        }
    }
}
