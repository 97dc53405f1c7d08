//! Article params panel
//!
//! A sliding side panel holding the style form. Edits go to a local draft;
//! "Применить" pushes the draft to the page and closes the panel, "Сбросить"
//! restores the defaults and pushes them immediately.

use article_core::{ArticleField, ArticleState, FormField, ParamsPanel, SelectOption};
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::components::ui::{ArrowButton, Button, ButtonKind, ButtonType, RadioGroup, Select, Separator, Text};
use crate::outside_click::use_outside_click_close;

const PANEL_ROOT_ID: &str = "article-params";

#[component]
pub fn ArticleParamsForm(
    defaults: ArticleState,
    set_article_state: EventHandler<ArticleState>,
) -> Element {
    let mut panel = use_signal(|| ParamsPanel::new(defaults));

    use_outside_click_close(
        PANEL_ROOT_ID.to_string(),
        move || panel.read().is_open(),
        move || match panel.try_write() {
            Ok(mut w) => {
                w.close_on_outside_click();
            }
            Err(e) => warn!(error = %e, "Params panel busy, outside click ignored"),
        },
    );

    let is_open = panel.read().is_open();
    let fields = panel.read().fields();

    rsx! {
        div { id: PANEL_ROOT_ID, class: "article-params",
            ArrowButton {
                is_open,
                on_click: move |_| panel.write().toggle(),
            }

            aside { class: if is_open { "container container_open" } else { "container" },
                form {
                    class: "form",
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        panel.write().submit(|state| set_article_state.call(state));
                    },
                    onreset: move |e: FormEvent| {
                        e.prevent_default();
                        panel.write().reset(|state| set_article_state.call(state));
                    },

                    Text { weight: 800, size: 31, uppercase: true, "Задайте параметры" }

                    for (index, entry) in fields.into_iter().enumerate() {
                        FormFieldView {
                            key: "{index}",
                            entry,
                            on_change: move |(field, option): (ArticleField, SelectOption)| panel.write().change_field(field, option),
                        }
                    }

                    div { class: "bottom-container",
                        Button { title: "Сбросить", html_type: ButtonType::Reset, kind: ButtonKind::Clear }
                        Button { title: "Применить", html_type: ButtonType::Submit, kind: ButtonKind::Apply }
                    }
                }
            }
        }
    }
}

/// Render one field descriptor with the matching widget.
#[component]
fn FormFieldView(entry: FormField, on_change: EventHandler<(ArticleField, SelectOption)>) -> Element {
    match entry {
        FormField::Select(select) => {
            let field = select.field;
            rsx! {
                Select { field: select, on_change: move |option: SelectOption| on_change.call((field, option)) }
            }
        }
        FormField::RadioGroup(radio) => {
            let field = radio.field;
            rsx! {
                RadioGroup { field: radio, on_change: move |option: SelectOption| on_change.call((field, option)) }
            }
        }
        FormField::Separator => rsx! {
            Separator {}
        },
    }
}
