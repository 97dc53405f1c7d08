use dioxus::prelude::*;

/// Round toggle that opens and closes the params panel
#[component]
pub fn ArrowButton(is_open: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        div {
            role: "button",
            tabindex: "0",
            aria_label: "Открыть/Закрыть форму параметров статьи",
            class: if is_open { "arrow-button arrow-button_open" } else { "arrow-button" },
            onclick: move |_| on_click.call(()),
            span { class: if is_open { "arrow arrow_open" } else { "arrow" }, "➜" }
        }
    }
}
