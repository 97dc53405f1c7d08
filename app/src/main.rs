//! Article preview with a style params panel.

mod components;
mod outside_click;

use article_core::ArticleState;
use article_core::preset::defaults_or_builtin;
use dioxus::prelude::*;
use dioxus_logger::tracing::{Level, info};

use components::{Article, ArticleParamsForm};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled defaults for both the page and the panel's reset
const PRESET: &str = include_str!("../assets/preset.toml");

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        web_sys::console::error_1(&format!("failed to init logger: {e}").into());
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let defaults = use_hook(|| defaults_or_builtin(PRESET));
    let mut article_state = use_signal(|| defaults);

    let state = article_state();
    let style = state.css_variables();
    let class = format!("main {}", state.background_color.class_name);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        main {
            class: "{class}",
            style: "{style}",
            ArticleParamsForm {
                defaults,
                set_article_state: move |next: ArticleState| {
                    info!(font = next.font_family.value, size = next.font_size.value, "Article style applied");
                    article_state.set(next);
                },
            }
            Article {}
        }
    }
}
