use dioxus::prelude::*;

/// HTML `type` attribute of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Visual style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Apply,
    Clear,
}

#[component]
pub fn Button(title: String, html_type: ButtonType, kind: ButtonKind) -> Element {
    rsx! {
        button {
            r#type: html_type.as_str(),
            class: match kind {
                ButtonKind::Apply => "btn btn-apply",
                ButtonKind::Clear => "btn btn-clear",
            },
            "{title}"
        }
    }
}
