//! Field descriptors for the params form
//!
//! The form body is a fixed, ordered list of fields derived from the draft
//! state. Each entry is a tagged variant carrying exactly what its widget
//! needs; the UI walks the list with a single match.

use article_types::{ArticleField, ArticleState, SelectOption};

/// Dropdown selector bound to one field
#[derive(Debug, Clone, PartialEq)]
pub struct SelectField {
    pub title: &'static str,
    pub field: ArticleField,
    pub selected: SelectOption,
    pub options: &'static [SelectOption],
}

/// Radio group bound to one field
#[derive(Debug, Clone, PartialEq)]
pub struct RadioGroupField {
    pub title: &'static str,
    /// Shared `name` attribute of the radio inputs
    pub name: &'static str,
    pub field: ArticleField,
    pub selected: SelectOption,
    pub options: &'static [SelectOption],
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Select(SelectField),
    RadioGroup(RadioGroupField),
    Separator,
}

impl FormField {
    /// The state field this entry edits, if any
    pub fn field(&self) -> Option<ArticleField> {
        match self {
            FormField::Select(f) => Some(f.field),
            FormField::RadioGroup(f) => Some(f.field),
            FormField::Separator => None,
        }
    }

    /// Change handler: the draft with this entry's field set to `option`.
    ///
    /// Separators return the draft unchanged.
    pub fn apply(&self, draft: &ArticleState, option: SelectOption) -> ArticleState {
        match self.field() {
            Some(field) => draft.with(field, option),
            None => *draft,
        }
    }
}

fn select(title: &'static str, field: ArticleField, draft: &ArticleState) -> FormField {
    FormField::Select(SelectField {
        title,
        field,
        selected: draft.get(field),
        options: field.options(),
    })
}

/// Build the form's field list from the current draft.
pub fn build_fields(draft: &ArticleState) -> Vec<FormField> {
    vec![
        select("Шрифт", ArticleField::FontFamily, draft),
        FormField::RadioGroup(RadioGroupField {
            title: "Размер шрифта",
            name: "fontSize",
            field: ArticleField::FontSize,
            selected: draft.font_size,
            options: ArticleField::FontSize.options(),
        }),
        select("Цвет шрифта", ArticleField::FontColor, draft),
        FormField::Separator,
        select("Цвет фона", ArticleField::BackgroundColor, draft),
        select("Ширина контента", ArticleField::ContentWidth, draft),
    ]
}
