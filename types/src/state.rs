//! The article style record.
//!
//! `ArticleState` is used both for the style currently applied to the article
//! and for the unsaved draft held by the params panel. Both always carry all
//! five fields; only the chosen options differ.

use crate::options::{
    BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
    SelectOption,
};

/// Names one field of [`ArticleState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl ArticleField {
    pub fn all() -> &'static [ArticleField] {
        &[
            ArticleField::FontFamily,
            ArticleField::FontSize,
            ArticleField::FontColor,
            ArticleField::BackgroundColor,
            ArticleField::ContentWidth,
        ]
    }

    /// Key used in preset files and element ids
    pub fn key(&self) -> &'static str {
        match self {
            ArticleField::FontFamily => "font_family",
            ArticleField::FontSize => "font_size",
            ArticleField::FontColor => "font_color",
            ArticleField::BackgroundColor => "background_color",
            ArticleField::ContentWidth => "content_width",
        }
    }

    /// The table of choices for this field
    pub fn options(&self) -> &'static [SelectOption] {
        match self {
            ArticleField::FontFamily => FONT_FAMILY_OPTIONS,
            ArticleField::FontSize => FONT_SIZE_OPTIONS,
            ArticleField::FontColor => FONT_COLORS,
            ArticleField::BackgroundColor => BACKGROUND_COLORS,
            ArticleField::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    /// First entry of the field's table.
    pub fn default_option(&self) -> SelectOption {
        self.options()[0]
    }
}

/// Five-field article style record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleState {
    pub font_family: SelectOption,
    pub font_size: SelectOption,
    pub font_color: SelectOption,
    pub background_color: SelectOption,
    pub content_width: SelectOption,
}

impl Default for ArticleState {
    fn default() -> Self {
        Self {
            font_family: ArticleField::FontFamily.default_option(),
            font_size: ArticleField::FontSize.default_option(),
            font_color: ArticleField::FontColor.default_option(),
            background_color: ArticleField::BackgroundColor.default_option(),
            content_width: ArticleField::ContentWidth.default_option(),
        }
    }
}

impl ArticleState {
    pub fn get(&self, field: ArticleField) -> SelectOption {
        match field {
            ArticleField::FontFamily => self.font_family,
            ArticleField::FontSize => self.font_size,
            ArticleField::FontColor => self.font_color,
            ArticleField::BackgroundColor => self.background_color,
            ArticleField::ContentWidth => self.content_width,
        }
    }

    fn slot_mut(&mut self, field: ArticleField) -> &mut SelectOption {
        match field {
            ArticleField::FontFamily => &mut self.font_family,
            ArticleField::FontSize => &mut self.font_size,
            ArticleField::FontColor => &mut self.font_color,
            ArticleField::BackgroundColor => &mut self.background_color,
            ArticleField::ContentWidth => &mut self.content_width,
        }
    }

    /// Copy of this record with exactly one field replaced.
    pub fn with(mut self, field: ArticleField, option: SelectOption) -> Self {
        *self.slot_mut(field) = option;
        self
    }

    /// Inline CSS custom properties for the article preview.
    pub fn css_variables(&self) -> String {
        format!(
            "--font-family: {}; --font-size: {}; --font-color: {}; --container-width: {}; --bg-color: {};",
            self.font_family.value,
            self.font_size.value,
            self.font_color.value,
            self.content_width.value,
            self.background_color.value,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::find_by_value;

    #[test]
    fn test_default_state() {
        let state = ArticleState::default();
        assert_eq!(state.font_family.value, "Open Sans");
        assert_eq!(state.font_size.value, "18px");
        assert_eq!(state.font_color.value, "#000000");
        assert_eq!(state.background_color.value, "#FFFFFF");
        assert_eq!(state.content_width.value, "1394px");
    }

    #[test]
    fn test_with_replaces_single_field() {
        let base = ArticleState::default();
        let big = find_by_value(FONT_SIZE_OPTIONS, "38px").unwrap();
        let changed = base.with(ArticleField::FontSize, big);

        assert_eq!(changed.font_size, big);
        for field in ArticleField::all() {
            if *field != ArticleField::FontSize {
                assert_eq!(changed.get(*field), base.get(*field), "{:?} changed", field);
            }
        }
        // Original untouched
        assert_eq!(base.font_size.value, "18px");
    }

    #[test]
    fn test_get_matches_fields() {
        let state = ArticleState::default();
        assert_eq!(state.get(ArticleField::FontColor), state.font_color);
        assert_eq!(state.get(ArticleField::ContentWidth), state.content_width);
    }

    #[test]
    fn test_css_variables() {
        let narrow = find_by_value(CONTENT_WIDTH_OPTIONS, "948px").unwrap();
        let state = ArticleState::default().with(ArticleField::ContentWidth, narrow);
        assert_eq!(
            state.css_variables(),
            "--font-family: Open Sans; --font-size: 18px; --font-color: #000000; \
             --container-width: 948px; --bg-color: #FFFFFF;"
        );
    }

    #[test]
    fn test_field_keys_unique() {
        let mut keys: Vec<_> = ArticleField::all().iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 5);
    }
}
