//! Params panel controller
//!
//! Owns the open/closed flag and the draft (pending) style. The applied style
//! lives with the caller and is only ever handed a complete record through the
//! `set_article_state` callback passed to [`ParamsPanel::submit`] and
//! [`ParamsPanel::reset`].

use article_types::{ArticleField, ArticleState, SelectOption};

use crate::fields::{FormField, build_fields};

#[derive(Debug, Clone, PartialEq)]
pub struct ParamsPanel {
    is_open: bool,
    pending: ArticleState,
    defaults: ArticleState,
}

impl Default for ParamsPanel {
    fn default() -> Self {
        Self::new(ArticleState::default())
    }
}

impl ParamsPanel {
    /// Closed panel whose draft starts at `defaults`
    pub fn new(defaults: ArticleState) -> Self {
        Self {
            is_open: false,
            pending: defaults,
            defaults,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn pending(&self) -> &ArticleState {
        &self.pending
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Hand the draft to the caller and close.
    pub fn submit(&mut self, set_article_state: impl FnOnce(ArticleState)) {
        tracing::debug!(state = ?self.pending, "Applying article params");
        set_article_state(self.pending);
        self.is_open = false;
    }

    /// Restore the draft to the defaults and push the defaults to the caller.
    ///
    /// The open flag is left as is.
    pub fn reset(&mut self, set_article_state: impl FnOnce(ArticleState)) {
        tracing::debug!("Resetting article params to defaults");
        self.pending = self.defaults;
        set_article_state(self.defaults);
    }

    /// Close in response to a pointer press outside the panel.
    ///
    /// Returns `false` (and does nothing) when already closed.
    pub fn close_on_outside_click(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        true
    }

    pub fn change_field(&mut self, field: ArticleField, option: SelectOption) {
        tracing::debug!(field = field.key(), value = option.value, "Article param changed");
        self.pending = self.pending.with(field, option);
    }

    /// Field descriptors for the current draft
    pub fn fields(&self) -> Vec<FormField> {
        build_fields(&self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use article_types::options::{
        BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS, FONT_SIZE_OPTIONS, find_by_value,
    };

    fn option(table: &'static [SelectOption], value: &str) -> SelectOption {
        find_by_value(table, value).unwrap()
    }

    #[test]
    fn test_starts_closed_with_defaults() {
        let panel = ParamsPanel::default();
        assert!(!panel.is_open());
        assert_eq!(*panel.pending(), ArticleState::default());
    }

    #[test]
    fn test_submit_calls_once_and_closes() {
        let mut panel = ParamsPanel::default();
        panel.toggle();
        panel.change_field(ArticleField::FontColor, option(FONT_COLORS, "#80D994"));
        let expected = *panel.pending();

        let mut calls = Vec::new();
        panel.submit(|state| calls.push(state));

        assert_eq!(calls, vec![expected]);
        assert!(!panel.is_open());
        // Draft survives closing
        assert_eq!(*panel.pending(), expected);
    }

    #[test]
    fn test_reset_restores_defaults_and_propagates() {
        let mut panel = ParamsPanel::default();
        panel.toggle();
        panel.change_field(ArticleField::FontSize, option(FONT_SIZE_OPTIONS, "25px"));
        panel.change_field(ArticleField::ContentWidth, option(CONTENT_WIDTH_OPTIONS, "948px"));
        assert_eq!(panel.pending().font_size.value, "25px");

        let mut last = None;
        panel.reset(|state| last = Some(state));

        assert_eq!(panel.pending().font_size.value, "18px");
        assert_eq!(*panel.pending(), ArticleState::default());
        assert_eq!(last, Some(ArticleState::default()));
        assert!(panel.is_open());
    }

    #[test]
    fn test_reset_from_untouched_draft() {
        let mut panel = ParamsPanel::default();
        let mut calls = 0;
        panel.reset(|state| {
            calls += 1;
            assert_eq!(state, ArticleState::default());
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_reset_uses_configured_defaults() {
        let defaults =
            ArticleState::default().with(ArticleField::BackgroundColor, option(BACKGROUND_COLORS, "#000000"));
        let mut panel = ParamsPanel::new(defaults);
        panel.change_field(ArticleField::BackgroundColor, option(BACKGROUND_COLORS, "#FFC802"));

        let mut last = None;
        panel.reset(|state| last = Some(state));
        assert_eq!(panel.pending().background_color.value, "#000000");
        assert_eq!(last, Some(defaults));
    }

    #[test]
    fn test_change_field_touches_one_key() {
        let mut panel = ParamsPanel::default();
        let before = *panel.pending();
        let yellow = option(FONT_COLORS, "#FFC802");

        panel.change_field(ArticleField::FontColor, yellow);

        let after = panel.pending();
        assert_eq!(after.font_color, yellow);
        assert_eq!(after.font_family, before.font_family);
        assert_eq!(after.font_size, before.font_size);
        assert_eq!(after.background_color, before.background_color);
        assert_eq!(after.content_width, before.content_width);
    }

    #[test]
    fn test_toggle_even_times_round_trips() {
        let mut panel = ParamsPanel::default();
        for _ in 0..4 {
            panel.toggle();
        }
        assert!(!panel.is_open());

        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        panel.toggle();
        assert!(panel.is_open());
    }

    #[test]
    fn test_outside_click() {
        let mut panel = ParamsPanel::default();
        let closed = panel.clone();
        assert!(!panel.close_on_outside_click());
        assert_eq!(panel, closed);

        panel.toggle();
        panel.change_field(ArticleField::FontSize, option(FONT_SIZE_OPTIONS, "38px"));
        let draft = *panel.pending();
        assert!(panel.close_on_outside_click());
        assert!(!panel.is_open());
        assert_eq!(*panel.pending(), draft);
    }

    #[test]
    fn test_fields_follow_draft() {
        let mut panel = ParamsPanel::default();
        let big = option(FONT_SIZE_OPTIONS, "38px");
        panel.change_field(ArticleField::FontSize, big);

        let fields = panel.fields();
        let FormField::RadioGroup(radio) = &fields[1] else {
            panic!("expected radio group");
        };
        assert_eq!(radio.selected, big);
    }

    #[test]
    fn test_field_handler_feeds_change_field() {
        let mut panel = ParamsPanel::default();
        let fields = panel.fields();
        let narrow = option(CONTENT_WIDTH_OPTIONS, "948px");

        let next = fields[5].apply(panel.pending(), narrow);
        let field = fields[5].field().unwrap();
        panel.change_field(field, narrow);
        assert_eq!(*panel.pending(), next);
    }
}
