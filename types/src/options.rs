//! Selectable option tables.
//!
//! Every field of the article style picks one entry from a fixed table. The
//! `value` token is what identifies an option; titles are display labels and
//! class names are styling hints for the preview and the dropdown list.

use std::hash::{Hash, Hasher};

/// One selectable choice for a field.
#[derive(Debug, Clone, Copy)]
pub struct SelectOption {
    /// Display label
    pub title: &'static str,
    /// Value token (CSS value applied to the preview)
    pub value: &'static str,
    /// Class applied to the selected item
    pub class_name: &'static str,
    /// Class applied to the entry in an option list (e.g. a colour swatch)
    pub option_class_name: Option<&'static str>,
}

impl SelectOption {
    pub const fn new(title: &'static str, value: &'static str, class_name: &'static str) -> Self {
        Self {
            title,
            value,
            class_name,
            option_class_name: None,
        }
    }

    pub const fn with_swatch(
        title: &'static str,
        value: &'static str,
        class_name: &'static str,
        option_class_name: &'static str,
    ) -> Self {
        Self {
            title,
            value,
            class_name,
            option_class_name: Some(option_class_name),
        }
    }
}

impl PartialEq for SelectOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for SelectOption {}

impl Hash for SelectOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Find an option in a table by its value token.
pub fn find_by_value(options: &'static [SelectOption], value: &str) -> Option<SelectOption> {
    options.iter().find(|o| o.value == value).copied()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tables
// ─────────────────────────────────────────────────────────────────────────────

pub const FONT_FAMILY_OPTIONS: &[SelectOption] = &[
    SelectOption::new("Open Sans", "Open Sans", "open-sans"),
    SelectOption::new("Ubuntu", "Ubuntu", "ubuntu"),
    SelectOption::new("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    SelectOption::new("Days One", "Days One", "days-one"),
    SelectOption::new("Merriweather", "Merriweather", "merriweather"),
];

pub const FONT_SIZE_OPTIONS: &[SelectOption] = &[
    SelectOption::new("18px", "18px", "font-size-18"),
    SelectOption::new("25px", "25px", "font-size-25"),
    SelectOption::new("38px", "38px", "font-size-38"),
];

pub const FONT_COLORS: &[SelectOption] = &[
    SelectOption::with_swatch("Черный", "#000000", "font-black", "option-black"),
    SelectOption::with_swatch("Белый", "#FFFFFF", "font-white", "option-white"),
    SelectOption::with_swatch("Серый", "#C4C4C4", "font-gray", "option-gray"),
    SelectOption::with_swatch("Розовый", "#FEAFE8", "font-pink", "option-pink"),
    SelectOption::with_swatch("Ярко-розовый", "#FD24AF", "font-fuchsia", "option-fuchsia"),
    SelectOption::with_swatch("Жёлтый", "#FFC802", "font-yellow", "option-yellow"),
    SelectOption::with_swatch("Зелёный", "#80D994", "font-green", "option-green"),
    SelectOption::with_swatch("Голубой", "#6FC1FD", "font-blue", "option-blue"),
    SelectOption::with_swatch("Фиолетовый", "#5F2EE4", "font-purple", "option-purple"),
];

pub const BACKGROUND_COLORS: &[SelectOption] = &[
    SelectOption::with_swatch("Белый", "#FFFFFF", "bg-white", "option-white"),
    SelectOption::with_swatch("Черный", "#000000", "bg-black", "option-black"),
    SelectOption::with_swatch("Серый", "#C4C4C4", "bg-gray", "option-gray"),
    SelectOption::with_swatch("Розовый", "#FEAFE8", "bg-pink", "option-pink"),
    SelectOption::with_swatch("Ярко-розовый", "#FD24AF", "bg-fuchsia", "option-fuchsia"),
    SelectOption::with_swatch("Жёлтый", "#FFC802", "bg-yellow", "option-yellow"),
    SelectOption::with_swatch("Зелёный", "#80D994", "bg-green", "option-green"),
    SelectOption::with_swatch("Голубой", "#6FC1FD", "bg-blue", "option-blue"),
    SelectOption::with_swatch("Фиолетовый", "#5F2EE4", "bg-purple", "option-purple"),
];

pub const CONTENT_WIDTH_OPTIONS: &[SelectOption] = &[
    SelectOption::new("Широкий", "1394px", "width-wide"),
    SelectOption::new("Узкий", "948px", "width-narrow"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_value() {
        let a = SelectOption::new("Black", "#000000", "a");
        let b = SelectOption::with_swatch("Черный", "#000000", "b", "c");
        let c = SelectOption::new("Black", "#FFFFFF", "a");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_find_by_value() {
        let size = find_by_value(FONT_SIZE_OPTIONS, "25px").unwrap();
        assert_eq!(size.title, "25px");
        assert_eq!(size.class_name, "font-size-25");

        let width = find_by_value(CONTENT_WIDTH_OPTIONS, "948px").unwrap();
        assert_eq!(width.title, "Узкий");

        assert!(find_by_value(FONT_SIZE_OPTIONS, "24px").is_none());
    }

    #[test]
    fn test_tables_have_unique_values() {
        for table in [
            FONT_FAMILY_OPTIONS,
            FONT_SIZE_OPTIONS,
            FONT_COLORS,
            BACKGROUND_COLORS,
            CONTENT_WIDTH_OPTIONS,
        ] {
            let mut values: Vec<_> = table.iter().map(|o| o.value).collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), table.len());
        }
    }

    #[test]
    fn test_color_options_carry_swatches() {
        assert!(FONT_COLORS.iter().all(|o| o.option_class_name.is_some()));
        assert!(BACKGROUND_COLORS.iter().all(|o| o.option_class_name.is_some()));
        assert!(FONT_FAMILY_OPTIONS.iter().all(|o| o.option_class_name.is_none()));
    }
}
