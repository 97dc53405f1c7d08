pub mod fields;
pub mod panel;
pub mod preset;

// Re-exports for convenience
pub use article_types::{ArticleField, ArticleState, SelectOption};
pub use fields::{FormField, RadioGroupField, SelectField, build_fields};
pub use panel::ParamsPanel;
pub use preset::{ArticlePreset, PresetError};
