//! Shared types for the article params panel.
//!
//! Holds the selectable option tables and the five-field record that both the
//! panel's draft and the applied article style use.

pub mod options;
pub mod state;

pub use options::SelectOption;
pub use state::{ArticleField, ArticleState};
