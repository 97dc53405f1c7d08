//! UI Components
//!
//! The article preview page and the params panel that styles it.

pub mod article;
pub mod article_params_form;
pub mod ui;

pub use article::Article;
pub use article_params_form::ArticleParamsForm;
