//! Branch-name engine: title sanitization and `type/TICKET-title` composition.

pub mod generator;
pub mod sanitizer;

pub use generator::{GeneratorConfig, MIN_TITLE_BUDGET, RefNameError, generate, validate_ref_name};
pub use sanitizer::{SanitizationOptions, fold_diacritics, sanitize};
