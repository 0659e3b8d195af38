//! Translation store and resolver for the temple site
//!
//! This crate holds everything language-related: the per-language translation
//! trees, the key resolver, system-locale detection, and the durable language
//! preference. It includes:
//!
//! - A polymorphic translation tree (strings, string sequences, pair sequences)
//! - Two-stage key resolution: literal dotted keys first, then a nested walk
//! - Total lookups that echo the key instead of failing
//! - Locale detection from `LC_ALL`/`LC_MESSAGES`/`LANG`
//! - A single-slot preference store for restoring the language across runs
//!
//! # Example
//!
//! ```rust
//! use temple_i18n::{Catalog, FilePreferenceStore, Language, LanguageContext};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut catalog = Catalog::new();
//! catalog.insert_json("en", r#"{ "hero.title": "A Meditation Temple" }"#)?;
//!
//! let store = FilePreferenceStore::new("state");
//! let ctx = LanguageContext::with_language(catalog, Box::new(store), Language::English);
//!
//! assert_eq!(ctx.text("hero.title"), "A Meditation Temple");
//! assert_eq!(ctx.text("hero.missing"), "hero.missing");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod context;
pub mod detect;
pub mod error;
pub mod language;
pub mod resolver;
pub mod store;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use catalog::{Catalog, Node, TranslationTree};
pub use context::LanguageContext;
pub use error::{I18nError, I18nResult};
pub use language::Language;
pub use resolver::{Resolved, ValueKind};
pub use store::{FilePreferenceStore, PreferenceStore, PREFERENCE_FILE};
