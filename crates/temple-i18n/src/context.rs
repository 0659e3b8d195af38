//! The active-language context injected into every renderer

use std::fmt;

use tracing::{debug, trace, warn};

use crate::catalog::Catalog;
use crate::detect;
use crate::language::Language;
use crate::resolver::Resolved;
use crate::store::PreferenceStore;

/// Owns the catalog, the active language code, and the preference slot.
///
/// Constructed once at startup and passed by reference into presentational
/// code; there is no ambient global. All lookups go through [`resolve`]
/// (or the string convenience [`text`]), which never fails.
///
/// [`resolve`]: LanguageContext::resolve
/// [`text`]: LanguageContext::text
pub struct LanguageContext {
    catalog: Catalog,
    active: String,
    store: Box<dyn PreferenceStore>,
}

impl fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageContext")
            .field("active", &self.active)
            .field("languages", &self.catalog.languages().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl LanguageContext {
    /// Restore-or-detect startup.
    ///
    /// A persisted code wins when it is a member of the supported set;
    /// otherwise the environment locale decides, defaulting to English.
    pub fn new(catalog: Catalog, store: Box<dyn PreferenceStore>) -> Self {
        let restored = store
            .load()
            .and_then(|code| Language::from_code(code.trim()));

        let language = match restored {
            Some(language) => {
                debug!("restored language preference: {:?}", language);
                language
            }
            None => detect::detect(),
        };

        Self {
            catalog,
            active: language.code().to_string(),
            store,
        }
    }

    /// Startup with an explicit language, skipping restore and detection.
    ///
    /// Used for one-run overrides; nothing is persisted.
    pub fn with_language(catalog: Catalog, store: Box<dyn PreferenceStore>, language: Language) -> Self {
        Self {
            catalog,
            active: language.code().to_string(),
            store,
        }
    }

    /// The active language code
    pub fn language(&self) -> &str {
        &self.active
    }

    /// The active language as an enum, when the code is supported
    pub fn current(&self) -> Option<Language> {
        Language::from_code(&self.active)
    }

    /// Set the active language and persist it.
    ///
    /// Deliberately permissive: any code is accepted, and an unsupported
    /// one simply has no catalog, so every lookup echoes its key. Selector
    /// surfaces only offer supported codes. Persistence failures are
    /// logged and swallowed so switching keeps working without storage.
    pub fn set_language(&mut self, code: &str) {
        self.active = code.to_string();
        if let Err(error) = self.store.save(code) {
            warn!("failed to persist language preference: {}", error);
        }
        debug!("active language set to '{}'", code);
    }

    /// Resolve a key to its display value for the active language.
    ///
    /// Total: a miss of any kind returns the key itself as
    /// [`Resolved::Text`]. An empty string in the catalog is a found
    /// value, not a miss.
    pub fn resolve<'a>(&'a self, key: &'a str) -> Resolved<'a> {
        self.catalog
            .tree(&self.active)
            .and_then(|tree| tree.lookup(key))
            .unwrap_or_else(|| {
                trace!("no translation for '{}' in '{}', echoing key", key, self.active);
                Resolved::Text(key)
            })
    }

    /// Resolve a key expected to be a single string.
    ///
    /// Sequence-shaped values degrade to the key, the same as a miss.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        match self.resolve(key) {
            Resolved::Text(text) => text,
            _ => key,
        }
    }

    /// Whether the active catalog defines this key
    pub fn has_key(&self, key: &str) -> bool {
        self.catalog
            .tree(&self.active)
            .is_some_and(|tree| tree.lookup(key).is_some())
    }

    /// The underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
