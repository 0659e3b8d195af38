//! Language detection from the host environment

use std::env;

use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::language::Language;

/// Detect the preferred language from the environment.
///
/// Preference order: `LC_ALL`, then `LC_MESSAGES`, then `LANG`. Only the
/// primary subtag of the effective locale is consulted; anything outside
/// the supported set (including no locale at all) yields the default.
pub fn detect() -> Language {
    let lc_all = env::var("LC_ALL").ok();
    let lc_messages = env::var("LC_MESSAGES").ok();
    let lang = env::var("LANG").ok();
    detect_from(lc_all.as_deref(), lc_messages.as_deref(), lang.as_deref())
}

/// Detection over explicit inputs, in `LC_ALL`/`LC_MESSAGES`/`LANG` order
pub fn detect_from(
    lc_all: Option<&str>,
    lc_messages: Option<&str>,
    lang: Option<&str>,
) -> Language {
    let effective = [lc_all, lc_messages, lang]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty());

    let detected = effective.and_then(language_from_locale).unwrap_or_default();
    debug!("detected language {:?} from locale {:?}", detected, effective);
    detected
}

/// Map one raw locale string to a supported language.
///
/// Returns `None` for unparseable or unsupported locales.
pub fn language_from_locale(raw: &str) -> Option<Language> {
    let normalized = normalize_locale_raw(raw)?;
    let identifier: LanguageIdentifier = normalized.parse().ok()?;
    Language::from_code(identifier.language.as_str())
}

/// Strip codeset and modifier suffixes and map `_` separators to `-`.
///
/// `C` and `POSIX` express no preference and normalize to `None`.
fn normalize_locale_raw(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw);
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.eq_ignore_ascii_case("c") || raw.eq_ignore_ascii_case("posix") {
        return None;
    }
    Some(raw.replace('_', "-"))
}
