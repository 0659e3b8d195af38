//! The embedded trilingual site copy

use temple_i18n::{Catalog, I18nResult, Language};

const EN: &str = include_str!("../locales/en.json");
const DE: &str = include_str!("../locales/de.json");
const FR: &str = include_str!("../locales/fr.json");

/// The temple's two names, alternated in the masthead
pub const TEMPLE_NAME: &str = "DaLinSi";
pub const TEMPLE_NAME_LONG: &str = "Temple of the Great Forest";

/// Build the catalog from the embedded locale documents.
///
/// Parse failures here mean a broken embedded document and abort startup.
pub fn catalog() -> I18nResult<Catalog> {
    let mut catalog = Catalog::new();
    catalog.insert_json(Language::English.code(), EN)?;
    catalog.insert_json(Language::German.code(), DE)?;
    catalog.insert_json(Language::French.code(), FR)?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.len(), 3);
        for language in Language::all() {
            assert!(
                catalog.tree(language.code()).is_some(),
                "missing tree for {:?}",
                language
            );
        }
    }

    #[test]
    fn every_language_shares_the_same_key_set() {
        let catalog = catalog().unwrap();
        let reference = catalog.tree("en").unwrap().leaf_paths();
        assert!(!reference.is_empty());
        for code in ["de", "fr"] {
            let paths = catalog.tree(code).unwrap().leaf_paths();
            assert_eq!(paths, reference, "key set for '{}' diverges from 'en'", code);
        }
    }
}
