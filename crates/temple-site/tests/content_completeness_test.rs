//! Verify the embedded locale documents cover every key with the same shape

use temple_i18n::test_utils::MemoryPreferenceStore;
use temple_i18n::{Language, LanguageContext, Resolved};
use temple_site::content;

fn context(language: Language) -> LanguageContext {
    LanguageContext::with_language(
        content::catalog().unwrap(),
        Box::new(MemoryPreferenceStore::new()),
        language,
    )
}

#[test]
fn test_all_locales_have_same_key_shapes() {
    let catalog = content::catalog().unwrap();
    let reference = catalog.tree("en").unwrap();
    let paths = reference.leaf_paths();
    assert!(paths.len() > 50, "suspiciously small catalog: {}", paths.len());

    for language in Language::all() {
        let tree = catalog.tree(language.code()).unwrap();
        for path in &paths {
            let found = tree.lookup(path);
            assert!(
                found.is_some(),
                "key '{}' missing in locale {:?}",
                path,
                language
            );
            assert_eq!(
                found.map(|value| value.kind()),
                reference.lookup(path).map(|value| value.kind()),
                "shape of '{}' diverges in locale {:?}",
                path,
                language
            );
        }
    }
}

#[test]
fn test_expected_keys_present() {
    let test_keys = vec![
        // Navigation
        "nav.about",
        "nav.forwhom",
        "nav.instructors",
        "nav.offerings",
        "nav.support",
        "nav.leave",
        // Hero and signup copy
        "hero.title",
        "hero.subtitle",
        "hero.email.placeholder",
        "hero.email.button",
        "hero.gdpr",
        "form.error.empty",
        "form.error.invalid",
        "form.error.consent",
        "form.success",
        // About
        "about.title",
        "about.subtitle",
        "about.p1",
        "about.p2",
        "about.p3",
        // For whom
        "forwhom.title",
        "forwhom.card1.title",
        "forwhom.card2.subtitle",
        "forwhom.card3.desc",
        "forwhom.card4.title",
        // Offerings
        "whatwillyoufind.title",
        "whatwillyoufind.shortterm.title",
        "whatwillyoufind.shortterm.duration",
        "whatwillyoufind.longterm.desc",
        "whatwillyoufind.offered.title",
        "whatwillyoufind.offered.1",
        "whatwillyoufind.offered.4",
        "whatwillyoufind.instructors.title",
        // Support
        "support.title",
        "support.subtitle",
        "support.donation.title",
        "support.donation.button",
        "support.wishlist.title",
        "support.wishlist.desc",
        "support.closing",
        // Newsletter card
        "newsletter.title",
        "newsletter.desc",
        // Verse branch (nested addressing)
        "tao.intro",
        "tao.lines",
        "tao.quotes",
        "tao.attribution",
        // Footer
        "footer.impressum",
        "footer.privacy",
        "footer.terms",
        "footer.contact",
        "footer.rights",
        "footer.followUs",
    ];

    let catalog = content::catalog().unwrap();
    for language in Language::all() {
        let tree = catalog.tree(language.code()).unwrap();
        for key in &test_keys {
            assert!(
                tree.lookup(key).is_some(),
                "expected key '{}' not found in locale {:?}",
                key,
                language
            );
        }
    }
}

#[test]
fn test_verse_pairs_and_flat_quotes_align() {
    for language in Language::all() {
        let ctx = context(language.clone());

        let pairs = match ctx.resolve("tao.lines") {
            Resolved::Pairs(pairs) => pairs,
            other => panic!("tao.lines in {:?} is {:?}", language, other.kind()),
        };
        assert_eq!(pairs.len(), 6, "pair count in {:?}", language);
        // Second halves are reachable without any panic.
        assert!(!pairs[0].1.is_empty());

        let quotes = match ctx.resolve("tao.quotes") {
            Resolved::Lines(lines) => lines,
            other => panic!("tao.quotes in {:?} is {:?}", language, other.kind()),
        };
        assert_eq!(quotes.len(), 12, "flat quote count in {:?}", language);

        // The flat list is the pair rows laid end to end.
        for (i, (first, second)) in pairs.iter().enumerate() {
            assert_eq!(&quotes[2 * i], first, "row {} first line in {:?}", i, language);
            assert_eq!(&quotes[2 * i + 1], second, "row {} second line in {:?}", i, language);
        }
    }
}

#[test]
fn test_nested_indexing_into_the_verse_branch() {
    let ctx = context(Language::English);

    let pairs = ctx.resolve("tao.lines").as_pairs().unwrap().to_vec();
    assert_eq!(
        ctx.resolve("tao.lines.0.0"),
        Resolved::Text(&pairs[0].0),
        "numeric descent should reach the first line of the first pair"
    );
    assert_eq!(ctx.resolve("tao.lines.0"), Resolved::Pair(&pairs[0]));

    // Out-of-range indexes degrade to the key, never to a panic.
    assert_eq!(
        ctx.resolve("tao.lines.9.0"),
        Resolved::Text("tao.lines.9.0")
    );
}

#[test]
fn test_switching_language_changes_live_copy() {
    use std::sync::Arc;

    let store = Arc::new(MemoryPreferenceStore::new());
    let mut ctx = LanguageContext::with_language(
        content::catalog().unwrap(),
        Box::new(Arc::clone(&store)),
        Language::English,
    );
    assert_eq!(ctx.text("hero.title"), "Let’s find our way together");

    ctx.set_language("de");
    assert_eq!(ctx.text("hero.title"), "Lass uns gemeinsam unseren Weg finden");

    ctx.set_language("fr");
    assert_eq!(ctx.text("hero.title"), "Trouvons notre chemin ensemble");
    assert_eq!(store.saved(), Some("fr".to_string()));
}

#[test]
fn test_sample_copy_differs_between_languages() {
    // Use keys that genuinely differ across all three languages; several
    // footer entries are legitimately identical (e.g. "Impressum").
    let sample_keys = ["nav.about", "hero.title", "about.title", "form.error.empty"];

    let en = context(Language::English);
    for language in [Language::German, Language::French] {
        let other = context(language.clone());
        for key in sample_keys {
            assert_ne!(
                en.text(key),
                other.text(key),
                "key '{}' in {:?} should differ from English",
                key,
                language
            );
        }
    }
}
