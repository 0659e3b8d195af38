//! Two-stage key resolution over a translation tree
//!
//! Stage one treats the key as a literal entry, so catalogs may store flat
//! dotted keys (`"hero.title"`) directly. Stage two splits the key on `.`
//! and walks the tree: branches descend by name, sequences and pairs by
//! numeric index. Neither stage is merged or skipped, and a miss at any
//! point resolves to nothing here; totality (fallback to the key itself)
//! lives in [`crate::context::LanguageContext::resolve`].

use std::collections::BTreeMap;

use crate::catalog::Node;

/// A borrowed display value produced by the resolver
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// A single display string
    Text(&'a str),
    /// An ordered sequence of strings
    Lines(&'a [String]),
    /// An ordered sequence of paired display lines
    Pairs(&'a [(String, String)]),
    /// One pair, reached by indexing into a pair sequence
    Pair(&'a (String, String)),
}

/// The shape of a resolved value, for consumers comparing across languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Lines,
    Pairs,
    Pair,
}

impl<'a> Resolved<'a> {
    /// The shape of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Lines(_) => ValueKind::Lines,
            Self::Pairs(_) => ValueKind::Pairs,
            Self::Pair(_) => ValueKind::Pair,
        }
    }

    /// The string payload, when this is [`Resolved::Text`]
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The sequence payload, when this is [`Resolved::Lines`]
    pub fn as_lines(&self) -> Option<&'a [String]> {
        match self {
            Self::Lines(lines) => Some(lines),
            _ => None,
        }
    }

    /// The pair-sequence payload, when this is [`Resolved::Pairs`]
    pub fn as_pairs(&self) -> Option<&'a [(String, String)]> {
        match self {
            Self::Pairs(pairs) => Some(pairs),
            _ => None,
        }
    }
}

/// Walk state: either a whole node or a position inside a sequence entry
enum Cursor<'a> {
    Node(&'a Node),
    Pair(&'a (String, String)),
    Str(&'a str),
}

impl<'a> Cursor<'a> {
    fn descend(self, segment: &str) -> Option<Cursor<'a>> {
        match self {
            Cursor::Node(Node::Branch(children)) => children.get(segment).map(Cursor::Node),
            Cursor::Node(Node::Lines(lines)) => {
                let index: usize = segment.parse().ok()?;
                lines.get(index).map(|line| Cursor::Str(line))
            }
            Cursor::Node(Node::Pairs(pairs)) => {
                let index: usize = segment.parse().ok()?;
                pairs.get(index).map(Cursor::Pair)
            }
            Cursor::Pair(pair) => match segment {
                "0" => Some(Cursor::Str(&pair.0)),
                "1" => Some(Cursor::Str(&pair.1)),
                _ => None,
            },
            // Strings terminate a walk; extra segments miss.
            Cursor::Node(Node::Text(_)) | Cursor::Str(_) => None,
        }
    }

    fn finish(self) -> Option<Resolved<'a>> {
        match self {
            Cursor::Node(node) => leaf(node),
            Cursor::Pair(pair) => Some(Resolved::Pair(pair)),
            Cursor::Str(text) => Some(Resolved::Text(text)),
        }
    }
}

/// A node as a display value; a branch is not one
fn leaf(node: &Node) -> Option<Resolved<'_>> {
    match node {
        Node::Text(text) => Some(Resolved::Text(text)),
        Node::Lines(lines) => Some(Resolved::Lines(lines)),
        Node::Pairs(pairs) => Some(Resolved::Pairs(pairs)),
        Node::Branch(_) => None,
    }
}

pub(crate) fn lookup<'a>(root: &'a BTreeMap<String, Node>, key: &str) -> Option<Resolved<'a>> {
    // Stage one: the key as a literal entry.
    if let Some(found) = root.get(key).and_then(leaf) {
        return Some(found);
    }

    // Stage two: dotted-path walk.
    let mut segments = key.split('.');
    let first = segments.next()?;
    let mut cursor = Cursor::Node(root.get(first)?);
    for segment in segments {
        cursor = cursor.descend(segment)?;
    }
    cursor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TranslationTree;

    fn sample() -> TranslationTree {
        TranslationTree::from_json(
            r#"{
                "hero.title": "Hello",
                "empty": "",
                "tao": {
                    "intro": "Thus it is said:",
                    "lines": [
                        ["first left", "first right"],
                        ["second left", "second right"]
                    ],
                    "quotes": ["one", "two", "three"]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn literal_dotted_key_resolves_in_stage_one() {
        let tree = sample();
        assert_eq!(tree.lookup("hero.title"), Some(Resolved::Text("Hello")));
    }

    #[test]
    fn nested_path_resolves_in_stage_two() {
        let tree = sample();
        assert_eq!(
            tree.lookup("tao.intro"),
            Some(Resolved::Text("Thus it is said:"))
        );
    }

    #[test]
    fn nested_pairs_resolve_as_a_sequence() {
        let tree = sample();
        let value = tree.lookup("tao.lines").expect("tao.lines should resolve");
        let pairs = value.as_pairs().expect("tao.lines should be pairs");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].1, "first right");
    }

    #[test]
    fn numeric_segments_index_into_sequences_and_pairs() {
        let tree = sample();
        assert_eq!(
            tree.lookup("tao.lines.0.0"),
            Some(Resolved::Text("first left"))
        );
        assert_eq!(
            tree.lookup("tao.lines.1.1"),
            Some(Resolved::Text("second right"))
        );
        assert_eq!(tree.lookup("tao.quotes.2"), Some(Resolved::Text("three")));
        assert!(matches!(
            tree.lookup("tao.lines.0"),
            Some(Resolved::Pair(_))
        ));
    }

    #[test]
    fn out_of_range_and_non_numeric_indices_miss() {
        let tree = sample();
        assert_eq!(tree.lookup("tao.lines.9.0"), None);
        assert_eq!(tree.lookup("tao.lines.first.0"), None);
        assert_eq!(tree.lookup("tao.lines.0.2"), None);
        assert_eq!(tree.lookup("tao.quotes.three"), None);
    }

    #[test]
    fn walking_past_a_string_misses() {
        let tree = sample();
        assert_eq!(tree.lookup("hero.title.more"), None);
        assert_eq!(tree.lookup("tao.intro.0"), None);
    }

    #[test]
    fn a_branch_is_not_a_display_value() {
        let tree = sample();
        assert_eq!(tree.lookup("tao"), None);
    }

    #[test]
    fn absent_keys_miss() {
        let tree = sample();
        assert_eq!(tree.lookup("missing"), None);
        assert_eq!(tree.lookup("tao.missing"), None);
        assert_eq!(tree.lookup(""), None);
    }

    #[test]
    fn empty_string_values_are_found_not_missing() {
        let tree = sample();
        assert_eq!(tree.lookup("empty"), Some(Resolved::Text("")));
    }

    #[test]
    fn accessors_expose_only_the_matching_shape() {
        let tree = sample();

        let title = tree.lookup("hero.title").unwrap();
        assert_eq!(title.as_text(), Some("Hello"));
        assert_eq!(title.as_lines(), None);
        assert_eq!(title.as_pairs(), None);

        let quotes = tree.lookup("tao.quotes").unwrap();
        assert_eq!(quotes.as_text(), None);
        assert_eq!(quotes.as_lines().map(|lines| lines.len()), Some(3));

        let lines = tree.lookup("tao.lines").unwrap();
        assert!(lines.as_pairs().is_some());
        assert_eq!(lines.as_lines(), None);
    }
}
