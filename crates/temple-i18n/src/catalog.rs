//! Translation catalog: per-language trees of display values

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{I18nError, I18nResult};
use crate::resolver::{self, Resolved};

/// One entry of a translation tree
///
/// Keys may hold literal dots (`"hero.title"` as a single flat entry) or
/// nest through [`Node::Branch`]; the resolver supports both addressing
/// schemes against the same tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A literal display string
    Text(String),
    /// An ordered sequence of strings
    Lines(Vec<String>),
    /// An ordered sequence of paired display lines
    Pairs(Vec<(String, String)>),
    /// A nested subtree
    Branch(BTreeMap<String, Node>),
}

/// The translation data for one language
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTree {
    pub(crate) root: BTreeMap<String, Node>,
}

impl TranslationTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a tree from a JSON document
    pub fn from_json(json: &str) -> I18nResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Insert an entry under a literal key
    pub fn insert(&mut self, key: impl Into<String>, node: Node) {
        self.root.insert(key.into(), node);
    }

    /// Look up a key using the two-stage scheme
    ///
    /// Stage one checks `key` as a literal entry; stage two splits on `.`
    /// and walks branches, sequences, and pairs. Returns `None` when
    /// neither stage finds a display value.
    pub fn lookup(&self, key: &str) -> Option<Resolved<'_>> {
        resolver::lookup(&self.root, key)
    }

    /// All addressable leaf paths, dotted
    ///
    /// Literal dotted keys appear as stored; branch entries contribute
    /// their joined path. Sequence elements are not enumerated.
    pub fn leaf_paths(&self) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        collect_leaf_paths(&self.root, None, &mut paths);
        paths
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the tree has no entries
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn collect_leaf_paths(map: &BTreeMap<String, Node>, prefix: Option<&str>, out: &mut BTreeSet<String>) {
    for (key, node) in map {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match node {
            Node::Branch(children) => collect_leaf_paths(children, Some(&path), out),
            _ => {
                out.insert(path);
            }
        }
    }
}

/// The full set of per-language translation trees
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    trees: BTreeMap<String, TranslationTree>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the tree for a language code
    pub fn insert(&mut self, code: impl Into<String>, tree: TranslationTree) {
        self.trees.insert(code.into(), tree);
    }

    /// Parse a JSON document and insert it as the tree for `code`
    pub fn insert_json(&mut self, code: &str, json: &str) -> I18nResult<()> {
        let tree = serde_json::from_str(json).map_err(|source| I18nError::CatalogParse {
            language: code.to_string(),
            source,
        })?;
        self.trees.insert(code.to_string(), tree);
        Ok(())
    }

    /// Get the tree for a language code
    pub fn tree(&self, code: &str) -> Option<&TranslationTree> {
        self.trees.get(code)
    }

    /// Language codes with a tree in this catalog
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    /// Number of languages in this catalog
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Whether the catalog holds no languages
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}
