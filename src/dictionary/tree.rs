use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use super::reference::PATH_SEPARATOR;

/// A node in a translation dictionary.
///
/// Locale files only contain strings and nested objects, so a node is either
/// a text leaf or a nested subtree:
///
/// ```json
/// { "greeting": { "hello": "Hi" }, "banner": "$greeting.hello" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A translation string: `"hello": "Hi"`
    Leaf(String),
    /// A nested group of keys: `"greeting": { ... }`
    Subtree(DictionaryTree),
}

impl Node {
    pub fn leaf(value: impl Into<String>) -> Self {
        Node::Leaf(value.into())
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Subtree(_) => None,
        }
    }

    pub fn as_subtree(&self) -> Option<&DictionaryTree> {
        match self {
            Node::Leaf(_) => None,
            Node::Subtree(tree) => Some(tree),
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Leaf(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Leaf(value)
    }
}

impl From<DictionaryTree> for Node {
    fn from(tree: DictionaryTree) -> Self {
        Node::Subtree(tree)
    }
}

/// String-keyed tree of translation nodes for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DictionaryTree {
    entries: BTreeMap<String, Node>,
}

impl DictionaryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.entries.insert(key.into(), node.into())
    }

    /// Builder-style insert, handy for constructing fixtures.
    pub fn with(mut self, key: impl Into<String>, node: impl Into<Node>) -> Self {
        self.insert(key, node);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Look up a node by dotted path (e.g. `"Common.submit"`).
    ///
    /// This is a plain structural lookup: reference leaves are not followed.
    pub fn get_path(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split(PATH_SEPARATOR);
        let mut node = self.get(segments.next()?)?;
        for segment in segments {
            node = node.as_subtree()?.get(segment)?;
        }
        Some(node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Node> {
        self.entries.iter()
    }

    /// All leaves as `(dotted_key, value)` pairs, depth-first in key order.
    pub fn leaves(&self) -> Vec<(String, &str)> {
        let mut result = Vec::new();
        collect_leaves(self, "", &mut result);
        result
    }
}

fn collect_leaves<'a>(tree: &'a DictionaryTree, prefix: &str, result: &mut Vec<(String, &'a str)>) {
    for (key, node) in tree.iter() {
        let path = join_key(prefix, key);
        match node {
            Node::Leaf(value) => result.push((path, value.as_str())),
            Node::Subtree(subtree) => collect_leaves(subtree, &path, result),
        }
    }
}

/// Append `key` to a dotted prefix.
pub(crate) fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, PATH_SEPARATOR, key)
    }
}

impl<'a> IntoIterator for &'a DictionaryTree {
    type Item = (&'a String, &'a Node);
    type IntoIter = btree_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for DictionaryTree {
    type Item = (String, Node);
    type IntoIter = btree_map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, N: Into<Node>> FromIterator<(K, N)> for DictionaryTree {
    fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, node)| (key.into(), node.into()))
                .collect(),
        }
    }
}
