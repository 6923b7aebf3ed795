//! Reference resolution for dictionary trees.
//!
//! A leaf starting with `$` is replaced by the node found at its dotted path,
//! looked up from the root of the same tree. A leaf starting with `\$` loses
//! the backslash and is kept as literal text.
//!
//! Lookups always go through the original, unmodified root, so the result does
//! not depend on the order in which keys are visited:
//!
//! - a reference to another reference follows the chain
//! - a reference to a subtree yields that subtree, itself resolved
//! - a reference leaf met in the middle of a path is followed before descending
//!
//! Circular chains are reported as [`ResolveError::CircularReference`].

use std::collections::HashMap;

use super::{
    error::ResolveError,
    reference::{LeafKind, ReferencePath},
    tree::{DictionaryTree, Node, join_key},
};

/// Resolve every reference and escape in `tree`.
pub fn resolve(mut tree: DictionaryTree) -> Result<DictionaryTree, ResolveError> {
    resolve_in_place(&mut tree)?;
    Ok(tree)
}

/// Resolve `tree` in place.
///
/// On error the tree is left untouched.
pub fn resolve_in_place(tree: &mut DictionaryTree) -> Result<(), ResolveError> {
    let resolved = {
        let root = &*tree;
        Resolver::new(root).resolve_tree(root, "")?
    };
    *tree = resolved;
    Ok(())
}

/// Validate every reference in `tree` without stopping at the first failure.
///
/// Returns all errors sorted by key. An empty result means [`resolve`] succeeds.
pub fn check(tree: &DictionaryTree) -> Vec<ResolveError> {
    let mut resolver = Resolver::new(tree);
    let mut errors = Vec::new();

    for (key, value) in tree.leaves() {
        if let LeafKind::Reference(path) = LeafKind::classify(value)
            && let Err(err) = resolver.resolve_reference(path, &key)
        {
            errors.push(err);
        }
    }

    errors.sort_by(|a, b| a.key().cmp(b.key()).then_with(|| a.cmp(b)));
    errors.dedup();
    errors
}

struct Resolver<'a> {
    root: &'a DictionaryTree,
    /// Resolved targets keyed by reference path.
    resolved: HashMap<&'a str, Node>,
    /// Reference paths currently being resolved, outermost first.
    in_progress: Vec<&'a str>,
}

impl<'a> Resolver<'a> {
    fn new(root: &'a DictionaryTree) -> Self {
        Self {
            root,
            resolved: HashMap::new(),
            in_progress: Vec::new(),
        }
    }

    fn resolve_tree(
        &mut self,
        tree: &'a DictionaryTree,
        prefix: &str,
    ) -> Result<DictionaryTree, ResolveError> {
        let mut result = DictionaryTree::new();
        for (key, node) in tree {
            let path = join_key(prefix, key);
            let resolved = self.resolve_node(node, &path)?;
            result.insert(key.clone(), resolved);
        }
        Ok(result)
    }

    fn resolve_node(&mut self, node: &'a Node, key: &str) -> Result<Node, ResolveError> {
        match node {
            Node::Subtree(tree) => Ok(Node::Subtree(self.resolve_tree(tree, key)?)),
            Node::Leaf(value) => match LeafKind::classify(value) {
                LeafKind::Literal => Ok(Node::Leaf(value.clone())),
                LeafKind::Escaped(text) => Ok(Node::leaf(text)),
                LeafKind::Reference(path) => self.resolve_reference(path, key),
            },
        }
    }

    /// Resolve the reference `path` held by the leaf at `key`.
    fn resolve_reference(
        &mut self,
        path: ReferencePath<'a>,
        key: &str,
    ) -> Result<Node, ResolveError> {
        if let Some(node) = self.resolved.get(path.as_str()) {
            return Ok(node.clone());
        }

        if self.in_progress.contains(&path.as_str()) {
            return Err(circular(&self.in_progress, path, key));
        }

        self.in_progress.push(path.as_str());
        let result = self
            .locate(path, key, &mut Vec::new())
            .and_then(|node| self.resolve_node(node, path.as_str()));
        self.in_progress.pop();

        let node = result?;
        self.resolved.insert(path.as_str(), node.clone());
        Ok(node)
    }

    /// Find the original node named by `path` without resolving it.
    ///
    /// Reference leaves met before the last segment are followed to the
    /// original node they name. `following` holds the paths being followed.
    fn locate(
        &self,
        path: ReferencePath<'a>,
        key: &str,
        following: &mut Vec<&'a str>,
    ) -> Result<&'a Node, ResolveError> {
        if following.contains(&path.as_str()) {
            return Err(circular(following, path, key));
        }

        following.push(path.as_str());
        let result = self.walk(path, key, following);
        following.pop();
        result
    }

    fn walk(
        &self,
        path: ReferencePath<'a>,
        key: &str,
        following: &mut Vec<&'a str>,
    ) -> Result<&'a Node, ResolveError> {
        let unresolved = |segment: &str| ResolveError::UnresolvedReference {
            key: key.to_string(),
            reference: path.to_string(),
            segment: segment.to_string(),
        };

        let mut current: Option<&'a Node> = None;
        for segment in path.segments() {
            let next = match current {
                None => self.root.get(segment),
                Some(node) => self
                    .subtree_of(node, key, following)?
                    .and_then(|tree| tree.get(segment)),
            };
            current = Some(next.ok_or_else(|| unresolved(segment))?);
        }

        current.ok_or_else(|| unresolved(""))
    }

    /// The subtree `node` stands for, following reference leaves.
    fn subtree_of(
        &self,
        mut node: &'a Node,
        key: &str,
        following: &mut Vec<&'a str>,
    ) -> Result<Option<&'a DictionaryTree>, ResolveError> {
        let depth = following.len();
        let result = loop {
            match node {
                Node::Subtree(tree) => break Ok(Some(tree)),
                Node::Leaf(value) => match LeafKind::classify(value) {
                    LeafKind::Reference(inner) => match self.locate(inner, key, following) {
                        Ok(target) => {
                            following.push(inner.as_str());
                            node = target;
                        }
                        Err(err) => break Err(err),
                    },
                    LeafKind::Literal | LeafKind::Escaped(_) => break Ok(None),
                },
            }
        };
        following.truncate(depth);
        result
    }
}

fn circular(stack: &[&str], path: ReferencePath<'_>, key: &str) -> ResolveError {
    let start = stack
        .iter()
        .position(|p| *p == path.as_str())
        .unwrap_or_default();
    let chain = stack[start..]
        .iter()
        .map(|p| ReferencePath::from_raw(p).to_string())
        .chain(std::iter::once(path.to_string()))
        .collect();
    ResolveError::CircularReference {
        key: key.to_string(),
        chain,
    }
}
