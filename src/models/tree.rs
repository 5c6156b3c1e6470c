use std::collections::BTreeMap;

/// A value in a [`NestedTree`]: either a leaf string or another level of nesting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Value(String),
    Tree(NestedTree),
}

/// Key/value tree built from the `BEGIN`/`END` nesting of a record block
///
/// Keys are unique within a level. Keys are kept sorted so debug output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedTree {
    entries: BTreeMap<String, Node>,
}

impl NestedTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `value` at `path`, creating intermediate levels as needed
    ///
    /// Any prior value at the final segment is overwritten. A leaf sitting where an
    /// intermediate level is needed is replaced by an empty level. An empty path is a no-op.
    pub fn set<S: AsRef<str>>(&mut self, path: &[S], value: impl Into<String>) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };

        let mut level = self;
        for segment in parents {
            let node = level
                .entries
                .entry(segment.as_ref().to_string())
                .or_insert_with(|| Node::Tree(NestedTree::new()));
            if let Node::Value(_) = node {
                *node = Node::Tree(NestedTree::new());
            }
            let Node::Tree(tree) = node else {
                return;
            };
            level = tree;
        }

        level.entries.insert(last.as_ref().to_string(), Node::Value(value.into()));
    }

    /// Look up the node at `path`
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.entries.get(first.as_ref())?;
        for segment in rest {
            node = match node {
                Node::Tree(tree) => tree.entries.get(segment.as_ref())?,
                Node::Value(_) => return None,
            };
        }
        Some(node)
    }

    /// Look up the string value at `path`; `None` if absent or if the path names a level
    pub fn get_value<S: AsRef<str>>(&self, path: &[S]) -> Option<&str> {
        match self.get(path)? {
            Node::Value(value) => Some(value),
            Node::Tree(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
