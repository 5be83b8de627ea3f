//! Trie storage and lookups.

use std::collections::HashMap;

use tracing::debug;

/// One node of the trie.
///
/// The character a node stands for is the key its parent stores it under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    terminal: bool,
    children: HashMap<char, TrieNode>,
}

impl TrieNode {
    /// True iff some inserted word ends exactly here.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Child for the next character.
    #[inline]
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Number of distinct next characters.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }

    /// Push every terminal below this node, spelled from here, onto `out`.
    fn collect_words(&self, out: &mut Vec<String>) {
        let mut prefix = String::new();
        // (prefix length before ch, ch, node reached by ch)
        let mut stack: Vec<(usize, char, &TrieNode)> = self
            .children
            .iter()
            .map(|(&ch, child)| (0, ch, child))
            .collect();

        while let Some((len, ch, node)) = stack.pop() {
            prefix.truncate(len);
            prefix.push(ch);
            if node.terminal {
                out.push(prefix.clone());
            }
            let len = prefix.len();
            stack.extend(node.children.iter().map(|(&ch, child)| (len, ch, child)));
        }
    }
}

// Long words make deep chains; drop them without recursing once per level.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// A set of words stored as a trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    root: TrieNode,
    words: usize,
}

impl Dictionary {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a sequence of words, logging a summary.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary: Self = words.into_iter().collect();
        debug!(
            words = dictionary.len(),
            nodes = dictionary.node_count(),
            "built dictionary"
        );
        dictionary
    }

    /// Add a word. Inserting a word twice changes nothing.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if !node.terminal && !word.is_empty() {
            self.words += 1;
        }
        node.terminal = true;
    }

    /// Whether `s` is the first characters of at least one word.
    ///
    /// The empty string is a prefix of everything.
    pub fn contains_prefix(&self, s: &str) -> bool {
        self.find(s).is_some()
    }

    /// Whether `s` was inserted as a word. Never true for `""`.
    pub fn contains_word(&self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        self.find(s).is_some_and(TrieNode::is_terminal)
    }

    /// Node reached by tracing `s` from the root.
    pub fn find(&self, s: &str) -> Option<&TrieNode> {
        s.chars().try_fold(&self.root, |node, ch| node.child(ch))
    }

    /// A lookup handle positioned at the empty string.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            node: &self.root,
            depth: 0,
        }
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct non-empty words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// All stored words in ascending order.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.words);
        self.root.collect_words(&mut out);
        out.sort_unstable();
        out
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

/// Incremental lookup: a position in the trie for some string `s`.
///
/// Stepping costs one child lookup, so extending a candidate letter by
/// letter never re-traces from the root. A cursor exists only for strings
/// that are prefixes; [`Cursor::step`] returns `None` once the string stops
/// being one.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    node: &'a TrieNode,
    depth: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor for `s` followed by `ch`, if that is still a prefix.
    #[inline]
    pub fn step(self, ch: char) -> Option<Cursor<'a>> {
        self.node.child(ch).map(|node| Cursor {
            node,
            depth: self.depth + 1,
        })
    }

    /// Whether `s` is a word. False at the root.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.depth > 0 && self.node.terminal
    }

    /// Whether some word extends `s` by at least one character.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.node.children.is_empty()
    }

    /// Number of characters in `s`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }
}
