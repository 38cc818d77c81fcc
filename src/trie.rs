use std::fmt;

const ALPHABET_SIZE: usize = 26;

struct TrieNode {
    children: [Option<Box<Self>>; ALPHABET_SIZE], // 'a'..='z'
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            terminal: false,
        }
    }

    // DFS with an explicit stack, so depth is not limited by the thread stack.
    // Terminal check before children so a word precedes its extensions.
    fn collect(&self, path: &mut String, out: &mut Vec<String>) {
        let mut stack = vec![(self, path.len(), None)];

        while let Some((node, depth, letter)) = stack.pop() {
            path.truncate(depth);
            if let Some(c) = letter {
                path.push(c);
            }
            if node.terminal {
                out.push(path.clone());
            }

            for (idx, child) in node.children.iter().enumerate().rev() {
                if let Some(n) = child {
                    stack.push((n.as_ref(), path.len(), Some(idx2char(idx))));
                }
            }
        }
    }
}

// Boxed children would otherwise drop recursively, one frame per letter.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

fn char2idx(c: char) -> Option<usize> {
    c.is_ascii_lowercase().then(|| (c as u8 - b'a').into())
}

fn idx2char(idx: usize) -> char {
    (b'a' + idx as u8) as char
}

/// Prefix index over lowercase words.
///
/// Input is lowercased and every character outside `a`-`z` is dropped, both
/// when inserting and when querying. So `"Côte d'Ivoire"` is stored as
/// `"ctedivoire"` and `"d'"` queries the same node as `"d"`.
///
/// Built once with [`PrefixIndex::insert`], then only read. Queries take
/// `&self`, so a loaded index can be shared behind an `Arc` without locking.
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;

        let normalized = word.to_lowercase();
        for idx in normalized.chars().filter_map(char2idx) {
            node = node.children[idx].get_or_insert_with(|| Box::new(TrieNode::new()));
        }

        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Every stored word starting with `prefix`, in lexicographic order.
    ///
    /// An unknown prefix gives an empty vector; the empty prefix gives every word.
    pub fn query(&self, prefix: &str) -> Vec<String> {
        let mut node = &self.root;
        let mut path = String::with_capacity(prefix.len());

        for c in prefix.to_lowercase().chars() {
            let Some(idx) = char2idx(c) else {
                continue;
            };
            node = match &node.children[idx] {
                Some(n) => n.as_ref(),
                None => return vec![],
            };
            // Results are spelled from the matched letters only, so they are
            // always stored words and never echo punctuation from the prefix.
            path.push(c);
        }

        let mut words = Vec::new();
        node.collect(&mut path, &mut words);
        words
    }

    /// Number of distinct words stored, after normalization.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        for word in iter {
            index.insert(word.as_ref());
        }
        index
    }
}
