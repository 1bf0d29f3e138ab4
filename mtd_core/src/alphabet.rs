//! `alphabet`：字母表索引（rank 查询 + 最长匹配）。
//!
//! 约定：
//! - 字母表中 grapheme 的 rank 就是它在列表中的位置（从 0 开始）
//! - grapheme 可以是多个字符（例如 `"aa"`），匹配时总是取最长的候选
//! - 可忽略字符表同样按最长匹配识别，但不产生 rank

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::oov::OOV_BASE;

/// 字符级前缀树；节点存放在一个 `Vec` 里，下标即节点 id。
#[derive(Debug, Clone)]
struct Trie {
    nodes: Vec<TrieNode>,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, usize>,
    value: Option<u32>,
}

impl Trie {
    fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// 插入 `key -> value`；若 key 已存在，保留旧值并返回它。
    fn insert(&mut self, key: &str, value: u32) -> Option<u32> {
        let mut cur = 0;
        for ch in key.chars() {
            cur = match self.nodes[cur].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[cur].children.insert(ch, next);
                    next
                }
            };
        }
        match self.nodes[cur].value {
            Some(prev) => Some(prev),
            None => {
                self.nodes[cur].value = Some(value);
                None
            }
        }
    }

    fn get(&self, key: &str) -> Option<u32> {
        let mut cur = 0;
        for ch in key.chars() {
            cur = *self.nodes[cur].children.get(&ch)?;
        }
        self.nodes[cur].value
    }

    /// `text` 开头能匹配到的最长 key：返回（匹配的字节长度, value）。
    fn longest_prefix(&self, text: &str) -> Option<(usize, u32)> {
        let mut cur = 0;
        let mut best = None;
        for (offset, ch) in text.char_indices() {
            let Some(&next) = self.nodes[cur].children.get(&ch) else {
                break;
            };
            cur = next;
            if let Some(value) = self.nodes[cur].value {
                best = Some((offset + ch.len_utf8(), value));
            }
        }
        best
    }
}

/// 字母表索引：构造后不可变。
#[derive(Debug, Clone)]
pub struct AlphabetIndex {
    /// rank -> grapheme
    graphemes: Vec<String>,
    /// 去重后的可忽略 grapheme（保持首次出现的顺序）
    ignorable: Vec<String>,
    alphabet_trie: Trie,
    ignorable_trie: Trie,
}

impl AlphabetIndex {
    /// 从有序字母表与可忽略表构建索引。
    ///
    /// 失败情形：字母表为空、出现空字符串、字母表内重复、
    /// 同一 grapheme 同时出现在两张表里、字母表长度达到 OOV 起点。
    pub fn new<A, I>(alphabet: A, ignorable: I) -> Result<Self, ConfigError>
    where
        A: IntoIterator,
        A::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let graphemes: Vec<String> = alphabet.into_iter().map(Into::into).collect();
        if graphemes.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if graphemes.len() >= OOV_BASE as usize {
            return Err(ConfigError::AlphabetTooLarge {
                len: graphemes.len(),
                base: OOV_BASE,
            });
        }

        let mut alphabet_trie = Trie::new();
        for (rank, g) in graphemes.iter().enumerate() {
            if g.is_empty() {
                return Err(ConfigError::EmptyGrapheme {
                    list: "alphabet",
                    position: rank,
                });
            }
            if let Some(first) = alphabet_trie.insert(g, rank as u32) {
                return Err(ConfigError::DuplicateGrapheme {
                    grapheme: g.clone(),
                    first: first as usize,
                    second: rank,
                });
            }
        }

        let mut ignorable_trie = Trie::new();
        let mut kept: Vec<String> = Vec::new();
        for (position, g) in ignorable.into_iter().map(Into::into).enumerate() {
            if g.is_empty() {
                return Err(ConfigError::EmptyGrapheme {
                    list: "ignorable",
                    position,
                });
            }
            if alphabet_trie.get(&g).is_some() {
                return Err(ConfigError::AmbiguousGrapheme(g));
            }
            if ignorable_trie.insert(&g, kept.len() as u32).is_none() {
                kept.push(g);
            }
        }

        Ok(Self {
            graphemes,
            ignorable: kept,
            alphabet_trie,
            ignorable_trie,
        })
    }

    /// grapheme 的 rank；不在字母表中时返回 `None`。
    pub fn rank_of(&self, grapheme: &str) -> Option<u32> {
        self.alphabet_trie.get(grapheme)
    }

    /// rank 对应的 grapheme（`rank_of` 的逆）。
    pub fn grapheme_at(&self, rank: u32) -> Option<&str> {
        self.graphemes.get(rank as usize).map(String::as_str)
    }

    /// 从字节位置 `pos` 开始的最长字母表匹配：返回（匹配到的文本, rank）。
    ///
    /// `pos` 不在字符边界上或越界时返回 `None`。
    pub fn longest_alphabet_match<'t>(&self, text: &'t str, pos: usize) -> Option<(&'t str, u32)> {
        let rest = text.get(pos..)?;
        let (len, rank) = self.alphabet_trie.longest_prefix(rest)?;
        Some((&rest[..len], rank))
    }

    /// 从字节位置 `pos` 开始的最长可忽略匹配。
    pub fn longest_ignorable_match<'t>(&self, text: &'t str, pos: usize) -> Option<&'t str> {
        let rest = text.get(pos..)?;
        let (len, _) = self.ignorable_trie.longest_prefix(rest)?;
        Some(&rest[..len])
    }

    /// 字母表大小（即最大 rank + 1）。
    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }

    /// 按 rank 顺序遍历字母表。
    pub fn graphemes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graphemes.iter().map(String::as_str)
    }

    pub fn ignorable(&self) -> impl Iterator<Item = &str> + '_ {
        self.ignorable.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn index(alphabet: &[&str], ignorable: &[&str]) -> AlphabetIndex {
        AlphabetIndex::new(alphabet.iter().copied(), ignorable.iter().copied()).unwrap()
    }

    #[test]
    fn rank_is_position() {
        let idx = index(&["a", "b", "aa", "c"], &[]);
        for (i, g) in ["a", "b", "aa", "c"].iter().enumerate() {
            assert_eq!(idx.rank_of(g), Some(i as u32));
            assert_eq!(idx.grapheme_at(i as u32), Some(*g));
        }
        assert_eq!(idx.graphemes().collect::<Vec<_>>(), vec!["a", "b", "aa", "c"]);
        assert_eq!(idx.rank_of("d"), None);
        assert_eq!(idx.rank_of("ab"), None);
        assert_eq!(idx.grapheme_at(4), None);
    }

    #[test]
    fn longest_match_prefers_digraph() {
        let idx = index(&["a", "b", "aa", "c"], &[]);
        assert_eq!(idx.longest_alphabet_match("aaba", 0), Some(("aa", 2)));
        assert_eq!(idx.longest_alphabet_match("aaba", 1), Some(("a", 0)));
        assert_eq!(idx.longest_alphabet_match("aaba", 2), Some(("b", 1)));
        assert_eq!(idx.longest_alphabet_match("xa", 0), None);
        assert_eq!(idx.longest_alphabet_match("a", 1), None);
    }

    #[test]
    fn longest_match_falls_back_to_shorter_prefix() {
        // "ts" 存在、"tsh" 不存在：应匹配 "ts" 而不是放弃
        let idx = index(&["t", "ts", "tshw"], &[]);
        assert_eq!(idx.longest_alphabet_match("tsha", 0), Some(("ts", 1)));
        assert_eq!(idx.longest_alphabet_match("tshwa", 0), Some(("tshw", 2)));
    }

    #[test]
    fn multibyte_positions() {
        let idx = index(&["r", "ø", "d"], &["ū"]);
        let word = "ūrød";
        assert_eq!(idx.longest_ignorable_match(word, 0), Some("ū"));
        let pos = "ū".len();
        assert_eq!(idx.longest_alphabet_match(word, pos), Some(("r", 0)));
        assert_eq!(idx.longest_alphabet_match(word, pos + 1), Some(("ø", 1)));
        // 不在字符边界
        assert_eq!(idx.longest_alphabet_match(word, 1), None);
    }

    #[test]
    fn duplicate_ignorables_collapse() {
        let idx = index(&["a"], &["-", "-", "'"]);
        assert_eq!(idx.ignorable().collect::<Vec<_>>(), vec!["-", "'"]);
    }

    #[rstest]
    #[case::empty(&[], &[], ConfigError::EmptyAlphabet)]
    #[case::empty_grapheme(&["a", ""], &[], ConfigError::EmptyGrapheme { list: "alphabet", position: 1 })]
    #[case::empty_ignorable(&["a"], &[""], ConfigError::EmptyGrapheme { list: "ignorable", position: 0 })]
    #[case::duplicate(&["a", "b", "a"], &[], ConfigError::DuplicateGrapheme { grapheme: "a".into(), first: 0, second: 2 })]
    #[case::ambiguous(&["a", "b"], &["b"], ConfigError::AmbiguousGrapheme("b".into()))]
    fn rejects_invalid_configuration(
        #[case] alphabet: &[&str],
        #[case] ignorable: &[&str],
        #[case] expected: ConfigError,
    ) {
        let err = AlphabetIndex::new(alphabet.iter().copied(), ignorable.iter().copied()).unwrap_err();
        assert_eq!(err, expected);
    }

    #[test]
    fn rejects_alphabet_reaching_oov_base() {
        let alphabet: Vec<String> = (0..OOV_BASE).map(|i| format!("g{i}")).collect();
        let err = AlphabetIndex::new(alphabet, Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ConfigError::AlphabetTooLarge { .. }));
    }
}
