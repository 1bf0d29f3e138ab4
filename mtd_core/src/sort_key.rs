//! `sort_key`：单词 <-> 排序键（整数序列）。
//!
//! - `KeyBuilder`：切分单词，已知 grapheme 取 rank，OOV 取登记表编码
//! - `key_to_word`：逆过程；可忽略字符无法恢复，其余精确还原

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::alphabet::AlphabetIndex;
use crate::error::LookupError;
use crate::oov::OovRegistry;
use crate::tokenizer::Token;

/// 排序键：每个保留下来的 token 一个整数。
///
/// `Ord` 直接沿用 `Vec<u32>` 的字典序：逐个比较，较短的前缀排在前面。
/// 序列化为普通 JSON 数组，例如 `[17,28,3]`。
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortKey(Vec<u32>);

impl SortKey {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }
}

impl Deref for SortKey {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for SortKey {
    fn from(values: Vec<u32>) -> Self {
        Self(values)
    }
}

impl FromIterator<u32> for SortKey {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

/// 构造排序键；借用字母表与（可变的）OOV 登记表。
pub struct KeyBuilder<'a> {
    pub alphabet: &'a AlphabetIndex,
    pub oov: &'a mut OovRegistry,
}

impl<'a> KeyBuilder<'a> {
    pub fn new(alphabet: &'a AlphabetIndex, oov: &'a mut OovRegistry) -> Self {
        Self { alphabet, oov }
    }

    /// 单词 -> 排序键；会为新出现的 OOV grapheme 分配编码。
    pub fn build(&mut self, word: &str) -> SortKey {
        self.alphabet
            .tokenize(word)
            .map(|token| match token {
                Token::Known { rank, .. } => rank,
                Token::Oov(grapheme) => self.oov.code_for(grapheme),
            })
            .collect()
    }
}

/// 排序键 -> 单词：低于登记表起点的值查字母表，其余查登记表。
pub fn key_to_word(key: &[u32], alphabet: &AlphabetIndex, oov: &OovRegistry) -> Result<String, LookupError> {
    let mut word = String::new();
    for &value in key {
        let grapheme = if value < oov.base() {
            alphabet.grapheme_at(value).ok_or(LookupError::UnknownRank(value))?
        } else {
            oov.text_for(value).ok_or(LookupError::UnknownCode(value))?
        };
        word.push_str(grapheme);
    }
    Ok(word)
}
