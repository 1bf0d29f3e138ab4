//! `tokenizer`：按字母表把单词切分成 grapheme 序列。
//!
//! 从左到右扫描，每一步：
//! 1. 先尝试最长可忽略匹配：命中则跳过，不产生 token
//! 2. 再尝试最长字母表匹配：命中则产生 `Token::Known`
//! 3. 都不命中：取当前位置的**一个字符**作为 `Token::Oov`
//!
//! 可忽略表优先于字母表；切分结果只取决于（单词, 字母表），不保留状态。

use crate::alphabet::AlphabetIndex;

/// 切分出的一个 token（文本借用自原单词）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'w> {
    /// 字母表内的 grapheme 及其 rank
    Known { grapheme: &'w str, rank: u32 },
    /// 字母表外的单个字符
    Oov(&'w str),
}

impl<'w> Token<'w> {
    pub fn grapheme(&self) -> &'w str {
        match *self {
            Token::Known { grapheme, .. } => grapheme,
            Token::Oov(grapheme) => grapheme,
        }
    }

    pub fn is_oov(&self) -> bool {
        matches!(self, Token::Oov(_))
    }
}

/// 惰性切分迭代器，见 [`AlphabetIndex::tokenize`]。
#[derive(Debug, Clone)]
pub struct Tokens<'a, 'w> {
    index: &'a AlphabetIndex,
    word: &'w str,
    /// 当前扫描到的字节位置
    pos: usize,
}

impl<'a, 'w> Iterator for Tokens<'a, 'w> {
    type Item = Token<'w>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.word.len() {
            if let Some(skipped) = self.index.longest_ignorable_match(self.word, self.pos) {
                self.pos += skipped.len();
                continue;
            }
            if let Some((grapheme, rank)) = self.index.longest_alphabet_match(self.word, self.pos) {
                self.pos += grapheme.len();
                return Some(Token::Known { grapheme, rank });
            }
            let ch = self.word[self.pos..].chars().next()?;
            let start = self.pos;
            self.pos += ch.len_utf8();
            return Some(Token::Oov(&self.word[start..self.pos]));
        }
        None
    }
}

impl AlphabetIndex {
    /// 切分单词（惰性）；需要 `Vec` 时直接 `collect()`。
    pub fn tokenize<'a, 'w>(&'a self, word: &'w str) -> Tokens<'a, 'w> {
        Tokens {
            index: self,
            word,
            pos: 0,
        }
    }
}
