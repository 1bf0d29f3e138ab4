//! `oov`：字母表外（out-of-vocabulary）grapheme 的编码登记表。
//!
//! 编码从 [`OOV_BASE`] 开始，按首次出现的顺序逐个加一；
//! 同一个 grapheme 在同一会话内永远得到同一个编码。

use std::collections::HashMap;

use tracing::debug;

/// OOV 编码起点：所有字母表 rank 都小于它，因此 OOV 字符总排在已知字符之后。
pub const OOV_BASE: u32 = 10_000;

/// OOV 登记表：grapheme <-> 编码 的双向映射，只增不减。
#[derive(Debug, Clone, Default)]
pub struct OovRegistry {
    codes: HashMap<String, u32>,
    /// `code - OOV_BASE` -> grapheme
    texts: Vec<String>,
}

impl OovRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取 grapheme 的编码；第一次出现时分配 `OOV_BASE + 已登记数`。
    pub fn code_for(&mut self, grapheme: &str) -> u32 {
        if let Some(&code) = self.codes.get(grapheme) {
            return code;
        }
        let code = OOV_BASE + self.texts.len() as u32;
        debug!(grapheme, code, "assigned OOV code");
        self.codes.insert(grapheme.to_owned(), code);
        self.texts.push(grapheme.to_owned());
        code
    }

    /// 已分配编码的反查；未分配过的编码返回 `None`。
    pub fn text_for(&self, code: u32) -> Option<&str> {
        let offset = code.checked_sub(OOV_BASE)?;
        self.texts.get(offset as usize).map(String::as_str)
    }

    /// 不分配新编码的查询。
    pub fn get(&self, grapheme: &str) -> Option<u32> {
        self.codes.get(grapheme).copied()
    }

    pub fn base(&self) -> u32 {
        OOV_BASE
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// 按编码顺序遍历（grapheme, code）。
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.texts
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), OOV_BASE + i as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_first_encounter() {
        let mut reg = OovRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.base(), OOV_BASE);
        assert_eq!(reg.code_for("ū"), 10_000);
        assert_eq!(reg.code_for("į"), 10_001);
        assert_eq!(reg.code_for("ū"), 10_000);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("į"), Some(10_001));
        assert_eq!(reg.get("x"), None);
    }

    #[test]
    fn reverse_lookup() {
        let mut reg = OovRegistry::new();
        reg.code_for("ū");
        reg.code_for("į");
        assert_eq!(reg.text_for(10_000), Some("ū"));
        assert_eq!(reg.text_for(10_001), Some("į"));
        assert_eq!(reg.text_for(10_002), None);
        assert_eq!(reg.text_for(3), None);
        assert_eq!(reg.iter().collect::<Vec<_>>(), vec![("ū", 10_000), ("į", 10_001)]);
    }
}
