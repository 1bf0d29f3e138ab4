//! `Sorter`：对外的排序会话。
//!
//! 一个 `Sorter` 持有：
//! - 构造后不变的 `AlphabetIndex`
//! - 整个生命周期内只增不减的 `OovRegistry`
//!
//! 同一个 `Sorter` 处理的所有单词共享一张 OOV 表，因此 OOV 编码取决于处理顺序：
//! 集合总是按输入顺序逐行处理。

use tracing::debug;

use crate::alphabet::AlphabetIndex;
use crate::collection::Collection;
use crate::config::SorterConfig;
use crate::error::{ConfigError, LookupError};
use crate::oov::OovRegistry;
use crate::sort_key::{KeyBuilder, SortKey, key_to_word};

/// 排序键写入的默认字段名。
pub const DEFAULT_KEY_FIELD: &str = "sorting_form";

#[derive(Debug, Clone)]
pub struct Sorter {
    alphabet: AlphabetIndex,
    oov: OovRegistry,
    key_field: String,
}

impl Sorter {
    /// 由字母表和可忽略表创建；配置非法时立即返回 `ConfigError`。
    pub fn new<A, I>(alphabet: A, ignorable: I) -> Result<Self, ConfigError>
    where
        A: IntoIterator,
        A::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Ok(Self {
            alphabet: AlphabetIndex::new(alphabet, ignorable)?,
            oov: OovRegistry::new(),
            key_field: DEFAULT_KEY_FIELD.to_owned(),
        })
    }

    pub fn from_config(config: &SorterConfig) -> Result<Self, ConfigError> {
        Self::new(config.alphabet.iter().cloned(), config.ignorable.iter().cloned())
    }

    /// 修改排序键写入的字段名（默认 `"sorting_form"`）。
    pub fn with_key_field(mut self, name: impl Into<String>) -> Self {
        self.key_field = name.into();
        self
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    pub fn alphabet(&self) -> &AlphabetIndex {
        &self.alphabet
    }

    pub fn oov(&self) -> &OovRegistry {
        &self.oov
    }

    /// 单个单词的排序键（会登记新的 OOV 字符）。
    pub fn sort_key(&mut self, word: &str) -> SortKey {
        KeyBuilder::new(&self.alphabet, &mut self.oov).build(word)
    }

    /// 为每一行计算 `text_field` 的排序键并写入 `key_field`，行序不变。
    pub fn annotate<C: Collection>(&mut self, mut records: C, text_field: &str) -> Result<C, LookupError> {
        let keys = self.keys_for(&records, text_field)?;
        records.set_keys(&self.key_field, keys);
        Ok(records)
    }

    /// `annotate` 之后按排序键稳定排序；键相同的行保持原有相对顺序。
    pub fn sorted_by<C: Collection>(&mut self, mut records: C, text_field: &str) -> Result<C, LookupError> {
        let keys = self.keys_for(&records, text_field)?;
        let mut order: Vec<usize> = (0..keys.len()).collect();
        order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
        records.set_keys(&self.key_field, keys);
        records.reorder(&order);
        Ok(records)
    }

    /// 排序键 -> 单词；key 中含有本会话未分配过的编码时返回 `LookupError`。
    pub fn key_to_word(&self, key: &[u32]) -> Result<String, LookupError> {
        key_to_word(key, &self.alphabet, &self.oov)
    }

    fn keys_for<C: Collection>(&mut self, records: &C, text_field: &str) -> Result<Vec<SortKey>, LookupError> {
        if text_field == self.key_field {
            return Err(LookupError::KeyFieldClash(text_field.to_owned()));
        }
        records.check_field(text_field)?;
        let oov_before = self.oov.len();
        let mut builder = KeyBuilder::new(&self.alphabet, &mut self.oov);
        let keys = (0..records.len())
            .map(|row| records.text_at(row, text_field).map(|text| builder.build(text)))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            rows = keys.len(),
            field = text_field,
            new_oov = self.oov.len() - oov_before,
            "computed sort keys"
        );
        Ok(keys)
    }
}
