use std::path::Path;

use mtd_core::{Record, Sorter};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::LanguageConfig;
use crate::error::{DictError, Result};
use crate::export::{DictionaryExport, ExportConfig};
use crate::source;

/// 除排序字段外，每个词条必须有的字段。
pub const DEFINITION_FIELD: &str = "definition";
/// 词条 id 字段；缺失时用加载顺序补齐。
pub const ENTRY_ID_FIELD: &str = "entryID";

/// 排好序的词典。
///
/// 所有数据来源按配置顺序加载后，用同一个 `Sorter` 一次性排序，
/// 因此 OOV 编码按“加载顺序中的首次出现”分配。
#[derive(Debug, Clone)]
pub struct MtDictionary {
    config: LanguageConfig,
    data: Vec<Record>,
    sorter: Sorter,
}

impl MtDictionary {
    /// 读取语言定义文件及其全部数据来源。
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(LanguageConfig::from_path(path)?)
    }

    pub fn new(config: LanguageConfig) -> Result<Self> {
        if config.data.is_empty() {
            return Err(DictError::NoDataSources);
        }
        let mut records = Vec::new();
        for data_source in &config.data {
            let path = config.resolve(data_source);
            records.extend(source::load_source(data_source, &path)?);
        }
        Self::from_records(config, records)
    }

    /// 用已加载好的记录构建词典（不读任何文件）。
    pub fn from_records(config: LanguageConfig, records: Vec<Record>) -> Result<Self> {
        let mut sorter = Sorter::from_config(config.sorter_config())?;
        let sort_field = config.config.sort_field.as_str();

        let total = records.len();
        let mut entries = Vec::with_capacity(total);
        for (idx, mut record) in records.into_iter().enumerate() {
            let missing: Vec<&str> = [sort_field, DEFINITION_FIELD]
                .into_iter()
                .filter(|field| !has_text(&record, field))
                .collect();
            if !missing.is_empty() {
                warn!(entry = idx, ?missing, "skipping entry without required fields");
                continue;
            }
            if !record.contains_key(ENTRY_ID_FIELD) {
                record.insert(ENTRY_ID_FIELD.to_owned(), Value::String(idx.to_string()));
            }
            entries.push(record);
        }

        let data = sorter.sorted_by(entries, sort_field)?;
        info!(
            language = %config.config.l1,
            entries = data.len(),
            skipped = total - data.len(),
            oov = sorter.oov().len(),
            "built dictionary"
        );
        Ok(Self { config, data, sorter })
    }

    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    /// 按排序键排好序的词条。
    pub fn data(&self) -> &[Record] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 构建时使用的 `Sorter`（含本次构建登记的 OOV 字符），可用于 `key_to_word`。
    pub fn sorter(&self) -> &Sorter {
        &self.sorter
    }

    pub fn export(&self) -> DictionaryExport<'_> {
        let config = &self.config.config;
        DictionaryExport {
            config: ExportConfig {
                l1: &config.l1,
                l2: &config.l2,
                alphabet: &config.sorter.alphabet,
            },
            data: &self.data,
        }
    }
}

fn has_text(record: &Record, field: &str) -> bool {
    record
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty())
}
