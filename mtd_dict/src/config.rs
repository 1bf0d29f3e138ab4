//! `config`：语言定义文件。
//!
//! 文件格式按扩展名选择：`.toml` 或 `.json`，结构相同：
//!
//! ```toml
//! [config]
//! L1 = "Danish"
//! L2 = "English"
//! alphabet = ["a", "b", "c"]
//! ignorable = ["-"]
//!
//! [[data]]
//! path = "words.tsv"
//! [data.manifest]
//! definition = "gloss"
//! ```
//!
//! `data[].path` 相对于语言定义文件所在目录解析。

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use mtd_core::{AlphabetIndex, SorterConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DictError, Result};

fn default_sort_field() -> String {
    "word".to_owned()
}

/// 词条数据文件格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// 首行为表头的制表符分隔文件
    Tsv,
    /// 对象数组
    Json,
}

impl DataFormat {
    /// 由扩展名推断；不认识的扩展名返回 `None`。
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "tsv" => Some(Self::Tsv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// 一个词条数据来源。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub path: PathBuf,
    /// 省略时按扩展名推断
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DataFormat>,
    /// 字段重命名：词典字段名 -> 数据文件中的列名
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub manifest: BTreeMap<String, String>,
}

impl DataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
            manifest: BTreeMap::new(),
        }
    }

    /// 显式指定的格式优先，否则按扩展名推断。
    pub fn format(&self) -> Result<DataFormat> {
        self.format
            .or_else(|| DataFormat::from_path(&self.path))
            .ok_or_else(|| DictError::UnsupportedFormat(self.path.clone()))
    }
}

/// `[config]` 段：语言信息 + 字母表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MtdConfig {
    /// 被记录的语言
    #[serde(rename = "L1")]
    pub l1: String,
    /// 释义所用的语言
    #[serde(rename = "L2")]
    pub l2: String,
    /// `alphabet` / `ignorable`
    #[serde(flatten)]
    pub sorter: SorterConfig,
    /// 按哪个字段排序（默认 `word`）
    #[serde(default = "default_sort_field")]
    pub sort_field: String,
}

/// 完整的语言定义文件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub config: MtdConfig,
    #[serde(default)]
    pub data: Vec<DataSource>,
    /// 解析 `data[].path` 的基准目录
    #[serde(skip)]
    base_dir: PathBuf,
}

impl LanguageConfig {
    /// 读取并校验语言定义文件。
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::load(path)?;
        config.validate()?;
        debug!(
            path = %path.display(),
            alphabet = config.config.sorter.alphabet.len(),
            sources = config.data.len(),
            "loaded language configuration"
        );
        Ok(config)
    }

    /// 只解析、不校验；`base_dir` 设为文件所在目录。
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|e| DictError::io(path, e))?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&s)?,
            Some("json") => Self::from_json_str(&s)?,
            _ => return Err(DictError::UnsupportedFormat(path.to_path_buf())),
        };
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config.with_base_dir(base_dir))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 数据来源的实际路径（绝对路径原样返回）。
    pub fn resolve(&self, source: &DataSource) -> PathBuf {
        self.base_dir.join(&source.path)
    }

    pub fn sorter_config(&self) -> &SorterConfig {
        &self.config.sorter
    }

    /// 至少一个数据来源，且字母表本身合法。
    pub fn validate(&self) -> Result<()> {
        if self.data.is_empty() {
            return Err(DictError::NoDataSources);
        }
        let sorter = &self.config.sorter;
        AlphabetIndex::new(sorter.alphabet.iter().map(String::as_str), sorter.ignorable.iter().map(String::as_str))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TOML: &str = r#"
[config]
L1 = "Danish"
L2 = "English"
alphabet = ["a", "b", "aa"]
ignorable = ["-"]

[[data]]
path = "words.tsv"

[[data]]
path = "more/extra.json"
[data.manifest]
definition = "gloss"
"#;

    #[test]
    fn parses_toml() {
        let config = LanguageConfig::from_toml_str(TOML).unwrap().with_base_dir("/lang");
        assert_eq!(config.config.l1, "Danish");
        assert_eq!(config.config.sort_field, "word");
        assert_eq!(config.sorter_config(), &SorterConfig::new(["a", "b", "aa"], ["-"]));
        assert_eq!(config.data.len(), 2);
        assert_eq!(config.data[0].format().unwrap(), DataFormat::Tsv);
        assert_eq!(config.data[1].format().unwrap(), DataFormat::Json);
        assert_eq!(config.data[1].manifest.get("definition").map(String::as_str), Some("gloss"));
        assert_eq!(config.resolve(&config.data[1]), PathBuf::from("/lang/more/extra.json"));
        config.validate().unwrap();
    }

    #[test]
    fn parses_json_with_defaults() {
        let config = LanguageConfig::from_json_str(
            r#"{"config": {"L1": "x", "L2": "y", "alphabet": ["a"], "sort_field": "lemma"},
                "data": [{"path": "d.txt", "format": "tsv"}]}"#,
        )
        .unwrap();
        assert!(config.config.sorter.ignorable.is_empty());
        assert_eq!(config.config.sort_field, "lemma");
        assert_eq!(config.data[0].format().unwrap(), DataFormat::Tsv);
    }

    #[test]
    fn validation_errors() {
        let mut config = LanguageConfig::from_toml_str(TOML).unwrap();
        config.config.sorter.alphabet.push("a".into());
        assert!(matches!(
            config.validate(),
            Err(DictError::Alphabet(mtd_core::ConfigError::DuplicateGrapheme { .. }))
        ));
        config.data.clear();
        assert!(matches!(config.validate(), Err(DictError::NoDataSources)));
        assert!(matches!(
            DataSource::new("words.csv").format(),
            Err(DictError::UnsupportedFormat(_))
        ));
    }
}
