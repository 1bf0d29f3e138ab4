//! `mtd_dict`：语言定义文件 + 词条数据 -> 排好序、可导出的词典。
//!
//! - `config`：读取/校验语言定义文件（TOML 或 JSON）
//! - `source`：读取词条数据（TSV 或 JSON），按 manifest 重命名列
//! - `dictionary`：校验词条、用 `mtd_core::Sorter` 排序
//! - `export`：输出 JSON 或可直接 `<script>` 加载的 JS
pub mod config;
pub mod dictionary;
pub mod error;
pub mod export;
pub mod source;

pub use config::{DataFormat, DataSource, LanguageConfig, MtdConfig};
pub use dictionary::MtDictionary;
pub use error::{DictError, Result};
pub use export::{DictionaryExport, OutputFormat};
