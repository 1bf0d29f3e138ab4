//! `export`：把词典序列化给 web 前端。
//!
//! - `json`：一个 `{ "config": ..., "data": [...] }` 文档
//! - `js`：可用 `<script>` 直接加载的脚本，定义全局变量 `config` 与 `dataDict`

use std::fmt;

use mtd_core::Record;
use serde::Serialize;

use crate::error::Result;

/// 导出给前端的语言信息。
#[derive(Debug, Clone, Serialize)]
pub struct ExportConfig<'a> {
    #[serde(rename = "L1")]
    pub l1: &'a str,
    #[serde(rename = "L2")]
    pub l2: &'a str,
    pub alphabet: &'a [String],
}

/// 导出视图（借用词典，不复制数据）。
#[derive(Debug, Clone, Serialize)]
pub struct DictionaryExport<'a> {
    pub config: ExportConfig<'a>,
    pub data: &'a [Record],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Js,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Js => "js",
        }
    }

    /// 未指定输出路径时使用的文件名。
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Json => "dictionary_data.json",
            Self::Js => "dictionary_data.js",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DictionaryExport<'_> {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_js(&self) -> Result<String> {
        let config = serde_json::to_string(&self.config)?;
        let data = serde_json::to_string(&self.data)?;
        Ok(format!("var config = {config};\nvar dataDict = {data};\n"))
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json(),
            OutputFormat::Js => self.to_js(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    fn sample(records: &[Record], alphabet: &[String]) -> String {
        let export = DictionaryExport {
            config: ExportConfig {
                l1: "Danish",
                l2: "English",
                alphabet,
            },
            data: records,
        };
        export.render(OutputFormat::Js).unwrap()
    }

    #[test]
    fn json_document() {
        let records: Vec<Record> = serde_json::from_value(json!([{ "word": "a", "sorting_form": [0] }])).unwrap();
        let alphabet = vec!["a".to_string()];
        let export = DictionaryExport {
            config: ExportConfig {
                l1: "x",
                l2: "y",
                alphabet: &alphabet,
            },
            data: &records,
        };
        let value: Value = serde_json::from_str(&export.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "config": { "L1": "x", "L2": "y", "alphabet": ["a"] },
                "data": [{ "word": "a", "sorting_form": [0] }],
            })
        );
    }

    #[test]
    fn js_script() {
        let records: Vec<Record> = serde_json::from_value(json!([{ "word": "å" }])).unwrap();
        let script = sample(&records, &["å".to_string()]);
        assert_eq!(
            script,
            "var config = {\"L1\":\"Danish\",\"L2\":\"English\",\"alphabet\":[\"å\"]};\nvar dataDict = [{\"word\":\"å\"}];\n"
        );
    }

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::default().default_file_name(), "dictionary_data.js");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
