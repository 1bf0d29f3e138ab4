//! `source`：读取词条数据。
//!
//! TSV 格式（简化版）：
//!
//! - 第一条有效行是表头：`word<TAB>definition<TAB>...`
//! - 允许 `#` 开头注释行与空行
//! - 缺少的单元格视为空；空单元格不写入记录
//!
//! JSON 格式：对象数组，每个对象一条记录。

use std::fs;
use std::path::Path;

use mtd_core::Record;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{DataFormat, DataSource};
use crate::error::{DictError, Result};

/// 读取一个数据来源并应用 manifest。
pub fn load_source(source: &DataSource, path: &Path) -> Result<Vec<Record>> {
    let s = fs::read_to_string(path).map_err(|e| DictError::io(path, e))?;
    let mut records = match source.format()? {
        DataFormat::Tsv => parse_tsv(&s),
        DataFormat::Json => parse_json(&s)?,
    };
    for record in &mut records {
        apply_manifest(record, source);
    }
    if records.is_empty() {
        warn!(path = %path.display(), "data source has no entries");
    } else {
        debug!(path = %path.display(), entries = records.len(), "loaded data source");
    }
    Ok(records)
}

pub fn parse_tsv(s: &str) -> Vec<Record> {
    let mut lines = s
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'));

    let Some((_, header)) = lines.next() else {
        return Vec::new();
    };
    let header: Vec<&str> = header.split('\t').map(str::trim).collect();

    let mut out = Vec::new();
    for (idx, line) in lines {
        let cells: Vec<&str> = line.split('\t').collect();
        if cells.len() > header.len() {
            warn!(line = idx + 1, "TSV row has more cells than the header, extra cells ignored");
        }
        let record: Record = header
            .iter()
            .zip(cells.iter().map(|c| c.trim()))
            .filter(|(name, cell)| !name.is_empty() && !cell.is_empty())
            .map(|(name, cell)| ((*name).to_owned(), Value::String(cell.to_owned())))
            .collect();
        out.push(record);
    }
    out
}

pub fn parse_json(s: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(s)?)
}

/// 按 manifest（词典字段 -> 源列名）重命名字段；源列不存在时忽略。
pub fn apply_manifest(record: &mut Record, source: &DataSource) {
    for (target, column) in &source.manifest {
        if target == column {
            continue;
        }
        if let Some(value) = record.shift_remove(column) {
            record.insert(target.clone(), value);
        }
    }
}
