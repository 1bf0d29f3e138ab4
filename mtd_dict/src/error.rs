use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 词典构建过程中的错误。
#[derive(Debug, Error)]
pub enum DictError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// 无法从扩展名判断文件格式。
    #[error("unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("language configuration lists no data sources")]
    NoDataSources,

    #[error("invalid alphabet: {0}")]
    Alphabet(#[from] mtd_core::ConfigError),

    #[error(transparent)]
    Lookup(#[from] mtd_core::LookupError),
}

impl DictError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DictError>;
