//! # 统一错误处理模块
//!
//! 定义 sitefix 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// sitefix 统一错误类型
#[derive(Error, Debug)]
pub enum SitefixError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 备份 / 恢复错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to create backup: {path}")]
    BackupError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Backup already exists, restore or remove it first: {path}")]
    StaleBackup { path: String },

    #[error("Failed to restore '{path}' from backup '{backup}'")]
    RestoreError {
        path: String,
        backup: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 模式错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid glob pattern '{pattern}'")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Invalid rule pattern for '{rule}'")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl SitefixError {
    /// 展开错误链，生成单行描述（用于逐文件报告）
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SitefixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_message_includes_source() {
        let err = SitefixError::FileReadError {
            path: "pages/a.html".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.chain_message(), "Failed to read file: pages/a.html: gone");
    }

    #[test]
    fn test_chain_message_without_source() {
        let err = SitefixError::DirectoryNotFound {
            path: "site".to_string(),
        };
        assert_eq!(err.chain_message(), "Directory not found: site");
    }
}
