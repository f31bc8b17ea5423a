//! # 目标文件收集器
//!
//! 根据根目录、glob 模式和排除列表收集待处理文件。
//!
//! ## 功能
//! - glob 模式匹配相对路径（`*` 不跨目录，`**` 匹配任意层目录）
//! - 按文件名 / 路径片段排除
//! - 结果排序，保证处理顺序稳定
//!
//! ## 依赖关系
//! - 被 `jobs/` 定义，被 `commands/apply.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配模式

use crate::error::{Result, SitefixError};
use crate::rewrite::rule::relative_slash_path;

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// 任务的目标文件集合
#[derive(Debug, Clone, Default)]
pub struct TargetSet {
    /// glob 模式（相对于根目录）
    patterns: Vec<String>,
    /// 排除的文件名
    skip_names: Vec<String>,
    /// 排除的路径片段（不区分大小写）
    skip_fragments: Vec<String>,
}

impl TargetSet {
    /// 创建新的目标集合
    pub fn new(patterns: &[&str]) -> Self {
        Self {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    /// 设置排除的文件名
    pub fn skip_names(mut self, names: &[&str]) -> Self {
        self.skip_names = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// 设置排除的路径片段
    pub fn skip_fragments(mut self, fragments: &[&str]) -> Self {
        self.skip_fragments = fragments.iter().map(|f| f.to_lowercase()).collect();
        self
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn skipped_names(&self) -> &[String] {
        &self.skip_names
    }

    pub fn skipped_fragments(&self) -> &[String] {
        &self.skip_fragments
    }

    /// 收集所有匹配的文件
    pub fn collect(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(SitefixError::DirectoryNotFound {
                path: root.display().to_string(),
            });
        }

        let patterns = self
            .patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| SitefixError::InvalidGlob {
                    pattern: p.clone(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|entry| {
                let rel = relative_slash_path(root, entry.path());
                patterns.iter().any(|p| p.matches_with(&rel, MATCH_OPTIONS))
                    && !self.is_excluded(&rel)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }

    /// 检查相对路径是否被排除
    fn is_excluded(&self, rel: &str) -> bool {
        let name = rel.rsplit('/').next().unwrap_or(rel);
        if self.skip_names.iter().any(|n| n == name) {
            return true;
        }

        let lowered = rel.to_lowercase();
        self.skip_fragments.iter().any(|f| lowered.contains(f.as_str()))
    }
}
