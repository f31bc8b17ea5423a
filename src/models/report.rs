//! # 改写报告数据模型
//!
//! 单文件处理结果与整批统计。计数均由本次运行返回，不使用全局状态。
//!
//! ## 依赖关系
//! - 被 `rewrite/ruleset.rs`, `jobs/`, `batch/runner.rs` 使用
//! - 被 `commands/apply.rs` 用于汇总输出和 CSV 报告

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// 某条规则在一个文件中的改动次数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    /// 规则标签
    pub label: String,
    /// 报告分类（如 "text", "backgrounds"）
    pub category: String,
    /// 改动次数
    pub count: usize,
}

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// 内容有变化并已写回
    Rewritten,
    /// 无需改动，文件未被写入
    Unchanged,
    /// 处理失败（原文件已恢复）
    Failed(String),
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Rewritten => write!(f, "rewritten"),
            FileOutcome::Unchanged => write!(f, "unchanged"),
            FileOutcome::Failed(_) => write!(f, "failed"),
        }
    }
}

/// 单文件报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// 相对于任务根目录的路径
    pub path: String,
    pub outcome: FileOutcome,
    pub hits: Vec<RuleHit>,
    /// 未匹配的 expected 规则
    pub misses: Vec<String>,
}

impl FileReport {
    pub fn failed(path: &str, reason: String) -> Self {
        Self {
            path: path.to_string(),
            outcome: FileOutcome::Failed(reason),
            hits: Vec::new(),
            misses: Vec::new(),
        }
    }

    /// 该文件的总替换次数
    pub fn replacements(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }
}

/// 整批处理统计
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn push(&mut self, report: FileReport) {
        self.files.push(report);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn rewritten(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Rewritten))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Unchanged))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    /// 失败详情 (路径, 错误信息)
    pub fn failures(&self) -> Vec<(&str, &str)> {
        self.files
            .iter()
            .filter_map(|r| match &r.outcome {
                FileOutcome::Failed(reason) => Some((r.path.as_str(), reason.as_str())),
                _ => None,
            })
            .collect()
    }

    /// 按分类汇总的替换次数
    pub fn replacements_by_category(&self) -> BTreeMap<String, usize> {
        let mut totals = BTreeMap::new();
        for hit in self.files.iter().flat_map(|r| r.hits.iter()) {
            *totals.entry(hit.category.clone()).or_insert(0) += hit.count;
        }
        totals
    }

    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(FileReport::replacements).sum()
    }

    /// 转为 CSV 行
    pub fn rows(&self) -> Vec<ReportRow> {
        self.files.iter().map(ReportRow::from).collect()
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// CSV 报告中的一行
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub path: String,
    pub outcome: String,
    pub replacements: usize,
    pub misses: String,
    pub error: String,
}

impl From<&FileReport> for ReportRow {
    fn from(r: &FileReport) -> Self {
        let error = match &r.outcome {
            FileOutcome::Failed(reason) => reason.clone(),
            _ => String::new(),
        };
        Self {
            path: r.path.clone(),
            outcome: r.outcome.to_string(),
            replacements: r.replacements(),
            misses: r.misses.join("; "),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(category: &str, count: usize) -> RuleHit {
        RuleHit {
            label: format!("{category} rule"),
            category: category.to_string(),
            count,
        }
    }

    fn sample() -> BatchReport {
        let mut batch = BatchReport::default();
        batch.push(FileReport {
            path: "pages/a.html".to_string(),
            outcome: FileOutcome::Rewritten,
            hits: vec![hit("text", 3), hit("backgrounds", 1)],
            misses: vec![],
        });
        batch.push(FileReport {
            path: "pages/b.html".to_string(),
            outcome: FileOutcome::Rewritten,
            hits: vec![hit("text", 2)],
            misses: vec!["footer".to_string()],
        });
        batch.push(FileReport {
            path: "about.html".to_string(),
            outcome: FileOutcome::Unchanged,
            hits: vec![],
            misses: vec![],
        });
        batch.push(FileReport::failed("broken.html", "Failed to read file".to_string()));
        batch
    }

    #[test]
    fn test_batch_counts() {
        let batch = sample();
        assert_eq!(batch.total(), 4);
        assert_eq!(batch.rewritten(), 2);
        assert_eq!(batch.unchanged(), 1);
        assert_eq!(batch.failed(), 1);
        assert_eq!(batch.failures(), vec![("broken.html", "Failed to read file")]);
        assert_eq!(batch.total_replacements(), 6);
    }

    #[test]
    fn test_replacements_by_category() {
        let totals = sample().replacements_by_category();
        assert_eq!(totals.get("text"), Some(&5));
        assert_eq!(totals.get("backgrounds"), Some(&1));
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_report_rows() {
        let rows = sample().rows();
        assert_eq!(rows[0].outcome, "rewritten");
        assert_eq!(rows[0].replacements, 4);
        assert_eq!(rows[1].misses, "footer");
        assert_eq!(rows[3].outcome, "failed");
        assert_eq!(rows[3].error, "Failed to read file");
    }
}
