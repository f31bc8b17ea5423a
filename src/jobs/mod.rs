//! # 维护任务模块
//!
//! 每个任务是一组写死的目标 glob、排除列表、备份后缀和有序规则表。
//!
//! ## 任务
//! - `light_mode`   - 暗色主题 → 浅色 / 金色主题
//! - `glass`        - 注入 liquid glass CSS，暗色卡片改为玻璃卡片
//! - `glass_colors` - 玻璃效果改为中性水晶色
//! - `fix_paths`    - 目录调整后的相对链接修正
//! - `text_colors`  - 所有 `text-gray[-N]` 统一为 `text-gray-900`
//! - `chrome`       - 统一页眉、页脚与页面基础 CSS
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `batch/collector.rs`, `rewrite/`, `models/`

pub mod chrome;
pub mod fix_paths;
pub mod glass;
pub mod glass_colors;
pub mod light_mode;
pub mod text_colors;

use crate::batch::TargetSet;
use crate::error::Result;
use crate::models::{FileOutcome, FileReport};
use crate::rewrite::{safe_rewrite, FileContext, Rule, RuleSet};

use std::path::Path;

/// Tailwind 类名后的分隔符：空白、引号、`>` 或 `]`
pub(crate) const CLASS_END: &str = r#"([\s"'>\]])"#;

/// 一个维护任务
#[derive(Debug, Clone)]
pub struct Job {
    /// 任务标题
    pub title: &'static str,
    /// 备份文件后缀
    pub backup_suffix: &'static str,
    /// 目标文件
    pub targets: TargetSet,
    /// 有序规则
    pub rules: RuleSet,
    /// 完成后的摘要说明
    pub highlights: &'static [&'static str],
}

impl Job {
    /// 处理单个文件，任何错误都记录在报告中
    pub fn process_file(&self, root: &Path, path: &Path) -> FileReport {
        let ctx = FileContext::from_paths(root, path);

        let result = safe_rewrite(path, self.backup_suffix, |text| {
            let rewrite = self.rules.apply(text, &ctx);
            Ok((rewrite.text, (rewrite.hits, rewrite.misses)))
        });

        match result {
            Ok(outcome) => {
                let written = outcome.is_written();
                let (hits, misses) = outcome.into_inner();
                FileReport {
                    path: ctx.rel_path().to_string(),
                    outcome: if written {
                        FileOutcome::Rewritten
                    } else {
                        FileOutcome::Unchanged
                    },
                    hits: if written { hits } else { Vec::new() },
                    misses,
                }
            }
            Err(e) => FileReport::failed(ctx.rel_path(), e.chain_message()),
        }
    }

    /// 仅在内存中改写
    #[cfg(test)]
    pub fn rewrite_text(&self, rel_path: &str, text: &str) -> String {
        self.rules.apply(text, &FileContext::new(rel_path)).text
    }
}

/// 以分隔符为边界的类名替换，如 `text-white` → `text-gray-900`
pub(crate) fn class_swap(category: &'static str, from: &str, to: &str) -> Result<Rule> {
    Rule::template(
        &format!("{from} → {to}"),
        category,
        &format!("{}{}", regex::escape(from), CLASS_END),
        &format!("{to}${{1}}"),
    )
}
