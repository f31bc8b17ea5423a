//! # text-colors 任务
//!
//! 提高文字对比度：所有 `text-gray` / `text-gray-100` … `text-gray-800`
//! 统一为 `text-gray-900`，已是 `text-gray-900` 的保持不变。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用

use super::Job;
use crate::batch::TargetSet;
use crate::error::Result;
use crate::rewrite::{FileContext, Rule, RuleSet};

use regex::Captures;

const TARGET: &str = "text-gray-900";

/// 构建 text-colors 任务
pub fn job() -> Result<Job> {
    let mut rules = vec![Rule::expand(
        "text-gray → text-gray-900",
        "text",
        r"\btext-gray(-[0-9])?",
        bare_text_gray,
    )?];

    for level in (100..=800).step_by(100) {
        rules.push(Rule::literal(
            &format!("text-gray-{level} → {TARGET}"),
            "text",
            &format!(r"\btext-gray-{level}\b"),
            TARGET,
        )?);
    }

    Ok(Job {
        title: "Text contrast update",
        backup_suffix: ".textcolor_backup",
        targets: TargetSet::new(&["pages/**/*.html", "*.html"]).skip_fragments(&["backup"]),
        rules: RuleSet::new(rules),
        highlights: &[
            "All text-gray classes → text-gray-900",
            "Improved text contrast and readability",
        ],
    })
}

/// 只替换不带数字色阶的 `text-gray`
fn bare_text_gray(caps: &Captures<'_>, _ctx: &FileContext) -> String {
    if caps.get(1).is_some() {
        caps[0].to_string()
    } else {
        TARGET.to_string()
    }
}
