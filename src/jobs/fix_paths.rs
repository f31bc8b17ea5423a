//! # fix-paths 任务
//!
//! 页面移入 `pages/<section>/` 后修正相对链接：
//! - 同目录链接不再绕道 `../pages/safety-video-analytics/`
//! - 两层深的页面引用 `../../assets/`
//! - 回到首页和兄弟栏目的链接去掉多余的 `pages/`
//!
//! ## 依赖关系
//! - 被 `commands/` 使用

use super::Job;
use crate::batch::TargetSet;
use crate::error::Result;
use crate::rewrite::{Condition, Rule, RuleSet};

/// 构建 fix-paths 任务
pub fn job() -> Result<Job> {
    Ok(Job {
        title: "Navigation path fix",
        backup_suffix: ".pathfix_backup",
        targets: TargetSet::new(&["pages/**/*.html"]).skip_fragments(&[".backup"]),
        rules: RuleSet::new(vec![
            Rule::literal(
                "same-section links",
                "links",
                r#"href="\.\./pages/safety-video-analytics/"#,
                r#"href="./"#,
            )?
            .when(Condition::PathContains("safety-video-analytics")),
            Rule::literal(
                "asset paths",
                "assets",
                r#"src="\.\./assets/"#,
                r#"src="../../assets/"#,
            )?
            .when(Condition::PathDepthAtLeast(2)),
            Rule::literal(
                "home link",
                "links",
                r#"href="\.\./index\.html""#,
                r#"href="../../index.html""#,
            )?
            .when(Condition::PathContains("pages/")),
            Rule::literal(
                "section links",
                "links",
                r#"href="\.\./pages/"#,
                r#"href="../"#,
            )?
            .when(Condition::PathContains("pages/")),
        ]),
        highlights: &[
            "Fixed double 'pages/' paths in navigation",
            "Fixed asset paths for proper loading",
            "Fixed relative navigation between pages",
        ],
    })
}
