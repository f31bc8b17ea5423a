//! # headers 任务
//!
//! 用统一的浅色页眉 / 页脚替换各页面已有的版本，并同步页面 `body`
//! 与 `.gradient-bg` 样式。
//!
//! 页眉页脚模板位于 `templates/`，其中 `{{prefix}}` 按文件深度展开为
//! `../` 的重复，使站内链接和资源路径在任意目录层级都正确。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用

use super::Job;
use crate::batch::TargetSet;
use crate::error::Result;
use crate::rewrite::{FileContext, Rule, RuleSet};

use regex::Captures;

const HEADER_TEMPLATE: &str = include_str!("templates/header.html");
const FOOTER_TEMPLATE: &str = include_str!("templates/footer.html");

const PREFIX_PLACEHOLDER: &str = "{{prefix}}";

const LIGHT_BODY_CSS: &str = "        body {
            font-family: 'Inter', sans-serif;
            background-color: #FFFFFF;
            color: #1F2937;
        }";

const GOLDEN_GRADIENT_CSS: &str = "        .gradient-bg {
            background-image: linear-gradient(to right, #C19837, #CE9522);
        }";

/// 构建 headers 任务
pub fn job() -> Result<Job> {
    let targets = TargetSet::new(&["pages/**/*.html", "*.html"])
        .skip_names(&["index.html", "final-test.html"])
        .skip_fragments(&["backups"]);

    Ok(Job {
        title: "Header and footer replacement",
        backup_suffix: ".backup",
        targets,
        rules: RuleSet::new(vec![
            Rule::literal(
                "body CSS",
                "css",
                r"[ \t]*\bbody\s*\{[^}]*background-color:\s*#[0-9A-Fa-f]{6};[^}]*\}",
                LIGHT_BODY_CSS,
            )?,
            Rule::literal(
                "gradient CSS",
                "css",
                r"[ \t]*\.gradient-bg\s*\{[^}]*\}",
                GOLDEN_GRADIENT_CSS,
            )?,
            Rule::expand(
                "header",
                "chrome",
                r"(?s)[ \t]*<!-- Header/Navigation -->.*?</header>",
                render_header,
            )?
            .expected(),
            Rule::expand(
                "footer",
                "chrome",
                r"(?s)[ \t]*<!-- Footer -->.*?</footer>",
                render_footer,
            )?
            .expected(),
        ]),
        highlights: &[
            "Updated header navigation with light mode styling",
            "Updated footer with consistent branding",
            "Fixed asset paths for relative positioning",
            "Converted page CSS to light mode theme",
        ],
    })
}

/// 用文件深度展开模板
fn render(template: &str, ctx: &FileContext) -> String {
    template
        .trim_end()
        .replace(PREFIX_PLACEHOLDER, &ctx.relative_prefix())
}

fn render_header(_caps: &Captures<'_>, ctx: &FileContext) -> String {
    render(HEADER_TEMPLATE, ctx)
}

fn render_footer(_caps: &Captures<'_>, ctx: &FileContext) -> String {
    render(FOOTER_TEMPLATE, ctx)
}
