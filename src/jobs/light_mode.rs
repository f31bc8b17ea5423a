//! # light-mode 任务
//!
//! 把暗色主题页面整体转换为浅色 / 金色主题：页面 CSS、渐变、
//! Tailwind 文字 / 背景 / 边框 / hover 类、阴影和滚动条颜色。
//!
//! 规则顺序有意义：`color: #E2E8F0;` 先变为 `#1F2937`，随后的
//! `#1F2937` 规则再把它改为 `#374151`。这样重复运行时结果不变。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `jobs/mod.rs` 的 `class_swap`

use super::{class_swap, Job};
use crate::batch::TargetSet;
use crate::error::Result;
use crate::rewrite::{Rule, RuleSet};

/// 构建 light-mode 任务
pub fn job() -> Result<Job> {
    let targets = TargetSet::new(&["pages/**/*.html", "*.html"])
        .skip_names(&["index.html", "final-test.html"])
        .skip_fragments(&["backups"]);

    Ok(Job {
        title: "Light mode conversion",
        backup_suffix: ".lightmode_backup",
        targets,
        rules: RuleSet::new(rules()?),
        highlights: &[
            "Converted backgrounds: dark → light",
            "Updated text colors: light → dark",
            "Changed gradients: purple → golden",
            "Fixed hover effects for light theme",
            "Updated shadows and borders",
        ],
    })
}

fn rules() -> Result<Vec<Rule>> {
    Ok(vec![
        // 页面基础色
        Rule::literal(
            "body background",
            "css",
            r"background-color:\s*#0A0A0F;",
            "background-color: #FFFFFF;",
        )?,
        Rule::literal("body text color", "css", r"color:\s*#E2E8F0;", "color: #1F2937;")?,
        Rule::literal(
            "text gradient",
            "gradients",
            r"background-image:\s*linear-gradient\(to right, #4F46E5, #8B5CF6\);",
            "background-image: linear-gradient(to right, #C19837, #CE9522);",
        )?,
        Rule::literal(
            "circle blur",
            "gradients",
            r"background:\s*rgba\(139, 92, 246, 0\.4\);",
            "background: rgba(193, 152, 55, 0.2);",
        )?,
        Rule::literal(
            "card hover background",
            "css",
            r"background-color:\s*rgba\(31, 41, 55, 0\.05\);",
            "background-color: rgba(249, 250, 251, 0.8);",
        )?,
        // 文字
        class_swap("text", "text-white", "text-gray-900")?,
        class_swap("text", "text-gray-100", "text-gray-800")?,
        class_swap("text", "text-gray-200", "text-gray-700")?,
        class_swap("text", "text-gray-300", "text-gray-600")?,
        // 背景
        Rule::literal("arbitrary dark background", "backgrounds", r"bg-\[#0A0A0F\]", "bg-white")?,
        class_swap("backgrounds", "bg-gray-800", "bg-gray-100")?,
        class_swap("backgrounds", "bg-gray-900", "bg-gray-50")?,
        // 边框
        class_swap("borders", "border-gray-700", "border-gray-200")?,
        class_swap("borders", "border-gray-800", "border-gray-100")?,
        // hover
        // `hover:text-white` 和 `hover:bg-gray-800` 已被上面不带前缀的规则改写
        // （后者变为 `hover:bg-gray-100`），对应的两条规则在这里不会再命中。
        class_swap("hover", "hover:text-white", "hover:text-gray-900")?,
        class_swap("hover", "hover:bg-gray-700", "hover:bg-gray-100")?,
        class_swap("hover", "hover:bg-gray-800", "hover:bg-gray-50")?,
        Rule::literal(
            "purple glow",
            "gradients",
            r"rgba\(79, 70, 229, 0\.15\)",
            "rgba(193, 152, 55, 0.15)",
        )?,
        Rule::literal("large shadow", "shadows", r"shadow-2xl", "shadow-lg")?,
        Rule::template("dark gray", "css", r#"#1F2937([\s"';>])"#, "#374151${1}")?,
        // 其余位置（如 `bg-gray-900/80`）的页脚背景
        Rule::literal("footer background", "backgrounds", r"bg-gray-900\b", "bg-gray-50")?,
        // 滚动条
        Rule::literal(
            "scrollbar thumb",
            "css",
            r"background-color:\s*#4F46E5;",
            "background-color: #C19837;",
        )?,
        Rule::literal(
            "scrollbar thumb hover",
            "css",
            r"background-color:\s*#6D28D9;",
            "background-color: #CE9522;",
        )?,
    ])
}
