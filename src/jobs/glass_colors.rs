//! # glass-colors 任务
//!
//! 把已有的 liquid glass 样式块从金色调改为中性水晶玻璃色。
//!
//! 每条规则替换整个 CSS 块（连同行首缩进），替换文本自带 8 格缩进，
//! 因此重复运行不会让缩进越来越深。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用

use super::Job;
use crate::batch::TargetSet;
use crate::error::Result;
use crate::rewrite::{Rule, RuleSet};

const DARK_GLASS: &str = "        .liquid-glass-dark {
            background: rgba(255, 255, 255, 0.15);
            backdrop-filter: blur(15px);
            -webkit-backdrop-filter: blur(15px);
            border-radius: 20px;
            border: 1px solid rgba(255, 255, 255, 0.25);
            box-shadow: 0 8px 32px 0 rgba(31, 38, 135, 0.15);
            transition: all 0.3s ease;
        }";

const DARK_GLASS_HOVER: &str = "        .liquid-glass-dark:hover {
            background: rgba(255, 255, 255, 0.25);
            transform: translateY(-5px);
            box-shadow: 0 15px 35px 0 rgba(31, 38, 135, 0.25);
            border: 1px solid rgba(255, 255, 255, 0.35);
        }";

const GLASS: &str = "        .liquid-glass {
            background: rgba(255, 255, 255, 0.2);
            backdrop-filter: blur(10px);
            -webkit-backdrop-filter: blur(10px);
            border-radius: 20px;
            border: 1px solid rgba(255, 255, 255, 0.3);
            box-shadow: 0 8px 32px 0 rgba(31, 38, 135, 0.2);
            transition: all 0.3s ease;
        }";

const GLASS_HOVER: &str = "        .liquid-glass:hover {
            background: rgba(255, 255, 255, 0.3);
            transform: translateY(-5px);
            box-shadow: 0 15px 35px 0 rgba(31, 38, 135, 0.3);
        }";

/// 构建 glass-colors 任务
pub fn job() -> Result<Job> {
    Ok(Job {
        title: "Crystal glass colors",
        backup_suffix: ".glasscolor_backup",
        targets: TargetSet::new(&["pages/safety-video-analytics/*.html"]),
        rules: RuleSet::new(vec![
            Rule::literal(
                ".liquid-glass-dark",
                "glass",
                r"[ \t]*\.liquid-glass-dark\s*\{[^}]*\}",
                DARK_GLASS,
            )?,
            Rule::literal(
                ".liquid-glass-dark:hover",
                "glass",
                r"[ \t]*\.liquid-glass-dark:hover\s*\{[^}]*\}",
                DARK_GLASS_HOVER,
            )?,
            Rule::literal(
                ".liquid-glass",
                "glass",
                r"[ \t]*\.liquid-glass\s*\{[^}]*\}",
                GLASS,
            )?,
            Rule::literal(
                ".liquid-glass:hover",
                "glass",
                r"[ \t]*\.liquid-glass:hover\s*\{[^}]*\}",
                GLASS_HOVER,
            )?,
        ]),
        highlights: &[
            "Changed from golden tint to crystal clear",
            "Natural glass appearance with white/blue tones",
            "Subtle blue shadows for depth",
        ],
    })
}
