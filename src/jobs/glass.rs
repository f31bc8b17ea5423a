//! # glass 任务
//!
//! 为 safety-video-analytics 页面注入 liquid glass 样式，并把暗色卡片
//! 替换为玻璃卡片。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `jobs/mod.rs` 的 `class_swap`

use super::{class_swap, Job};
use crate::batch::TargetSet;
use crate::error::Result;
use crate::rewrite::{Condition, FileContext, Rule, RuleSet};

use regex::Captures;

/// 暗色卡片上的动画类序列
const CARD_MOTION: &str = "rounded-xl shadow-lg hover:scale-105 transition-transform duration-300";

/// 追加在 `.circle-blur` 之后的玻璃样式
const GLASS_CSS: &str = r#"
        .liquid-glass {
            background: rgba(255, 255, 255, 0.25);
            backdrop-filter: blur(10px);
            -webkit-backdrop-filter: blur(10px);
            border-radius: 20px;
            border: 1px solid rgba(255, 255, 255, 0.18);
            box-shadow: 0 8px 32px 0 rgba(31, 38, 135, 0.37);
            transition: all 0.3s ease;
        }

        .liquid-glass:hover {
            background: rgba(255, 255, 255, 0.35);
            transform: translateY(-5px);
            box-shadow: 0 15px 35px 0 rgba(31, 38, 135, 0.4);
        }

        .liquid-glass-dark {
            background: rgba(193, 152, 55, 0.1);
            backdrop-filter: blur(15px);
            -webkit-backdrop-filter: blur(15px);
            border-radius: 20px;
            border: 1px solid rgba(193, 152, 55, 0.2);
            box-shadow: 0 8px 32px 0 rgba(193, 152, 55, 0.1);
            transition: all 0.3s ease;
        }

        .liquid-glass-dark:hover {
            background: rgba(193, 152, 55, 0.15);
            transform: translateY(-5px);
            box-shadow: 0 15px 35px 0 rgba(193, 152, 55, 0.2);
        }"#;

/// 构建 glass 任务
pub fn job() -> Result<Job> {
    Ok(Job {
        title: "Liquid glass effect",
        backup_suffix: ".glassfx_backup",
        targets: TargetSet::new(&["pages/safety-video-analytics/*.html"]),
        rules: RuleSet::new(rules()?),
        highlights: &[
            "Replaced dark cards with liquid glass design",
            "Added blur and transparency effects",
            "Updated text colors for readability on glass",
            "Enhanced hover animations",
        ],
    })
}

fn rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::expand(
            "liquid glass CSS",
            "css",
            r"(\s+)\.circle-blur\s*\{[^}]*\}",
            append_glass_css,
        )?
        .when(Condition::Unless(".liquid-glass")),
        Rule::literal(
            "dark card",
            "cards",
            r"bg-(?:\[#1A1A22\]|\[#0A0A0F\]|gray-900|black)\s+p-6\s+rounded-xl\s+shadow-lg\s+hover:scale-105\s+transition-transform\s+duration-300",
            "liquid-glass-dark p-6",
        )?,
        class_swap("text", "text-gray-400", "text-gray-700")?,
        class_swap("text", "text-gray-300", "text-gray-600")?,
        Rule::expand(
            "dark card class",
            "cards",
            r#"class="bg-\[#[0-9A-Fa-f]{6}\]\s+([^"]*)"([^>]*>)"#,
            glassify_card_class,
        )?,
    ])
}

fn append_glass_css(caps: &Captures<'_>, _ctx: &FileContext) -> String {
    format!("{}{}", &caps[0], GLASS_CSS)
}

/// `class="bg-[#RRGGBB] rest"` → `class="liquid-glass-dark rest"`，去掉动画类
fn glassify_card_class(caps: &Captures<'_>, _ctx: &FileContext) -> String {
    let rest = caps[1].replace(CARD_MOTION, "");
    format!(r#"class="liquid-glass-dark {}"{}"#, rest.trim(), &caps[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<style>
        .circle-blur {
            position: absolute;
            filter: blur(80px);
        }
    </style>
    <div class="bg-[#1A1A22] p-6 rounded-xl shadow-lg hover:scale-105 transition-transform duration-300">
        <p class="text-gray-400">Detects helmets</p>
        <p class="text-gray-300 text-sm">Realtime</p>
    </div>
    <div class="bg-[#12121A] mt-4 rounded-xl shadow-lg hover:scale-105 transition-transform duration-300" id="x">
    </div>"#;

    const REL: &str = "pages/safety-video-analytics/ppe-detection.html";

    #[test]
    fn test_glass_applied() {
        let out = job().unwrap().rewrite_text(REL, PAGE);

        assert!(out.contains(".liquid-glass {"));
        assert!(out.contains(".liquid-glass-dark:hover {"));
        assert_eq!(out.matches(".liquid-glass {").count(), 1);
        assert!(out.contains(r#"<div class="liquid-glass-dark p-6">"#));
        assert!(out.contains(r#"<p class="text-gray-700">"#));
        assert!(out.contains(r#"<p class="text-gray-600 text-sm">"#));
        assert!(out.contains(r#"<div class="liquid-glass-dark mt-4" id="x">"#));
    }

    #[test]
    fn test_css_inserted_after_circle_blur() {
        let out = job().unwrap().rewrite_text(REL, PAGE);
        let blur = out.find(".circle-blur").unwrap();
        let glass = out.find(".liquid-glass {").unwrap();
        assert!(glass > blur);
    }

    #[test]
    fn test_existing_glass_css_not_duplicated() {
        let input = "<style>\n        .circle-blur { filter: blur(80px); }\n        .liquid-glass { }\n</style>";
        let out = job().unwrap().rewrite_text(REL, input);
        assert_eq!(out, input);
    }

    #[test]
    fn test_idempotent() {
        let job = job().unwrap();
        let once = job.rewrite_text(REL, PAGE);
        assert_eq!(job.rewrite_text(REL, &once), once);
    }
}
