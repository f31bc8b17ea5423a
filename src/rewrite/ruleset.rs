//! # 规则集
//!
//! 按固定顺序对整篇文本依次执行规则。所有规则都在内存中完成，
//! 由调用方一次性写回。
//!
//! ## 依赖关系
//! - 被 `jobs/` 使用
//! - 使用 `rewrite/rule.rs`, `models/report.rs`

use super::rule::{FileContext, Rule};
use crate::models::RuleHit;

use std::borrow::Cow;

/// 一次完整改写的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// 改写后的文本
    pub text: String,
    /// 产生改动的规则
    pub hits: Vec<RuleHit>,
    /// 标记为 expected 却没有匹配的规则
    pub misses: Vec<String>,
}

/// 有序规则集
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// 依次执行全部规则
    pub fn apply(&self, text: &str, ctx: &FileContext) -> Rewrite {
        let mut current: Cow<'_, str> = Cow::Borrowed(text);
        let mut hits = Vec::new();
        let mut misses = Vec::new();

        for rule in &self.rules {
            let (next, stats) = rule.apply(&current, ctx);
            let next = match next {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };

            if stats.changed > 0 {
                hits.push(RuleHit {
                    label: rule.label().to_string(),
                    category: rule.category().to_string(),
                    count: stats.changed,
                });
            }
            if rule.is_expected() && stats.applicable && stats.matched == 0 {
                misses.push(rule.label().to_string());
            }
            if let Some(s) = next {
                current = Cow::Owned(s);
            }
        }

        Rewrite {
            text: current.into_owned(),
            hits,
            misses,
        }
    }
}
