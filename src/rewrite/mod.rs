//! # 文本改写模块
//!
//! 批量改写的核心：正则规则、有序规则集和带备份的安全写回。
//!
//! ## 功能
//! - `Rule` / `RuleSet`: 对整篇文本依次执行正则替换
//! - `safe_rewrite`: 快照 → 改写 → 提交或回滚
//!
//! ## 依赖关系
//! - 被 `jobs/` 使用
//! - 使用 `regex` crate

pub mod rule;
pub mod ruleset;
pub mod safe;

pub use rule::{Condition, FileContext, Rule};
pub use ruleset::RuleSet;
pub use safe::safe_rewrite;
