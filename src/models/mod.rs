//! # 数据模型模块
//!
//! 定义改写报告的数据模型。
//!
//! ## 依赖关系
//! - 被 `rewrite/`, `batch/`, `jobs/` 和 `commands/` 使用
//! - 子模块: report

pub mod report;

pub use report::{BatchReport, FileOutcome, FileReport, RuleHit};
