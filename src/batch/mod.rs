//! # 批量处理模块
//!
//! 提供统一的文件批量处理能力。
//!
//! ## 功能
//! - 按 glob 模式和排除列表收集目标文件
//! - 顺序处理，单文件失败不影响整批
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `jobs/` 和 `commands/` 使用
//! - 使用 `walkdir` / `glob` 收集文件
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::TargetSet;
pub use runner::BatchRunner;
