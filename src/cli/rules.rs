//! # rules 子命令 CLI 定义
//!
//! 打印某个任务的目标文件规则和有序替换规则表。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rules.rs`

use clap::{Args, ValueEnum};

/// 维护任务
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum JobKind {
    /// Dark theme to light theme
    LightMode,
    /// Liquid glass effect
    Glass,
    /// Crystal glass colors
    GlassColors,
    /// Relative path fix
    FixPaths,
    /// Text contrast
    TextColors,
    /// Shared header and footer
    Headers,
}

impl std::fmt::Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobKind::LightMode => write!(f, "light-mode"),
            JobKind::Glass => write!(f, "glass"),
            JobKind::GlassColors => write!(f, "glass-colors"),
            JobKind::FixPaths => write!(f, "fix-paths"),
            JobKind::TextColors => write!(f, "text-colors"),
            JobKind::Headers => write!(f, "headers"),
        }
    }
}

/// rules 子命令参数
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Job whose rule table to print
    #[arg(value_enum)]
    pub job: JobKind,
}
