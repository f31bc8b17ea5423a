//! # 任务子命令 CLI 定义
//!
//! 所有改写任务共用的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/apply.rs`

use clap::Args;
use std::path::PathBuf;

/// 改写任务参数
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Site root directory that the job's glob patterns are relative to
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Write a per-file CSV report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Hide the progress bar and per-file lines, print only the summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
