//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `jobs/`, `batch/`, `utils/`
//! - 子模块: apply, rules

pub mod apply;
pub mod rules;

use crate::cli::rules::JobKind;
use crate::cli::Commands;
use crate::error::Result;
use crate::jobs::{self, Job};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::LightMode(args) => apply::execute(JobKind::LightMode, args),
        Commands::Glass(args) => apply::execute(JobKind::Glass, args),
        Commands::GlassColors(args) => apply::execute(JobKind::GlassColors, args),
        Commands::FixPaths(args) => apply::execute(JobKind::FixPaths, args),
        Commands::TextColors(args) => apply::execute(JobKind::TextColors, args),
        Commands::Headers(args) => apply::execute(JobKind::Headers, args),
        Commands::Rules(args) => rules::execute(args),
    }
}

/// 构建任务定义
pub fn build_job(kind: JobKind) -> Result<Job> {
    match kind {
        JobKind::LightMode => jobs::light_mode::job(),
        JobKind::Glass => jobs::glass::job(),
        JobKind::GlassColors => jobs::glass_colors::job(),
        JobKind::FixPaths => jobs::fix_paths::job(),
        JobKind::TextColors => jobs::text_colors::job(),
        JobKind::Headers => jobs::chrome::job(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_every_job_builds() {
        for kind in JobKind::value_variants() {
            let job = build_job(*kind).unwrap();
            assert!(!job.rules.rules().is_empty(), "{kind} has no rules");
            assert!(!job.targets.patterns().is_empty());
            assert!(job.backup_suffix.starts_with('.'));
        }
    }
}
