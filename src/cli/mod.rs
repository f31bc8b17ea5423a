//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `light-mode`:   暗色主题 → 浅色主题
//! - `glass`:        注入 liquid glass 效果
//! - `glass-colors`: 玻璃效果改为水晶色
//! - `fix-paths`:    修正相对链接
//! - `text-colors`:  统一文字颜色
//! - `headers`:      统一页眉页脚
//! - `rules`:        查看某个任务的规则表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run, rules

pub mod rules;
pub mod run;

use clap::{Parser, Subcommand};

/// sitefix - 静态站点 HTML 批量维护工具
#[derive(Parser)]
#[command(name = "sitefix")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch find-and-replace maintenance jobs for static website HTML", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert dark-theme pages to the light/golden theme
    LightMode(run::RunArgs),

    /// Inject liquid glass CSS and turn dark cards into glass cards
    Glass(run::RunArgs),

    /// Retint liquid glass CSS blocks to crystal glass
    GlassColors(run::RunArgs),

    /// Fix relative link and asset paths under pages/
    FixPaths(run::RunArgs),

    /// Replace every text-gray shade with text-gray-900
    TextColors(run::RunArgs),

    /// Replace page header, footer and base CSS with the shared light versions
    Headers(run::RunArgs),

    /// Show the targets and ordered rule table of a job
    Rules(rules::RulesArgs),
}
