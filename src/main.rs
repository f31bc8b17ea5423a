//! # sitefix - 静态站点 HTML 批量维护工具
//!
//! 把一次性的站点维护脚本统一成单一可执行文件：每个子命令按写死的
//! glob 收集 HTML 文件，依次执行正则替换规则，并以备份保护写回。
//!
//! ## 子命令
//! - `light-mode`   - 暗色主题 → 浅色主题
//! - `glass`        - 注入 liquid glass 效果
//! - `glass-colors` - 玻璃效果改为水晶色
//! - `fix-paths`    - 修正相对链接
//! - `text-colors`  - 统一文字颜色
//! - `headers`      - 统一页眉页脚
//! - `rules`        - 查看任务规则表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── jobs/     (任务定义：目标文件 + 规则表)
//!   │     ├── batch/    (文件收集与顺序执行)
//!   │     ├── rewrite/  (规则、规则集、安全改写)
//!   │     └── models/   (报告数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod jobs;
mod models;
mod rewrite;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&e.chain_message());
        std::process::exit(1);
    }
}
