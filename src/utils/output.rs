//! # 终端输出工具
//!
//! 所有任务共用的带标签输出行：`[*]`, `[OK]`, `[SKIP]`, `[WARN]`, `[ERR]`,
//! `[DONE]`，以及列表项、细节行和标题栏。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

fn tagged(tag: ColoredString, msg: &str) -> String {
    format!("{tag} {msg}")
}

/// 文件已改写、报告已保存
pub fn print_success(msg: &str) {
    println!("{}", tagged("[OK]".green().bold(), msg));
}

/// 致命错误或单个文件失败，写到 stderr
pub fn print_error(msg: &str) {
    eprintln!("{}", tagged("[ERR]".red().bold(), msg));
}

/// 未命中的预期规则、空目标集
pub fn print_warning(msg: &str) {
    println!("{}", tagged("[WARN]".yellow().bold(), msg));
}

pub fn print_info(msg: &str) {
    println!("{}", tagged("[*]".blue().bold(), msg));
}

/// 文件内容无变化
pub fn print_skip(msg: &str) {
    println!("{}", tagged("[SKIP]".dimmed(), msg));
}

pub fn print_done(msg: &str) {
    println!("{}", tagged("[DONE]".green().bold(), msg));
}

/// 目标文件列表项
pub fn print_item(msg: &str) {
    println!("    - {msg}");
}

/// 缩进的细节行（如单条规则的替换次数）
pub fn print_detail(msg: &str) {
    println!("      {} {}", "·".dimmed(), msg.dimmed());
}

/// 任务标题栏
pub fn print_header(title: &str) {
    let rule = "─".repeat(RULE_WIDTH).dimmed();
    println!("\n{rule}\n  {}\n{rule}\n", title.bold());
}

pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}
