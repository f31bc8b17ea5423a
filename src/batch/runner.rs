//! # 批量执行器
//!
//! 顺序执行批量改写任务。
//!
//! ## 功能
//! - 逐个文件处理：一个文件完整结束后才开始下一个
//! - 进度条显示，逐文件结果打印
//! - 单文件失败不中断整批，结果汇总为 `BatchReport`
//!
//! ## 依赖关系
//! - 被 `commands/apply.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条，`utils/output.rs` 打印结果

use crate::models::{BatchReport, FileOutcome, FileReport};
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// 批量执行器
#[derive(Debug, Clone)]
pub struct BatchRunner {
    /// 是否显示进度条和逐文件输出
    verbose: bool,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new() -> Self {
        Self { verbose: true }
    }

    /// 关闭终端输出
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }

    /// 顺序处理文件列表
    pub fn run<F>(&self, files: &[PathBuf], mut processor: F) -> BatchReport
    where
        F: FnMut(&Path) -> FileReport,
    {
        let pb = if self.verbose {
            progress::create_progress_bar(files.len() as u64, "Rewriting")
        } else {
            ProgressBar::hidden()
        };

        let mut report = BatchReport::default();
        for file in files {
            let result = processor(file);
            if self.verbose {
                pb.suspend(|| print_file_report(&result));
            }
            report.push(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        report
    }
}

/// 打印单个文件的处理结果
fn print_file_report(report: &FileReport) {
    match &report.outcome {
        FileOutcome::Rewritten => {
            output::print_success(&format!(
                "{} ({} replacement(s))",
                report.path,
                report.replacements()
            ));
            for hit in &report.hits {
                output::print_detail(&format!("{} x{}", hit.label, hit.count));
            }
        }
        FileOutcome::Unchanged => {
            output::print_skip(&format!("{}: no changes needed", report.path));
        }
        FileOutcome::Failed(reason) => {
            output::print_error(&format!("{}: {} (original restored)", report.path, reason));
        }
    }

    for miss in &report.misses {
        output::print_warning(&format!("{}: '{}' not found", report.path, miss));
    }
}
