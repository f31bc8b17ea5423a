//! # 改写任务命令实现
//!
//! 收集目标文件，逐个安全改写，打印汇总并可选导出 CSV 报告。
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `jobs/`, `batch/`, `models/`
//! - 使用 `utils/output.rs`

use super::build_job;
use crate::batch::BatchRunner;
use crate::cli::rules::JobKind;
use crate::cli::run::RunArgs;
use crate::error::{Result, SitefixError};
use crate::jobs::Job;
use crate::models::BatchReport;
use crate::rewrite::rule::relative_slash_path;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 执行改写任务
pub fn execute(kind: JobKind, args: RunArgs) -> Result<()> {
    let job = build_job(kind)?;
    output::print_header(&format!("{} ({})", job.title, kind));

    let files = job.targets.collect(&args.root)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            job.targets.patterns().join(", "),
            args.root.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} file(s) to process:", files.len()));
    if !args.quiet {
        for file in &files {
            output::print_item(&relative_slash_path(&args.root, file));
        }
    }

    let runner = if args.quiet {
        BatchRunner::new().quiet()
    } else {
        BatchRunner::new()
    };
    let report = runner.run(&files, |path| job.process_file(&args.root, path));

    print_summary(&job, &report);

    if let Some(ref path) = args.report {
        save_report_csv(&report, path)?;
        output::print_success(&format!("Report saved to '{}'", path.display()));
    }

    Ok(())
}

/// 打印汇总
fn print_summary(job: &Job, report: &BatchReport) {
    #[derive(Tabled)]
    struct CategoryRow {
        #[tabled(rename = "Category")]
        category: String,
        #[tabled(rename = "Replacements")]
        count: usize,
    }

    output::print_separator();
    output::print_done(&format!(
        "{}: {} rewritten, {} unchanged, {} failed ({} total)",
        job.title,
        report.rewritten(),
        report.unchanged(),
        report.failed(),
        report.total()
    ));

    let rows: Vec<CategoryRow> = report
        .replacements_by_category()
        .into_iter()
        .map(|(category, count)| CategoryRow { category, count })
        .collect();

    if !rows.is_empty() {
        let table = Table::new(&rows);
        println!("{}", table);
        output::print_info(&format!(
            "{} replacement(s) in total",
            report.total_replacements()
        ));
    }

    let failures = report.failures();
    if !failures.is_empty() {
        output::print_warning(&format!("{} file(s) left unchanged after errors:", failures.len()));
        for (path, reason) in failures {
            output::print_item(&format!("{}: {}", path, reason));
        }
    }

    if report.rewritten() > 0 {
        output::print_info("Summary:");
        for line in job.highlights {
            output::print_item(line);
        }
    }
}

/// 保存逐文件 CSV 报告
fn save_report_csv(report: &BatchReport, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(SitefixError::CsvError)?;

    for row in report.rows() {
        wtr.serialize(row).map_err(SitefixError::CsvError)?;
    }

    wtr.flush().map_err(|e| SitefixError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_execute_rewrites_site_and_writes_report() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("site");
        write(&root, "pages/qr-code/qr-code.html", r#"<p class="text-gray-300">"#);
        write(&root, "about.html", r#"<p class="text-gray-900">"#);
        write(&root, "index.html", r#"<p class="text-gray-100">"#);
        let csv_path = dir.path().join("report.csv");

        execute(
            JobKind::TextColors,
            RunArgs {
                root: root.clone(),
                report: Some(csv_path.clone()),
                quiet: true,
            },
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(root.join("pages/qr-code/qr-code.html")).unwrap(),
            r#"<p class="text-gray-900">"#
        );
        // text-colors 不排除 index.html
        assert_eq!(
            fs::read_to_string(root.join("index.html")).unwrap(),
            r#"<p class="text-gray-900">"#
        );

        let csv = fs::read_to_string(&csv_path).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("path,outcome,replacements,misses,error"));
        assert!(csv.contains("about.html,unchanged,0,,"));
        assert!(csv.contains("pages/qr-code/qr-code.html,rewritten,1,,"));
    }

    #[test]
    fn test_execute_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let result = execute(
            JobKind::LightMode,
            RunArgs {
                root: dir.path().join("missing"),
                report: None,
                quiet: true,
            },
        );
        assert!(matches!(result, Err(SitefixError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_execute_with_no_targets_is_ok() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "notes.txt", "text-gray-300");
        let result = execute(
            JobKind::Glass,
            RunArgs {
                root: dir.path().to_path_buf(),
                report: None,
                quiet: true,
            },
        );
        assert!(result.is_ok());
        assert_eq!(
            fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
            "text-gray-300"
        );
    }
}
