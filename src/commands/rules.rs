//! # rules 命令实现
//!
//! 打印任务的目标文件、排除项、备份后缀和有序规则表。
//!
//! ## 依赖关系
//! - 使用 `cli/rules.rs` 定义的参数
//! - 使用 `jobs/`, `utils/output.rs`

use super::build_job;
use crate::cli::rules::RulesArgs;
use crate::error::Result;
use crate::jobs::Job;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Debug, Tabled)]
struct RuleRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Rule")]
    label: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "When")]
    condition: String,
    #[tabled(rename = "Pattern")]
    pattern: String,
}

/// 执行 rules 命令
pub fn execute(args: RulesArgs) -> Result<()> {
    let job = build_job(args.job)?;
    output::print_header(&format!("{} ({})", job.title, args.job));

    output::print_info(&format!("Targets: {}", job.targets.patterns().join(", ")));
    if !job.targets.skipped_names().is_empty() {
        output::print_info(&format!(
            "Skipped names: {}",
            job.targets.skipped_names().join(", ")
        ));
    }
    if !job.targets.skipped_fragments().is_empty() {
        output::print_info(&format!(
            "Skipped paths containing: {}",
            job.targets.skipped_fragments().join(", ")
        ));
    }
    output::print_info(&format!("Backup suffix: {}", job.backup_suffix));

    let table = Table::new(rule_rows(&job));
    println!("{}", table);

    Ok(())
}

fn rule_rows(job: &Job) -> Vec<RuleRow> {
    job.rules
        .rules()
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleRow {
            index: i + 1,
            label: if rule.is_expected() {
                format!("{} (expected)", rule.label())
            } else {
                rule.label().to_string()
            },
            category: rule.category().to_string(),
            condition: rule.condition().to_string(),
            pattern: rule.pattern().to_string(),
        })
        .collect()
}
