//! # 替换规则
//!
//! 单条正则替换规则及其适用条件。
//!
//! ## 功能
//! - 三种替换方式：字面量、`$` 模板展开、基于捕获组的函数
//! - 按文件路径 / 内容标记决定规则是否适用
//! - 统计匹配数与实际改动数
//!
//! ## 依赖关系
//! - 被 `rewrite/ruleset.rs` 和 `jobs/` 使用
//! - 使用 `regex` crate

use crate::error::{Result, SitefixError};

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fmt;
use std::path::{Component, Path};

/// 当前处理文件的上下文（相对于任务根目录）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContext {
    /// 以 `/` 分隔的相对路径
    rel_path: String,
    /// 所在目录深度（根目录下的文件为 0）
    depth: usize,
}

impl FileContext {
    /// 从相对路径字符串创建
    pub fn new(rel_path: &str) -> Self {
        let rel_path = rel_path.replace('\\', "/");
        let depth = rel_path.matches('/').count();
        Self { rel_path, depth }
    }

    /// 从根目录与文件完整路径创建
    pub fn from_paths(root: &Path, path: &Path) -> Self {
        Self::new(&relative_slash_path(root, path))
    }

    pub fn rel_path(&self) -> &str {
        &self.rel_path
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// 回到根目录所需的相对前缀，如 `../../`
    pub fn relative_prefix(&self) -> String {
        "../".repeat(self.depth)
    }
}

/// 计算 `path` 相对 `root` 的 `/` 分隔路径
///
/// `path` 不在 `root` 之下时退回到完整路径。
pub fn relative_slash_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// 捕获组替换函数
pub type ExpandFn = fn(&Captures<'_>, &FileContext) -> String;

/// 替换方式
#[derive(Clone)]
pub enum Replacement {
    /// 原样插入，不做 `$` 展开
    Literal(String),
    /// `$1` / `${name}` 模板
    Template(String),
    /// 由捕获组计算替换文本
    Expand(ExpandFn),
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Replacement::Template(s) => f.debug_tuple("Template").field(s).finish(),
            Replacement::Expand(_) => f.write_str("Expand(..)"),
        }
    }
}

/// 规则适用条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// 总是适用
    Always,
    /// 当前文本不含该标记时适用
    Unless(&'static str),
    /// 相对路径包含该片段时适用
    PathContains(&'static str),
    /// 目录深度不小于该值时适用
    PathDepthAtLeast(usize),
}

impl Condition {
    /// 判断条件是否成立
    pub fn holds(&self, text: &str, ctx: &FileContext) -> bool {
        match self {
            Condition::Always => true,
            Condition::Unless(marker) => !text.contains(marker),
            Condition::PathContains(fragment) => ctx.rel_path().contains(fragment),
            Condition::PathDepthAtLeast(depth) => ctx.depth() >= *depth,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => write!(f, "always"),
            Condition::Unless(marker) => write!(f, "unless '{}' present", marker),
            Condition::PathContains(fragment) => write!(f, "path contains '{}'", fragment),
            Condition::PathDepthAtLeast(depth) => write!(f, "depth >= {}", depth),
        }
    }
}

/// 单条规则的执行统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Application {
    /// 条件是否成立
    pub applicable: bool,
    /// 匹配次数
    pub matched: usize,
    /// 替换后文本确实变化的次数
    pub changed: usize,
}

/// 一条替换规则
#[derive(Debug, Clone)]
pub struct Rule {
    label: String,
    category: &'static str,
    pattern: Regex,
    replacement: Replacement,
    condition: Condition,
    expected: bool,
}

impl Rule {
    /// 编译规则
    pub fn new(
        label: &str,
        category: &'static str,
        pattern: &str,
        replacement: Replacement,
    ) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| SitefixError::InvalidPattern {
            rule: label.to_string(),
            source: e,
        })?;

        Ok(Self {
            label: label.to_string(),
            category,
            pattern,
            replacement,
            condition: Condition::Always,
            expected: false,
        })
    }

    /// 字面量替换
    pub fn literal(label: &str, category: &'static str, pattern: &str, text: &str) -> Result<Self> {
        Self::new(label, category, pattern, Replacement::Literal(text.to_string()))
    }

    /// 模板替换
    pub fn template(
        label: &str,
        category: &'static str,
        pattern: &str,
        template: &str,
    ) -> Result<Self> {
        Self::new(label, category, pattern, Replacement::Template(template.to_string()))
    }

    /// 函数替换
    pub fn expand(
        label: &str,
        category: &'static str,
        pattern: &str,
        f: ExpandFn,
    ) -> Result<Self> {
        Self::new(label, category, pattern, Replacement::Expand(f))
    }

    /// 设置适用条件
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// 标记为"应当匹配"，未匹配时报告警告
    pub fn expected(mut self) -> Self {
        self.expected = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn is_expected(&self) -> bool {
        self.expected
    }

    /// 对整段文本执行一次全局替换
    ///
    /// 没有任何实际改动时返回借用的原文本。
    pub fn apply<'t>(&self, text: &'t str, ctx: &FileContext) -> (Cow<'t, str>, Application) {
        if !self.condition.holds(text, ctx) {
            return (Cow::Borrowed(text), Application::default());
        }

        let mut stats = Application {
            applicable: true,
            ..Application::default()
        };

        let replaced = self.pattern.replace_all(text, |caps: &Captures<'_>| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let mut out = String::new();
            match &self.replacement {
                Replacement::Literal(s) => out.push_str(s),
                Replacement::Template(t) => caps.expand(t, &mut out),
                Replacement::Expand(f) => out = f(caps, ctx),
            }
            stats.matched += 1;
            if out != whole {
                stats.changed += 1;
            }
            out
        });

        if stats.changed == 0 {
            (Cow::Borrowed(text), stats)
        } else {
            (Cow::Owned(replaced.into_owned()), stats)
        }
    }
}
