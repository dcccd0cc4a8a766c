//! # Configuration Module / 配置模块
//!
//! Presentation options for a run. None of them changes which units run or
//! how outcomes are decided; they only affect what the console reporter prints.
//!
//! 一次运行的展示选项。它们不会改变运行哪些单元或如何判定结果，
//! 只影响控制台报告器的输出内容。
//!
//! These options are library-only. The binaries read no files, arguments or
//! environment and always run with `RunnerConfig::default()`.
//!
//! 这些选项仅供库使用。二进制程序不读取任何文件、参数或环境变量，
//! 始终使用 `RunnerConfig::default()` 运行。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for the console reporter, loadable from a TOML file.
/// Every field is optional in the file and falls back to its default.
///
/// 控制台报告器的选项，可从 TOML 文件加载。
/// 文件中的每个字段都是可选的，缺省时使用默认值。
///
/// ```toml
/// language = "zh-CN"
/// color = true
/// summary = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// The language for the summary block (e.g., "en", "zh-CN").
    /// Result lines and assertion messages are never translated.
    ///
    /// 摘要块使用的语言（例如 "en", "zh-CN"）。
    /// 结果行和断言消息永远不会被翻译。
    pub language: String,
    /// If `true`, the `PASS`/`FAIL` tags and the summary are coloured.
    /// 如果为 `true`，`PASS`/`FAIL` 标记和摘要将带有颜色。
    pub color: bool,
    /// If `true`, a summary block is printed after the last unit.
    /// 如果为 `true`，在最后一个单元之后打印摘要块。
    pub summary: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            color: false,
            summary: false,
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

impl RunnerConfig {
    /// Parses a configuration from TOML text.
    /// 从 TOML 文本解析配置。
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse runner configuration")
    }

    /// Reads and parses a configuration file.
    /// 读取并解析配置文件。
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read runner configuration: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid runner configuration: {}", path.display()))
    }
}
