//! # Unit Harness Library / Unit Harness 库
//!
//! A minimal in-process test harness. Test units are registered into a
//! `TestSuite`, run one after another by `run_suite`, and reported as plain
//! `PASS: <name>` / `FAIL: <name>` lines. The returned `RunReport` turns the
//! number of failures into the process exit code.
//!
//! 一个最小化的进程内测试框架。测试单元注册到 `TestSuite` 中，
//! 由 `run_suite` 逐个运行，并以纯文本 `PASS: <name>` / `FAIL: <name>` 行报告。
//! 返回的 `RunReport` 将失败数量转换为进程退出码。
//!
//! ```
//! use unit_harness::{TestSuite, StreamReporter, assert_equal, run_suite};
//!
//! let mut suite = TestSuite::new();
//! suite.register("arithmetic", || {
//!     assert_equal(2 + 2, 4, None)?;
//!     Ok(())
//! });
//!
//! let report = run_suite(suite, StreamReporter::new(Vec::<u8>::new(), Vec::<u8>::new()));
//! assert_eq!(report.exit_status(), 0);
//! ```
//!
//! The `unit-harness` binary runs the example units with the default
//! `RunnerConfig`: plain lines, no colour, no summary, English. The colour,
//! summary, language and `RunnerConfig::load` options are reachable only
//! through this library.
//!
//! `unit-harness` 二进制程序使用默认的 `RunnerConfig` 运行示例单元：
//! 纯文本行、无颜色、无摘要、英文。颜色、摘要、语言以及
//! `RunnerConfig::load` 选项只能通过本库使用。
//!
//! ## Modules / 模块
//!
//! - `core` - Assertions, registry, runner and data models
//! - `reporting` - The `Reporter` trait and the console reporter
//! - `demo` - Sample code under test and the example units run by the binary
//!
//! - `core` - 断言、注册表、运行器和数据模型
//! - `reporting` - `Reporter` trait 和控制台报告器
//! - `demo` - 被测示例代码以及二进制程序运行的示例单元

pub mod core;
pub mod demo;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::{
    AssertionError, Outcome, RunReport, RunnerConfig, TestSuite, assert_deep_equal, assert_equal,
    run_suite, run_suite_with_console,
};
pub use reporting::{Reporter, StreamReporter};

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
