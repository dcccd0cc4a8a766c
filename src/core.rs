//! # Core Module / 核心模块
//!
//! This module contains the harness itself: the assertion primitives, the
//! test registry, the sequential runner and the data models they share.
//!
//! 此模块包含测试框架本身：断言原语、测试注册表、
//! 顺序运行器以及它们共享的数据模型。

pub mod assertions;
pub mod config;
pub mod models;
pub mod runner;
pub mod suite;

// Re-exports
pub use assertions::{AssertionError, assert_deep_equal, assert_equal};
pub use config::RunnerConfig;
pub use models::{Outcome, RunReport};
pub use runner::{run_suite, run_suite_with_console};
pub use suite::{TestBody, TestSuite, TestUnit};
