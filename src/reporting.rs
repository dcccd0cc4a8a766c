//! # Reporting Module / 报告模块
//!
//! This module separates reporting from execution. The runner hands every
//! finished unit to a `Reporter` immediately, so result lines appear in
//! execution order while the run is still in progress.
//!
//! 此模块将报告与执行分离。运行器在每个单元结束后立即将其交给 `Reporter`，
//! 因此结果行在运行过程中按执行顺序输出。

pub mod console;

use crate::core::models::{Outcome, RunReport};
use std::io;

/// Receives test outcomes from the runner.
/// Implement this trait to send results somewhere other than the console.
///
/// 接收运行器产生的测试结果。
/// 实现此 trait 可以将结果输出到控制台以外的地方。
pub trait Reporter {
    /// Called once per unit, right after the unit finished.
    /// 每个单元结束后立即调用一次。
    fn on_test_complete(&mut self, name: &str, outcome: &Outcome) -> io::Result<()>;

    /// Called once after every unit has run.
    /// 所有单元运行完毕后调用一次。
    fn on_run_complete(&mut self, _report: &RunReport) -> io::Result<()> {
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn on_test_complete(&mut self, name: &str, outcome: &Outcome) -> io::Result<()> {
        (**self).on_test_complete(name, outcome)
    }

    fn on_run_complete(&mut self, report: &RunReport) -> io::Result<()> {
        (**self).on_run_complete(report)
    }
}

// Re-export common reporting items
pub use console::StreamReporter;
