//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by the runner and the
//! reporters: the per-unit `Outcome` and the aggregate `RunReport` that
//! drives the process exit code.
//!
//! 此模块定义运行器和报告器共享的数据结构：
//! 单个测试单元的 `Outcome` 以及决定进程退出码的汇总 `RunReport`。

use std::fmt;
use std::process::ExitCode;
use std::time::Duration;

/// The result of executing a single test unit.
/// An outcome is handed to the reporter as soon as the unit finishes and is
/// not retained afterwards.
///
/// 执行单个测试单元的结果。
/// 单元结束后立即交给报告器，之后不会被保留。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The unit body completed without signalling a failure.
    /// 测试单元正常完成，没有发出失败信号。
    Pass,
    /// The unit body returned an error or panicked. Carries the failure message.
    /// 测试单元返回了错误或发生了 panic。携带失败消息。
    Fail(String),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    /// Gets the failure message. Returns `None` for a passing unit.
    /// 获取失败消息。对于通过的单元返回 `None`。
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(message) => Some(message),
        }
    }

    /// The status tag printed in front of the unit name.
    /// 打印在单元名称前面的状态标记。
    pub fn status_tag(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail(_) => "FAIL",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "PASS"),
            Outcome::Fail(message) => write!(f, "FAIL: {}", message),
        }
    }
}

/// Aggregate result of one suite run.
/// The `failed` field is the aggregate failure counter: it is incremented
/// exactly once per failing unit and read once to decide the exit status.
///
/// 一次测试套件运行的汇总结果。
/// `failed` 字段即汇总失败计数器：每个失败单元恰好加一，
/// 最后读取一次以决定退出状态。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of units executed / 已执行的单元数量
    pub total: usize,
    /// Number of passing units / 通过的单元数量
    pub passed: usize,
    /// Number of failing units / 失败的单元数量
    pub failed: usize,
    /// Wall-clock time of the whole run / 整次运行的耗时
    pub duration: Duration,
}

impl RunReport {
    /// Records one finished unit.
    /// 记录一个已完成的单元。
    pub(crate) fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Pass => self.passed += 1,
            Outcome::Fail(_) => self.failed += 1,
        }
    }

    /// `true` when no unit failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// The numeric process exit status: `0` when every unit passed, `1` otherwise.
    /// 数值形式的进程退出状态：全部通过时为 `0`，否则为 `1`。
    pub fn exit_status(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    /// The exit code to return from `main`.
    /// 从 `main` 返回的退出码。
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status() as u8)
    }
}
