//! # Console Reporting Module / 控制台报告模块
//!
//! Writes the plain-text result lines consumed by humans and CI logs:
//!
//! 输出供人和 CI 日志阅读的纯文本结果行：
//!
//! ```text
//! PASS: unit: add(2, 2) returns 4
//! FAIL: integration: import writes rows to db
//! Should import 2 rows
//! ```
//!
//! PASS lines go to the output stream, FAIL lines and their messages go to
//! the error stream. An optional, localised summary block can follow the run.
//!
//! PASS 行写入输出流，FAIL 行及其消息写入错误流。
//! 运行结束后可以选择输出一个本地化的摘要块。

use colored::*;
use rust_i18n::t;
use std::io::{self, Stderr, Stdout, Write};

use crate::core::config::RunnerConfig;
use crate::core::models::{Outcome, RunReport};
use crate::reporting::Reporter;

/// A reporter writing result lines to a pair of streams.
/// 将结果行写入一对输出流的报告器。
pub struct StreamReporter<O: Write, E: Write> {
    out: O,
    err: E,
    color: bool,
    summary: bool,
    locale: String,
    failed_names: Vec<String>,
}

impl StreamReporter<Stdout, Stderr> {
    /// Creates a reporter over the process stdout and stderr.
    /// 创建一个基于进程 stdout 和 stderr 的报告器。
    pub fn console(config: &RunnerConfig) -> Self {
        Self::with_config(io::stdout(), io::stderr(), config)
    }
}

impl<O: Write, E: Write> StreamReporter<O, E> {
    /// Creates a reporter with the default configuration: plain lines, no summary.
    pub fn new(out: O, err: E) -> Self {
        Self::with_config(out, err, &RunnerConfig::default())
    }

    pub fn with_config(out: O, err: E, config: &RunnerConfig) -> Self {
        Self {
            out,
            err,
            color: config.color,
            summary: config.summary,
            locale: config.language.clone(),
            failed_names: Vec::new(),
        }
    }

    /// Returns the underlying streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn tag(&self, outcome: &Outcome) -> String {
        let tag = outcome.status_tag();
        match (self.color, outcome) {
            (false, _) => tag.to_string(),
            (true, Outcome::Pass) => tag.green().bold().to_string(),
            (true, Outcome::Fail(_)) => tag.red().bold().to_string(),
        }
    }

    /// Prints the summary block to the output stream.
    ///
    /// ```text
    /// --- Test Summary ---
    ///   3 passed, 1 failed, 4 total
    ///   Finished in 1.20ms
    ///   Failed units:
    ///     - integration: import writes rows to db
    /// ```
    fn print_summary(&mut self, report: &RunReport) -> io::Result<()> {
        let locale = self.locale.as_str();
        let banner = t!("summary.banner", locale = locale);
        let counts = t!(
            "summary.counts",
            locale = locale,
            passed = report.passed,
            failed = report.failed,
            total = report.total
        );
        let elapsed = format!("{:.2?}", report.duration);
        let finished = t!("summary.finished", locale = locale, duration = elapsed);

        writeln!(self.out)?;
        if self.color {
            writeln!(self.out, "{}", banner.bold())?;
        } else {
            writeln!(self.out, "{}", banner)?;
        }
        writeln!(self.out, "  {}", counts)?;
        writeln!(self.out, "  {}", finished)?;

        if !self.failed_names.is_empty() {
            writeln!(self.out, "  {}", t!("summary.failed_units", locale = locale))?;
            for name in &self.failed_names {
                if self.color {
                    writeln!(self.out, "    - {}", name.as_str().cyan())?;
                } else {
                    writeln!(self.out, "    - {}", name)?;
                }
            }
        }

        let verdict = if report.is_success() {
            t!("summary.all_passed", locale = locale)
        } else {
            t!("summary.some_failed", locale = locale, count = report.failed)
        };
        match (self.color, report.is_success()) {
            (false, _) => writeln!(self.out, "{}", verdict)?,
            (true, true) => writeln!(self.out, "{}", verdict.green().bold())?,
            (true, false) => writeln!(self.out, "{}", verdict.red().bold())?,
        }
        self.out.flush()
    }
}

impl<O: Write, E: Write> Reporter for StreamReporter<O, E> {
    fn on_test_complete(&mut self, name: &str, outcome: &Outcome) -> io::Result<()> {
        let tag = self.tag(outcome);
        match outcome {
            Outcome::Pass => {
                writeln!(self.out, "{}: {}", tag, name)?;
                self.out.flush()
            }
            Outcome::Fail(message) => {
                if self.summary {
                    self.failed_names.push(name.to_string());
                }
                writeln!(self.err, "{}: {}", tag, name)?;
                writeln!(self.err, "{}", message)?;
                self.err.flush()
            }
        }
    }

    fn on_run_complete(&mut self, report: &RunReport) -> io::Result<()> {
        if self.summary {
            self.print_summary(report)?;
        }
        Ok(())
    }
}
