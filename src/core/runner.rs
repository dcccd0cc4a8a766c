//! # Test Runner Module / 测试运行器模块
//!
//! Executes every unit of a suite exactly once, in registration order, and
//! isolates each unit's failure from the others. A unit fails when its body
//! returns an error or panics; either way the failure is counted, reported,
//! and the run moves on to the next unit.
//!
//! 按注册顺序将测试套件中的每个单元恰好执行一次，并将各单元的失败相互隔离。
//! 当单元体返回错误或发生 panic 时视为失败；无论哪种情况，
//! 失败都会被计数和报告，然后继续运行下一个单元。
//!
//! There is no timeout: a unit that never returns stalls the run.
//! 没有超时机制：永不返回的单元会使整个运行停滞。

use std::any::Any;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use std::time::Instant;
use tracing::{debug, debug_span, warn};

use crate::core::config::RunnerConfig;
use crate::core::models::{Outcome, RunReport};
use crate::core::suite::{TestBody, TestSuite};
use crate::reporting::{Reporter, StreamReporter};

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Runs every unit of `suite` and hands each outcome to `reporter` as soon as
/// the unit finishes. Consumes the suite: once a run starts nothing can be
/// registered into it, and it cannot be run a second time.
///
/// 运行 `suite` 中的每个单元，并在单元结束后立即将结果交给 `reporter`。
/// 此函数会消耗测试套件：运行开始后无法再注册，也无法再次运行。
///
/// # Arguments / 参数
/// * `suite` - The units to run / 要运行的单元
/// * `reporter` - Receives every outcome and the final report / 接收每个结果和最终报告
///
/// # Returns / 返回值
/// The aggregate `RunReport`; its `failed` count decides the exit status.
/// 汇总的 `RunReport`；其中的 `failed` 计数决定退出状态。
pub fn run_suite<R: Reporter>(suite: TestSuite, mut reporter: R) -> RunReport {
    let started = Instant::now();
    let mut report = RunReport::default();

    {
        let _quiet = QuietPanics::install();
        for unit in suite.into_units() {
            let (name, body) = unit.into_parts();
            let span = debug_span!("test_unit", name = %name);
            let _entered = span.enter();

            let unit_started = Instant::now();
            let outcome = execute(body);
            debug!(
                elapsed = ?unit_started.elapsed(),
                passed = outcome.is_pass(),
                "test unit finished"
            );

            report.record(&outcome);
            if let Err(e) = reporter.on_test_complete(&name, &outcome) {
                warn!(error = %e, "failed to report test outcome");
            }
        }
    }

    report.duration = started.elapsed();
    if let Err(e) = reporter.on_run_complete(&report) {
        warn!(error = %e, "failed to report run summary");
    }
    report
}

/// Runs `suite` against the process stdout and stderr.
/// 针对进程的 stdout 和 stderr 运行 `suite`。
pub fn run_suite_with_console(suite: TestSuite, config: &RunnerConfig) -> RunReport {
    run_suite(suite, StreamReporter::console(config))
}

/// Executes one unit body inside a panic boundary and maps the result to an `Outcome`.
/// Error messages include the full `anyhow` context chain.
///
/// 在 panic 边界内执行一个单元体，并将结果映射为 `Outcome`。
pub fn execute(body: TestBody) -> Outcome {
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(())) => Outcome::Pass,
        Ok(Err(e)) => Outcome::Fail(format!("{:#}", e)),
        Err(payload) => Outcome::Fail(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "test body panicked".to_string()
    }
}

/// Silences the panic hook on the running thread for as long as it lives.
/// Panics on other threads still reach the previous hook.
///
/// 在其存活期间屏蔽当前运行线程上的 panic 钩子。
/// 其他线程上的 panic 仍会交给之前的钩子处理。
///
/// The hook is process-global. Runs on parallel threads install and restore
/// it in whatever order they finish: a run still in progress can lose its
/// silencing, and a finished run can leave behind a hook that silences its
/// own, already finished, thread. Only panic output is affected;
/// outcomes and result lines never depend on the hook.
///
/// 钩子是进程全局的。并行线程上的运行会按各自结束的顺序安装和恢复钩子，
/// 因此仍在进行的运行可能失去屏蔽，已结束的运行也可能留下屏蔽其已结束线程的钩子。
/// 这只影响 panic 输出；结果和结果行从不依赖该钩子。
struct QuietPanics {
    previous: Arc<PanicHook>,
}

impl QuietPanics {
    fn install() -> Self {
        let runner: ThreadId = thread::current().id();
        let previous: Arc<PanicHook> = Arc::new(panic::take_hook());
        let forward = Arc::clone(&previous);
        panic::set_hook(Box::new(move |info| {
            if thread::current().id() != runner {
                (**forward)(info);
            }
        }));
        Self { previous }
    }
}

impl Drop for QuietPanics {
    fn drop(&mut self) {
        if thread::panicking() {
            return;
        }
        let previous = Arc::clone(&self.previous);
        panic::set_hook(Box::new(move |info| (**previous)(info)));
    }
}
