use std::process::ExitCode;
use tracing::Level;
use unit_harness::{RunnerConfig, TestSuite, demo, run_suite_with_console};

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only PASS lines.
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .try_init();

    // Registration phase
    let mut suite = TestSuite::new();
    demo::register_examples(&mut suite);

    // Execution phase
    let report = run_suite_with_console(suite, &RunnerConfig::default());
    report.exit_code()
}
