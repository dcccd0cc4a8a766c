// Shared test helpers for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use unit_harness::{Outcome, Reporter, RunReport, RunnerConfig, StreamReporter, TestSuite, run_suite};

/// An in-memory buffer that can be handed to a reporter and read afterwards.
#[derive(Clone, Default)]
pub struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("reporter wrote invalid UTF-8")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes to its own buffer and to a buffer shared by both streams, so the
/// interleaving of stdout and stderr lines can be checked.
#[derive(Clone)]
pub struct Tee {
    own: SharedBuf,
    all: SharedBuf,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.own.write_all(buf)?;
        self.all.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// What a captured run printed, split by stream and merged in write order.
pub struct CapturedRun {
    pub report: RunReport,
    pub out: String,
    pub err: String,
    pub combined: String,
}

impl CapturedRun {
    pub fn combined_lines(&self) -> Vec<&str> {
        self.combined.lines().collect()
    }
}

pub fn capture_run(suite: TestSuite) -> CapturedRun {
    capture_run_with(suite, &RunnerConfig::default())
}

pub fn capture_run_with(suite: TestSuite, config: &RunnerConfig) -> CapturedRun {
    let out = SharedBuf::default();
    let err = SharedBuf::default();
    let all = SharedBuf::default();
    let reporter = StreamReporter::with_config(
        Tee { own: out.clone(), all: all.clone() },
        Tee { own: err.clone(), all: all.clone() },
        config,
    );
    let report = run_suite(suite, reporter);
    CapturedRun {
        report,
        out: out.contents(),
        err: err.contents(),
        combined: all.contents(),
    }
}

/// Records every outcome it receives.
#[derive(Default)]
pub struct RecordingReporter {
    pub outcomes: Vec<(String, Outcome)>,
    pub final_report: Option<RunReport>,
}

impl Reporter for RecordingReporter {
    fn on_test_complete(&mut self, name: &str, outcome: &Outcome) -> io::Result<()> {
        self.outcomes.push((name.to_string(), outcome.clone()));
        Ok(())
    }

    fn on_run_complete(&mut self, report: &RunReport) -> io::Result<()> {
        self.final_report = Some(*report);
        Ok(())
    }
}

/// A reporter whose every write fails.
pub struct BrokenReporter {
    pub calls: usize,
}

impl Reporter for BrokenReporter {
    fn on_test_complete(&mut self, _name: &str, _outcome: &Outcome) -> io::Result<()> {
        self.calls += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }

    fn on_run_complete(&mut self, _report: &RunReport) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }
}

/// A suite of `passing` always-passing units followed by `failing` always-failing ones.
pub fn mixed_suite(passing: usize, failing: usize) -> TestSuite {
    let mut suite = TestSuite::new();
    for i in 0..passing {
        suite.register(format!("pass-{}", i), || Ok(()));
    }
    for i in 0..failing {
        suite.register(format!("fail-{}", i), move || {
            anyhow::bail!("deliberate failure {}", i)
        });
    }
    suite
}
