//! # Test Registry Module / 测试注册表模块
//!
//! A `TestSuite` accumulates named test units before any of them runs.
//! Registration order is execution order. Running a suite consumes it, so
//! the registration phase and the execution phase can never interleave.
//!
//! `TestSuite` 在任何测试运行之前收集具名的测试单元。
//! 注册顺序即执行顺序。运行测试套件会消耗它，
//! 因此注册阶段和执行阶段永远不会交错。

use std::fmt;

/// The body of a test unit: a zero-argument action that either completes or
/// fails with an error. Any error type convertible into `anyhow::Error`,
/// including `AssertionError`, can be propagated with `?`.
///
/// 测试单元的主体：一个无参数的动作，要么正常完成，要么以错误失败。
pub type TestBody = Box<dyn FnOnce() -> anyhow::Result<()>>;

/// A named, self-contained action whose execution produces a pass/fail outcome.
/// 一个具名的、自包含的动作，其执行产生通过/失败结果。
pub struct TestUnit {
    name: String,
    body: TestBody,
}

impl TestUnit {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Splits the unit into its name and body for execution.
    pub(crate) fn into_parts(self) -> (String, TestBody) {
        (self.name, self.body)
    }
}

impl fmt::Debug for TestUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestUnit")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An ordered collection of test units awaiting execution.
/// Several suites can live in one process; each owns its own units.
///
/// 等待执行的有序测试单元集合。
/// 一个进程中可以存在多个测试套件，每个套件拥有自己的测试单元。
#[derive(Debug, Default)]
pub struct TestSuite {
    units: Vec<TestUnit>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a test unit. Duplicate names are allowed; every registered
    /// unit runs and is reported on its own.
    ///
    /// 追加一个测试单元。允许重复名称；每个注册的单元都会单独运行和报告。
    ///
    /// # Panics / 恐慌
    /// Panics if `name` is empty. This happens during registration, outside
    /// the runner's isolation boundary, and aborts the whole program.
    ///
    /// 如果 `name` 为空则 panic。这发生在注册阶段，不受运行器隔离保护。
    pub fn register<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
    where
        F: FnOnce() -> anyhow::Result<()> + 'static,
    {
        let name = name.into();
        assert!(!name.is_empty(), "test unit name must not be empty");
        self.units.push(TestUnit {
            name,
            body: Box::new(body),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Names of the registered units, in registration order.
    /// 已注册单元的名称，按注册顺序排列。
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(TestUnit::name)
    }

    pub(crate) fn into_units(self) -> Vec<TestUnit> {
        self.units
    }
}
