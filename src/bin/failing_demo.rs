//! Runs the example units followed by a regression unit fed a drifted CSV,
//! showing how a failing unit is reported and turned into exit status 1.
//!
//! 运行示例单元，随后运行一个输入了漂移 CSV 的回归单元，
//! 展示失败单元如何被报告并转换为退出状态 1。

use std::process::ExitCode;
use tracing::Level;
use unit_harness::demo::{self, ProductRow};
use unit_harness::{RunnerConfig, TestSuite, assert_deep_equal, run_suite_with_console};

const DRIFTED_CSV: &str = "id,name,price\n1,Milk,10\n2,Cheese,25";

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .try_init();

    let mut suite = TestSuite::new();
    demo::register_examples(&mut suite);
    suite.register("regression: drifted csv matches golden rows", || {
        let golden = demo::to_product_rows(demo::GOLDEN_CSV)?;
        let drifted: Vec<ProductRow> = demo::to_product_rows(DRIFTED_CSV)?;
        assert_deep_equal(&drifted, &golden, Some("Golden output should match expected"))?;
        Ok(())
    });

    run_suite_with_console(suite, &RunnerConfig::default()).exit_code()
}
