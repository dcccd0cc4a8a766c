//! # Demo Module / 示例模块
//!
//! Sample code under test plus the four example units the binary runs:
//! a unit test, an integration test against a fake store, a regression test
//! against a golden CSV, and an idempotence test. Nothing in the harness
//! depends on this module.
//!
//! 被测示例代码以及二进制程序运行的四个示例单元：
//! 单元测试、针对假存储的集成测试、针对黄金 CSV 的回归测试以及幂等性测试。
//! 测试框架本身不依赖此模块。

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::collections::HashMap;

use crate::core::assertions::{assert_deep_equal, assert_equal};
use crate::core::suite::TestSuite;

/// The CSV used by every example unit.
pub const GOLDEN_CSV: &str = "id,name,price\n1,Milk,10\n2,Cheese,20";

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Splits CSV text into trimmed cells. No quoting support.
/// 将 CSV 文本拆分为去除空白的单元格。不支持引号。
pub fn parse_csv(csv: &str) -> Vec<Vec<String>> {
    csv.trim()
        .split('\n')
        .map(|line| line.split(',').map(|cell| cell.trim().to_string()).collect())
        .collect()
}

/// A product row mapped from one CSV line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Maps CSV text to product rows. The first line is the header; the `id`,
/// `name` and `price` columns are located by name.
///
/// 将 CSV 文本映射为产品行。第一行是表头；`id`、`name` 和 `price` 列按名称定位。
pub fn to_product_rows(csv: &str) -> Result<Vec<ProductRow>> {
    let rows = parse_csv(csv);
    let (header, body) = rows
        .split_first()
        .ok_or_else(|| anyhow!("CSV has no header row"))?;

    let column = |name: &str| {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow!("CSV header has no `{}` column", name))
    };
    let (id_col, name_col, price_col) = (column("id")?, column("name")?, column("price")?);

    body.iter()
        .enumerate()
        .map(|(i, row)| -> Result<ProductRow> {
            let line = i + 2;
            let cell = |col: usize, name: &str| {
                row.get(col)
                    .ok_or_else(|| anyhow!("line {} has no `{}` cell", line, name))
            };
            let price = cell(price_col, "price")?;
            Ok(ProductRow {
                id: cell(id_col, "id")?.clone(),
                name: cell(name_col, "name")?.clone(),
                price: price
                    .parse()
                    .with_context(|| format!("line {}: invalid price `{}`", line, price))?,
            })
        })
        .collect()
}

/// An in-memory store with upsert-by-id semantics.
/// Rows keep the position of their first insertion.
///
/// 一个按 id 进行 upsert 的内存存储。行保持其首次插入时的位置。
#[derive(Debug, Default)]
pub struct FakeDb {
    rows: Vec<ProductRow>,
    index: HashMap<String, usize>,
}

impl FakeDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, row: ProductRow) {
        match self.index.get(&row.id) {
            Some(&pos) => self.rows[pos] = row,
            None => {
                self.index.insert(row.id.clone(), self.rows.len());
                self.rows.push(row);
            }
        }
    }

    pub fn all(&self) -> Vec<ProductRow> {
        self.rows.clone()
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// Imports every row of `csv` into `db` and returns the number of rows read.
pub fn import_products(csv: &str, db: &mut FakeDb) -> Result<usize> {
    let rows = to_product_rows(csv)?;
    let count = rows.len();
    for row in rows {
        db.upsert(row);
    }
    Ok(count)
}

/// Registers the four example units in their canonical order.
/// 按规范顺序注册四个示例单元。
pub fn register_examples(suite: &mut TestSuite) {
    suite
        .register("unit: add(2, 2) returns 4", || {
            assert_equal(add(2, 2), 4, Some("2 + 2 should be 4"))?;
            Ok(())
        })
        .register("integration: import writes rows to db", || {
            let mut db = FakeDb::new();
            let imported = import_products(GOLDEN_CSV, &mut db)?;
            assert_equal(imported, 2, Some("Should import 2 rows"))?;
            assert_equal(db.count(), 2, Some("DB should contain 2 rows"))?;
            Ok(())
        })
        .register("regression: golden csv matches expected rows", || {
            let expected = vec![
                ProductRow {
                    id: "1".to_string(),
                    name: "Milk".to_string(),
                    price: 10.0,
                },
                ProductRow {
                    id: "2".to_string(),
                    name: "Cheese".to_string(),
                    price: 20.0,
                },
            ];
            let actual = to_product_rows(GOLDEN_CSV)?;
            assert_deep_equal(&actual, &expected, Some("Golden output should match expected"))?;
            Ok(())
        })
        .register("idempotence: import can run twice without duplicates", || {
            let mut db = FakeDb::new();
            import_products(GOLDEN_CSV, &mut db)?;
            let first = db.all();
            import_products(GOLDEN_CSV, &mut db)?;
            let second = db.all();
            assert_equal(db.count(), 2, Some("Row count should remain 2 after second run"))?;
            assert_deep_equal(&second, &first, Some("Data should be unchanged after second run"))?;
            Ok(())
        });
}
