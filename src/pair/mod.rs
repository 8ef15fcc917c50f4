//! # 两数之和配对查找（Pair Sum）
//!
//! 设整数序列 `V = v_0, v_1, …, v_{n-1}` 与目标值 `t`。查找满足
//! `j < i` 且 `v_j + v_i = t` 的下标对 `(j, i)`，其中 `i` 取扫描过程中
//! 最先完成配对的位置。
//!
//! 单趟从左到右扫描，维护「已见值 → 最早下标」映射：处理下标 `i` 时，
//! 映射恰好包含 `0..i` 范围内所有值及其最早出现位置。对每个 `v_i`
//! 先查补数 `t - v_i`，命中即返回；否则仅在 `v_i` 尚未出现时记录
//! `v_i ↦ i`（首次出现优先，重复值不覆盖）。时间 O(n)，空间 O(n)。
//!
//! 同一下标不会与自身配对；扫描结束无命中时返回 `None`，这是正常
//! 结果而非错误。
//!
//! ## 示例
//!
//! ```rust
//! use pairsum::pair::*;
//!
//! let pair = find_pair(&[2, 7, 11, 15], 9).unwrap();
//! assert_eq!((pair.first, pair.second), (0, 1));
//!
//! assert_eq!(find_pair(&[1, 2, 3], 100), None);
//! ```

pub mod cases;
pub mod finder;
pub mod io;

pub use cases::{builtin_cases, run_cases, Case, Outcome, Report};
pub use finder::{find_pair, Pair, Value};
pub use io::IoError;
