//! 核心查找：单趟扫描 + 「值 → 最早下标」哈希映射.
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Element type of the input sequence.
pub type Value = i64;

/// An ordered pair of distinct positions whose values sum to the target.
///
/// Invariant: `first < second`, and for the sequence the pair was found in,
/// `values[first] + values[second] == target`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub first: usize,
    pub second: usize,
}

impl Pair {
    pub const fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    pub const fn as_tuple(self) -> (usize, usize) {
        (self.first, self.second)
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair({}, {})", self.first, self.second)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Finds the first pair of positions `(j, i)` with `j < i` and
/// `values[j] + values[i] == target`.
///
/// Single left-to-right pass; at the moment position `i` is processed the
/// map holds exactly the values of `values[..i]` keyed to their earliest
/// index. The returned pair is the earliest-completing one: the first hit
/// in scan order of the second index. `None` means no pair sums to the
/// target, which is a valid outcome rather than an error.
///
/// A complement `target - v` that is not representable in [`Value`] cannot
/// be matched by any element, so it is skipped instead of overflowing.
///
/// ```rust
/// use pairsum::pair::finder::find_pair;
///
/// assert_eq!(find_pair(&[3, 2, 4], 6).unwrap().as_tuple(), (1, 2));
/// assert_eq!(find_pair(&[], 5), None);
/// ```
pub fn find_pair(values: &[Value], target: Value) -> Option<Pair> {
    let mut seen: HashMap<Value, usize> = HashMap::with_capacity(values.len());

    for (i, &v) in values.iter().enumerate() {
        if let Some(complement) = target.checked_sub(v) {
            if let Some(&j) = seen.get(&complement) {
                return Some(Pair::new(j, i));
            }
        }
        // 首次出现优先: 重复值不覆盖更早的下标
        seen.entry(v).or_insert(i);
    }

    None
}
