#![warn(non_snake_case)]

pub mod pair;

pub use pair::cases::{builtin_cases, run_cases, Case, Outcome, Report};
pub use pair::finder::{find_pair, Pair, Value};
