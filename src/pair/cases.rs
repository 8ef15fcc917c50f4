//! 示例用例：命名输入、期望结果与批量运行报告.
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::pair::finder::{find_pair, Pair, Value};

/// A named invocation of the pair search together with its documented
/// expected result. `expect: None` means the case expects "not found".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    pub values: Vec<Value>,
    pub target: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<Pair>,
}

impl Case {
    pub fn new(
        name: impl Into<String>,
        values: Vec<Value>,
        target: Value,
        expect: Option<Pair>,
    ) -> Self {
        Self {
            name: name.into(),
            values,
            target,
            expect,
        }
    }

    /// Loads a JSON array of cases from `path`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Case>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read case file: {:?}", path))?;
        let cases: Vec<Case> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse case file: {:?}", path))?;
        Ok(cases)
    }
}

/// Result of running a single [`Case`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub name: String,
    pub found: Option<Pair>,
    pub expect: Option<Pair>,
    pub matched: bool,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let found = match self.found {
            Some(pair) => pair.to_string(),
            None => "not found".to_string(),
        };
        match (self.matched, self.expect) {
            (true, _) => write!(f, "[ok]   {}: {}", self.name, found),
            (false, Some(expect)) => {
                write!(f, "[FAIL] {}: {} (expected {})", self.name, found, expect)
            }
            (false, None) => write!(f, "[FAIL] {}: {} (expected not found)", self.name, found),
        }
    }
}

/// Aggregate report over a batch of cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
    pub passed: usize,
    pub failed: usize,
}

impl Report {
    pub fn from_outcomes(outcomes: Vec<Outcome>) -> Self {
        let passed = outcomes.iter().filter(|o| o.matched).count();
        let failed = outcomes.len() - passed;
        Self {
            outcomes,
            passed,
            failed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        write!(f, "{} passed, {} failed", self.passed, self.failed)
    }
}

/// Runs every case and compares against its expectation where present.
pub fn run_cases(cases: &[Case]) -> Report {
    let outcomes = cases
        .iter()
        .map(|case| {
            let found = find_pair(&case.values, case.target);
            let matched = found == case.expect;
            debug!(
                "case {}: found {:?}, expected {:?}",
                case.name, found, case.expect
            );
            Outcome {
                name: case.name.clone(),
                found,
                expect: case.expect,
                matched,
            }
        })
        .collect();
    Report::from_outcomes(outcomes)
}

/// The invocations shipped with the original problem statement.
pub fn builtin_cases() -> Vec<Case> {
    vec![
        Case::new("classic", vec![2, 7, 11, 15], 9, Some(Pair::new(0, 1))),
        Case::new("later-pair", vec![3, 2, 4], 6, Some(Pair::new(1, 2))),
        Case::new("duplicates", vec![3, 3], 6, Some(Pair::new(0, 1))),
        Case::new("not-found", vec![1, 2, 3], 100, None),
        Case::new("empty", vec![], 5, None),
        Case::new("single", vec![5], 10, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_cases_all_pass() {
        let report = run_cases(&builtin_cases());
        assert_eq!(report.failed, 0);
        assert_eq!(report.passed, 6);
        assert!(report.all_passed());
    }

    #[test]
    fn mismatched_expectation_is_reported() {
        let cases = vec![Case::new("wrong", vec![2, 7], 9, Some(Pair::new(1, 0)))];
        let report = run_cases(&cases);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
        assert_eq!(report.outcomes[0].found, Some(Pair::new(0, 1)));
    }

    #[test]
    fn absent_expectation_means_not_found() {
        let cases = vec![
            Case::new("really-absent", vec![1, 2, 3], 100, None),
            Case::new("unexpected-hit", vec![1, 2], 3, None),
        ];
        let report = run_cases(&cases);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn case_json_round_trip_keeps_expectation() {
        let cases = builtin_cases();
        let json = serde_json::to_string(&cases).unwrap();
        let back: Vec<Case> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), cases.len());
        assert_eq!(back[0].expect, Some(Pair::new(0, 1)));
        assert_eq!(back[4].expect, None);
    }

    #[test]
    fn case_file_omitting_expect_parses() {
        let json = r#"[{"name": "minimal", "values": [1, 2, 3], "target": 100}]"#;
        let cases: Vec<Case> = serde_json::from_str(json).unwrap();
        assert_eq!(cases[0].expect, None);
        assert!(run_cases(&cases).all_passed());
    }
}
