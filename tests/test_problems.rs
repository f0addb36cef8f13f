use argtrust::aa::Query;
use assert_cmd::Command;
use predicates::{reflection::PredicateReflection, Predicate};
use std::fmt::Display;

struct CheckProblemsPredicate;

impl Display for CheckProblemsPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CheckProblemsPredicate")
    }
}

impl PredicateReflection for CheckProblemsPredicate {}

impl Predicate<[u8]> for CheckProblemsPredicate {
    fn eval(&self, content: &[u8]) -> bool {
        let str_content = match std::str::from_utf8(content) {
            Ok(s) => s,
            Err(_) => return false,
        };
        let inner = match str_content
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix("]\n"))
        {
            Some(s) => s,
            None => return false,
        };
        let mut actual_problems = inner.split(',').collect::<Vec<&str>>();
        actual_problems.sort_unstable();
        let mut expected_problems = Query::iter_problem_strings().collect::<Vec<String>>();
        expected_problems.sort_unstable();
        expected_problems == actual_problems
    }
}

#[test]
fn test_problems() {
    let mut cmd = Command::cargo_bin("argtrust").unwrap();
    cmd.arg("problems").arg("--logging-level").arg("off");
    cmd.assert().success().stdout(CheckProblemsPredicate);
}

#[test]
fn test_problem_count() {
    assert_eq!(20, Query::iter_problem_strings().count());
}
