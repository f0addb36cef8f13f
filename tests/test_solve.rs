use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::{
    prelude::{predicate, PredicateBooleanExt},
    BoxPredicate,
};

const INSTANCE: &str = r#"% a and b attack each other
arg(a).
arg(b).
arg(c).
arg(d).
att(a,b).
att(b,a).
att(b,c).
att(c,d).
"#;

const ODD_CYCLE: &str = r#"arg(a).
arg(b).
arg(c).
att(a,b).
att(b,c).
att(c,a).
"#;

fn run_with_instance(
    instance: &str,
    args: &[&str],
    possible_answers: &[&'static str],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("argtrust")?;
    cmd.arg(args[0])
        .arg("-f")
        .arg(file.path())
        .args(&args[1..])
        .arg("--logging-level")
        .arg("off");
    let mut pred: BoxPredicate<str> = BoxPredicate::new(predicate::never());
    for a in possible_answers {
        pred = BoxPredicate::new(pred.or(predicate::eq(*a)));
    }
    cmd.assert().success().stdout(pred);
    file.close()?;
    Ok(())
}

fn solve(
    problem: &str,
    arg: Option<&str>,
    answer: &'static str,
) -> Result<(), Box<dyn std::error::Error>> {
    solve_instance(INSTANCE, problem, arg, answer)
}

fn solve_instance(
    instance: &str,
    problem: &str,
    arg: Option<&str>,
    answer: &'static str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = vec!["solve", "-p", problem];
    if let Some(a) = arg {
        args.push("-a");
        args.push(a);
    }
    run_with_instance(instance, &args, &[answer])
}

fn failure_with_instance(instance: &str, args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("argtrust")?;
    cmd.arg(args[0])
        .arg("-f")
        .arg(file.path())
        .args(&args[1..])
        .arg("--logging-level")
        .arg("off");
    cmd.assert().failure().code(1);
    file.close()?;
    Ok(())
}

#[test]
fn test_enumerate_complete() -> Result<(), Box<dyn std::error::Error>> {
    solve("EE-CO", None, "[[],[a,c],[b,d]]\n")
}

#[test]
fn test_enumerate_grounded() -> Result<(), Box<dyn std::error::Error>> {
    solve("EE-GR", None, "[[]]\n")
}

#[test]
fn test_enumerate_preferred() -> Result<(), Box<dyn std::error::Error>> {
    solve("EE-PR", None, "[[a,c],[b,d]]\n")
}

#[test]
fn test_enumerate_semi_stable() -> Result<(), Box<dyn std::error::Error>> {
    solve("EE-SST", None, "[[a,c],[b,d]]\n")
}

#[test]
fn test_enumerate_stable() -> Result<(), Box<dyn std::error::Error>> {
    solve("EE-ST", None, "[[a,c],[b,d]]\n")
}

#[test]
fn test_lowercase_problem() -> Result<(), Box<dyn std::error::Error>> {
    solve("ee-pr", None, "[[a,c],[b,d]]\n")
}

#[test]
fn test_single_extension() -> Result<(), Box<dyn std::error::Error>> {
    solve("SE-GR", None, "[]\n")?;
    solve("SE-PR", None, "[a,c]\n")
}

#[test]
fn test_credulous_acceptance() -> Result<(), Box<dyn std::error::Error>> {
    solve("DC-PR", Some("a"), "YES\n")?;
    solve("DC-GR", Some("a"), "NO\n")?;
    solve("DC-ST", Some("d"), "YES\n")
}

#[test]
fn test_skeptical_acceptance() -> Result<(), Box<dyn std::error::Error>> {
    solve("DS-PR", Some("a"), "NO\n")?;
    solve("DS-CO", Some("c"), "NO\n")
}

#[test]
fn test_no_stable_extension() -> Result<(), Box<dyn std::error::Error>> {
    solve_instance(ODD_CYCLE, "EE-ST", None, "[]\n")?;
    solve_instance(ODD_CYCLE, "SE-ST", None, "NO\n")?;
    solve_instance(ODD_CYCLE, "DC-ST", Some("a"), "NO\n")?;
    solve_instance(ODD_CYCLE, "DS-ST", Some("a"), "YES\n")
}

#[test]
fn test_odd_cycle_preferred() -> Result<(), Box<dyn std::error::Error>> {
    solve_instance(ODD_CYCLE, "EE-PR", None, "[[]]\n")
}

#[test]
fn test_argument_ignored_for_enumeration() -> Result<(), Box<dyn std::error::Error>> {
    solve("EE-GR", Some("a"), "[[]]\n")
}

#[test]
fn test_missing_argument() -> Result<(), Box<dyn std::error::Error>> {
    failure_with_instance(INSTANCE, &["solve", "-p", "DC-PR"])
}

#[test]
fn test_unknown_argument() -> Result<(), Box<dyn std::error::Error>> {
    failure_with_instance(INSTANCE, &["solve", "-p", "DC-PR", "-a", "e"])
}

#[test]
fn test_unknown_problem() -> Result<(), Box<dyn std::error::Error>> {
    failure_with_instance(INSTANCE, &["solve", "-p", "EE-XX"])?;
    failure_with_instance(INSTANCE, &["solve", "-p", "EEPR"])
}

#[test]
fn test_candidate_limit() -> Result<(), Box<dyn std::error::Error>> {
    failure_with_instance(INSTANCE, &["solve", "-p", "EE-PR", "--max-candidates", "1"])?;
    solve_instance_with(&["solve", "-p", "EE-PR", "--max-candidates", "1000"])
}

fn solve_instance_with(args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    run_with_instance(INSTANCE, args, &["[[a,c],[b,d]]\n"])
}

#[test]
fn test_invalid_budget() -> Result<(), Box<dyn std::error::Error>> {
    failure_with_instance(INSTANCE, &["solve", "-p", "EE-PR", "--max-candidates", "-1"])?;
    failure_with_instance(INSTANCE, &["solve", "-p", "EE-PR", "--timeout", "soon"])?;
    failure_with_instance(INSTANCE, &["solve", "-p", "EE-PR", "--timeout", "-1"])?;
    failure_with_instance(INSTANCE, &["solve", "-p", "EE-PR", "--timeout", "inf"])?;
    failure_with_instance(INSTANCE, &["solve", "-p", "EE-PR", "--timeout", "1e20"])
}

#[test]
fn test_grounded_ignores_budget() -> Result<(), Box<dyn std::error::Error>> {
    run_with_instance(
        INSTANCE,
        &["solve", "-p", "EE-GR", "--max-candidates", "0"],
        &["[[]]\n"],
    )
}

#[test]
fn test_undeclared_argument_in_file() -> Result<(), Box<dyn std::error::Error>> {
    failure_with_instance("arg(a).\natt(a,b).\n", &["solve", "-p", "EE-GR"])?;
    failure_with_instance("arg(a).\natt(a,b).\n", &["check"])
}

#[test]
fn test_check() -> Result<(), Box<dyn std::error::Error>> {
    run_with_instance(INSTANCE, &["check"], &[""])
}

#[test]
fn test_missing_file() {
    let mut cmd = Command::cargo_bin("argtrust").unwrap();
    cmd.arg("check")
        .arg("-f")
        .arg("/does/not/exist.apx")
        .arg("--logging-level")
        .arg("off");
    cmd.assert().failure();
}

#[test]
fn test_label_default_grounded() -> Result<(), Box<dyn std::error::Error>> {
    run_with_instance(
        INSTANCE,
        &["label"],
        &["undec(a).\nundec(b).\nundec(c).\nundec(d).\n"],
    )
}

#[test]
fn test_label_in_set() -> Result<(), Box<dyn std::error::Error>> {
    run_with_instance(
        INSTANCE,
        &["label", "--in", "a,c"],
        &["in(a).\nout(b).\nin(c).\nout(d).\n"],
    )
}

#[test]
fn test_label_semantics() -> Result<(), Box<dyn std::error::Error>> {
    run_with_instance(
        INSTANCE,
        &["label", "-s", "PR"],
        &["in(a).\nout(b).\nin(c).\nout(d).\n"],
    )?;
    run_with_instance(ODD_CYCLE, &["label", "-s", "ST"], &["NO\n"])
}

#[test]
fn test_label_errors() -> Result<(), Box<dyn std::error::Error>> {
    failure_with_instance(INSTANCE, &["label", "--in", "a,e"])?;
    failure_with_instance(INSTANCE, &["label", "-s", "XX"])?;
    failure_with_instance(INSTANCE, &["label", "-s", "PR", "--in", "a"])
}

#[test]
fn test_export_dot() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str(INSTANCE)?;
    let mut cmd = Command::cargo_bin("argtrust")?;
    cmd.arg("export-dot")
        .arg("-f")
        .arg(file.path())
        .arg("--logging-level")
        .arg("off");
    cmd.assert().success().stdout(
        predicate::str::starts_with("digraph af {\n")
            .and(predicate::str::contains("    \"a\";\n"))
            .and(predicate::str::contains("    \"a\" -> \"b\";\n"))
            .and(predicate::str::contains("    \"c\" -> \"d\";\n"))
            .and(predicate::str::ends_with("}\n")),
    );
    file.close()?;
    Ok(())
}

#[test]
fn test_export_dot_with_semantics() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str(INSTANCE)?;
    let mut cmd = Command::cargo_bin("argtrust")?;
    cmd.arg("export-dot")
        .arg("-f")
        .arg(file.path())
        .arg("-s")
        .arg("ST")
        .arg("--logging-level")
        .arg("off");
    cmd.assert().success().stdout(
        predicate::str::contains("    \"a\" [style=filled, fillcolor=green];\n")
            .and(predicate::str::contains(
                "    \"b\" [style=filled, fillcolor=red];\n",
            ))
            .and(predicate::str::contains("    \"b\" -> \"c\";\n")),
    );
    file.close()?;
    Ok(())
}
