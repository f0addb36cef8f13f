use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ExportDotCommand,
    LabelCommand, ProblemsCommand, SolveCommand,
};
use anyhow::{anyhow, Context, Result};
use argtrust::{
    aa::{AAFramework, LabelType, Semantics},
    io::InstanceReader,
    utils::SearchBudget,
};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
    time::Duration,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Argtrust, a solver for abstract argumentation frameworks.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ExportDotCommand::new()),
        Box::new(LabelCommand::new()),
        Box::new(ProblemsCommand::new()),
        Box::new(SolveCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the AF (Aspartix format)")
        .required(true)
}

pub(crate) const ARG_PROBLEM: &str = "PROBLEM";
pub(crate) const ARG_ARG: &str = "ARG";

pub(crate) fn problem_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_PROBLEM)
            .short("p")
            .empty_values(false)
            .multiple(false)
            .help("the problem to solve")
            .required(true),
        Arg::with_name(ARG_ARG)
            .short("a")
            .empty_values(false)
            .multiple(false)
            .help("the argument (for DC/DS queries)")
            .required(false),
    ]
}

pub(crate) const ARG_SEMANTICS: &str = "SEMANTICS";

pub(crate) fn semantics_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_SEMANTICS)
        .short("s")
        .long("semantics")
        .empty_values(false)
        .multiple(false)
        .help("the semantics (CO, GR, PR, SST or ST)")
        .required(false)
}

/// Reads the semantics given by the user, if any.
pub(crate) fn read_semantics(arg_matches: &ArgMatches<'_>) -> Result<Option<Semantics>> {
    arg_matches
        .value_of(ARG_SEMANTICS)
        .map(|s| Semantics::try_from(s))
        .transpose()
}

const ARG_TIMEOUT: &str = "TIMEOUT";
const ARG_MAX_CANDIDATES: &str = "MAX_CANDIDATES";

pub(crate) fn budget_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_TIMEOUT)
            .long("timeout")
            .empty_values(false)
            .multiple(false)
            .help("the maximal search time, in seconds")
            .required(false),
        Arg::with_name(ARG_MAX_CANDIDATES)
            .long("max-candidates")
            .empty_values(false)
            .multiple(false)
            .help("the maximal number of candidate sets to check")
            .required(false),
    ]
}

/// Builds the search budget given by the user.
pub(crate) fn read_search_budget(arg_matches: &ArgMatches<'_>) -> Result<SearchBudget> {
    let mut budget = SearchBudget::unlimited();
    if let Some(s) = arg_matches.value_of(ARG_TIMEOUT) {
        let timeout = s
            .parse::<f64>()
            .map_err(anyhow::Error::from)
            .and_then(|t| Duration::try_from_secs_f64(t).map_err(anyhow::Error::from))
            .with_context(|| format!(r#"invalid timeout "{}""#, s))?;
        info!("setting the search timeout to {}s", timeout.as_secs_f64());
        budget = budget.with_timeout(timeout);
    }
    if let Some(s) = arg_matches.value_of(ARG_MAX_CANDIDATES) {
        let n = s
            .parse::<usize>()
            .with_context(|| format!(r#"invalid number of candidates "{}""#, s))?;
        info!("setting the maximal number of candidates to {}", n);
        budget = budget.with_max_candidates(n);
    }
    Ok(budget)
}

pub(crate) fn read_file_path<T>(
    file_path: &str,
    reader: &mut dyn InstanceReader<T>,
) -> Result<AAFramework<T>>
where
    T: LabelType,
{
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let file = File::open(&canonicalized)
        .with_context(|| format!(r#"while opening file "{}""#, file_path))?;
    let af = reader
        .read(&mut BufReader::new(file))
        .with_context(|| format!(r#"while reading file "{}""#, file_path))?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    Ok(af)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
