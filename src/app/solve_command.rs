use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use argtrust::{
    aa::{read_problem_string, AAFramework, Argument, Query},
    io::{AspartixReader, AspartixWriter, InstanceReader, ResponseWriter},
    solvers::{
        new_extension_enumerator, CredulousAcceptanceComputer, ExtensionEnumerator,
        SingleExtensionComputer, SkepticalAcceptanceComputer,
    },
};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::{info, warn};

const CMD_NAME: &str = "solve";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .args(&common::problem_args())
            .args(&common::budget_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .ok_or_else(|| anyhow!("missing input file"))?;
        let mut reader = AspartixReader::default();
        let af = common::read_file_path(file, &mut reader)?;
        let arg = arg_matches
            .value_of(common::ARG_ARG)
            .map(|a| reader.read_arg_from_str(&af, a))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        let problem = arg_matches
            .value_of(common::ARG_PROBLEM)
            .ok_or_else(|| anyhow!("missing problem"))?;
        let (query, semantics) = read_problem_string(problem)?;
        let arg = check_arg_definition(query, arg)?;
        let budget = common::read_search_budget(arg_matches)?;
        info!("solving {}", problem);
        let solver = new_extension_enumerator(&af, semantics, budget);
        let writer = AspartixWriter::default();
        let mut out = std::io::stdout();
        match (query, arg) {
            (Query::EE, _) => {
                let extensions = solver.enumerate_extensions()?;
                info!("found {} extension(s)", extensions.len());
                let extension_args = extensions
                    .iter()
                    .map(|ext| af.subset_arguments(ext))
                    .collect::<Result<Vec<_>, _>>()?;
                ResponseWriter::<String>::write_extensions(&writer, &mut out, &extension_args)
            }
            (Query::SE, _) => match solver.compute_one_extension()? {
                Some(ext) => ResponseWriter::<String>::write_single_extension(
                    &writer,
                    &mut out,
                    &af.subset_arguments(&ext)?,
                ),
                None => ResponseWriter::<String>::write_no_extension(&writer, &mut out),
            },
            (Query::DC, Some(a)) => {
                let (status, certificate) = solver.is_credulously_accepted_with_certificate(a)?;
                log_certificate(&af, certificate.as_ref())?;
                ResponseWriter::<String>::write_acceptance_status(&writer, &mut out, status)
            }
            (Query::DS, Some(a)) => {
                let (status, certificate) = solver.is_skeptically_accepted_with_certificate(a)?;
                log_certificate(&af, certificate.as_ref())?;
                ResponseWriter::<String>::write_acceptance_status(&writer, &mut out, status)
            }
            (_, None) => Err(anyhow!("missing argument")),
        }
    }
}

fn check_arg_definition(
    query: Query,
    arg: Option<&Argument<String>>,
) -> Result<Option<&Argument<String>>> {
    if query.needs_argument() {
        if arg.is_none() {
            return Err(anyhow!(
                "missing argument on the command line (required for query {})",
                query.as_ref()
            ));
        }
    } else if arg.is_some() {
        warn!(
            "unexpected argument on the command line (useless for query {})",
            query.as_ref()
        );
    }
    Ok(arg)
}

fn log_certificate(
    af: &AAFramework<String>,
    certificate: Option<&argtrust::aa::ArgumentSubset>,
) -> Result<()> {
    if let Some(c) = certificate {
        let labels = af
            .subset_arguments(c)?
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>();
        info!("certificate: [{}]", labels.join(","));
    }
    Ok(())
}
