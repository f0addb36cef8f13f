use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use argtrust::{
    aa::{AAFramework, ArgumentSubset, Semantics},
    io::{AspartixReader, AspartixWriter, ResponseWriter},
    solvers::{new_extension_enumerator, SingleExtensionComputer},
    utils::{Label, Labelling, SearchBudget},
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, warn};

const CMD_NAME: &str = "label";

const ARG_IN_SET: &str = "IN_SET";

pub(crate) struct LabelCommand;

impl LabelCommand {
    pub(crate) fn new() -> Self {
        LabelCommand
    }
}

impl<'a> Command<'a> for LabelCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Labels the arguments as in, out or undecided")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::semantics_arg().conflicts_with(ARG_IN_SET))
            .arg(
                Arg::with_name(ARG_IN_SET)
                    .long("in")
                    .takes_value(true)
                    .multiple(false)
                    .help("the comma-separated arguments labelled in (default: grounded extension)")
                    .required(false),
            )
            .args(&common::budget_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .ok_or_else(|| anyhow!("missing input file"))?;
        let af = common::read_file_path(file, &mut AspartixReader::default())?;
        let writer = AspartixWriter::default();
        let mut out = std::io::stdout();
        let in_set = match arg_matches.value_of(ARG_IN_SET) {
            Some(s) => Some(read_in_set(&af, s)?),
            None => {
                let semantics = common::read_semantics(arg_matches)?.unwrap_or(Semantics::GR);
                let budget = common::read_search_budget(arg_matches)?;
                labelling_extension(&af, semantics, budget)?
            }
        };
        let in_set = match in_set {
            Some(s) => s,
            None => return ResponseWriter::<String>::write_no_extension(&writer, &mut out),
        };
        let labelling = Labelling::from_in_set(&af, &in_set)?;
        if labelling.is_legal(&af)? {
            info!("the labelling is a complete labelling");
        } else {
            warn!("the labelling is not a complete labelling");
        }
        let labels = af
            .argument_set()
            .iter()
            .map(|a| (a, labelling.label_of(a).unwrap_or(Label::Undecided)))
            .collect::<Vec<_>>();
        writer.write_labelling(&mut out, &labels)
    }
}

fn read_in_set(af: &AAFramework<String>, s: &str) -> Result<ArgumentSubset> {
    let labels = s
        .split(',')
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect::<Vec<String>>();
    af.subset_from_labels(&labels)
        .with_context(|| format!(r#"while reading the set of arguments "{}""#, s))
}

fn labelling_extension(
    af: &AAFramework<String>,
    semantics: Semantics,
    budget: SearchBudget,
) -> Result<Option<ArgumentSubset>> {
    info!("labelling with an extension of the {} semantics", semantics.as_ref());
    let solver = new_extension_enumerator(af, semantics, budget);
    Ok(solver.compute_one_extension()?)
}
