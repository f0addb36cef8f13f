use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Result};
use argtrust::{
    io::{AspartixReader, DotWriter},
    solvers::{new_extension_enumerator, SingleExtensionComputer},
    utils::Labelling,
};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::{info, warn};

const CMD_NAME: &str = "export-dot";

pub(crate) struct ExportDotCommand;

impl ExportDotCommand {
    pub(crate) fn new() -> Self {
        ExportDotCommand
    }
}

impl<'a> Command<'a> for ExportDotCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Exports an AF to the DOT format, optionally colored by an extension")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::semantics_arg())
            .args(&common::budget_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .ok_or_else(|| anyhow!("missing input file"))?;
        let af = common::read_file_path(file, &mut AspartixReader::default())?;
        let labelling = match common::read_semantics(arg_matches)? {
            Some(semantics) => {
                let budget = common::read_search_budget(arg_matches)?;
                let solver = new_extension_enumerator(&af, semantics, budget);
                match solver.compute_one_extension()? {
                    Some(ext) => Some(Labelling::from_in_set(&af, &ext)?),
                    None => {
                        warn!(
                            "no extension for the {} semantics; arguments are not colored",
                            semantics.as_ref()
                        );
                        None
                    }
                }
            }
            None => None,
        };
        info!("writing the AF in the DOT format");
        DotWriter::default().write_framework(&af, labelling.as_ref(), &mut std::io::stdout())
    }
}
