use anyhow::Result;
use clap::{App, ArgMatches};

/// A subcommand of the application.
///
/// A command describes its own CLI arguments with clap, and runs itself given the arguments it received.
/// The names of the commands registered in an [`AppHelper`](super::app_helper::AppHelper) must be unique.
pub(crate) trait Command<'a> {
    /// Returns the name of the command, as typed on the command line.
    fn name(&self) -> &str;

    /// Returns the clap subcommand describing the CLI arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command given the arguments matched by clap.
    ///
    /// The application exits with a success status iff `Ok(())` is returned.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
