use super::ResponseWriter;
use crate::aa::{AAFramework, Argument, LabelType};
use crate::utils::Label;
use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::Write;

/// A writer for the Aspartix format.
///
/// This object is used to write an [`AAFramework`] using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html),
/// and the answers to the problems using the conventions of the ICCMA competitions.
///
/// # Example
///
/// The following example builds an AF and writes it to the standard output using the Aspartix format.
///
/// ```
/// # use argtrust::aa::{AAFramework, LabelType};
/// # use argtrust::io::AspartixWriter;
/// # use anyhow::Result;
/// fn write_af_to_stdout<T: LabelType>(af: &AAFramework<T>) -> Result<()> {
///     let writer = AspartixWriter::default();
///     writer.write_framework(&af, &mut std::io::stdout())
/// }
/// # write_af_to_stdout(&AAFramework::new(["a", "b"], [("a", "b")]).unwrap());
/// ```
#[derive(Default)]
pub struct AspartixWriter {}

impl AspartixWriter {
    /// Writes a framework using the Aspartix format to the provided writer.
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing an AF";
        for arg in framework.argument_set().iter() {
            writeln!(writer, "arg({}).", arg).context(context)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked()).context(context)?;
        }
        writer.flush().context(context)
    }
}

/// Displays a sequence as a bracketed comma-separated list, like `[a,b]`.
struct ListDisplay<I>(I);

impl<I> Display for ListDisplay<I>
where
    I: Iterator + Clone,
    I::Item: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.clone().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T> ResponseWriter<T> for AspartixWriter
where
    T: LabelType,
{
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        super::specs::write_no_extension(writer)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<T>],
    ) -> Result<()> {
        let context = "while writing an extension";
        writeln!(writer, "{}", ListDisplay(extension.iter())).context(context)?;
        writer.flush().context(context)
    }

    fn write_extensions(
        &self,
        writer: &mut dyn Write,
        extensions: &[Vec<&Argument<T>>],
    ) -> Result<()> {
        let context = "while writing a set of extensions";
        let nested = extensions.iter().map(|ext| ListDisplay(ext.iter()));
        writeln!(writer, "{}", ListDisplay(nested)).context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        super::specs::write_acceptance_status(writer, acceptance_status)
    }

    fn write_labelling(
        &self,
        writer: &mut dyn Write,
        labels: &[(&Argument<T>, Label)],
    ) -> Result<()> {
        let context = "while writing a labelling";
        for (arg, label) in labels {
            writeln!(writer, "{}({}).", label, arg).context(context)?;
        }
        writer.flush().context(context)
    }
}
