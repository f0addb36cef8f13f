use crate::aa::{AAFramework, LabelType};
use crate::utils::{Label, Labelling};
use anyhow::{anyhow, Context, Result};
use std::io::Write;

/// A writer exporting AFs to the Graphviz DOT language.
///
/// Each argument is a node and each attack is an edge.
/// If a labelling is given, the nodes are filled according to the label of their argument:
/// green for accepted ones, red for rejected ones and grey for undecided ones.
///
/// # Example
///
/// ```
/// # use argtrust::aa::AAFramework;
/// # use argtrust::io::DotWriter;
/// let af = AAFramework::new(["a", "b"], [("a", "b")]).unwrap();
/// let mut buffer = Vec::new();
/// DotWriter::default().write_framework(&af, None, &mut buffer).unwrap();
/// assert_eq!(
///     "digraph af {\n    \"a\";\n    \"b\";\n    \"a\" -> \"b\";\n}\n",
///     String::from_utf8(buffer).unwrap()
/// );
/// ```
#[derive(Default)]
pub struct DotWriter {}

fn node_name<T: LabelType>(label: &T) -> String {
    format!("\"{}\"", label.to_string().replace('\\', "\\\\").replace('"', "\\\""))
}

fn fill_color(label: Label) -> &'static str {
    match label {
        Label::In => "green",
        Label::Out => "red",
        Label::Undecided => "grey",
    }
}

impl DotWriter {
    /// Writes a framework, optionally colored by a labelling, to the provided writer.
    ///
    /// An error is returned if the labelling does not come from this framework.
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        labelling: Option<&Labelling>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing an AF in the DOT format";
        writeln!(writer, "digraph af {{").context(context)?;
        for arg in framework.argument_set().iter() {
            match labelling {
                None => writeln!(writer, "    {};", node_name(arg.label())).context(context)?,
                Some(l) => {
                    let label = l
                        .label_of(arg)
                        .ok_or_else(|| anyhow!("the labelling does not match the AF"))
                        .context(context)?;
                    writeln!(
                        writer,
                        "    {} [style=filled, fillcolor={}];",
                        node_name(arg.label()),
                        fill_color(label)
                    )
                    .context(context)?
                }
            }
        }
        for attack in framework.iter_attacks() {
            writeln!(
                writer,
                "    {} -> {};",
                node_name(attack.attacker().label()),
                node_name(attack.attacked().label())
            )
            .context(context)?;
        }
        writeln!(writer, "}}").context(context)?;
        writer.flush().context(context)
    }
}
