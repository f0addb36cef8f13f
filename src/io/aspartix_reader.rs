use super::{InstanceReader, WarningHandler};
use crate::aa::{AAError, AAFramework, Argument};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\(([^()]+)\)\.\s*$").unwrap();
    static ref ATT_LINE_PATTERN: Regex =
        Regex::new(r"^\s*att\(([^(),]+),([^(),]+)\)\.\s*$").unwrap();
    static ref ARG_NAME_PATTERN: Regex = Regex::new(r"^[_[:alnum:]]+$").unwrap();
}

const SPACED_NAME_WARNING: &str = "argument names beginning or ending by spaces may be ambiguous";

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// % the Nixon diamond, and a third argument
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// All the arguments must be declared before the first attack.
/// Empty lines and lines beginning with `%` are ignored.
///
/// # Example
///
/// ```
/// # use argtrust::aa::AAFramework;
/// # use argtrust::io::{AspartixReader, InstanceReader};
/// fn read_af_from_str(s: &str) -> AAFramework<String> {
///     let reader = AspartixReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
/// }
/// # read_af_from_str("arg(a).");
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn warn(&self, line: usize, message: &str) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line, message.to_string()));
    }

    fn read_name(&self, line: usize, raw: &str) -> Result<String> {
        let name = raw.trim();
        if !ARG_NAME_PATTERN.is_match(name) {
            return Err(anyhow!(r#"invalid argument name "{}""#, name));
        }
        if name.len() != raw.len() {
            self.warn(line, SPACED_NAME_WARNING);
        }
        Ok(name.to_string())
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut arg_labels = Vec::new();
        let mut declared = HashSet::new();
        let mut attacks = Vec::new();
        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line_index = 1 + i;
            let context = || format!("while reading line {}", line_index);
            let l = line.with_context(context)?;
            let trimmed = l.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') {
                continue;
            }
            if let Some(c) = ARG_LINE_PATTERN.captures(trimmed) {
                if !attacks.is_empty() {
                    return Err(anyhow!("found an argument declaration after an attack"))
                        .with_context(context);
                }
                let name = self.read_name(line_index, &c[1]).with_context(context)?;
                if declared.insert(name.clone()) {
                    arg_labels.push(name);
                } else {
                    self.warn(line_index, &format!(r#"argument "{}" is declared twice"#, name));
                }
                continue;
            }
            if let Some(c) = ATT_LINE_PATTERN.captures(trimmed) {
                let attacker = self.read_name(line_index, &c[1]).with_context(context)?;
                let attacked = self.read_name(line_index, &c[2]).with_context(context)?;
                if let Some(undeclared) = [&attacker, &attacked]
                    .into_iter()
                    .find(|a| !declared.contains(*a))
                {
                    return Err(AAError::InvalidFramework(format!(
                        "attack ({},{}) references the undeclared argument {}",
                        attacker, attacked, undeclared
                    )))
                    .with_context(context);
                }
                attacks.push((attacker, attacked));
                continue;
            }
            return Err(anyhow!(r#"syntax error in line "{}""#, trimmed)).with_context(context);
        }
        let af = AAFramework::new(arg_labels, attacks)?;
        info!(
            "read an AF with {} arguments and {} attacks",
            af.n_arguments(),
            af.n_attacks()
        );
        Ok(af)
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        af.argument_by_label(&arg.to_string())
            .with_context(|| format!(r#"while looking for argument "{}""#, arg))
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
