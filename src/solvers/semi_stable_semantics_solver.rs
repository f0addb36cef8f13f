use super::specs::ExtensionEnumerator;
use super::PreferredSemanticsSolver;
use crate::aa::{AAError, AAFramework, ExtensionSet, LabelType};
use crate::utils::SearchBudget;
use log::debug;

/// A solver for the semi-stable semantics.
///
/// The semi-stable extensions are computed from the preferred ones:
/// they are the preferred extensions whose range (the extension and the arguments it attacks) has the maximal cardinality.
/// All the preferred extensions reaching this maximal cardinality are kept.
pub struct SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    preferred_solver: PreferredSemanticsSolver<'a, T>,
}

impl<'a, T> SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the semi-stable semantics, with no search limit.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_budget(af, SearchBudget::unlimited())
    }

    /// Builds a new solver for the semi-stable semantics.
    ///
    /// The budget is given to the underlying preferred extensions search.
    pub fn new_with_budget(af: &'a AAFramework<T>, budget: SearchBudget) -> Self {
        Self {
            preferred_solver: PreferredSemanticsSolver::new_with_budget(af, budget),
        }
    }
}

impl<T> ExtensionEnumerator<T> for SemiStableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn framework(&self) -> &AAFramework<T> {
        self.preferred_solver.framework()
    }

    fn enumerate_extensions(&self) -> Result<ExtensionSet, AAError> {
        let af = self.framework();
        let with_range_sizes = self
            .preferred_solver
            .enumerate_extensions()?
            .into_iter()
            .map(|ext| {
                let range_size = af.range(&ext)?.len();
                Ok((ext, range_size))
            })
            .collect::<Result<Vec<_>, AAError>>()?;
        let max_range_size = with_range_sizes.iter().map(|(_, r)| *r).max().unwrap_or(0);
        debug!("maximal range size of preferred extensions is {}", max_range_size);
        Ok(with_range_sizes
            .into_iter()
            .filter_map(|(ext, r)| if r == max_range_size { Some(ext) } else { None })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};
    use crate::solvers::{CredulousAcceptanceComputer, SkepticalAcceptanceComputer};
    use paste::paste;

    fn read(instance: &str) -> AAFramework<String> {
        AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap()
    }

    fn labels(af: &AAFramework<String>, extensions: &ExtensionSet) -> Vec<Vec<String>> {
        extensions
            .iter()
            .map(|ext| {
                af.subset_arguments(ext)
                    .unwrap()
                    .iter()
                    .map(|a| a.label().to_string())
                    .collect()
            })
            .collect()
    }

    macro_rules! test_enumerate {
        ($name:ident, $instance:expr, $expected:expr) => {
            paste! {
                #[test]
                fn [<test_enumerate_ $name>]() {
                    let af = read($instance);
                    let solver = SemiStableSemanticsSolver::new(&af);
                    let expected: Vec<Vec<&str>> = $expected;
                    assert_eq!(expected, labels(&af, &solver.enumerate_extensions().unwrap()));
                }
            }
        };
    }

    test_enumerate!(
        mutual_attack,
        "arg(a).\narg(b).\natt(a,b).\natt(b,a).\n",
        vec![vec!["a"], vec!["b"]]
    );

    test_enumerate!(
        odd_cycle,
        "arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\natt(c,a).\n",
        vec![vec![]]
    );

    test_enumerate!(
        larger_range,
        "arg(a).\narg(b).\narg(c).\narg(d).\natt(a,b).\natt(b,a).\natt(b,c).\natt(c,c).\natt(d,d).\n",
        vec![vec!["b"]]
    );

    test_enumerate!(
        tied_ranges,
        "arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,a).\natt(c,c).\n",
        vec![vec!["a"], vec!["b"]]
    );

    #[test]
    fn test_acceptance() {
        let af = read("arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,a).\natt(b,c).\natt(c,c).\n");
        let solver = SemiStableSemanticsSolver::new(&af);
        let arg = |l: &str| af.argument_by_label(&l.to_string()).unwrap();
        assert!(solver.is_credulously_accepted(arg("b")).unwrap());
        assert!(solver.is_skeptically_accepted(arg("b")).unwrap());
        assert!(!solver.is_credulously_accepted(arg("a")).unwrap());
    }
}
