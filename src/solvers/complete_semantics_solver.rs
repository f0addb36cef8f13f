use super::specs::ExtensionEnumerator;
use crate::aa::{AAError, AAFramework, ExtensionSet, LabelType};
use crate::utils::{EnumerationOrder, SearchBudget, SubsetEnumerator};
use log::debug;

/// A solver for the complete semantics.
///
/// The complete extensions are the conflict-free sets that are fixpoints of the characteristic function.
/// They are computed by testing every subset of arguments, from the smallest to the largest.
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    budget: SearchBudget,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the complete semantics, with no search limit.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_budget(af, SearchBudget::unlimited())
    }

    /// Builds a new solver for the complete semantics.
    ///
    /// The search stops with an error as soon as the budget is exceeded.
    pub fn new_with_budget(af: &'a AAFramework<T>, budget: SearchBudget) -> Self {
        Self { af, budget }
    }
}

impl<T> ExtensionEnumerator<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn framework(&self) -> &AAFramework<T> {
        self.af
    }

    fn enumerate_extensions(&self) -> Result<ExtensionSet, AAError> {
        let mut monitor = self.budget.start();
        let mut extensions = ExtensionSet::new();
        for subset in SubsetEnumerator::for_framework(self.af, EnumerationOrder::Ascending) {
            monitor.visit()?;
            if self.af.is_complete_unchecked(&subset) {
                extensions.insert(subset);
            }
        }
        debug!(
            "found {} complete extension(s) among {} candidate(s)",
            extensions.len(),
            monitor.n_candidates()
        );
        Ok(extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::AbortReason;
    use crate::io::{AspartixReader, InstanceReader};
    use crate::solvers::{
        CredulousAcceptanceComputer, SingleExtensionComputer, SkepticalAcceptanceComputer,
    };

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

    #[test]
    fn test_enumerate_chain() {
        let af = read("arg(a).\narg(b).\narg(c).\natt(c,b).\natt(b,a).\n");
        let solver = CompleteSemanticsSolver::new(&af);
        assert_eq!(
            vec![vec!["a", "c"]],
            labels(&af, &solver.enumerate_extensions().unwrap())
        );
    }

    #[test]
    fn test_enumerate_mutual_attack() {
        let af = read("arg(a).\narg(b).\natt(a,b).\natt(b,a).\n");
        let solver = CompleteSemanticsSolver::new(&af);
        assert_eq!(
            vec![vec![], vec!["a"], vec!["b"]] as Vec<Vec<&str>>,
            labels(&af, &solver.enumerate_extensions().unwrap())
        );
    }

    #[test]
    fn test_enumerate_self_attack() {
        let af = read("arg(a).\natt(a,a).\n");
        let solver = CompleteSemanticsSolver::new(&af);
        assert_eq!(
            vec![vec![]] as Vec<Vec<&str>>,
            labels(&af, &solver.enumerate_extensions().unwrap())
        );
    }

    #[test]
    fn test_enumerate_empty_af() {
        let af = read("");
        let solver = CompleteSemanticsSolver::new(&af);
        let extensions = solver.enumerate_extensions().unwrap();
        assert_eq!(1, extensions.len());
        assert!(extensions.iter().next().unwrap().is_empty());
    }

    #[test]
    fn test_compute_one() {
        let af = read("arg(a).\narg(b).\natt(a,b).\natt(b,a).\n");
        let solver = CompleteSemanticsSolver::new(&af);
        assert!(solver.compute_one_extension().unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_acceptance() {
        let af = read("arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,a).\natt(b,c).\n");
        let solver = CompleteSemanticsSolver::new(&af);
        let arg = |l: &str| af.argument_by_label(&l.to_string()).unwrap();
        assert!(solver.is_credulously_accepted(arg("a")).unwrap());
        assert!(solver.is_credulously_accepted(arg("c")).unwrap());
        assert!(!solver.is_skeptically_accepted(arg("a")).unwrap());
        assert!(!solver.is_skeptically_accepted(arg("c")).unwrap());
    }

    #[test]
    fn test_candidate_limit() {
        let af = read("arg(a).\narg(b).\narg(c).\n");
        let solver = CompleteSemanticsSolver::new_with_budget(
            &af,
            SearchBudget::unlimited().with_max_candidates(4),
        );
        assert_eq!(
            Err(AAError::ComputationAborted(AbortReason::CandidateLimit(4))),
            solver.enumerate_extensions()
        );
    }

    #[test]
    fn test_interrupted() {
        let af = read("arg(a).\narg(b).\n");
        let budget = SearchBudget::unlimited();
        budget.interrupter().interrupt();
        let solver = CompleteSemanticsSolver::new_with_budget(&af, budget);
        assert_eq!(
            Err(AAError::ComputationAborted(AbortReason::Interrupted)),
            solver.enumerate_extensions()
        );
    }
}
