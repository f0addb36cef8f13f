use super::specs::ExtensionEnumerator;
use crate::aa::{AAError, AAFramework, ArgumentSubset, ExtensionSet, LabelType};
use crate::utils::{EnumerationOrder, SearchBudget, SubsetEnumerator};
use log::debug;

/// A solver for the preferred semantics.
///
/// The preferred extensions are the admissible sets that are maximal w.r.t. set inclusion.
/// The subsets are visited by decreasing cardinality; an admissible set is preferred
/// iff it is not included in a preferred extension found earlier.
/// The subsets of the extensions already found are skipped without being tested.
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    budget: SearchBudget,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the preferred semantics, with no search limit.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_budget(af, SearchBudget::unlimited())
    }

    /// Builds a new solver for the preferred semantics.
    ///
    /// The search stops with an error as soon as the budget is exceeded.
    pub fn new_with_budget(af: &'a AAFramework<T>, budget: SearchBudget) -> Self {
        Self { af, budget }
    }
}

impl<T> ExtensionEnumerator<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn framework(&self) -> &AAFramework<T> {
        self.af
    }

    fn enumerate_extensions(&self) -> Result<ExtensionSet, AAError> {
        let mut monitor = self.budget.start();
        let mut preferred: Vec<ArgumentSubset> = Vec::new();
        for subset in SubsetEnumerator::for_framework(self.af, EnumerationOrder::Descending) {
            monitor.visit()?;
            if preferred.iter().any(|p| subset.is_subset(p)) {
                continue;
            }
            if self.af.is_admissible_unchecked(&subset) {
                preferred.push(subset);
            }
        }
        debug!(
            "found {} preferred extension(s) among {} candidate(s)",
            preferred.len(),
            monitor.n_candidates()
        );
        Ok(preferred.into_iter().collect())
    }
}
