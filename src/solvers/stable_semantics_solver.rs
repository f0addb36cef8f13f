use super::specs::ExtensionEnumerator;
use super::SemiStableSemanticsSolver;
use crate::aa::{AAError, AAFramework, ExtensionSet, LabelType};
use crate::utils::SearchBudget;

/// A solver for the stable semantics.
///
/// A stable extension attacks exactly the arguments it does not contain.
/// Since every stable extension is semi-stable, they are computed by filtering the semi-stable extensions.
/// Some AFs (e.g. odd-length attack cycles) have no stable extension; in this case the returned set is empty.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    semi_stable_solver: SemiStableSemanticsSolver<'a, T>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the stable semantics, with no search limit.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_budget(af, SearchBudget::unlimited())
    }

    /// Builds a new solver for the stable semantics.
    ///
    /// The budget is given to the underlying preferred extensions search.
    pub fn new_with_budget(af: &'a AAFramework<T>, budget: SearchBudget) -> Self {
        Self {
            semi_stable_solver: SemiStableSemanticsSolver::new_with_budget(af, budget),
        }
    }
}

impl<T> ExtensionEnumerator<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn framework(&self) -> &AAFramework<T> {
        self.semi_stable_solver.framework()
    }

    fn enumerate_extensions(&self) -> Result<ExtensionSet, AAError> {
        let af = self.framework();
        let mut stable = ExtensionSet::new();
        for ext in self.semi_stable_solver.enumerate_extensions()? {
            if af.is_stable(&ext)? {
                stable.insert(ext);
            }
        }
        Ok(stable)
    }
}
