use super::specs::ExtensionEnumerator;
use crate::aa::{AAError, AAFramework, ExtensionSet, LabelType};
use crate::utils;

/// A solver for the grounded semantics.
///
/// The grounded extension always exists and is unique, so credulous and skeptical acceptance coincide.
/// Its computation is polynomial and does not consume any search budget.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<T> ExtensionEnumerator<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn framework(&self) -> &AAFramework<T> {
        self.af
    }

    fn enumerate_extensions(&self) -> Result<ExtensionSet, AAError> {
        Ok(ExtensionSet::from([utils::grounded_extension(self.af)?]))
    }
}
