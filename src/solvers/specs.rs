use super::{
    CompleteSemanticsSolver, GroundedSemanticsSolver, PreferredSemanticsSolver,
    SemiStableSemanticsSolver, StableSemanticsSolver,
};
use crate::aa::{AAError, AAFramework, Argument, ArgumentSubset, ExtensionSet, LabelType, Semantics};
use crate::utils::SearchBudget;

/// A trait for solvers able to compute all the extensions of a semantics.
///
/// The other solver traits of this module are implemented for all the types implementing this one.
pub trait ExtensionEnumerator<T>
where
    T: LabelType,
{
    /// Returns the framework this solver works on.
    fn framework(&self) -> &AAFramework<T>;

    /// Computes all the extensions.
    ///
    /// The result is the exact set of extensions; in case the search budget is exceeded,
    /// a [`ComputationAborted`](AAError::ComputationAborted) error is returned instead of a partial set.
    fn enumerate_extensions(&self) -> Result<ExtensionSet, AAError>;
}

/// A trait for solvers able to compute an extension.
pub trait SingleExtensionComputer<T>
where
    T: LabelType,
{
    /// Computes a single extension.
    ///
    /// In case the problem admits no extension, [Option::None] is returned.
    /// Otherwise, the smallest extension in the order of [`ArgumentSubset`] is returned.
    fn compute_one_extension(&self) -> Result<Option<ArgumentSubset>, AAError>;
}

/// A trait for solvers able to check the credulous acceptance of an argument.
pub trait CredulousAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the credulous acceptance of an argument.
    fn is_credulously_accepted(&self, arg: &Argument<T>) -> Result<bool, AAError> {
        self.is_credulously_accepted_with_certificate(arg)
            .map(|(accepted, _)| accepted)
    }

    /// Checks the credulous acceptance of an argument, and provide a certificate if it is the case.
    ///
    /// The certificate is set to `None` if the result of the test is `false`.
    /// Otherwise, the certificate is an extension containing the argument.
    fn is_credulously_accepted_with_certificate(
        &self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<ArgumentSubset>), AAError>;
}

/// A trait for solvers able to check the skeptical acceptance of an argument.
pub trait SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the skeptical acceptance of an argument.
    ///
    /// In case the semantics admits no extension, every argument is skeptically accepted.
    fn is_skeptically_accepted(&self, arg: &Argument<T>) -> Result<bool, AAError> {
        self.is_skeptically_accepted_with_certificate(arg)
            .map(|(accepted, _)| accepted)
    }

    /// Checks the skeptical acceptance of an argument, and provide a certificate if it is not the case.
    ///
    /// The certificate is set to `None` if the result of the test is `true`.
    /// Otherwise, the certificate is an extension that does not contain the argument.
    fn is_skeptically_accepted_with_certificate(
        &self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<ArgumentSubset>), AAError>;
}

impl<T, S> SingleExtensionComputer<T> for S
where
    T: LabelType,
    S: ExtensionEnumerator<T> + ?Sized,
{
    fn compute_one_extension(&self) -> Result<Option<ArgumentSubset>, AAError> {
        Ok(self.enumerate_extensions()?.into_iter().next())
    }
}

impl<T, S> CredulousAcceptanceComputer<T> for S
where
    T: LabelType,
    S: ExtensionEnumerator<T> + ?Sized,
{
    fn is_credulously_accepted_with_certificate(
        &self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<ArgumentSubset>), AAError> {
        let id = self.framework().check_argument(arg)?;
        let certificate = self
            .enumerate_extensions()?
            .into_iter()
            .find(|ext| ext.contains(id));
        Ok((certificate.is_some(), certificate))
    }
}

impl<T, S> SkepticalAcceptanceComputer<T> for S
where
    T: LabelType,
    S: ExtensionEnumerator<T> + ?Sized,
{
    fn is_skeptically_accepted_with_certificate(
        &self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<ArgumentSubset>), AAError> {
        let id = self.framework().check_argument(arg)?;
        let certificate = self
            .enumerate_extensions()?
            .into_iter()
            .find(|ext| !ext.contains(id));
        Ok((certificate.is_none(), certificate))
    }
}

/// Builds the solver dedicated to a semantics.
///
/// # Example
///
/// ```
/// # use argtrust::aa::{AAFramework, Semantics};
/// # use argtrust::solvers::{new_extension_enumerator, CredulousAcceptanceComputer};
/// # use argtrust::utils::SearchBudget;
/// let af = AAFramework::new(["A", "B"], [("A", "B"), ("B", "A")]).unwrap();
/// let solver = new_extension_enumerator(&af, Semantics::PR, SearchBudget::unlimited());
/// let b = af.argument_by_label(&"B").unwrap();
/// assert!(solver.is_credulously_accepted(b).unwrap());
/// ```
pub fn new_extension_enumerator<'a, T>(
    af: &'a AAFramework<T>,
    semantics: Semantics,
    budget: SearchBudget,
) -> Box<dyn ExtensionEnumerator<T> + 'a>
where
    T: LabelType,
{
    match semantics {
        Semantics::CO => Box::new(CompleteSemanticsSolver::new_with_budget(af, budget)),
        Semantics::GR => Box::new(GroundedSemanticsSolver::new(af)),
        Semantics::PR => Box::new(PreferredSemanticsSolver::new_with_budget(af, budget)),
        Semantics::SST => Box::new(SemiStableSemanticsSolver::new_with_budget(af, budget)),
        Semantics::ST => Box::new(StableSemanticsSolver::new_with_budget(af, budget)),
    }
}
