use crate::aa::{AAError, AAFramework, ArgumentSubset, LabelType};
use log::debug;

/// Computes the grounded extension of an AF, that is the least fixpoint of its characteristic function.
///
/// The characteristic function is applied from the empty set until the result does not change anymore.
/// Since it is monotonic, this takes at most `n+1` applications, where `n` is the number of arguments.
/// Going beyond this bound or getting a decreasing sequence means the function is not monotonic,
/// and a [`NonConvergence`](AAError::NonConvergence) error is returned.
///
/// # Example
///
/// ```
/// # use argtrust::aa::AAFramework;
/// # use argtrust::utils::grounded_extension;
/// let af = AAFramework::new(["A", "B", "C"], [("C", "B"), ("B", "A")]).unwrap();
/// let grounded = grounded_extension(&af).unwrap();
/// assert_eq!(af.subset_from_labels(&["A", "C"]).unwrap(), grounded);
/// ```
pub fn grounded_extension<T>(af: &AAFramework<T>) -> Result<ArgumentSubset, AAError>
where
    T: LabelType,
{
    let max_iterations = af.n_arguments() + 1;
    let mut current = af.empty_subset();
    for iteration in 1..=max_iterations {
        let next = af.characteristic_function_unchecked(&current);
        if next == current {
            debug!(
                "grounded extension of size {} reached after {} iteration(s)",
                current.len(),
                iteration
            );
            return Ok(current);
        }
        if !current.is_subset(&next) {
            return Err(AAError::NonConvergence {
                iterations: iteration,
            });
        }
        current = next;
    }
    Err(AAError::NonConvergence {
        iterations: max_iterations,
    })
}
