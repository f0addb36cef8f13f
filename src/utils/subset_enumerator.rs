use crate::aa::{AAFramework, ArgumentSubset, LabelType};

/// The order in which the cardinalities of the subsets are visited by a [`SubsetEnumerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumerationOrder {
    /// From the empty set to the full set.
    Ascending,
    /// From the full set to the empty set.
    Descending,
}

/// An iterator over all the subsets of a set of `n` arguments, grouped by cardinality.
///
/// For a given cardinality `k`, the `C(n,k)` subsets are produced once each,
/// in the lexicographic order of their sorted argument ids.
///
/// # Example
///
/// ```
/// # use argtrust::utils::{EnumerationOrder, SubsetEnumerator};
/// let sizes = SubsetEnumerator::new(3, EnumerationOrder::Descending)
///     .map(|s| s.len())
///     .collect::<Vec<usize>>();
/// assert_eq!(vec![3, 2, 2, 2, 1, 1, 1, 0], sizes);
/// ```
pub struct SubsetEnumerator {
    n: usize,
    order: EnumerationOrder,
    cardinality: Option<usize>,
    combination: Option<Vec<usize>>,
    framework_id: Option<usize>,
}

impl SubsetEnumerator {
    /// Builds an enumerator for the subsets of a set of `n` arguments.
    pub fn new(n: usize, order: EnumerationOrder) -> Self {
        let first_cardinality = match order {
            EnumerationOrder::Ascending => 0,
            EnumerationOrder::Descending => n,
        };
        Self {
            n,
            order,
            cardinality: Some(first_cardinality),
            combination: None,
            framework_id: None,
        }
    }

    /// Builds an enumerator for the subsets of the arguments of a framework.
    ///
    /// The produced subsets are bound to the framework.
    pub fn for_framework<T>(af: &AAFramework<T>, order: EnumerationOrder) -> Self
    where
        T: LabelType,
    {
        Self {
            framework_id: Some(af.framework_id()),
            ..Self::new(af.n_arguments(), order)
        }
    }

    fn build_subset(&self, ids: &[usize]) -> ArgumentSubset {
        let subset = ArgumentSubset::from_ids(self.n, ids.iter().copied());
        match self.framework_id {
            Some(id) => subset.bound_to(id),
            None => subset,
        }
    }

    fn next_cardinality(&self, k: usize) -> Option<usize> {
        match self.order {
            EnumerationOrder::Ascending if k < self.n => Some(k + 1),
            EnumerationOrder::Ascending => None,
            EnumerationOrder::Descending => k.checked_sub(1),
        }
    }
}

fn next_combination(combination: &mut [usize], n: usize) -> bool {
    let k = combination.len();
    for i in (0..k).rev() {
        if combination[i] < n - k + i {
            combination[i] += 1;
            for j in i + 1..k {
                combination[j] = combination[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

impl Iterator for SubsetEnumerator {
    type Item = ArgumentSubset;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let k = self.cardinality?;
            let found = if let Some(c) = self.combination.as_mut() {
                next_combination(c, self.n)
            } else {
                self.combination = Some((0..k).collect());
                true
            };
            if found {
                return self.combination.as_ref().map(|c| self.build_subset(c));
            }
            self.combination = None;
            self.cardinality = self.next_cardinality(k);
        }
    }
}
