use super::{AAError, AAFramework, Argument, ArgumentSubset, LabelType};

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Returns `true` iff no argument of the set attacks an argument of the set (including itself).
    ///
    /// # Example
    ///
    /// ```
    /// # use argtrust::aa::AAFramework;
    /// let af = AAFramework::new(["a", "b"], [("a", "b"), ("b", "b")]).unwrap();
    /// assert!(af.is_conflict_free(&af.subset_from_labels(&["a"]).unwrap()).unwrap());
    /// assert!(!af.is_conflict_free(&af.subset_from_labels(&["b"]).unwrap()).unwrap());
    /// ```
    pub fn is_conflict_free(&self, subset: &ArgumentSubset) -> Result<bool, AAError> {
        self.check_subset(subset)?;
        Ok(self.is_conflict_free_unchecked(subset))
    }

    pub(crate) fn is_conflict_free_unchecked(&self, subset: &ArgumentSubset) -> bool {
        subset
            .iter()
            .all(|id| self.attacked_ids(id).iter().all(|a| !subset.contains(*a)))
    }

    /// Returns `true` iff the set attacks every attacker of the argument.
    ///
    /// A self-attacking argument can only be defended by a set attacking it.
    pub fn defends(&self, subset: &ArgumentSubset, argument: &Argument<T>) -> Result<bool, AAError> {
        self.check_subset(subset)?;
        let id = self.check_argument(argument)?;
        let attacked = self.args_plus_unchecked(subset);
        Ok(self.is_defended_by(id, &attacked))
    }

    fn is_defended_by(&self, id: usize, attacked_by_subset: &ArgumentSubset) -> bool {
        self.attacker_ids(id)
            .iter()
            .all(|attacker| attacked_by_subset.contains(*attacker))
    }

    /// Applies the characteristic function: returns the set of arguments defended by the provided set.
    ///
    /// This function is monotonic w.r.t. set inclusion.
    ///
    /// # Example
    ///
    /// ```
    /// # use argtrust::aa::AAFramework;
    /// let af = AAFramework::new(["A", "B", "C"], [("C", "B"), ("B", "A")]).unwrap();
    /// let c = af.subset_from_labels(&["C"]).unwrap();
    /// let defended = af.characteristic_function(&c).unwrap();
    /// assert_eq!(af.subset_from_labels(&["A", "C"]).unwrap(), defended);
    /// ```
    pub fn characteristic_function(&self, subset: &ArgumentSubset) -> Result<ArgumentSubset, AAError> {
        self.check_subset(subset)?;
        Ok(self.characteristic_function_unchecked(subset))
    }

    pub(crate) fn characteristic_function_unchecked(&self, subset: &ArgumentSubset) -> ArgumentSubset {
        let attacked = self.args_plus_unchecked(subset);
        self.subset_from_ids((0..self.n_arguments()).filter(|id| self.is_defended_by(*id, &attacked)))
    }

    /// Returns `true` iff the set is conflict-free and defends all its members.
    pub fn is_admissible(&self, subset: &ArgumentSubset) -> Result<bool, AAError> {
        self.check_subset(subset)?;
        Ok(self.is_admissible_unchecked(subset))
    }

    pub(crate) fn is_admissible_unchecked(&self, subset: &ArgumentSubset) -> bool {
        if !self.is_conflict_free_unchecked(subset) {
            return false;
        }
        let attacked = self.args_plus_unchecked(subset);
        subset.iter().all(|id| self.is_defended_by(id, &attacked))
    }

    /// Returns `true` iff the set is a conflict-free fixpoint of the characteristic function.
    pub fn is_complete(&self, subset: &ArgumentSubset) -> Result<bool, AAError> {
        self.check_subset(subset)?;
        Ok(self.is_complete_unchecked(subset))
    }

    pub(crate) fn is_complete_unchecked(&self, subset: &ArgumentSubset) -> bool {
        self.is_conflict_free_unchecked(subset)
            && &self.characteristic_function_unchecked(subset) == subset
    }

    /// Returns `true` iff the set attacks exactly the arguments it does not contain.
    pub fn is_stable(&self, subset: &ArgumentSubset) -> Result<bool, AAError> {
        self.check_subset(subset)?;
        Ok(self.args_plus_unchecked(subset) == subset.complement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> AAFramework<&'static str> {
        AAFramework::new(["A", "B", "C"], [("C", "B"), ("B", "A")]).unwrap()
    }

    fn cycle() -> AAFramework<&'static str> {
        AAFramework::new(["A", "B", "C"], [("A", "B"), ("B", "C"), ("C", "A")]).unwrap()
    }

    fn nixon() -> AAFramework<&'static str> {
        AAFramework::new(["A", "B"], [("A", "B"), ("B", "A")]).unwrap()
    }

    fn subset(af: &AAFramework<&'static str>, labels: &[&'static str]) -> ArgumentSubset {
        af.subset_from_labels(labels).unwrap()
    }

    #[test]
    fn test_chain() {
        let af = chain();
        assert_eq!(subset(&af, &["A", "C"]), af.characteristic_function(&subset(&af, &["C"])).unwrap());
        assert!(af.is_admissible(&subset(&af, &["C"])).unwrap());
        assert!(af.is_admissible(&subset(&af, &["A", "C"])).unwrap());
        assert!(!af.is_admissible(&subset(&af, &["A"])).unwrap());
        assert!(!af.is_admissible(&subset(&af, &["B", "C"])).unwrap());
        assert!(af.is_complete(&subset(&af, &["A", "C"])).unwrap());
        assert!(!af.is_complete(&subset(&af, &["C"])).unwrap());
        assert!(af.is_stable(&subset(&af, &["A", "C"])).unwrap());
    }

    #[test]
    fn test_cycle() {
        let af = cycle();
        assert_eq!(subset(&af, &["C"]), af.characteristic_function(&subset(&af, &["A"])).unwrap());
        assert!(!af.is_admissible(&subset(&af, &["A"])).unwrap());
        assert!(af.is_admissible(&af.empty_subset()).unwrap());
        assert!(af.characteristic_function(&af.empty_subset()).unwrap().is_empty());
    }

    #[test]
    fn test_nixon() {
        let af = nixon();
        assert_eq!(subset(&af, &["A"]), af.characteristic_function(&subset(&af, &["A"])).unwrap());
        assert_eq!(subset(&af, &["B"]), af.characteristic_function(&subset(&af, &["B"])).unwrap());
        assert!(af.is_admissible(&subset(&af, &["A"])).unwrap());
        assert!(af.is_admissible(&subset(&af, &["B"])).unwrap());
        assert!(!af.is_conflict_free(&af.full_subset()).unwrap());
        assert!(!af.is_complete(&af.full_subset()).unwrap());
    }

    #[test]
    fn test_self_attack() {
        let af = AAFramework::new(["A", "B"], [("A", "A"), ("A", "B")]).unwrap();
        let a = af.argument_by_label(&"A").unwrap();
        assert!(af.defends(&subset(&af, &["A"]), a).unwrap());
        assert!(!af.is_conflict_free(&subset(&af, &["A"])).unwrap());
        assert!(!af.is_admissible(&subset(&af, &["A"])).unwrap());
        assert!(!af.defends(&af.empty_subset(), a).unwrap());
    }

    #[test]
    fn test_defends() {
        let af = chain();
        let a = af.argument_by_label(&"A").unwrap();
        let c = af.argument_by_label(&"C").unwrap();
        assert!(af.defends(&subset(&af, &["C"]), a).unwrap());
        assert!(!af.defends(&af.empty_subset(), a).unwrap());
        assert!(af.defends(&af.empty_subset(), c).unwrap());
    }

    #[test]
    fn test_preconditions() {
        let af = chain();
        let foreign = ArgumentSubset::new_empty(2);
        assert!(matches!(af.is_conflict_free(&foreign), Err(AAError::Precondition(_))));
        assert!(matches!(af.is_admissible(&foreign), Err(AAError::Precondition(_))));
        assert!(matches!(af.characteristic_function(&foreign), Err(AAError::Precondition(_))));
        assert!(matches!(af.is_complete(&foreign), Err(AAError::Precondition(_))));
        let a = af.argument_by_label(&"A").unwrap();
        assert!(matches!(af.defends(&foreign, a), Err(AAError::Precondition(_))));
        let other = AAFramework::new(["B"], []).unwrap();
        let foreign_arg = other.argument_by_label(&"B").unwrap();
        assert!(matches!(
            af.defends(&af.empty_subset(), foreign_arg),
            Err(AAError::Precondition(_))
        ));
    }
}
