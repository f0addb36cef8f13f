use super::{AAError, Argument, ArgumentSet, ArgumentSubset, LabelType};
use log::warn;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_FRAMEWORK_ID: AtomicUsize = AtomicUsize::new(0);

fn next_framework_id() -> usize {
    NEXT_FRAMEWORK_ID.fetch_add(1, Ordering::Relaxed)
}

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// A framework is built once from a set of arguments and a set of attacks, and never changes afterwards.
/// Every attack must involve declared arguments; else, the construction fails.
///
/// Sets of arguments are handled as [`ArgumentSubset`] values, indexed by the argument ids.
/// All the operations taking arguments or subsets check they belong to this framework.
/// Subsets returned by a framework remember it, so that another framework refuses them
/// even if it has the same number of arguments.
/// Clones of a framework share its identity.
#[derive(Debug, Clone)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    id: usize,
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use argtrust::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> Default for AAFramework<T>
where
    T: LabelType,
{
    fn default() -> Self {
        AAFramework {
            id: next_framework_id(),
            arguments: ArgumentSet::default(),
            attacks: vec![],
            attacks_from: vec![],
            attacks_to: vec![],
        }
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework given its arguments and its attacks.
    ///
    /// Duplicated arguments and duplicated attacks are merged.
    /// In case an attack involves an argument that is not in the provided arguments,
    /// an [`InvalidFramework`](AAError::InvalidFramework) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argtrust::aa::AAFramework;
    /// let af = AAFramework::new(["a", "b", "c"], [("c", "b"), ("b", "a")]).unwrap();
    /// assert_eq!(3, af.n_arguments());
    /// assert_eq!(2, af.n_attacks());
    /// assert!(AAFramework::new(["a"], [("x", "a")]).is_err());
    /// ```
    pub fn new<I, J>(arguments: I, attacks: J) -> Result<Self, AAError>
    where
        I: IntoIterator<Item = T>,
        J: IntoIterator<Item = (T, T)>,
    {
        Self::new_with_argument_set(arguments.into_iter().collect(), attacks)
    }

    /// Builds an AA framework given an argument set and attacks given by the labels of their arguments.
    ///
    /// See [`new`](Self::new) for more information.
    pub fn new_with_argument_set<J>(arguments: ArgumentSet<T>, attacks: J) -> Result<Self, AAError>
    where
        J: IntoIterator<Item = (T, T)>,
    {
        let n = arguments.len();
        let mut af = AAFramework {
            id: next_framework_id(),
            arguments,
            attacks: vec![],
            attacks_from: vec![vec![]; n],
            attacks_to: vec![vec![]; n],
        };
        let mut known_attacks = HashSet::new();
        for (from, to) in attacks {
            let invalid = |label: &T| {
                AAError::InvalidFramework(format!(
                    "attack ({},{}) references the undeclared argument {}",
                    from, to, label
                ))
            };
            let attacker_id = af
                .arguments
                .get_argument_index(&from)
                .map_err(|_| invalid(&from))?;
            let attacked_id = af
                .arguments
                .get_argument_index(&to)
                .map_err(|_| invalid(&to))?;
            if !known_attacks.insert((attacker_id, attacked_id)) {
                warn!("ignoring duplicated attack ({},{})", from, to);
                continue;
            }
            af.attacks.push((attacker_id, attacked_id));
            af.attacks_from[attacker_id].push(attacked_id);
            af.attacks_to[attacked_id].push(attacker_id);
        }
        Ok(af)
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the argument associated with a label.
    ///
    /// In case no argument has this label, a [`Precondition`](AAError::Precondition) error is returned.
    pub fn argument_by_label(&self, label: &T) -> Result<&Argument<T>, AAError> {
        self.arguments.get_argument(label)
    }

    /// Returns `true` iff the argument belongs to this framework.
    pub fn contains(&self, argument: &Argument<T>) -> bool {
        self.arguments.contains(argument)
    }

    /// Provides an iterator to the attacks.
    ///
    /// # Example
    ///
    /// ```
    /// # use argtrust::aa::AAFramework;
    /// let af = AAFramework::new(["a", "b"], [("a", "b")]).unwrap();
    /// let attacks = af
    ///     .iter_attacks()
    ///     .map(|att| format!("{}->{}", att.attacker(), att.attacked()))
    ///     .collect::<Vec<String>>();
    /// assert_eq!(vec!["a->b"], attacks);
    /// ```
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| {
            Attack(
                self.arguments.get_argument_by_id(*a),
                self.arguments.get_argument_by_id(*b),
            )
        })
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of (distinct) attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }

    pub(crate) fn framework_id(&self) -> usize {
        self.id
    }

    pub(crate) fn subset_from_ids<I>(&self, ids: I) -> ArgumentSubset
    where
        I: IntoIterator<Item = usize>,
    {
        ArgumentSubset::from_ids(self.n_arguments(), ids).bound_to(self.id)
    }

    pub(crate) fn attacked_ids(&self, id: usize) -> &[usize] {
        &self.attacks_from[id]
    }

    pub(crate) fn attacker_ids(&self, id: usize) -> &[usize] {
        &self.attacks_to[id]
    }

    /// Checks an argument belongs to this framework and returns its id.
    pub fn check_argument(&self, argument: &Argument<T>) -> Result<usize, AAError> {
        if self.contains(argument) {
            Ok(argument.id())
        } else {
            Err(AAError::Precondition(format!(
                "argument {} (id {}) does not belong to the framework",
                argument,
                argument.id()
            )))
        }
    }

    /// Checks a subset is built on the arguments of this framework.
    ///
    /// Subsets returned by another framework are refused.
    /// Subsets built directly from ids are accepted if they have the right number of arguments.
    pub fn check_subset(&self, subset: &ArgumentSubset) -> Result<(), AAError> {
        if subset.universe_size() != self.n_arguments() {
            return Err(AAError::Precondition(format!(
                "the set of arguments is built on {} arguments while the framework has {}",
                subset.universe_size(),
                self.n_arguments()
            )));
        }
        match subset.framework_id() {
            Some(id) if id != self.id => Err(AAError::Precondition(
                "the set of arguments was built on another framework".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Returns an empty set of arguments of this framework.
    pub fn empty_subset(&self) -> ArgumentSubset {
        ArgumentSubset::new_empty(self.n_arguments()).bound_to(self.id)
    }

    /// Returns the set of all the arguments of this framework.
    pub fn full_subset(&self) -> ArgumentSubset {
        ArgumentSubset::new_full(self.n_arguments()).bound_to(self.id)
    }

    /// Builds a set of arguments given their labels.
    ///
    /// If a label does not correspond to an argument, a [`Precondition`](AAError::Precondition) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argtrust::aa::AAFramework;
    /// let af = AAFramework::new(["a", "b", "c"], [("c", "b"), ("b", "a")]).unwrap();
    /// let s = af.subset_from_labels(&["a", "c"]).unwrap();
    /// assert_eq!(2, s.len());
    /// assert!(af.subset_from_labels(&["d"]).is_err());
    /// ```
    pub fn subset_from_labels<'l, I>(&self, labels: I) -> Result<ArgumentSubset, AAError>
    where
        I: IntoIterator<Item = &'l T>,
        T: 'l,
    {
        let mut s = self.empty_subset();
        for l in labels {
            s.insert(self.arguments.get_argument_index(l)?);
        }
        Ok(s)
    }

    /// Builds a set of arguments from arguments of this framework.
    ///
    /// If an argument does not belong to the framework, a [`Precondition`](AAError::Precondition) error is returned.
    pub fn subset_from_arguments<'l, I>(&self, arguments: I) -> Result<ArgumentSubset, AAError>
    where
        I: IntoIterator<Item = &'l Argument<T>>,
        T: 'l,
    {
        let mut s = self.empty_subset();
        for a in arguments {
            s.insert(self.check_argument(a)?);
        }
        Ok(s)
    }

    /// Returns the arguments of a subset, in increasing order of their ids.
    pub fn subset_arguments(&self, subset: &ArgumentSubset) -> Result<Vec<&Argument<T>>, AAError> {
        self.check_subset(subset)?;
        Ok(subset
            .iter()
            .map(|id| self.arguments.get_argument_by_id(id))
            .collect())
    }

    /// Returns the set of arguments attacked by an argument (A+).
    ///
    /// # Example
    ///
    /// ```
    /// # use argtrust::aa::AAFramework;
    /// let af = AAFramework::new(["a", "b", "c"], [("c", "b"), ("b", "a")]).unwrap();
    /// let b = af.argument_by_label(&"b").unwrap();
    /// assert_eq!(af.subset_from_labels(&["a"]).unwrap(), af.plus(b).unwrap());
    /// ```
    pub fn plus(&self, argument: &Argument<T>) -> Result<ArgumentSubset, AAError> {
        let id = self.check_argument(argument)?;
        Ok(self.subset_from_ids(self.attacked_ids(id).iter().copied()))
    }

    /// Returns the set of arguments attacking an argument (A-).
    pub fn minus(&self, argument: &Argument<T>) -> Result<ArgumentSubset, AAError> {
        let id = self.check_argument(argument)?;
        Ok(self.subset_from_ids(self.attacker_ids(id).iter().copied()))
    }

    /// Returns the set of arguments attacked by at least one argument of a set (S+).
    pub fn args_plus(&self, subset: &ArgumentSubset) -> Result<ArgumentSubset, AAError> {
        self.check_subset(subset)?;
        Ok(self.args_plus_unchecked(subset))
    }

    /// Returns the set of arguments attacking at least one argument of a set (S-).
    pub fn args_minus(&self, subset: &ArgumentSubset) -> Result<ArgumentSubset, AAError> {
        self.check_subset(subset)?;
        Ok(self.subset_from_ids(
            subset
                .iter()
                .flat_map(|id| self.attacker_ids(id).iter().copied()),
        ))
    }

    pub(crate) fn args_plus_unchecked(&self, subset: &ArgumentSubset) -> ArgumentSubset {
        self.subset_from_ids(
            subset
                .iter()
                .flat_map(|id| self.attacked_ids(id).iter().copied()),
        )
    }

    /// Returns the range of a set of arguments, that is the set itself and the arguments it attacks.
    pub fn range(&self, subset: &ArgumentSubset) -> Result<ArgumentSubset, AAError> {
        self.args_plus(subset).map(|p| p.union(subset))
    }
}
