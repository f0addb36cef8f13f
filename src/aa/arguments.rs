use super::AAError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
/// The engine never looks inside a label: it only compares and hashes it.
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// The label must be a [`LabelType`].
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use argtrust::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    ///
    /// Ids are given in the order the labels were provided at construction time, starting from 0.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the (immutable) set of arguments of an AA framework.
///
/// Each argument is given a fixed index at construction time.
/// These indices are the ones used to represent sets of arguments as bitsets.
#[derive(Debug, Clone)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument will be assigned an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Example
    ///
    /// ```
    /// # use argtrust::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c", "a"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        labels.iter().cloned().collect()
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the unique index associated to an argument label.
    ///
    /// If no such label exists, a [`Precondition`](AAError::Precondition) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argtrust::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(1, arguments.get_argument_index(&"b").unwrap());
    /// assert!(arguments.get_argument_index(&"d").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize, AAError> {
        self.label_to_id
            .get(label)
            .copied()
            .ok_or_else(|| AAError::Precondition(format!("no such argument: {}", label)))
    }

    /// Returns the argument associated to an argument label.
    ///
    /// If no such label exists, a [`Precondition`](AAError::Precondition) error is returned.
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>, AAError> {
        self.get_argument_index(label)
            .map(|i| &self.arguments[i])
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Returns `true` iff the provided argument belongs to this set.
    ///
    /// Both the id and the label must match; an argument coming from another set with the same id is rejected.
    pub fn contains(&self, argument: &Argument<T>) -> bool {
        self.arguments
            .get(argument.id)
            .map(|a| a.label == argument.label)
            .unwrap_or(false)
    }

    /// Returns `true` iff an argument has the provided label.
    pub fn contains_label(&self, label: &T) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// Returns an iterator to the arguments, in increasing order of their ids.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}

impl<T> Default for ArgumentSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        ArgumentSet {
            arguments: vec![],
            label_to_id: HashMap::new(),
        }
    }
}

impl<T> FromIterator<T> for ArgumentSet<T>
where
    T: LabelType,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut argument_set = ArgumentSet::default();
        for label in iter {
            let next_id = argument_set.arguments.len();
            if let std::collections::hash_map::Entry::Vacant(e) =
                argument_set.label_to_id.entry(label.clone())
            {
                e.insert(next_id);
                argument_set.arguments.push(Argument { id: next_id, label });
            }
        }
        argument_set.arguments.shrink_to_fit();
        argument_set.label_to_id.shrink_to_fit();
        argument_set
    }
}
