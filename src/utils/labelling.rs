use crate::aa::{AAError, AAFramework, Argument, ArgumentSubset, LabelType};
use std::fmt::Display;

/// The label given to an argument by a [`Labelling`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// The argument is accepted.
    In,
    /// The argument is rejected.
    Out,
    /// The argument is neither accepted nor rejected.
    Undecided,
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::In => write!(f, "in"),
            Label::Out => write!(f, "out"),
            Label::Undecided => write!(f, "undec"),
        }
    }
}

/// A three-way partition of the arguments of an AF into accepted, rejected and undecided arguments.
///
/// A labelling is built from its set of accepted arguments:
/// the rejected arguments are the ones attacked by the accepted ones,
/// and the remaining arguments are undecided.
///
/// # Example
///
/// ```
/// # use argtrust::aa::AAFramework;
/// # use argtrust::utils::{Label, Labelling};
/// let af = AAFramework::new(["A", "B", "C"], [("C", "B"), ("B", "A")]).unwrap();
/// let labelling = Labelling::from_in_set(&af, &af.subset_from_labels(&["C"]).unwrap()).unwrap();
/// assert_eq!(Some(Label::Out), labelling.label_of(af.argument_by_label(&"B").unwrap()));
/// assert_eq!(Some(Label::Undecided), labelling.label_of(af.argument_by_label(&"A").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Labelling {
    inside: ArgumentSubset,
    outside: ArgumentSubset,
    undecided: ArgumentSubset,
}

impl Labelling {
    /// Builds the labelling induced by a set of accepted arguments.
    ///
    /// The set is not required to be admissible.
    /// In case it is not conflict-free, the accepted arguments it attacks stay labelled in.
    pub fn from_in_set<T>(af: &AAFramework<T>, in_set: &ArgumentSubset) -> Result<Self, AAError>
    where
        T: LabelType,
    {
        let inside = in_set.clone();
        let outside = af.args_plus(in_set)?.difference(&inside);
        let undecided = inside.union(&outside).complement();
        Ok(Self {
            inside,
            outside,
            undecided,
        })
    }

    /// Returns the set of arguments labelled in.
    pub fn inside(&self) -> &ArgumentSubset {
        &self.inside
    }

    /// Returns the set of arguments labelled out.
    pub fn outside(&self) -> &ArgumentSubset {
        &self.outside
    }

    /// Returns the set of arguments labelled undecided.
    pub fn undecided(&self) -> &ArgumentSubset {
        &self.undecided
    }

    /// Returns the label of an argument, or `None` if its id does not belong to the labelled AF.
    pub fn label_of<T>(&self, argument: &Argument<T>) -> Option<Label>
    where
        T: LabelType,
    {
        self.label_of_id(argument.id())
    }

    fn label_of_id(&self, id: usize) -> Option<Label> {
        if id >= self.inside.universe_size() {
            None
        } else if self.inside.contains(id) {
            Some(Label::In)
        } else if self.outside.contains(id) {
            Some(Label::Out)
        } else {
            Some(Label::Undecided)
        }
    }

    /// Checks whether this labelling is a complete labelling of the AF.
    ///
    /// An argument must be labelled in iff all its attackers are labelled out,
    /// and it must be labelled out iff at least one of its attackers is labelled in.
    pub fn is_legal<T>(&self, af: &AAFramework<T>) -> Result<bool, AAError>
    where
        T: LabelType,
    {
        af.check_subset(&self.inside)?;
        Ok((0..af.n_arguments()).all(|id| {
            let attackers = af.attacker_ids(id);
            let all_out = attackers.iter().all(|a| self.outside.contains(*a));
            let one_in = attackers.iter().any(|a| self.inside.contains(*a));
            match self.label_of_id(id) {
                Some(Label::In) => all_out,
                Some(Label::Out) => one_in,
                _ => !all_out && !one_in,
            }
        }))
    }
}
