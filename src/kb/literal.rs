use crate::aa::LabelType;
use std::fmt::Display;

/// A predicate together with a polarity.
///
/// The positive literal of a predicate `p` is displayed as `p`, while its negative literal is displayed as `-p`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal<P>
where
    P: LabelType + Ord,
{
    predicate: P,
    positive: bool,
}

impl<P> Literal<P>
where
    P: LabelType + Ord,
{
    /// Builds a new literal.
    pub fn new(predicate: P, positive: bool) -> Self {
        Self {
            predicate,
            positive,
        }
    }

    /// Builds the positive literal of a predicate.
    pub fn positive(predicate: P) -> Self {
        Self::new(predicate, true)
    }

    /// Builds the negative literal of a predicate.
    pub fn negative(predicate: P) -> Self {
        Self::new(predicate, false)
    }

    /// Returns the predicate of this literal.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Returns `true` iff this literal is positive.
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Returns the literal with the same predicate and the opposite polarity.
    pub fn complement(&self) -> Self {
        Self::new(self.predicate.clone(), !self.positive)
    }

    /// Returns `true` iff the two literals share their predicate but not their polarity.
    pub fn is_complement_of(&self, other: &Literal<P>) -> bool {
        self.predicate == other.predicate && self.positive != other.positive
    }
}

impl<P> Display for Literal<P>
where
    P: LabelType + Ord,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.positive {
            write!(f, "{}", self.predicate)
        } else {
            write!(f, "-{}", self.predicate)
        }
    }
}

/// An inference rule: if all the premises hold, then all the conclusions hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule<P>
where
    P: LabelType + Ord,
{
    premises: Vec<Literal<P>>,
    conclusions: Vec<Literal<P>>,
}

impl<P> Rule<P>
where
    P: LabelType + Ord,
{
    /// Builds a new rule.
    pub fn new(premises: Vec<Literal<P>>, conclusions: Vec<Literal<P>>) -> Self {
        Self {
            premises,
            conclusions,
        }
    }

    /// Returns the premises of the rule.
    pub fn premises(&self) -> &[Literal<P>] {
        &self.premises
    }

    /// Returns the conclusions of the rule.
    pub fn conclusions(&self) -> &[Literal<P>] {
        &self.conclusions
    }

    /// Returns `true` iff the literal is one of the conclusions.
    pub fn concludes(&self, literal: &Literal<P>) -> bool {
        self.conclusions.contains(literal)
    }
}

impl<P> Display for Rule<P>
where
    P: LabelType + Ord,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |literals: &[Literal<P>]| {
            literals
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<String>>()
                .join(",")
        };
        write!(f, "{} -> {}", join(&self.premises), join(&self.conclusions))
    }
}
