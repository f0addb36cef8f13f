use super::{Literal, Rule};
use crate::aa::{AAError, AAFramework, LabelType};
use log::debug;
use permutator::CartesianProduct;
use std::collections::BTreeSet;
use std::fmt::Display;

/// An argument built from a knowledge base.
///
/// It is made of a conclusion and of its support: the facts and the rules involved in its derivation.
/// Two arguments with the same conclusion and the same support are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructuredArgument<P>
where
    P: LabelType + Ord,
{
    conclusion: Literal<P>,
    facts: BTreeSet<Literal<P>>,
    rules: BTreeSet<usize>,
}

impl<P> StructuredArgument<P>
where
    P: LabelType + Ord,
{
    /// Returns the literal supported by this argument.
    pub fn conclusion(&self) -> &Literal<P> {
        &self.conclusion
    }

    /// Returns the facts this argument relies on.
    pub fn facts(&self) -> &BTreeSet<Literal<P>> {
        &self.facts
    }

    /// Returns the indices (in the knowledge base) of the rules this argument relies on.
    pub fn rules(&self) -> &BTreeSet<usize> {
        &self.rules
    }
}

impl<P> Display for StructuredArgument<P>
where
    P: LabelType + Ord,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let facts = self
            .facts
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<String>>();
        let rules = self
            .rules
            .iter()
            .map(|r| format!("r{}", r))
            .collect::<Vec<String>>();
        write!(f, "{}[{};{}]", self.conclusion, facts.join(","), rules.join(","))
    }
}

/// A set of facts and inference rules from which arguments can be built.
///
/// # Example
///
/// ```
/// # use argtrust::kb::{KnowledgeBase, Literal, Rule};
/// let kb = KnowledgeBase::new(
///     vec![Literal::positive("bird")],
///     vec![Rule::new(vec![Literal::positive("bird")], vec![Literal::positive("flies")])],
/// );
/// let arguments = kb.construct_arguments(&Literal::positive("flies"));
/// assert_eq!(1, arguments.len());
/// assert_eq!("flies[bird;r0]", arguments[0].to_string());
/// ```
#[derive(Debug, Clone)]
pub struct KnowledgeBase<P>
where
    P: LabelType + Ord,
{
    facts: BTreeSet<Literal<P>>,
    rules: Vec<Rule<P>>,
}

impl<P> KnowledgeBase<P>
where
    P: LabelType + Ord,
{
    /// Builds a knowledge base from its facts and rules.
    ///
    /// The rules are identified by their index in the provided vector.
    pub fn new(facts: Vec<Literal<P>>, rules: Vec<Rule<P>>) -> Self {
        Self {
            facts: facts.into_iter().collect(),
            rules,
        }
    }

    /// Returns the facts of the knowledge base.
    pub fn facts(&self) -> &BTreeSet<Literal<P>> {
        &self.facts
    }

    /// Returns the rules of the knowledge base.
    pub fn rules(&self) -> &[Rule<P>] {
        &self.rules
    }

    /// Returns all the arguments concluding the given literal.
    ///
    /// A fact is supported by a single argument made of the fact itself.
    /// Otherwise, each rule concluding the literal gives an argument for each combination of arguments for its premises.
    /// A rule is used at most once in each derivation; a rule with a premise that cannot be derived gives no argument.
    pub fn construct_arguments(&self, conclusion: &Literal<P>) -> Vec<StructuredArgument<P>> {
        self.construct_arguments_without(conclusion, &BTreeSet::new())
    }

    fn construct_arguments_without(
        &self,
        conclusion: &Literal<P>,
        used_rules: &BTreeSet<usize>,
    ) -> Vec<StructuredArgument<P>> {
        if self.facts.contains(conclusion) {
            return vec![StructuredArgument {
                conclusion: conclusion.clone(),
                facts: BTreeSet::from([conclusion.clone()]),
                rules: BTreeSet::new(),
            }];
        }
        let mut arguments = Vec::new();
        for (rule_index, rule) in self.rules.iter().enumerate() {
            if !rule.concludes(conclusion) || used_rules.contains(&rule_index) {
                continue;
            }
            let mut branch_rules = used_rules.clone();
            branch_rules.insert(rule_index);
            let premise_arguments = rule
                .premises()
                .iter()
                .map(|p| self.construct_arguments_without(p, &branch_rules))
                .collect::<Vec<Vec<StructuredArgument<P>>>>();
            if premise_arguments.iter().any(|v| v.is_empty()) {
                continue;
            }
            if premise_arguments.is_empty() {
                arguments.push(StructuredArgument {
                    conclusion: conclusion.clone(),
                    facts: BTreeSet::new(),
                    rules: BTreeSet::from([rule_index]),
                });
                continue;
            }
            let premise_argument_refs = premise_arguments
                .iter()
                .map(|v| v.as_slice())
                .collect::<Vec<&[StructuredArgument<P>]>>();
            premise_argument_refs
                .as_slice()
                .cart_prod()
                .for_each(|combination| {
                    let mut argument = StructuredArgument {
                        conclusion: conclusion.clone(),
                        facts: BTreeSet::new(),
                        rules: BTreeSet::from([rule_index]),
                    };
                    for sub_argument in combination {
                        argument.facts.extend(sub_argument.facts.iter().cloned());
                        argument.rules.extend(sub_argument.rules.iter().copied());
                    }
                    arguments.push(argument);
                });
        }
        arguments.sort_unstable();
        arguments.dedup();
        arguments
    }

    /// Builds the AF made of the arguments for the queried literals and their complements.
    ///
    /// An argument attacks another one iff their conclusions are complementary literals.
    pub fn argumentation_framework(
        &self,
        queries: &[Literal<P>],
    ) -> Result<AAFramework<StructuredArgument<P>>, AAError> {
        let arguments = queries
            .iter()
            .flat_map(|q| [q.clone(), q.complement()])
            .flat_map(|l| self.construct_arguments(&l))
            .collect::<BTreeSet<StructuredArgument<P>>>();
        let mut attacks = Vec::new();
        for attacker in arguments.iter() {
            for attacked in arguments.iter() {
                if attacker.conclusion.is_complement_of(&attacked.conclusion) {
                    attacks.push((attacker.clone(), attacked.clone()));
                }
            }
        }
        debug!(
            "built {} arguments and {} rebuttals from the knowledge base",
            arguments.len(),
            attacks.len()
        );
        AAFramework::new(arguments, attacks)
    }
}
