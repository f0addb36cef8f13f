use crate::aa::LabelType;
use log::debug;
use std::collections::{HashMap, VecDeque};
use thiserror::Error;

/// The errors raised while building or querying a [`SocialNetwork`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrustError {
    /// An agent involved in a trust relation or in a query is not part of the network.
    #[error("unknown agent {0}")]
    UnknownAgent(String),
    /// Two trust values were given for the same pair of agents.
    #[error("two trust values for the relation {truster} -> {trusted}")]
    DuplicatedRelation {
        /// the agent that trusts
        truster: String,
        /// the agent that is trusted
        trusted: String,
    },
    /// A trust value is not in the interval [0,1].
    #[error("trust value {value} of the relation {truster} -> {trusted} is not in [0,1]")]
    InvalidTrustValue {
        /// the agent that trusts
        truster: String,
        /// the agent that is trusted
        trusted: String,
        /// the invalid value
        value: f64,
    },
}

/// The type of the operators used to combine trust values.
pub type TrustOperator = fn(f64, f64) -> f64;

/// A directed trust relation between two agents.
#[derive(Debug, Clone, PartialEq)]
pub struct TrustRelation<'a, A>
where
    A: LabelType,
{
    truster: &'a A,
    trusted: &'a A,
    value: f64,
}

impl<'a, A> TrustRelation<'a, A>
where
    A: LabelType,
{
    /// Returns the agent that trusts.
    pub fn truster(&self) -> &'a A {
        self.truster
    }

    /// Returns the agent that is trusted.
    pub fn trusted(&self) -> &'a A {
        self.trusted
    }

    /// Returns the trust value, from 0 (no trust) to 1 (full trust).
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// A set of agents and the directed trust relations between them.
///
/// Each relation holds a value between 0 (no trust) and 1 (full trust); a pair of agents has at most one value.
/// Trust propagates along the paths of the network:
/// the trust values of the links of a path are combined by the transitive operator (default: [f64::min]),
/// and the trust values of the paths between two agents are combined by the paths operator (default: [f64::max]).
///
/// # Example
///
/// ```
/// # use argtrust::trust::SocialNetwork;
/// let network = SocialNetwork::new(
///     ["A", "B", "C", "D"],
///     [("A", "B", 0.5), ("A", "C", 0.8), ("B", "D", 0.4), ("C", "D", 0.7)],
/// ).unwrap();
/// assert_eq!(0.7, network.trust(&"A", &"D").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct SocialNetwork<A>
where
    A: LabelType,
{
    agents: Vec<A>,
    agent_to_id: HashMap<A, usize>,
    trusted_by: Vec<Vec<(usize, f64)>>,
    transitive_operator: TrustOperator,
    paths_operator: TrustOperator,
}

impl<A> SocialNetwork<A>
where
    A: LabelType,
{
    /// Builds a social network with the default trust operators.
    ///
    /// Duplicated agents are merged.
    /// An error is returned if a relation involves an unknown agent, has a value outside [0,1], or is given twice.
    pub fn new<I, J>(agents: I, relations: J) -> Result<Self, TrustError>
    where
        I: IntoIterator<Item = A>,
        J: IntoIterator<Item = (A, A, f64)>,
    {
        Self::new_with_operators(agents, relations, f64::min, f64::max)
    }

    /// Builds a social network with custom trust operators.
    pub fn new_with_operators<I, J>(
        agents: I,
        relations: J,
        transitive_operator: TrustOperator,
        paths_operator: TrustOperator,
    ) -> Result<Self, TrustError>
    where
        I: IntoIterator<Item = A>,
        J: IntoIterator<Item = (A, A, f64)>,
    {
        let mut network = SocialNetwork {
            agents: vec![],
            agent_to_id: HashMap::new(),
            trusted_by: vec![],
            transitive_operator,
            paths_operator,
        };
        for agent in agents {
            if !network.agent_to_id.contains_key(&agent) {
                network.agent_to_id.insert(agent.clone(), network.agents.len());
                network.agents.push(agent);
                network.trusted_by.push(vec![]);
            }
        }
        for (truster, trusted, value) in relations {
            let truster_id = network.agent_id(&truster)?;
            let trusted_id = network.agent_id(&trusted)?;
            if !(0.0..=1.0).contains(&value) {
                return Err(TrustError::InvalidTrustValue {
                    truster: truster.to_string(),
                    trusted: trusted.to_string(),
                    value,
                });
            }
            if network.trusted_by[truster_id]
                .iter()
                .any(|(id, _)| *id == trusted_id)
            {
                return Err(TrustError::DuplicatedRelation {
                    truster: truster.to_string(),
                    trusted: trusted.to_string(),
                });
            }
            network.trusted_by[truster_id].push((trusted_id, value));
        }
        Ok(network)
    }

    fn agent_id(&self, agent: &A) -> Result<usize, TrustError> {
        self.agent_to_id
            .get(agent)
            .copied()
            .ok_or_else(|| TrustError::UnknownAgent(agent.to_string()))
    }

    /// Returns the number of agents.
    pub fn n_agents(&self) -> usize {
        self.agents.len()
    }

    /// Iterates over the agents, in the order they were given.
    pub fn iter_agents(&self) -> impl Iterator<Item = &A> + '_ {
        self.agents.iter()
    }

    /// Returns `true` iff the agent belongs to the network.
    pub fn contains(&self, agent: &A) -> bool {
        self.agent_to_id.contains_key(agent)
    }

    /// Iterates over the trust relations.
    pub fn iter_relations(&self) -> impl Iterator<Item = TrustRelation<'_, A>> + '_ {
        self.trusted_by.iter().enumerate().flat_map(move |(i, v)| {
            v.iter().map(move |(j, value)| TrustRelation {
                truster: &self.agents[i],
                trusted: &self.agents[*j],
                value: *value,
            })
        })
    }

    /// Returns all the simple paths from an agent to another one, as sequences of trust relations.
    ///
    /// A path never visits the same agent twice, so there is no path from an agent to itself.
    pub fn find_paths(
        &self,
        source: &A,
        destination: &A,
    ) -> Result<Vec<Vec<TrustRelation<'_, A>>>, TrustError> {
        let source_id = self.agent_id(source)?;
        let destination_id = self.agent_id(destination)?;
        let mut paths = vec![];
        if source_id != destination_id {
            let mut visited = vec![false; self.agents.len()];
            let mut current = vec![];
            self.extend_paths(source_id, destination_id, &mut visited, &mut current, &mut paths);
        }
        Ok(paths)
    }

    fn extend_paths<'a>(
        &'a self,
        from: usize,
        destination: usize,
        visited: &mut [bool],
        current: &mut Vec<TrustRelation<'a, A>>,
        paths: &mut Vec<Vec<TrustRelation<'a, A>>>,
    ) {
        visited[from] = true;
        for (to, value) in self.trusted_by[from].iter() {
            if visited[*to] {
                continue;
            }
            current.push(TrustRelation {
                truster: &self.agents[from],
                trusted: &self.agents[*to],
                value: *value,
            });
            if *to == destination {
                paths.push(current.clone());
            } else {
                self.extend_paths(*to, destination, visited, current, paths);
            }
            current.pop();
        }
        visited[from] = false;
    }

    /// Returns how much an agent trusts another one.
    ///
    /// The trust values are combined along each path by the transitive operator, starting from 1,
    /// and the values of the paths are combined by the paths operator, starting from 0.
    /// An agent that has no path to another one does not trust it (0), and an agent fully trusts itself (1).
    pub fn trust(&self, truster: &A, trustee: &A) -> Result<f64, TrustError> {
        if self.agent_id(truster)? == self.agent_id(trustee)? {
            return Ok(1.0);
        }
        let paths = self.find_paths(truster, trustee)?;
        debug!(
            "found {} trust path(s) from {} to {}",
            paths.len(),
            truster,
            trustee
        );
        Ok(paths.iter().fold(0.0, |trust, path| {
            let path_trust = path
                .iter()
                .fold(1.0, |acc, link| (self.transitive_operator)(acc, link.value));
            (self.paths_operator)(trust, path_trust)
        }))
    }

    /// Returns the sub-network made of the agents an agent can reach, and the relations between them.
    ///
    /// The agent itself belongs to the sub-network, which uses the same trust operators.
    pub fn agent_centric(&self, agent: &A) -> Result<SocialNetwork<A>, TrustError> {
        let root = self.agent_id(agent)?;
        let mut reachable = vec![false; self.agents.len()];
        reachable[root] = true;
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            for (next, _) in self.trusted_by[current].iter() {
                if !reachable[*next] {
                    reachable[*next] = true;
                    queue.push_back(*next);
                }
            }
        }
        let agents = self
            .agents
            .iter()
            .enumerate()
            .filter(|(i, _)| reachable[*i])
            .map(|(_, a)| a.clone())
            .collect::<Vec<A>>();
        let relations = self
            .iter_relations()
            .filter(|r| reachable[self.agent_to_id[r.truster]] && reachable[self.agent_to_id[r.trusted]])
            .map(|r| (r.truster.clone(), r.trusted.clone(), r.value))
            .collect::<Vec<(A, A, f64)>>();
        Self::new_with_operators(agents, relations, self.transitive_operator, self.paths_operator)
    }
}
