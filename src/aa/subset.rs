use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

const BLOCK_BITS: usize = u64::BITS as usize;

fn n_blocks(universe_size: usize) -> usize {
    (universe_size + BLOCK_BITS - 1) / BLOCK_BITS
}

/// A subset of the arguments of a framework, represented as a bitset over argument ids.
///
/// Subsets are plain values: two subsets are equal iff they are built on the same number of arguments and contain the same ids.
/// This makes them usable as candidate sets during searches as well as extensions stored in an [`ExtensionSet`].
///
/// The subsets returned by an [`AAFramework`](crate::aa::AAFramework) remember the framework they come from,
/// and the framework operations reject the subsets coming from another one.
/// The subsets built directly from ids are not bound to any framework.
///
/// The ordering is the lexicographic order of the sorted id sequences, which gives a deterministic order to extension sets.
#[derive(Clone)]
pub struct ArgumentSubset {
    universe_size: usize,
    blocks: Vec<u64>,
    framework_id: Option<usize>,
}

/// A set of extensions.
///
/// Each extension appears once, whatever the order in which it was discovered.
pub type ExtensionSet = BTreeSet<ArgumentSubset>;

impl ArgumentSubset {
    /// Builds an empty subset of a set of `universe_size` arguments.
    pub fn new_empty(universe_size: usize) -> Self {
        Self {
            universe_size,
            blocks: vec![0; n_blocks(universe_size)],
            framework_id: None,
        }
    }

    /// Builds the subset containing all the `universe_size` arguments.
    pub fn new_full(universe_size: usize) -> Self {
        let mut s = Self {
            universe_size,
            blocks: vec![u64::MAX; n_blocks(universe_size)],
            framework_id: None,
        };
        s.clear_unused_bits();
        s
    }

    /// Builds a subset from the ids of its members.
    ///
    /// # Panics
    ///
    /// Panics if an id is not lower than `universe_size`.
    pub fn from_ids<I>(universe_size: usize, ids: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut s = Self::new_empty(universe_size);
        ids.into_iter().for_each(|i| {
            s.insert(i);
        });
        s
    }

    pub(crate) fn bound_to(mut self, framework_id: usize) -> Self {
        self.framework_id = Some(framework_id);
        self
    }

    pub(crate) fn framework_id(&self) -> Option<usize> {
        self.framework_id
    }

    fn same_framework(&self, other: &ArgumentSubset) -> bool {
        match (self.framework_id, other.framework_id) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }

    fn check_same_universe(&self, other: &ArgumentSubset) {
        assert_eq!(
            self.universe_size, other.universe_size,
            "subsets built on different numbers of arguments"
        );
        assert!(
            self.same_framework(other),
            "subsets built on different frameworks"
        );
    }

    fn clear_unused_bits(&mut self) {
        let rem = self.universe_size % BLOCK_BITS;
        if rem != 0 {
            if let Some(last) = self.blocks.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }

    /// Returns the number of arguments of the framework this subset is built on.
    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    /// Adds an argument id to the subset, returning `true` iff it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if the id is not lower than the universe size.
    pub fn insert(&mut self, id: usize) -> bool {
        assert!(
            id < self.universe_size,
            "argument id {} out of bounds (universe size is {})",
            id,
            self.universe_size
        );
        let mask = 1u64 << (id % BLOCK_BITS);
        let block = &mut self.blocks[id / BLOCK_BITS];
        let absent = *block & mask == 0;
        *block |= mask;
        absent
    }

    /// Removes an argument id from the subset, returning `true` iff it was present.
    pub fn remove(&mut self, id: usize) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.blocks[id / BLOCK_BITS] &= !(1u64 << (id % BLOCK_BITS));
        true
    }

    /// Returns `true` iff the id belongs to the subset.
    pub fn contains(&self, id: usize) -> bool {
        id < self.universe_size && self.blocks[id / BLOCK_BITS] & (1u64 << (id % BLOCK_BITS)) != 0
    }

    /// Returns the number of arguments in the subset.
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns `true` iff the subset has no argument.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| *b == 0)
    }

    /// Returns `true` iff all the members of this subset belong to the other one.
    pub fn is_subset(&self, other: &ArgumentSubset) -> bool {
        self.universe_size == other.universe_size
            && self.same_framework(other)
            && self
                .blocks
                .iter()
                .zip(other.blocks.iter())
                .all(|(a, b)| a & !b == 0)
    }

    /// Returns `true` iff this subset is included in the other one and differs from it.
    pub fn is_proper_subset(&self, other: &ArgumentSubset) -> bool {
        self.is_subset(other) && self != other
    }

    /// Returns `true` iff the two subsets share no argument.
    ///
    /// # Panics
    ///
    /// Panics if the subsets are not built on the same arguments.
    pub fn is_disjoint(&self, other: &ArgumentSubset) -> bool {
        self.check_same_universe(other);
        self.blocks
            .iter()
            .zip(other.blocks.iter())
            .all(|(a, b)| a & b == 0)
    }

    fn zip_with<F>(&self, other: &ArgumentSubset, f: F) -> ArgumentSubset
    where
        F: Fn(u64, u64) -> u64,
    {
        self.check_same_universe(other);
        ArgumentSubset {
            universe_size: self.universe_size,
            blocks: self
                .blocks
                .iter()
                .zip(other.blocks.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
            framework_id: self.framework_id.or(other.framework_id),
        }
    }

    /// Returns the union of two subsets built on the same arguments.
    ///
    /// # Panics
    ///
    /// Panics if the subsets are not built on the same arguments.
    pub fn union(&self, other: &ArgumentSubset) -> ArgumentSubset {
        self.zip_with(other, |a, b| a | b)
    }

    /// Returns the intersection of two subsets built on the same arguments.
    ///
    /// # Panics
    ///
    /// Panics if the subsets are not built on the same arguments.
    pub fn intersection(&self, other: &ArgumentSubset) -> ArgumentSubset {
        self.zip_with(other, |a, b| a & b)
    }

    /// Returns the arguments of this subset that do not belong to the other one.
    ///
    /// # Panics
    ///
    /// Panics if the subsets are not built on the same arguments.
    pub fn difference(&self, other: &ArgumentSubset) -> ArgumentSubset {
        self.zip_with(other, |a, b| a & !b)
    }

    /// Returns the arguments that do not belong to this subset.
    pub fn complement(&self) -> ArgumentSubset {
        let mut c = ArgumentSubset {
            universe_size: self.universe_size,
            blocks: self.blocks.iter().map(|b| !b).collect(),
            framework_id: self.framework_id,
        };
        c.clear_unused_bits();
        c
    }

    /// Returns an iterator to the ids of the subset, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .flat_map(|(block_index, block)| {
                let mut remaining = *block;
                std::iter::from_fn(move || {
                    if remaining == 0 {
                        return None;
                    }
                    let bit = remaining.trailing_zeros() as usize;
                    remaining &= remaining - 1;
                    Some(block_index * BLOCK_BITS + bit)
                })
            })
    }
}

impl PartialEq for ArgumentSubset {
    fn eq(&self, other: &Self) -> bool {
        self.universe_size == other.universe_size && self.blocks == other.blocks
    }
}

impl Eq for ArgumentSubset {}

impl Hash for ArgumentSubset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.universe_size.hash(state);
        self.blocks.hash(state);
    }
}

impl Ord for ArgumentSubset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter()
            .cmp(other.iter())
            .then(self.universe_size.cmp(&other.universe_size))
    }
}

impl PartialOrd for ArgumentSubset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for ArgumentSubset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
