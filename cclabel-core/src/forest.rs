//! Disjoint-set forest over provisional label values.
//!
//! The labeller mints provisional labels in a single causal raster scan and
//! records which of them denote the same component here. Labels index
//! directly into flat `parent`/`rank` arrays; slot `0` is never a member
//! because label `0` marks background, and a slot whose parent is `0` has not
//! been registered.

use crate::error::ForestError;

/// Handle to a label registered in a [`DisjointSetForest`].
///
/// Nodes are only handed out by the forest that registered them. A node
/// passed to a forest that never registered its label is rejected with
/// [`ForestError::UnknownLabel`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Node(u32);

impl Node {
    /// Returns the label value this node wraps.
    #[rustfmt::skip]
    #[must_use]
    pub const fn label(self) -> u32 { self.0 }
}

/// Union-find structure with path compression and union by rank.
///
/// # Examples
/// ```
/// use cclabel_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new();
/// let one = forest.make_set(1)?;
/// let two = forest.make_set(2)?;
/// forest.union(one, two)?;
/// assert_eq!(forest.find(one)?, forest.find(two)?);
/// assert_eq!(forest.set_count(), 1);
/// # Ok::<(), cclabel_core::ForestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<u32>,
    rank: Vec<u8>,
    members: usize,
    sets: usize,
}

impl Default for DisjointSetForest {
    fn default() -> Self {
        Self::new()
    }
}

impl DisjointSetForest {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty forest with room for labels `1..=labels` without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(labels: usize) -> Self {
        let slots = labels.saturating_add(1);
        let mut parent = Vec::with_capacity(slots);
        let mut rank = Vec::with_capacity(slots);
        parent.push(0);
        rank.push(0);
        Self {
            parent,
            rank,
            members: 0,
            sets: 0,
        }
    }

    /// Number of registered labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members
    }

    /// Whether no label has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members == 0
    }

    /// Number of disjoint classes currently in the forest.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Registers `label` as a new singleton class.
    ///
    /// # Errors
    /// Returns [`ForestError::ReservedLabel`] for label `0` and
    /// [`ForestError::DuplicateLabel`] when `label` is already registered.
    pub fn make_set(&mut self, label: u32) -> Result<Node, ForestError> {
        if label == 0 {
            return Err(ForestError::ReservedLabel);
        }
        let slot = label as usize;
        if slot >= self.parent.len() {
            self.parent.resize(slot + 1, 0);
            self.rank.resize(slot + 1, 0);
        }
        if self.parent[slot] != 0 {
            return Err(ForestError::DuplicateLabel { label });
        }
        self.parent[slot] = label;
        self.members += 1;
        self.sets += 1;
        Ok(Node(label))
    }

    /// Returns the node for an already registered `label`.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownLabel`] when `label` was never passed to
    /// [`Self::make_set`].
    pub fn node(&self, label: u32) -> Result<Node, ForestError> {
        match self.parent.get(label as usize) {
            Some(&parent) if parent != 0 => Ok(Node(label)),
            _ => Err(ForestError::UnknownLabel { label }),
        }
    }

    /// Returns the root of the class containing `node`, compressing the path
    /// walked to reach it.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownLabel`] when `node` was not registered
    /// with this forest.
    pub fn find(&mut self, node: Node) -> Result<Node, ForestError> {
        let start = self.node(node.0)?.0;
        let mut root = start;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut current = start;
        while self.parent[current as usize] != current {
            let parent = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = parent;
        }

        Ok(Node(root))
    }

    /// Merges the classes containing `left` and `right` and returns the root
    /// of the merged class.
    ///
    /// The root with the higher rank survives; on a tie `left`'s root does.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownLabel`] when either node was not
    /// registered with this forest. Neither class changes in that case.
    pub fn union(&mut self, left: Node, right: Node) -> Result<Node, ForestError> {
        self.node(right.0)?;
        let mut left = self.find(left)?.0;
        let mut right = self.find(right)?.0;
        if left == right {
            return Ok(Node(left));
        }
        let left_rank = self.rank[left as usize];
        let right_rank = self.rank[right as usize];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right as usize] = left;
        if left_rank == right_rank {
            self.rank[left as usize] = left_rank.saturating_add(1);
        }
        self.sets -= 1;
        Ok(Node(left))
    }
}
