//! Disjoint-set union (union-find) over dense indices.

/// Union-find with union by rank and iterative path compression.
///
/// Used by the greedy selector to reject edges that would close a cycle
/// before every node is on the tour.
///
/// # Examples
///
/// ```
/// use greedy_tour::constructive::DisjointSet;
///
/// let mut ds = DisjointSet::new(4);
/// assert!(ds.union(0, 1));
/// assert!(ds.union(2, 3));
/// assert!(!ds.same_set(1, 2));
/// assert!(ds.union(1, 3));
/// assert!(ds.same_set(0, 2));
/// assert!(!ds.union(0, 2));
/// assert_eq!(ds.component_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets `{0}, {1}, …, {n-1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the representative of `i`'s set, compressing the path.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `i` and `j`. Returns `false` if they were already joined.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let ri = self.find(i);
        let rj = self.find(j);
        if ri == rj {
            return false;
        }
        match self.rank[ri].cmp(&self.rank[rj]) {
            std::cmp::Ordering::Less => self.parent[ri] = rj,
            std::cmp::Ordering::Greater => self.parent[rj] = ri,
            std::cmp::Ordering::Equal => {
                self.parent[rj] = ri;
                self.rank[ri] += 1;
            }
        }
        self.components -= 1;
        true
    }

    /// Returns `true` if `i` and `j` are in the same set.
    pub fn same_set(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the structure has no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }
}
