// disjoint set union type tracking station connectivity
// See: https://www.cs.princeton.edu/~wayne/kleinberg-tardos/pdf/UnionFind-2x2.pdf

/// Incremental connectivity over a fixed universe of station indices.
///
/// Cloning produces a fully independent copy.  The backtracking solver
/// relies on this to snapshot connectivity before a branch and restore it
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    parents: Vec<usize>,
    ranks: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            ranks: vec![0; n],
            sets: n,
        }
    }

    /// Representative of the set containing `x`.
    ///
    /// Every node visited on the way to the root is re-attached directly
    /// to the root.
    ///
    /// # Panics
    /// If `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        //path compression
        let mut node = x;
        while self.parents[node] != root {
            let next = self.parents[node];
            self.parents[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `x` and `y`.  Returns `false` if they
    /// were already the same set, in which case nothing changes.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let r = self.find(x);
        let s = self.find(y);

        if r == s {
            return false;
        }

        match self.ranks[r].cmp(&self.ranks[s]) {
            std::cmp::Ordering::Greater => {
                self.parents[s] = r;
            }
            std::cmp::Ordering::Less => {
                self.parents[r] = s;
            }
            std::cmp::Ordering::Equal => {
                self.parents[r] = s;
                self.ranks[s] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn in_same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets.  Starts at `len()` and only decreases.
    pub fn number_of_sets(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

#[test]
fn test_union() {
    // basic union operations
    let mut dsu = DisjointSet::new(5);
    assert!(dsu.union(0, 1));
    assert!(dsu.union(2, 3));
    assert!(dsu.union(1, 2));
    assert!(dsu.in_same_set(0, 2));
    assert!(dsu.in_same_set(1, 3));
    assert!(dsu.in_same_set(0, 3));
    assert!(!dsu.in_same_set(4, 2));
    assert_eq!(dsu.number_of_sets(), 2);

    // entry union with itself
    let mut dsu = DisjointSet::new(5);
    assert!(!dsu.union(0, 0));
    assert!(dsu.in_same_set(0, 0));
    assert_eq!(dsu.number_of_sets(), 5);
}

#[test]
fn test_number_of_sets() {
    let mut dsu = DisjointSet::new(6);
    assert_eq!(dsu.number_of_sets(), 6);
    dsu.union(0, 1);
    assert_eq!(dsu.number_of_sets(), 5);

    // already joined, count unchanged
    assert!(!dsu.union(1, 0));
    assert_eq!(dsu.number_of_sets(), 5);

    for i in 1..5 {
        dsu.union(i, i + 1);
    }
    assert_eq!(dsu.number_of_sets(), 1);
    assert!(DisjointSet::new(0).is_empty());
}

#[test]
fn test_find_idempotent() {
    let mut dsu = DisjointSet::new(10);
    dsu.union(0, 1);
    dsu.union(2, 3);
    dsu.union(1, 2);
    dsu.union(7, 8);
    dsu.union(8, 3);
    for x in 0..10 {
        let r = dsu.find(x);
        assert_eq!(dsu.find(r), r);
        assert_eq!(dsu.parents[r], r);
    }
}

#[test]
fn test_path_compression() {
    // build a chain by hand, then check every node points at the root
    let mut dsu = DisjointSet::new(5);
    dsu.parents = vec![1, 2, 3, 4, 4];
    assert_eq!(dsu.find(0), 4);
    assert_eq!(dsu.parents, vec![4, 4, 4, 4, 4]);
}

#[test]
fn test_clone_isolation() {
    let mut source = DisjointSet::new(4);
    source.union(0, 1);

    let mut copy = source.clone();
    copy.union(2, 3);
    copy.union(1, 2);
    assert_eq!(copy.number_of_sets(), 1);
    assert_eq!(source.number_of_sets(), 3);
    assert!(!source.in_same_set(2, 3));

    source.union(0, 3);
    let mut copy2 = copy.clone();
    assert_eq!(copy2.number_of_sets(), 1);
    assert!(copy2.in_same_set(0, 3));
    assert_eq!(source.number_of_sets(), 2);
}

#[test]
#[should_panic]
fn test_find_out_of_range() {
    let mut dsu = DisjointSet::new(3);
    dsu.find(3);
}
