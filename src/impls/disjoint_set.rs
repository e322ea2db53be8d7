//! Submodule providing the disjoint-set forest used by the weakly-connected
//! component computations.

/// A union-find forest over the indices `0..len`, with path halving and
/// union by rank.
#[derive(Debug, Clone)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Returns a forest of `len` singleton sets.
    pub(crate) fn new(len: usize) -> Self {
        Self { parent: (0..len).collect(), rank: vec![0; len] }
    }

    /// Returns the representative of the set containing `item`.
    pub(crate) fn find(&mut self, mut item: usize) -> usize {
        while self.parent[item] != item {
            self.parent[item] = self.parent[self.parent[item]];
            item = self.parent[item];
        }
        item
    }

    /// Unites the sets containing `a` and `b`.
    pub(crate) fn union(&mut self, a: usize, b: usize) {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        if self.rank[ra] < self.rank[rb] {
            core::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        if self.rank[ra] == self.rank[rb] {
            self.rank[ra] += 1;
        }
    }

    /// Groups the indices by set, optionally dropping singleton sets.
    pub(crate) fn sets(&mut self, singletons: bool) -> Vec<Vec<usize>> {
        let mut by_root: Vec<Vec<usize>> = vec![Vec::new(); self.parent.len()];
        for item in 0..self.parent.len() {
            let root = self.find(item);
            by_root[root].push(item);
        }
        by_root
            .into_iter()
            .filter(|set| if singletons { !set.is_empty() } else { set.len() > 1 })
            .collect()
    }
}
