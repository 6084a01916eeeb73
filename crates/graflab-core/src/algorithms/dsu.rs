//! Disjoint-set union (union-find) over vertex ids.

use graflab_common::utils::hash::FxHashMap;
use graflab_common::VertexId;

/// Union-find over the vertex ids registered at construction time.
///
/// Used exclusively by Kruskal to decide in O(log* n) amortized whether
/// adding an edge would close a cycle. Path compression on `find`,
/// union by rank on `union`.
#[derive(Debug)]
pub struct DisjointSetUnion {
    parent: FxHashMap<VertexId, VertexId>,
    rank: FxHashMap<VertexId, u32>,
}

impl DisjointSetUnion {
    /// Builds a forest of singletons, one per given vertex id.
    pub fn new(vertices: impl IntoIterator<Item = VertexId>) -> Self {
        let mut dsu = Self {
            parent: FxHashMap::default(),
            rank: FxHashMap::default(),
        };
        for id in vertices {
            dsu.make_set(id);
        }
        dsu
    }

    fn make_set(&mut self, x: VertexId) {
        self.parent.insert(x, x);
        self.rank.insert(x, 0);
    }

    /// Returns the representative of the set containing `x`, compressing the
    /// path walked. An unregistered id lazily becomes its own singleton set;
    /// that is a defensive fallback, not expected in normal use.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        if !self.parent.contains_key(&x) {
            self.make_set(x);
            return x;
        }

        let mut root = x;
        while self.parent[&root] != root {
            root = self.parent[&root];
        }

        // Path compression: repoint everything on the walked path at the root.
        let mut current = x;
        while current != root {
            let next = self.parent[&current];
            self.parent.insert(current, root);
            current = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` (no-op) when they already share a root. Rank ties
    /// resolve by making `y`'s root a child of `x`'s root and bumping the
    /// latter's rank.
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let rank_x = self.rank[&root_x];
        let rank_y = self.rank[&root_y];
        if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else if rank_x > rank_y {
            self.parent.insert(root_y, root_x);
        } else {
            self.parent.insert(root_y, root_x);
            self.rank.insert(root_x, rank_x + 1);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: impl IntoIterator<Item = u64>) -> Vec<VertexId> {
        values.into_iter().map(VertexId::new).collect()
    }

    #[test]
    fn test_singletons_are_their_own_roots() {
        let mut dsu = DisjointSetUnion::new(ids(0..4));
        for i in 0..4 {
            assert_eq!(dsu.find(VertexId::new(i)), VertexId::new(i));
        }
    }

    #[test]
    fn test_union_merges_and_reports() {
        let mut dsu = DisjointSetUnion::new(ids(0..4));
        assert!(dsu.union(VertexId::new(0), VertexId::new(1)));
        assert!(!dsu.union(VertexId::new(1), VertexId::new(0)));
        assert_eq!(
            dsu.find(VertexId::new(0)),
            dsu.find(VertexId::new(1))
        );
        assert_ne!(
            dsu.find(VertexId::new(0)),
            dsu.find(VertexId::new(2))
        );
    }

    #[test]
    fn test_rank_tie_keeps_first_root() {
        let mut dsu = DisjointSetUnion::new(ids(0..2));
        assert!(dsu.union(VertexId::new(0), VertexId::new(1)));
        // Equal ranks: y's root becomes a child of x's root.
        assert_eq!(dsu.find(VertexId::new(1)), VertexId::new(0));
    }

    #[test]
    fn test_transitive_connectivity() {
        let mut dsu = DisjointSetUnion::new(ids(0..6));
        dsu.union(VertexId::new(0), VertexId::new(1));
        dsu.union(VertexId::new(2), VertexId::new(3));
        dsu.union(VertexId::new(1), VertexId::new(3));
        assert_eq!(dsu.find(VertexId::new(0)), dsu.find(VertexId::new(2)));
        assert_ne!(dsu.find(VertexId::new(0)), dsu.find(VertexId::new(4)));
    }

    #[test]
    fn test_find_lazily_registers_unknown_id() {
        let mut dsu = DisjointSetUnion::new(ids(0..2));
        let ghost = VertexId::new(42);
        assert_eq!(dsu.find(ghost), ghost);
        assert!(dsu.union(VertexId::new(0), ghost));
    }
}
