use crate::road_map::RoadMap;

/// Undirected adjacency list indexed by vertex. Neighbor order follows the
/// order edges were added; self-loops and parallel edges are kept as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut neighbors = vec![Vec::new(); vertex_count];
        // endpoints must be below vertex_count
        for &(a, b) in edges {
            neighbors[a].push(b);
            neighbors[b].push(a); // undirected, a self-loop lands twice
        }
        Self { neighbors }
    }

    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.neighbors[vertex]
    }
}

/// Adjacency list for a loaded road map. Endpoints were range-checked by the
/// loader, so this cannot fail.
pub fn build_adjacency(road_map: &RoadMap) -> AdjacencyList {
    AdjacencyList::from_edges(road_map.vertex_count(), road_map.edges())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::road_map::{parse_road_map, LoadOptions};

    #[test]
    fn test_build_adjacency() {
        let road_map = parse_road_map("4\n3\n0 1\n1 2\n2 3\n0\n", LoadOptions::default()).unwrap();
        let adjacency = build_adjacency(&road_map);

        assert_eq!(adjacency.vertex_count(), 4);
        assert_eq!(adjacency.neighbors(0), &[1]);
        assert_eq!(adjacency.neighbors(1), &[0, 2]); // input order
        assert_eq!(adjacency.neighbors(2), &[1, 3]);
        assert_eq!(adjacency.neighbors(3), &[2]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let edges = [(0, 3), (3, 1), (1, 1), (2, 0), (0, 3)];
        let adjacency = AdjacencyList::from_edges(5, &edges);

        for a in 0..adjacency.vertex_count() {
            for &b in adjacency.neighbors(a) {
                let forward = adjacency.neighbors(a).iter().filter(|&&n| n == b).count();
                let backward = adjacency.neighbors(b).iter().filter(|&&n| n == a).count();
                assert_eq!(forward, backward, "edge {a}-{b}");
            }
        }
    }

    #[test]
    fn test_self_loops_and_parallel_edges_preserved() {
        let adjacency = AdjacencyList::from_edges(2, &[(0, 0), (0, 1), (0, 1)]);
        assert_eq!(adjacency.neighbors(0), &[0, 0, 1, 1]);
        assert_eq!(adjacency.neighbors(1), &[0, 0]);
    }

    #[test]
    fn test_isolated_vertices_have_no_neighbors() {
        let adjacency = AdjacencyList::from_edges(3, &[]);
        assert_eq!(adjacency.vertex_count(), 3);
        assert!(adjacency.neighbors(2).is_empty());
    }
}
