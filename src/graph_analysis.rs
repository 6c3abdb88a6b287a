use std::collections::VecDeque;

use tracing::debug;

use crate::adjacency_lists::AdjacencyList;

/// Hop distances and discovery parents from a single start vertex.
///
/// `None` in `distance` means unreachable; `None` in `parent` marks the start
/// vertex and every unreachable vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsResult {
    pub start: usize,
    pub distance: Vec<Option<usize>>,
    pub parent: Vec<Option<usize>>,
}

impl BfsResult {
    pub fn distance_to(&self, vertex: usize) -> Option<usize> {
        self.distance.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// Shortest path from the start to `destination`, or `None` when the
    /// destination does not exist or cannot be reached.
    pub fn path_to(&self, destination: usize) -> Option<Vec<usize>> {
        self.is_reachable(destination)
            .then(|| shortest_path(&self.parent, destination))
    }

    pub fn reachable_count(&self) -> usize {
        self.distance.iter().filter(|d| d.is_some()).count()
    }
}

/// Breadth-first search from `start`. Panics if `start` is not a vertex of `graph`.
pub fn bfs(graph: &AdjacencyList, start: usize) -> BfsResult {
    let n = graph.vertex_count();
    let mut distance: Vec<Option<usize>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut queue: VecDeque<usize> = VecDeque::new();

    distance[start] = Some(0);
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        let Some(current) = distance[vertex] else {
            continue; // only discovered vertices are queued
        };
        let next = current + 1;
        for &neighbor in graph.neighbors(vertex) {
            if distance[neighbor].map_or(true, |d| d > next) {
                distance[neighbor] = Some(next);
                parent[neighbor] = Some(vertex); // first discovery wins
                queue.push_back(neighbor); // a settled vertex never passes the check again
            }
        }
    }

    let result = BfsResult {
        start,
        distance,
        parent,
    };
    debug!(start, reached = result.reachable_count(), vertices = n, "bfs finished");
    result
}

// caller checks reachability, an unreachable vertex yields just [destination]
pub fn shortest_path(parent: &[Option<usize>], destination: usize) -> Vec<usize> {
    let mut path = vec![destination];
    let mut current = destination;
    while let Some(previous) = parent[current] {
        path.push(previous);
        current = previous;
    }
    path.reverse(); // walked destination -> start
    path
}
