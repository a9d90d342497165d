//! Random graphs for the coloring problem.

use rand::Rng;

use super::Point;

/// An undirected graph with a fixed circular 2D layout.
///
/// Edges are unordered pairs with no duplicates and no self-loops. Each
/// vertex gets a layout position when the graph is generated; the layout is
/// never mutated and exists purely so an external renderer can draw the
/// instance.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    num_vertices: usize,
    edges: Vec<(usize, usize)>,
    positions: Vec<Point>,
}

impl Graph {
    /// Generates a random graph: each vertex pair becomes an edge with
    /// probability `edge_probability` (clamped to `[0, 1]`).
    pub fn random<R: Rng>(num_vertices: usize, edge_probability: f64, rng: &mut R) -> Self {
        let p = edge_probability.clamp(0.0, 1.0);
        let mut edges = Vec::new();
        for i in 0..num_vertices {
            for j in (i + 1)..num_vertices {
                if rng.random_bool(p) {
                    edges.push((i, j));
                }
            }
        }
        Self {
            num_vertices,
            edges,
            positions: circular_layout(num_vertices),
        }
    }

    /// Builds a graph from an explicit edge list.
    ///
    /// Self-loops and duplicate edges (in either orientation) are dropped.
    ///
    /// # Panics
    ///
    /// Panics if an edge references a vertex outside `0..num_vertices`.
    pub fn from_edges(num_vertices: usize, edges: &[(usize, usize)]) -> Self {
        let mut seen = std::collections::HashSet::new();
        let mut deduped = Vec::with_capacity(edges.len());
        for &(a, b) in edges {
            assert!(
                a < num_vertices && b < num_vertices,
                "edge ({a}, {b}) out of range for {num_vertices} vertices"
            );
            if a == b {
                continue;
            }
            let key = (a.min(b), a.max(b));
            if seen.insert(key) {
                deduped.push(key);
            }
        }
        Self {
            num_vertices,
            edges: deduped,
            positions: circular_layout(num_vertices),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Layout position of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn position(&self, vertex: usize) -> Point {
        self.positions[vertex]
    }

    /// All vertices sharing an edge with `vertex`.
    pub fn neighbors(&self, vertex: usize) -> Vec<usize> {
        let mut neighbors = Vec::new();
        for &(a, b) in &self.edges {
            if a == vertex {
                neighbors.push(b);
            } else if b == vertex {
                neighbors.push(a);
            }
        }
        neighbors
    }
}

/// Vertices evenly spaced on a circle of radius 0.8, centered at the origin.
fn circular_layout(num_vertices: usize) -> Vec<Point> {
    (0..num_vertices)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / num_vertices as f64;
            Point::new(0.8 * angle.cos(), 0.8 * angle.sin())
        })
        .collect()
}
