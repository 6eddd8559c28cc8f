//! Minimum spanning trees with Kruskal's algorithm, and approximate TSP tours derived from them
//! with the double-tree heuristic.
//!
//! ```
//! use doubletree::{double_tree_tour, kruskal_mst, Graph};
//!
//! let mut graph = Graph::new();
//! for (u, v, weight) in [("A", "B", 1.), ("B", "C", 2.), ("C", "D", 3.), ("D", "A", 4.), ("A", "C", 10.), ("B", "D", 10.)] {
//!     graph.add_edge(u, v, weight)?;
//! }
//! let tree = kruskal_mst(&graph).require_connected()?;
//! assert_eq!(tree.total_weight(), 6.);
//!
//! let tour = double_tree_tour(&tree, &graph)?;
//! assert_eq!(tour.nodes(), &["A", "B", "C", "D", "A"]);
//! assert_eq!(tour.cost(), 10.);
//! # Ok::<(), doubletree::GraphError>(())
//! ```

pub mod error;
pub mod graph;
pub mod instance;
pub mod math;

pub use error::{GraphError, Result};
pub use graph::{
    build_graph,
    mst::{kruskal_mst, SpanningTree, TreeEdge},
    tsp::{double_tree_tour, double_tree_tour_from, Tour},
    validate::{is_valid_hamiltonian_cycle, is_valid_spanning_tree, tour_cost},
    Graph, NodeId,
};
