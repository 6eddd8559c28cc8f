use rustc_hash::FxHashSet as HashSet;

use super::{disjoint_set::DisjointSet, mst::SpanningTree, Graph, NodeId};
use crate::{error::Result, math::kbn_sum};

/// Sum of the directed weights between consecutive nodes of `tour`.
///
/// The single node tour `[a, a]` costs nothing. Any other missing weight, self-loops included,
/// fails with [crate::GraphError::EdgeNotFound].
pub fn tour_cost<N: NodeId>(tour: &[N], graph: &Graph<N>) -> Result<f64> {
    if let [from, to] = tour {
        if from == to {
            return Ok(0.);
        }
    }
    let weights = tour
        .windows(2)
        .map(|leg| graph.weight_of(&leg[0], &leg[1]))
        .collect::<Result<Vec<_>>>()?;
    Ok(kbn_sum(weights))
}

/// Whether `tree` is a single acyclic tree over exactly `node_count` nodes, i.e. has `node_count - 1` edges.
pub fn is_valid_spanning_tree<N: NodeId>(tree: &SpanningTree<N>, node_count: usize) -> bool {
    if tree.node_count() != node_count {
        return false;
    }
    if node_count == 0 {
        return tree.edges().is_empty();
    }
    if tree.edge_count() != node_count - 1 {
        return false;
    }
    let mut components = DisjointSet::with_capacity(node_count);
    for node in tree.nodes() {
        components.make_set(node.clone());
    }
    for edge in tree.edges() {
        if !components.union(&edge.from, &edge.to) {
            return false;
        }
    }
    // An edge naming a node outside the tree would have grown the set
    components.len() == node_count && components.set_count() == 1
}

/// Whether `tour` starts and ends at the same node and visits every node of `nodes` exactly once in between.
pub fn is_valid_hamiltonian_cycle<N: NodeId>(tour: &[N], nodes: &[N]) -> bool {
    if tour.len() != nodes.len() + 1 || tour.first() != tour.last() {
        return false;
    }
    let expected = nodes.iter().collect::<HashSet<_>>();
    if expected.len() != nodes.len() {
        return false;
    }
    let mut seen = HashSet::default();
    tour[..tour.len() - 1]
        .iter()
        .all(|node| expected.contains(node) && seen.insert(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{fixtures::square, mst::kruskal_mst},
        GraphError,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn tour_cost_follows_direction() {
        let mut graph = Graph::new();
        graph.add_arc("A", "B", 1.).unwrap();
        graph.add_arc("B", "A", 5.).unwrap();
        assert_eq!(tour_cost(&["A", "B", "A"], &graph), Ok(6.));
        assert_eq!(tour_cost(&["B", "A", "B"], &graph), Ok(6.));
        assert_eq!(tour_cost(&["A"], &graph), Ok(0.));
        assert_eq!(tour_cost(&["A", "A"], &graph), Ok(0.));
    }

    #[test]
    fn tour_cost_needs_every_leg() {
        let graph = square();
        assert!(tour_cost(&["A", "B", "Z"], &graph).is_err());
    }

    #[test]
    fn self_leg_is_free_only_for_single_node_tour() {
        let graph = square();
        assert_eq!(tour_cost(&["A", "A"], &graph), Ok(0.));
        assert_eq!(
            tour_cost(&["A", "A", "B"], &graph),
            Err(GraphError::edge_not_found("A", "A"))
        );
        assert_eq!(
            tour_cost(&["A", "B", "B", "A"], &graph),
            Err(GraphError::edge_not_found("B", "B"))
        );
    }

    #[test]
    fn spanning_tree_is_validated() {
        let tree = kruskal_mst(&square());
        assert!(is_valid_spanning_tree(&tree, 4));
        assert!(!is_valid_spanning_tree(&tree, 5));
        assert!(!is_valid_spanning_tree(&tree, 3));
    }

    #[test]
    fn forest_is_not_a_spanning_tree() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 1.).unwrap();
        graph.add_edge(3, 4, 1.).unwrap();
        graph.add_node(5);
        let forest = kruskal_mst(&graph);
        assert_eq!(forest.edge_count(), 2);
        assert!(!is_valid_spanning_tree(&forest, 3));
        assert!(!is_valid_spanning_tree(&forest, 5));
    }

    #[test]
    fn empty_tree_spans_nothing() {
        let tree = kruskal_mst(&Graph::<u8>::new());
        assert!(is_valid_spanning_tree(&tree, 0));
        assert!(!is_valid_spanning_tree(&tree, 1));
    }

    #[test]
    fn hamiltonian_cycle_is_validated() {
        let nodes = ["A", "B", "C", "D"];
        assert!(is_valid_hamiltonian_cycle(&["A", "B", "C", "D", "A"], &nodes));
        assert!(is_valid_hamiltonian_cycle(&["C", "A", "D", "B", "C"], &nodes));
        // Not closed
        assert!(!is_valid_hamiltonian_cycle(&["A", "B", "C", "D", "B"], &nodes));
        // Repeats a node
        assert!(!is_valid_hamiltonian_cycle(&["A", "B", "B", "D", "A"], &nodes));
        // Unknown node
        assert!(!is_valid_hamiltonian_cycle(&["A", "B", "C", "E", "A"], &nodes));
        // Too short
        assert!(!is_valid_hamiltonian_cycle(&["A", "B", "C", "A"], &nodes));
        assert!(is_valid_hamiltonian_cycle(&["A", "A"], &["A"]));
        assert!(!is_valid_hamiltonian_cycle::<&str>(&[], &[]));
    }
}
