use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;
use tracing::{debug, warn};

use super::{mst::SpanningTree, validate::tour_cost, Graph, NodeId};
use crate::error::{GraphError, Result};

/// A closed tour: starts and ends at the same node, visiting every other node once in between.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour<N> {
    nodes: Vec<N>,
    cost: f64,
}

impl<N> Tour<N> {
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Sum of directed weights along the tour, closing leg included
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Length of the node sequence, which repeats the start at the end
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consecutive `(from, to)` pairs, ending with the leg back to the start.
    pub fn legs(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.nodes.iter().zip(self.nodes.iter().skip(1))
    }

    /// How much longer the tour is than the tree it came from, [None] for a weightless tree.
    ///
    /// At most 2 when the weights obey the triangle inequality.
    pub fn approximation_ratio(&self, tree: &SpanningTree<N>) -> Option<f64> {
        let mst_weight = tree.total_weight();
        (mst_weight > 0.).then(|| self.cost / mst_weight)
    }
}

/// Approximate a closed TSP tour from the MST with the [double-tree heuristic](https://en.wikipedia.org/wiki/Travelling_salesman_problem#Heuristic_and_approximation_algorithms),
/// starting from the first node of the tree.
///
/// Costs come from the directed weights of `graph`, which must have a weight for every leg the shortcuts take.
/// The cost is at most twice the MST weight under the triangle inequality.
pub fn double_tree_tour<N: NodeId>(tree: &SpanningTree<N>, graph: &Graph<N>) -> Result<Tour<N>> {
    let start = tree
        .nodes()
        .first()
        .ok_or(GraphError::GraphNotConnected { components: 0 })?;
    double_tree_tour_from(tree, graph, start)
}

/// [double_tree_tour] from a chosen start node.
pub fn double_tree_tour_from<N: NodeId>(
    tree: &SpanningTree<N>,
    graph: &Graph<N>,
    start: &N,
) -> Result<Tour<N>> {
    if !tree.is_connected() {
        return Err(GraphError::GraphNotConnected {
            components: tree.component_count(),
        });
    }

    let node_to_index = tree
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, node)| (node, i))
        .collect::<HashMap<_, _>>();
    let start = *node_to_index
        .get(start)
        .ok_or_else(|| GraphError::NodeNotFound(start.to_string()))?;

    // Doubling the tree: every edge can be walked both ways
    let mut adjacency = vec![vec![]; tree.node_count()];
    for edge in tree.edges() {
        let (i, j) = (node_to_index[&edge.from], node_to_index[&edge.to]);
        adjacency[i].push(j);
        adjacency[j].push(i);
    }

    let order = shortcut_preorder(&adjacency, start);
    debug_assert_eq!(order.len(), tree.node_count());

    let mut nodes = order
        .iter()
        .map(|i| tree.nodes()[*i].clone())
        .collect::<Vec<_>>();
    nodes.push(tree.nodes()[start].clone());
    let cost = tour_cost(&nodes, graph)?;

    debug!(
        "Double-tree tour over {} nodes (cost: {}, mst: {})",
        order.len(),
        cost,
        tree.total_weight()
    );
    // Dropping any leg of a symmetric tour leaves a spanning path, which can't beat the MST
    if cost < tree.total_weight() && graph.is_symmetric() {
        warn!(
            "Tour cost {} is below the MST weight {}",
            cost,
            tree.total_weight()
        );
    }

    Ok(Tour { nodes, cost })
}

/// Depth-first preorder of a tree, which is the full walk of the doubled tree with repeat visits shortcut.
///
/// Neighbors are pushed in adjacency order, so the one added to the tree last is explored first.
fn shortcut_preorder(adjacency: &[Vec<usize>], start: usize) -> Vec<usize> {
    let mut visited = vec![false; adjacency.len()];
    let mut order = Vec::with_capacity(adjacency.len());
    let mut dfs = vec![start];
    while let Some(head) = dfs.pop() {
        if visited[head] {
            continue;
        }
        visited[head] = true;
        order.push(head);
        dfs.extend(adjacency[head].iter().filter(|neighbor| !visited[**neighbor]));
    }
    order
}
