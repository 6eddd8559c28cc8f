use serde::Serialize;
use tracing::{debug, warn};

use super::{disjoint_set::DisjointSet, Graph, NodeId};
use crate::{
    error::{GraphError, Result},
    math::kbn_sum,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdge<N> {
    pub from: N,
    pub to: N,
    pub weight: f64,
}

/// Output of [kruskal_mst]: a spanning tree, or a spanning forest if the graph was disconnected.
///
/// Holds copies of the node ids, nothing refers back into the [Graph].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree<N> {
    nodes: Vec<N>,
    edges: Vec<TreeEdge<N>>,
    total_weight: f64,
    component_count: usize,
}

impl<N> SpanningTree<N> {
    /// Every node of the source graph, in graph order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Edges in the order they were accepted
    pub fn edges(&self) -> &[TreeEdge<N>] {
        &self.edges
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Connected components spanned, isolated nodes included
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    pub fn is_connected(&self) -> bool {
        self.component_count == 1
    }

    /// Fail with [GraphError::GraphNotConnected] unless this is a single tree over every node.
    pub fn require_connected(self) -> Result<Self> {
        if self.is_connected() {
            Ok(self)
        } else {
            Err(GraphError::GraphNotConnected {
                components: self.component_count,
            })
        }
    }
}

/// Compute the MST of the undirected view with [Kruskal's algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm) in O(E log E) time.
///
/// Ties in weight keep the order of [Graph::edges], so the same graph always yields the same tree.
/// A disconnected graph yields a spanning forest, use [SpanningTree::require_connected] if that is an error.
pub fn kruskal_mst<N: NodeId>(graph: &Graph<N>) -> SpanningTree<N> {
    let node_count = graph.node_count();
    let mut sorted_edges = graph.indexed_edges().to_vec();
    // Stable, so ties keep insertion order
    sorted_edges.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut components = DisjointSet::with_capacity(node_count);
    for i in 0..node_count {
        components.make_set(i);
    }

    let mut edges = Vec::with_capacity(node_count.saturating_sub(1));
    for (i, j, weight) in sorted_edges {
        // Early stopping condition, MST already has all the edges
        if edges.len() == node_count.saturating_sub(1) {
            break;
        }
        if components.union(&i, &j) {
            edges.push(TreeEdge {
                from: graph.nodes()[i].clone(),
                to: graph.nodes()[j].clone(),
                weight,
            });
        }
    }

    let total_weight = kbn_sum(edges.iter().map(|edge| edge.weight));
    let component_count = components.set_count();
    debug!(
        "Kruskal accepted {} of {} edges (weight: {}, components: {})",
        edges.len(),
        graph.edge_count(),
        total_weight,
        component_count
    );
    if component_count > 1 {
        warn!(
            "Graph has {} components, returning a spanning forest",
            component_count
        );
    }

    SpanningTree {
        nodes: graph.nodes().to_vec(),
        edges,
        total_weight,
        component_count,
    }
}
