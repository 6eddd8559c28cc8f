//! Weighted graph with an undirected view for spanning trees and a directed view for tour costs.

use rustc_hash::FxHashMap as HashMap;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use crate::error::{GraphError, Result};

/// Union-find used for cycle detection
pub mod disjoint_set;
#[cfg(test)]
pub(crate) mod fixtures;
/// Find the [Minimum Spanning Tree (MST)](https://en.wikipedia.org/wiki/Minimum_spanning_tree)
pub mod mst;
/// Approximate the [Traveling Salesman Problem (TSP)](https://en.wikipedia.org/wiki/Travelling_salesman_problem)
pub mod tsp;
/// Tour costs and structural checks on trees and tours
pub mod validate;

/// Anything usable as a node identifier.
pub trait NodeId: Clone + Eq + Hash + Debug + Display {}

impl<T: Clone + Eq + Hash + Debug + Display> NodeId for T {}

/// Nodes plus weighted edges.
///
/// The same store backs two views:
/// * undirected: [Graph::edges] yields one canonical weight per unordered pair, in first-insertion order
/// * directed: [Graph::weight_of] looks up the weight of an ordered pair
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    node_to_index: HashMap<N, usize>,
    /// Undirected edges, endpoints stored as node indices
    edges: Vec<(usize, usize, f64)>,
    /// Position in `edges` keyed by the sorted index pair
    edge_slots: HashMap<[usize; 2], usize>,
    arcs: HashMap<(usize, usize), f64>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: vec![],
            node_to_index: HashMap::default(),
            edges: vec![],
            edge_slots: HashMap::default(),
            arcs: HashMap::default(),
        }
    }
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, doing nothing if it is already present.
    pub fn add_node(&mut self, id: N) {
        self.index_or_insert(id);
    }

    /// Insert an undirected edge, adding missing endpoints as nodes.
    ///
    /// Both directions of the directed view get `weight` unless they were already set with [Graph::add_arc].
    /// Re-inserting a pair with the weight it already has is a no-op; a different weight is rejected
    /// with [GraphError::InvalidWeightConflict].
    pub fn add_edge(&mut self, u: N, v: N, weight: f64) -> Result<()> {
        validate_edge(&u, &v, weight)?;
        let (i, j) = (self.index_or_insert(u), self.index_or_insert(v));
        match self.edge_slots.get(&sorted_pair(i, j)) {
            Some(slot) => {
                let existing = self.edges[*slot].2;
                if existing != weight {
                    return Err(GraphError::InvalidWeightConflict {
                        from: self.nodes[i].to_string(),
                        to: self.nodes[j].to_string(),
                        existing,
                        requested: weight,
                    });
                }
            }
            None => self.push_edge(i, j, weight),
        }
        self.arcs.entry((i, j)).or_insert(weight);
        self.arcs.entry((j, i)).or_insert(weight);
        Ok(())
    }

    /// Insert a directed arc, adding missing endpoints as nodes.
    ///
    /// Later writes are authoritative: the arc's weight is overwritten, and so is the canonical
    /// weight of the unordered pair in the undirected view. The pair keeps the position in
    /// [Graph::edges] from when it was first inserted.
    pub fn add_arc(&mut self, u: N, v: N, weight: f64) -> Result<()> {
        validate_edge(&u, &v, weight)?;
        let (i, j) = (self.index_or_insert(u), self.index_or_insert(v));
        self.arcs.insert((i, j), weight);
        match self.edge_slots.get(&sorted_pair(i, j)) {
            Some(slot) => self.edges[*slot].2 = weight,
            None => self.push_edge(i, j, weight),
        }
        Ok(())
    }

    /// Weight of the ordered pair `(u, v)` in the directed view.
    pub fn weight_of(&self, u: &N, v: &N) -> Result<f64> {
        self.node_to_index
            .get(u)
            .zip(self.node_to_index.get(v))
            .and_then(|(i, j)| self.arcs.get(&(*i, *j)))
            .copied()
            .ok_or_else(|| GraphError::edge_not_found(u, v))
    }

    /// Undirected edges as `(u, v, weight)`, in the order their pair was first inserted.
    ///
    /// Borrows the graph, so it can be called again for a fresh pass.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, f64)> + Clone + '_ {
        self.edges
            .iter()
            .map(move |(i, j, weight)| (&self.nodes[*i], &self.nodes[*j], *weight))
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of unordered pairs in the undirected view.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: &N) -> bool {
        self.node_to_index.contains_key(id)
    }

    /// Whether every arc has a reverse arc with the same weight.
    pub fn is_symmetric(&self) -> bool {
        self.arcs
            .iter()
            .all(|((i, j), weight)| self.arcs.get(&(*j, *i)) == Some(weight))
    }

    pub(crate) fn index_of(&self, id: &N) -> Option<usize> {
        self.node_to_index.get(id).copied()
    }

    /// Undirected edges by node index, same order as [Graph::edges].
    pub(crate) fn indexed_edges(&self) -> &[(usize, usize, f64)] {
        &self.edges
    }

    fn index_or_insert(&mut self, id: N) -> usize {
        if let Some(index) = self.node_to_index.get(&id) {
            return *index;
        }
        let index = self.nodes.len();
        self.node_to_index.insert(id.clone(), index);
        self.nodes.push(id);
        index
    }

    fn push_edge(&mut self, i: usize, j: usize, weight: f64) {
        self.edge_slots.insert(sorted_pair(i, j), self.edges.len());
        self.edges.push((i, j, weight));
    }
}

/// Build a graph from a node sequence and a directed weight table.
///
/// Nodes come first so that node order (and thus the default tour start) follows `nodes`.
/// Arcs may mention nodes not listed in `nodes`, they are appended in order of appearance.
pub fn build_graph<N, I, A>(nodes: I, arcs: A) -> Result<Graph<N>>
where
    N: NodeId,
    I: IntoIterator<Item = N>,
    A: IntoIterator<Item = (N, N, f64)>,
{
    let mut graph = Graph::new();
    for node in nodes {
        graph.add_node(node);
    }
    for (u, v, weight) in arcs {
        graph.add_arc(u, v, weight)?;
    }
    Ok(graph)
}

fn validate_edge<N: NodeId>(u: &N, v: &N, weight: f64) -> Result<()> {
    if u == v {
        return Err(GraphError::InvalidEdge {
            from: u.to_string(),
            to: v.to_string(),
            reason: "self-loops are not allowed",
        });
    }
    // Also catches NaN
    if !(weight.is_finite() && weight >= 0.) {
        return Err(GraphError::InvalidWeight {
            from: u.to_string(),
            to: v.to_string(),
            weight,
        });
    }
    Ok(())
}

fn sorted_pair(i: usize, j: usize) -> [usize; 2] {
    if i <= j {
        [i, j]
    } else {
        [j, i]
    }
}
