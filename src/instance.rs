//! JSON description of a problem instance, as read by the command line tool.

use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};
use tracing::debug;

use crate::{error::Result, graph::Graph};

/// Node identifier as written in an instance: a JSON integer or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Index(u64),
    Name(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Anything that parses as an integer is an [Label::Index], matching how JSON ids are read.
impl FromStr for Label {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(input
            .parse()
            .map(Self::Index)
            .unwrap_or_else(|_| Self::Name(input.to_owned())))
    }
}

impl Label {
    /// Match a label parsed from the command line against the nodes of `graph`.
    ///
    /// `"1"` parses to [Label::Index], but an instance may spell the node as the string `"1"`.
    /// When only the [Label::Name] form is in the graph, that one is returned.
    pub fn resolve_in(self, graph: &Graph<Label>) -> Label {
        if let Self::Index(i) = &self {
            let name = Self::Name(i.to_string());
            if !graph.contains_node(&self) && graph.contains_node(&name) {
                return name;
            }
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance<N> {
    #[serde(default)]
    pub name: Option<String>,
    /// Listed nodes come first in node order, so the first one is the default tour start
    #[serde(default = "Vec::new")]
    pub nodes: Vec<N>,
    /// Undirected `[u, v, weight]` triples
    #[serde(default = "Vec::new")]
    pub edges: Vec<(N, N, f64)>,
    /// Directed `[u, v, weight]` triples, later ones win
    #[serde(default = "Vec::new")]
    pub arcs: Vec<(N, N, f64)>,
}

impl<N: crate::graph::NodeId> Instance<N> {
    /// Build the graph, dropping self-pairs (e.g. the diagonal of a full matrix).
    pub fn to_graph(&self) -> Result<Graph<N>> {
        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_node(node.clone());
        }
        for (u, v, weight) in &self.edges {
            if u == v {
                debug!("Dropping self-loop on {}", u);
                continue;
            }
            graph.add_edge(u.clone(), v.clone(), *weight)?;
        }
        for (u, v, weight) in &self.arcs {
            if u == v {
                debug!("Dropping self-loop on {}", u);
                continue;
            }
            graph.add_arc(u.clone(), v.clone(), *weight)?;
        }
        Ok(graph)
    }
}
