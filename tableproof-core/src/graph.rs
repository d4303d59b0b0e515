//! Adjacency graphs for relationship diagrams

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Node name to the names of the nodes it connects to.
///
/// Adjacency lists keep duplicates; comparisons sort them first so order never
/// matters but multiplicity does.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    nodes: BTreeMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a node's adjacency.
    pub fn insert<I, S>(&mut self, node: impl Into<String>, adjacent: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes
            .insert(node.into(), adjacent.into_iter().map(Into::into).collect());
    }

    pub fn adjacent(&self, node: &str) -> Option<&[String]> {
        self.nodes.get(node).map(Vec::as_slice)
    }

    /// Adjacency of `node` in sorted order.
    pub fn sorted_adjacent(&self, node: &str) -> Option<Vec<String>> {
        self.adjacent(node).map(|adjacent| {
            let mut sorted = adjacent.to_vec();
            sorted.sort();
            sorted
        })
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    /// Nodes with their adjacency, ordered by node name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.nodes
            .iter()
            .map(|(node, adjacent)| (node.as_str(), adjacent.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<K, I, S> FromIterator<(K, I)> for Graph
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut graph = Graph::new();
        for (node, adjacent) in iter {
            graph.insert(node, adjacent);
        }
        graph
    }
}
