//! Graph sink backed by petgraph
//!
//! Stores nodes and edges with their labels in a `DiGraph`. Handles are the
//! petgraph indices, so they are unique per sink. Besides the sink port it
//! offers the queries the analysis tests and the DOT renderer need.

use petgraph::algo::has_path_connecting;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::{Dfs, EdgeRef};
use petgraph::Direction;
use std::collections::BTreeSet;

use crate::features::flow_graph::ports::{EdgeHandle, GraphSink, NodeHandle};

#[derive(Debug, Clone, Default)]
pub struct PetgraphSink {
    graph: DiGraph<String, String>,
}

fn index(handle: NodeHandle) -> NodeIndex {
    NodeIndex::new(handle.index())
}

fn handle(index: NodeIndex) -> NodeHandle {
    NodeHandle::new(index.index() as u32)
}

impl PetgraphSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &DiGraph<String, String> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn label(&self, node: NodeHandle) -> Option<&str> {
        self.graph.node_weight(index(node)).map(String::as_str)
    }

    /// All node labels in creation order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Node handles in creation order
    pub fn nodes(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.graph.node_indices().map(handle)
    }

    /// First node carrying `label`
    pub fn find(&self, label: &str) -> Option<NodeHandle> {
        self.graph
            .node_indices()
            .find(|&i| self.graph[i] == label)
            .map(handle)
    }

    /// Distinct successors, ordered by handle
    pub fn successors(&self, node: NodeHandle) -> Vec<NodeHandle> {
        self.neighbors(node, Direction::Outgoing)
    }

    /// Distinct predecessors, ordered by handle
    pub fn predecessors(&self, node: NodeHandle) -> Vec<NodeHandle> {
        self.neighbors(node, Direction::Incoming)
    }

    fn neighbors(&self, node: NodeHandle, direction: Direction) -> Vec<NodeHandle> {
        let set: BTreeSet<NodeHandle> = self
            .graph
            .neighbors_directed(index(node), direction)
            .map(handle)
            .collect();
        set.into_iter().collect()
    }

    /// Labels of all edges `from -> to`
    pub fn edge_labels(&self, from: NodeHandle, to: NodeHandle) -> Vec<&str> {
        self.graph
            .edges_connecting(index(from), index(to))
            .map(|e| e.weight().as_str())
            .collect()
    }

    pub fn has_path(&self, from: NodeHandle, to: NodeHandle) -> bool {
        has_path_connecting(&self.graph, index(from), index(to), None)
    }

    /// Every node reachable from `start`, `start` included
    pub fn reachable_from(&self, start: NodeHandle) -> BTreeSet<NodeHandle> {
        let mut seen = BTreeSet::new();
        let mut dfs = Dfs::new(&self.graph, index(start));
        while let Some(next) = dfs.next(&self.graph) {
            seen.insert(handle(next));
        }
        seen
    }

    /// Graphviz source
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::new(&self.graph))
    }
}

impl GraphSink for PetgraphSink {
    fn new_node(&mut self, label: &str) -> NodeHandle {
        handle(self.graph.add_node(label.to_string()))
    }

    fn new_edge(&mut self, from: NodeHandle, to: NodeHandle, label: &str) -> EdgeHandle {
        let edge: EdgeIndex = self.graph.add_edge(index(from), index(to), label.to_string());
        EdgeHandle::new(edge.index() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique_and_ordered() {
        let mut sink = PetgraphSink::new();
        let a = sink.new_node("a");
        let b = sink.new_node("a");

        assert_ne!(a, b);
        assert_eq!(sink.label(a), Some("a"));
        assert_eq!(sink.nodes().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn test_edges_and_paths() {
        let mut sink = PetgraphSink::new();
        let a = sink.new_node("a");
        let b = sink.new_node("b");
        let c = sink.new_node("c");
        sink.new_edge(a, b, "true");
        sink.new_edge(b, c, "");
        sink.new_edge(b, a, "");

        assert_eq!(sink.successors(b), vec![a, c]);
        assert_eq!(sink.predecessors(a), vec![b]);
        assert_eq!(sink.edge_labels(a, b), vec!["true"]);
        assert!(sink.has_path(a, c));
        assert!(!sink.has_path(c, a));
        assert_eq!(sink.reachable_from(b).len(), 3);
    }

    #[test]
    fn test_dot_contains_labels() {
        let mut sink = PetgraphSink::new();
        let a = sink.new_node("[x = 1] -- 1");
        let b = sink.new_node("[[PROGRAM END]]");
        sink.new_edge(a, b, "false");

        let dot = sink.to_dot();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("[x = 1] -- 1"));
        assert!(dot.contains("false"));
    }
}
