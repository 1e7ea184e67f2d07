use std::{
    collections::HashMap,
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{error::Error, node::Node};

/// A directed graph stored as an adjacency list.
///
/// Nodes are kept in declaration order, and a name-to-index map backs the
/// edge operations so that resolving a source node is O(1). Nothing
/// enforces name uniqueness: when several nodes share a name, lookups
/// resolve to the first one declared, and the map always points at that
/// first occurrence.
///
/// Cloning a graph yields a deep copy. The clone owns its own node list
/// and neighbour lists, so mutating either graph never affects the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl Graph {
    /// Creates a graph with no nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a graph description, one node descriptor per line:
    ///
    /// ```text
    /// a:b,c
    /// b:c,a
    /// c:a,b
    /// ```
    ///
    /// Nodes are appended in source order. A line that fails to parse
    /// (a blank line included) aborts the construction and reports its
    /// line number; no partial graph is returned.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, Error> {
        let mut graph = Self::new();
        for (number, line) in reader.lines().enumerate() {
            let node = line?
                .parse::<Node>()
                .map_err(|error| error.at_line(number + 1))?;
            graph.insert(node);
        }
        tracing::debug!(nodes = graph.len(), "graph loaded");
        Ok(graph)
    }

    /// Opens the file at `path` and reads a graph description from it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Builds the complete graph over `num` nodes named `"0"` to
    /// `"num - 1"`: every node has one outgoing edge to every other node,
    /// in ascending order of the target name.
    pub fn complete(num: usize) -> Self {
        let mut graph = Self::new();
        for i in 0..num {
            let neighbours: Vec<String> = (0..num)
                .filter(|&j| j != i)
                .map(|j| j.to_string())
                .collect();
            graph.insert(Node::with_neighbours(i.to_string(), neighbours));
        }
        graph
    }

    /// Parses a node descriptor and appends the node.
    ///
    /// No uniqueness check is made: a second node with an already-used
    /// name is appended as given, but lookups keep resolving to the first.
    pub fn add_node(&mut self, descriptor: &str) -> Result<(), Error> {
        let node = descriptor.parse::<Node>()?;
        tracing::debug!(name = node.name(), "node added");
        self.insert(node);
        Ok(())
    }

    /// Removes every node named `name`, then removes every occurrence of
    /// `name` from the neighbour lists of the remaining nodes.
    ///
    /// Deleting an absent name is a no-op for the node list, but the
    /// neighbour cleanup still runs, so dangling references to `name`
    /// disappear either way.
    pub fn delete_node(&mut self, name: &str) {
        let before = self.nodes.len();
        self.nodes.retain(|node| node.name() != name);
        for node in &mut self.nodes {
            node.delete_edge(name);
        }
        self.rebuild_index();
        tracing::debug!(name, removed = before - self.nodes.len(), "node deleted");
    }

    /// Adds an edge from the first node named `source` to `destination`.
    ///
    /// Fails if no node is named `source`. The destination is recorded as
    /// given; it need not name an existing node.
    pub fn add_edge(&mut self, source: &str, destination: &str) -> Result<(), Error> {
        let index = self.lookup(source)?;
        self.nodes[index].add_edge(destination);
        tracing::debug!(source, destination, "edge added");
        Ok(())
    }

    /// Removes every edge from the first node named `source` to
    /// `destination`.
    ///
    /// Fails if no node is named `source`. An absent destination is a
    /// no-op.
    pub fn delete_edge(&mut self, source: &str, destination: &str) -> Result<(), Error> {
        let index = self.lookup(source)?;
        self.nodes[index].delete_edge(destination);
        tracing::debug!(source, destination, "edges deleted");
        Ok(())
    }

    /// Returns the first node named `name`, if any.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&index| &self.nodes[index])
    }

    /// The nodes of the graph, in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes that have an edge pointing back at themselves, in
    /// declaration order.
    pub fn self_loops(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|node| node.has_self_loop())
            .collect()
    }

    pub fn has_self_loops(&self) -> bool {
        self.nodes.iter().any(|node| node.has_self_loop())
    }

    /// Renders the self-loop report: one line per looped node, or a
    /// single line stating that the graph has none.
    ///
    /// Rendering is kept separate from printing so the report can be
    /// checked without capturing process output.
    pub fn loop_report(&self) -> String {
        let loops = self.self_loops();
        if loops.is_empty() {
            return "The graph contains no self-loops.".to_string();
        }

        loops
            .iter()
            .map(|node| format!("Node {} has one or more self-loops.", node.name()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn insert(&mut self, node: Node) {
        self.index
            .entry(node.name().to_string())
            .or_insert(self.nodes.len());
        self.nodes.push(node);
    }

    fn lookup(&self, name: &str) -> Result<usize, Error> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownNode(name.to_string()))
    }

    // Removals shift indices, so the map is rebuilt from scratch. Each
    // name keeps pointing at its first occurrence.
    fn rebuild_index(&mut self) {
        self.index.clear();
        for (index, node) in self.nodes.iter().enumerate() {
            self.index.entry(node.name().to_string()).or_insert(index);
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Directed graph:")?;
        for node in &self.nodes {
            write!(f, "{node}")?;
        }
        writeln!(f)
    }
}
