use std::{fmt, str::FromStr};

use crate::{error::Error, lexer, parser};

/// A single vertex of a directed graph: its name, plus the names of the
/// vertices its outgoing edges point to.
///
/// The neighbour list is an ordered multiset. Duplicate entries mean
/// parallel edges, and the order of entries is the order in which the
/// edges were declared or added.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    neighbours: Vec<String>,
}

impl Node {
    /// Creates a node with no outgoing edges.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbours: vec![],
        }
    }

    /// Creates a node with the given outgoing edges, in order.
    pub fn with_neighbours(
        name: impl Into<String>,
        neighbours: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            neighbours: neighbours.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The names this node's outgoing edges point to, in declaration order.
    ///
    /// A neighbour name need not refer to a node that exists in any graph.
    pub fn neighbours(&self) -> &[String] {
        &self.neighbours
    }

    /// Adds an outgoing edge to `target`.
    ///
    /// Always succeeds: duplicate edges and self-references are permitted,
    /// and no check is made against any graph.
    pub fn add_edge(&mut self, target: &str) {
        self.neighbours.push(target.to_string());
    }

    /// Removes every outgoing edge to `target`.
    ///
    /// Removing an absent target is a no-op, not an error.
    pub fn delete_edge(&mut self, target: &str) {
        self.neighbours.retain(|neighbour| neighbour != target);
    }

    /// Tells whether this node has an edge pointing back at itself.
    pub fn has_self_loop(&self) -> bool {
        self.neighbours.iter().any(|neighbour| neighbour == &self.name)
    }
}

impl FromStr for Node {
    type Err = Error;

    /// Parses a descriptor of the form `a:b,c`: the node name, optionally
    /// followed by a colon and a comma-separated list of neighbour names.
    fn from_str(descriptor: &str) -> Result<Self, Error> {
        let tokens = lexer::tokenize(descriptor);
        parser::parse(tokens).map_err(|errors| Error::descriptor(descriptor, &errors))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.neighbours.is_empty() {
            return writeln!(f, "- Node {} has no outgoing edges.", self.name);
        }

        writeln!(f, "- Node {}:", self.name)?;
        for neighbour in &self.neighbours {
            writeln!(f, "{} -> {}", self.name, neighbour)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parses_name_and_neighbours() {
        let node: Node = "a:b,c".parse().unwrap();
        assert_eq!(node.name(), "a");
        assert_eq!(node.neighbours(), ["b", "c"]);
    }

    #[test]
    fn parses_bare_name() {
        let node: Node = "a".parse().unwrap();
        assert_eq!(node.name(), "a");
        assert!(node.neighbours().is_empty());
    }

    #[test]
    fn rejects_empty_descriptor() {
        assert!("".parse::<Node>().is_err());
    }

    #[test]
    fn add_edge_permits_duplicates_and_self_references() {
        let mut node = Node::new("a");
        node.add_edge("b");
        node.add_edge("a");
        node.add_edge("b");
        assert_eq!(node.neighbours(), ["b", "a", "b"]);
    }

    #[test]
    fn delete_edge_removes_every_occurrence() {
        let mut node: Node = "b:c,a,c".parse().unwrap();
        node.delete_edge("c");
        assert_eq!(node.neighbours(), ["a"]);
    }

    #[test]
    fn delete_edge_on_absent_target_is_a_no_op() {
        let mut node: Node = "a:b".parse().unwrap();
        node.delete_edge("z");
        assert_eq!(node.neighbours(), ["b"]);
    }

    #[test]
    fn self_loop_requires_exact_name_match() {
        let looped: Node = "a:a,b".parse().unwrap();
        let plain: Node = "a:ab".parse().unwrap();
        assert!(looped.has_self_loop());
        assert!(!plain.has_self_loop());
    }

    #[test]
    fn displays_each_outgoing_edge() {
        let node: Node = "a:b,c,b".parse().unwrap();
        let expected = indoc! {"
            - Node a:
            a -> b
            a -> c
            a -> b
        "};
        assert_eq!(node.to_string(), expected);
    }

    #[test]
    fn displays_a_node_without_edges_as_a_single_line() {
        let node = Node::new("a");
        assert_eq!(node.to_string(), "- Node a has no outgoing edges.\n");
    }
}
