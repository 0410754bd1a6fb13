//! DOT format utilities for graph visualization.
//!
//! This module provides utilities for generating DOT format output,
//! which can be rendered using Graphviz tools.

use std::fmt::Write;

use crate::graph::Graph;

/// Escapes a string for safe use in DOT format labels and identifiers.
///
/// This function handles all characters that have special meaning in DOT format,
/// including quotes, backslashes, newlines, and angle brackets.
///
/// # Examples
///
/// ```rust
/// use graphscope::utils::escape_dot;
///
/// assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape_dot("a<b>"), "a\\<b\\>");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

/// Renders a graph in Graphviz DOT syntax.
///
/// Directed graphs become a `digraph` with `->` edges; undirected graphs become
/// a `graph` with `--` edges, and each mirrored pair is emitted once. Weighted
/// graphs carry the weight as an edge label. Every vertex is declared, so
/// isolated vertices survive the export.
///
/// # Examples
///
/// ```rust
/// use graphscope::{utils::to_dot, Graph, SparseGraph};
///
/// let mut graph = SparseGraph::new(true, true);
/// graph.connect("A", "B", 2.5)?;
///
/// let dot = to_dot(&graph);
/// assert!(dot.starts_with("digraph G {"));
/// assert!(dot.contains("\"A\" -> \"B\" [label=\"2.5\"];"));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[must_use]
pub fn to_dot<G: Graph + ?Sized>(graph: &G) -> String {
    let (keyword, connector) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{keyword} G {{");
    for vertex in graph.vertices() {
        let _ = writeln!(out, "    \"{}\";", escape_dot(vertex.name()));
    }

    for edge in graph.edges() {
        if !graph.is_directed() && edge.from().id() > edge.to().id() {
            continue;
        }
        let _ = write!(
            out,
            "    \"{}\" {connector} \"{}\"",
            escape_dot(edge.from().name()),
            escape_dot(edge.to().name())
        );
        if graph.is_weighted() {
            let _ = write!(out, " [label=\"{}\"]", edge.weight());
        }
        out.push_str(";\n");
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DenseGraph, SparseGraph};

    #[test]
    fn test_escape_dot_basic() {
        assert_eq!(escape_dot("hello"), "hello");
    }

    #[test]
    fn test_escape_dot_quotes() {
        assert_eq!(escape_dot("say \"hello\""), "say \\\"hello\\\"");
    }

    #[test]
    fn test_escape_dot_newlines() {
        assert_eq!(escape_dot("line1\r\nline2"), "line1\\nline2");
    }

    #[test]
    fn test_to_dot_undirected_emits_each_edge_once() {
        let mut graph = DenseGraph::new(false, false);
        graph.link("A", "B").unwrap();
        graph.link("B", "C").unwrap();

        let dot = to_dot(&graph);
        assert!(dot.starts_with("graph G {\n"));
        assert_eq!(dot.matches(" -- ").count(), 2);
        assert!(dot.contains("\"A\" -- \"B\";"));
        assert!(!dot.contains("label"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_to_dot_escapes_names() {
        let mut graph = SparseGraph::new(true, false);
        graph.link("a\"b", "c").unwrap();

        let dot = to_dot(&graph);
        assert!(dot.contains("\"a\\\"b\" -> \"c\";"));
    }
}
