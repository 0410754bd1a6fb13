//! Edge-list text loader.
//!
//! The format is one edge per line, whitespace-delimited:
//!
//! ```text
//! <from> <to> [weight]
//! ```
//!
//! Blank lines and lines with fewer than two tokens are skipped. A missing or
//! unparsable weight becomes [`DEFAULT_UNWEIGHTED_VALUE`]; tokens beyond the
//! third are ignored.

use tracing::trace;

use crate::{
    graph::{Graph, DEFAULT_UNWEIGHTED_VALUE},
    GraphConfig, Result,
};

/// One parsed edge-list line.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    /// Source vertex name
    pub from: String,
    /// Target vertex name
    pub to: String,
    /// Edge weight
    pub weight: f64,
}

impl EdgeSpec {
    /// Parses a single line, returning `None` for lines that carry no edge.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let from = tokens.next()?;
        let to = tokens.next()?;
        let weight = tokens
            .next()
            .and_then(|w| w.parse::<f64>().ok())
            .unwrap_or(DEFAULT_UNWEIGHTED_VALUE);

        Some(EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
    }
}

/// Parses every edge line in `text`.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::parse_edge_list;
///
/// let specs = parse_edge_list("A B 2.5\n\nB C\nlonely\nC D heavy\n");
/// assert_eq!(specs.len(), 3);
/// assert_eq!(specs[0].weight, 2.5);
/// assert_eq!(specs[1].weight, 1.0);
/// assert_eq!(specs[2].weight, 1.0);
/// ```
#[must_use]
pub fn parse_edge_list(text: &str) -> Vec<EdgeSpec> {
    text.lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let spec = EdgeSpec::parse(line);
            if spec.is_none() && !line.trim().is_empty() {
                trace!(line = number + 1, "skipping malformed edge line");
            }
            spec
        })
        .collect()
}

/// Connects every edge of `text` into an existing graph.
///
/// # Errors
///
/// Propagates the first error returned by [`Graph::connect`].
pub fn populate<G: Graph + ?Sized>(graph: &mut G, text: &str) -> Result<()> {
    for spec in parse_edge_list(text) {
        graph.connect(&spec.from, &spec.to, spec.weight)?;
    }
    Ok(())
}

/// Builds a graph from edge-list text.
///
/// # Errors
///
/// Propagates the first error returned by [`Graph::connect`].
///
/// # Examples
///
/// ```rust
/// use graphscope::{graph::load_edge_list, GraphConfig, StorageKind};
///
/// let config = GraphConfig::network().with_storage(StorageKind::Dense);
/// let graph = load_edge_list("A B 3\nB C 4\n", config)?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn load_edge_list(text: &str, config: GraphConfig) -> Result<Box<dyn Graph>> {
    let mut graph = config.build();
    populate(graph.as_mut(), text)?;
    Ok(graph)
}
