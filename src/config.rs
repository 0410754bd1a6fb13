//! Graph construction options
//!
//! [`GraphConfig`] gathers the choices fixed when a graph is created: its
//! directedness and weightedness (as [`GraphFlags`]), the storage backing (as
//! [`StorageKind`]) and the initial capacity. [`GraphConfig::build`] turns a
//! configuration into a `Box<dyn Graph>`, so callers that pick the storage at
//! runtime never branch on it afterwards.

use bitflags::bitflags;
use strum::{Display, EnumIter, EnumString};

use crate::graph::{DenseGraph, Graph, SparseGraph, DEFAULT_DENSE_CAPACITY};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Behaviour flags fixed at graph construction
    pub struct GraphFlags : u8 {
        /// Edges are one-way
        const DIRECTED = 0x01;
        /// Algorithms honour stored edge weights
        const WEIGHTED = 0x02;
    }
}

/// Storage backing for a graph
///
/// Parses from and displays as lowercase names:
///
/// ```rust
/// use graphscope::StorageKind;
///
/// assert_eq!("dense".parse::<StorageKind>().unwrap(), StorageKind::Dense);
/// assert_eq!(StorageKind::Sparse.to_string(), "sparse");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StorageKind {
    /// Adjacency matrix; see [`DenseGraph`]
    Dense,
    /// Ordered adjacency lists; see [`SparseGraph`]
    #[default]
    Sparse,
}

/// Configuration for building a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Directedness and weightedness
    pub flags: GraphFlags,

    /// Which storage backing to build
    pub storage: StorageKind,

    /// Initial capacity: matrix side length for dense storage, number of
    /// adjacency lists reserved for sparse storage
    pub initial_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            flags: GraphFlags::empty(),
            storage: StorageKind::default(),
            initial_capacity: DEFAULT_DENSE_CAPACITY,
        }
    }
}

impl GraphConfig {
    /// Creates a configuration from explicit flags and storage
    #[must_use]
    pub fn new(flags: GraphFlags, storage: StorageKind) -> Self {
        Self {
            flags,
            storage,
            ..Self::default()
        }
    }

    /// Undirected, unweighted, sparse
    #[must_use]
    pub fn undirected() -> Self {
        Self::default()
    }

    /// Directed, unweighted, sparse
    #[must_use]
    pub fn directed() -> Self {
        Self::new(GraphFlags::DIRECTED, StorageKind::Sparse)
    }

    /// Undirected, weighted, sparse; the shape minimum spanning trees need
    #[must_use]
    pub fn weighted() -> Self {
        Self::new(GraphFlags::WEIGHTED, StorageKind::Sparse)
    }

    /// Directed, weighted, sparse; the usual shape for shortest paths
    #[must_use]
    pub fn network() -> Self {
        Self::new(GraphFlags::DIRECTED | GraphFlags::WEIGHTED, StorageKind::Sparse)
    }

    /// Returns a copy using the given storage
    #[must_use]
    pub fn with_storage(mut self, storage: StorageKind) -> Self {
        self.storage = storage;
        self
    }

    /// Returns a copy using the given initial capacity
    #[must_use]
    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Returns `true` if the DIRECTED flag is set
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.flags.contains(GraphFlags::DIRECTED)
    }

    /// Returns `true` if the WEIGHTED flag is set
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.flags.contains(GraphFlags::WEIGHTED)
    }

    /// Builds an empty graph with this configuration
    #[must_use]
    pub fn build(&self) -> Box<dyn Graph> {
        let (directed, weighted) = (self.is_directed(), self.is_weighted());
        match self.storage {
            StorageKind::Dense => Box::new(DenseGraph::with_capacity(
                directed,
                weighted,
                self.initial_capacity,
            )),
            StorageKind::Sparse => Box::new(SparseGraph::with_capacity(
                directed,
                weighted,
                self.initial_capacity,
            )),
        }
    }
}
