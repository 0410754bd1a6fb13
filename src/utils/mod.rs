//! Supporting utilities.
//!
//! - [`UnionFind`] - Disjoint-set forest used by the component and MST algorithms
//! - [`escape_dot`] / [`to_dot`] - Graphviz export

mod dot;
mod union_find;

pub use dot::{escape_dot, to_dot};
pub use union_find::UnionFind;
