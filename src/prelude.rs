//! # graphwalk Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphwalk library. Import this module to get quick access to the graph types,
//! the traversal entry points and the visitors.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphwalk operations
pub use crate::Error;

/// The result type used throughout graphwalk
pub use crate::Result;

// ================================================================================================
// Graphs
// ================================================================================================

/// Concrete adjacency-list graphs
pub use crate::graph::{AdjacencyStore, DirectedAdjacencyList, UndirectedAdjacencyList};

/// Graph abstractions the algorithms are written against
pub use crate::graph::{ensure_edge, GraphBase, Predecessors, Successors, Vertex};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Depth-first engine and its configuration
pub use crate::graph::algorithms::{toposort, traverse, DepthFirst, TraversalConfig};

/// Visitor protocol and the bundled visitors
pub use crate::graph::algorithms::{
    DepthFirstVisitor, NoOpVisitor, ReachabilityVisitor, StatefulVisitor, ToposortVisitor,
    VisitorState,
};

/// Strongly connected components
pub use crate::graph::algorithms::{tarjan_scc, StronglyConnectedComponents};
