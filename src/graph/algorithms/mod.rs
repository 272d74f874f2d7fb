//! Graph algorithms over the adjacency-list graphs.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`traverse`] - Depth-first traversal driving a [`DepthFirstVisitor`]
//! - [`DepthFirst`] - The same engine with a [`TraversalConfig`] (depth limit, source policy)
//!
//! ## Visitors
//!
//! - [`NoOpVisitor`] - Ignores every event
//! - [`ToposortVisitor`] - Records finish order, fails on the first back edge
//! - [`ReachabilityVisitor`] - Records finish order and every vertex's reachable set
//!
//! ## Topological Ordering
//!
//! - [`toposort`] - Finish order of a depth-first traversal, dependencies first
//!
//! ## Strongly Connected Components
//!
//! - [`tarjan_scc`] - Tarjan's SCC algorithm
//! - [`StronglyConnectedComponents`] - Result of SCC computation
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | Traversal | O(V + E) | Custom analyses through visitor hooks |
//! | Topological Sort | O(V + E) | Dependency ordering |
//! | Reachability | O(V · E) | Transitive dependency sets |
//! | SCC | O(V + E) | Cycle enumeration |
//!
//! # Examples
//!
//! ```rust
//! use graphwalk::graph::{algorithms, DirectedAdjacencyList};
//! use graphwalk::ReachabilityVisitor;
//!
//! let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "c")])?;
//!
//! let mut visitor = ReachabilityVisitor::new();
//! algorithms::traverse(&graph, &mut visitor, None)?;
//! assert_eq!(visitor.reachable(&"a")?, Some(&["b", "c"][..]));
//! assert_eq!(visitor.tsl()?, &["c", "b", "a"]);
//! # Ok::<(), graphwalk::Error>(())
//! ```

mod config;
mod scc;
mod traversal;
mod visitor;

pub use config::TraversalConfig;
pub use scc::{tarjan_scc, StronglyConnectedComponents};
pub use traversal::{toposort, traverse, DepthFirst};
pub use visitor::{
    DepthFirstVisitor, NoOpVisitor, ReachabilityVisitor, StatefulVisitor, ToposortVisitor,
    VisitorState,
};
