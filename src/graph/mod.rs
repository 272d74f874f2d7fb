//! Adjacency-list graphs and the algorithms that run over them.
//!
//! # Architecture
//!
//! - **Storage**: [`AdjacencyStore`] maps each vertex to its ordered adjacency set and is
//!   shared by both graph flavours
//! - **Graphs**: [`DirectedAdjacencyList`] (successor sets, O(order) predecessor queries)
//!   and [`UndirectedAdjacencyList`] (mirrored adjacency sets)
//! - **Traits**: [`GraphBase`], [`Successors`] and [`Predecessors`] decouple the algorithms
//!   from the concrete storage
//! - **Algorithms**: [`algorithms`] holds the depth-first engine, its visitors and Tarjan's
//!   strongly connected components
//!
//! # Vertices
//!
//! Any [`Vertex`] can be stored: a hashable handle whose equality is its identity. The graph
//! keeps one clone per vertex and hands clones back from algorithms.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphwalk::graph::{algorithms, DirectedAdjacencyList};
//!
//! let mut graph = DirectedAdjacencyList::new();
//! graph.add_directed_edge("parse", "lex")?;
//! graph.add_directed_edge("check", "parse")?;
//! graph.add_directed_edge("emit", "check")?;
//!
//! // Finish order lists every dependency before its dependents
//! let order = algorithms::toposort(&graph, None)?;
//! assert_eq!(order, vec!["lex", "parse", "check", "emit"]);
//! # Ok::<(), graphwalk::Error>(())
//! ```

pub mod algorithms;

mod adjacency;
mod directed;
mod traits;
mod undirected;
mod vertex;

pub use adjacency::{AdjacencyStore, Neighbors, Vertices};
pub use directed::DirectedAdjacencyList;
pub use traits::{ensure_edge, GraphBase, Predecessors, Successors};
pub use undirected::UndirectedAdjacencyList;
pub use vertex::Vertex;
