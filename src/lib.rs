// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # graphwalk
//!
//! Adjacency-list graphs for dependency modelling, with a visitor-driven depth-first
//! traversal engine, topological sorting, cycle detection and Tarjan's strongly connected
//! components.
//!
//! ## Features
//!
//! - **Directed and undirected graphs** - insertion-ordered adjacency lists over any
//!   hashable vertex handle, with incremental edge counting
//! - **Depth-first engine** - explicit-stack traversal driven by pluggable
//!   [`DepthFirstVisitor`] implementations, so deep graphs never exhaust the call stack
//! - **Topological sorting and reachability** - ready-made visitors with a checked
//!   begin / in-progress / complete lifecycle
//! - **Strongly connected components** - iterative Tarjan with O(1) stack membership,
//!   used for both full decomposition and cycle enumeration
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwalk::prelude::*;
//!
//! let mut graph = DirectedAdjacencyList::new();
//! graph.add_directed_edge("a", "b")?;
//! graph.add_directed_edge("b", "c")?;
//! graph.add_directed_edge("a", "c")?;
//! graph.add_directed_edge("b", "d")?;
//!
//! let order = toposort(&graph, Some(&"a"))?;
//! assert_eq!(order, vec!["c", "d", "b", "a"]);
//! assert!(graph.is_acyclic());
//! # Ok::<(), graphwalk::Error>(())
//! ```
//!
//! ## Finding Cycles
//!
//! ```rust
//! use graphwalk::prelude::*;
//!
//! let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "c"), ("c", "a")])?;
//! assert!(!graph.is_acyclic());
//! assert_eq!(graph.get_cycles()?, vec![vec!["c", "b", "a"]]);
//! # Ok::<(), graphwalk::Error>(())
//! ```
//!
//! ## Logging
//!
//! Algorithms emit `debug` and `trace` records through the [`log`](https://docs.rs/log)
//! facade. The library never installs a logger itself.
#[macro_use]
pub(crate) mod error;

pub(crate) mod utils;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphwalk::prelude::*;
///
/// let mut graph = UndirectedAdjacencyList::new();
/// graph.add_edge(1, 2)?;
/// assert_eq!(graph.degree_of(&2)?, 1);
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub mod prelude;

/// Graph storage, graph traits and the algorithms built on top of them.
///
/// # Key Components
///
/// - [`graph::DirectedAdjacencyList`] - Directed graph storing successor sets
/// - [`graph::UndirectedAdjacencyList`] - Undirected graph with mirrored adjacency sets
/// - [`graph::AdjacencyStore`] - The insertion-ordered vertex to adjacency mapping both share
/// - [`graph::algorithms`] - Depth-first engine, visitors and Tarjan SCC
pub mod graph;

/// `graphwalk` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graphwalk` Error type
///
/// Every fallible operation in the crate reports one of its variants.
pub use error::Error;

pub use graph::{
    algorithms::{
        tarjan_scc, toposort, traverse, DepthFirst, DepthFirstVisitor, NoOpVisitor,
        ReachabilityVisitor, StatefulVisitor, StronglyConnectedComponents, ToposortVisitor,
        TraversalConfig, VisitorState,
    },
    ensure_edge, AdjacencyStore, DirectedAdjacencyList, GraphBase, Predecessors, Successors,
    UndirectedAdjacencyList, Vertex,
};
