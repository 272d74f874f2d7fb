//! Trait definitions for graph abstractions.
//!
//! The algorithms in [`crate::graph::algorithms`] are written against these traits rather
//! than the concrete adjacency lists, so any structure able to enumerate its vertices and
//! successors can be traversed or decomposed.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Vertex and edge enumeration shared by every graph
//! - [`Successors`] - Forward arc traversal (outgoing arcs)
//! - [`Predecessors`] - Backward arc traversal (incoming arcs)
//!
//! Mutation is not abstracted: [`GraphBase::as_directed_mut`] and
//! [`GraphBase::as_undirected_mut`] expose the concrete mutable graph, and [`ensure_edge`]
//! dispatches on whichever one a graph offers.
//!
//! # Iterator-Based Adjacency
//!
//! All adjacency queries return iterators rather than collections. Queries naming a vertex
//! validate it eagerly and fail with [`crate::Error::NonexistentVertex`] before yielding
//! anything.

use crate::{
    graph::{DirectedAdjacencyList, UndirectedAdjacencyList, Vertex},
    Error, Result,
};

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{DirectedAdjacencyList, GraphBase};
///
/// fn describe<G: GraphBase>(graph: &G) -> String {
///     format!("{} vertices, {} edges", graph.order(), graph.size())
/// }
///
/// let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "c")])?;
/// assert_eq!(describe(&graph), "3 vertices, 2 edges");
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub trait GraphBase {
    /// The vertex handle type stored by the graph.
    type Vertex: Vertex;

    /// Returns the number of vertices in the graph.
    fn order(&self) -> usize;

    /// Returns the number of distinct edges in the graph.
    fn size(&self) -> usize;

    /// Returns `true` if `vertex` is part of the graph.
    fn has_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns the graph's own handle for `vertex`, if present.
    ///
    /// Algorithms use this to hold references tied to the graph rather than to the caller's
    /// arguments.
    fn vertex(&self, vertex: &Self::Vertex) -> Option<&Self::Vertex>;

    /// Returns an iterator over all vertices, in insertion order.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex>;

    /// Returns an iterator over the vertices adjacent to `vertex`.
    ///
    /// For directed graphs these are the successors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonexistentVertex`] if `vertex` is not part of the graph.
    fn adjacent_to(&self, vertex: &Self::Vertex) -> Result<impl Iterator<Item = &Self::Vertex>>;

    /// Returns an iterator over every distinct edge as a `(from, to)` pair.
    fn edges(&self) -> impl Iterator<Item = (&Self::Vertex, &Self::Vertex)>;

    /// Exposes the graph as a mutable directed adjacency list, if it is one.
    fn as_directed_mut(&mut self) -> Option<&mut DirectedAdjacencyList<Self::Vertex>> {
        None
    }

    /// Exposes the graph as a mutable undirected adjacency list, if it is one.
    fn as_undirected_mut(&mut self) -> Option<&mut UndirectedAdjacencyList<Self::Vertex>> {
        None
    }
}

/// Trait for graphs that support forward arc traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of `vertex`, in arc insertion order.
    ///
    /// For an arc `(u, v)`, vertex `v` is a successor of `u`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonexistentVertex`] if `vertex` is not part of the graph.
    fn successors_of(&self, vertex: &Self::Vertex)
        -> Result<impl Iterator<Item = &Self::Vertex>>;
}

/// Trait for graphs that support backward arc traversal.
pub trait Predecessors: Successors {
    /// Returns an iterator over the predecessors of `vertex`.
    ///
    /// For an arc `(u, v)`, vertex `u` is a predecessor of `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonexistentVertex`] if `vertex` is not part of the graph.
    fn predecessors_of(
        &self,
        vertex: &Self::Vertex,
    ) -> Result<impl Iterator<Item = &Self::Vertex>>;
}

/// Adds the edge `(u, v)` using whichever mutable contract `graph` satisfies.
///
/// Directed graphs receive the arc `u -> v`, undirected graphs the edge `u - v`. Returns
/// `true` if the edge was not present before.
///
/// # Errors
///
/// Returns [`Error::IncompatibleGraphType`] if `graph` is mutable neither as a directed nor
/// as an undirected graph, or whatever the underlying insertion reports.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{ensure_edge, UndirectedAdjacencyList};
///
/// let mut graph = UndirectedAdjacencyList::new();
/// assert!(ensure_edge(&mut graph, "a", "b")?);
/// assert!(!ensure_edge(&mut graph, "b", "a")?);
/// assert_eq!(graph.size(), 1);
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub fn ensure_edge<G>(graph: &mut G, u: G::Vertex, v: G::Vertex) -> Result<bool>
where
    G: GraphBase,
{
    if let Some(directed) = graph.as_directed_mut() {
        return directed.add_directed_edge(u, v);
    }
    if let Some(undirected) = graph.as_undirected_mut() {
        return undirected.add_edge(u, v);
    }
    Err(Error::IncompatibleGraphType(format!(
        "{} is neither a mutable directed nor a mutable undirected graph",
        std::any::type_name::<G>()
    )))
}
