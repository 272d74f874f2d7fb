//! Undirected adjacency-list graph.
//!
//! Every edge `u - v` is stored twice, once in each endpoint's adjacency set. The mirrored
//! storage makes vertex removal cheap (only the removed vertex's own neighbours need
//! updating) but means edge enumeration has to skip the second copy of each edge.

use std::collections::HashSet;

use crate::{
    graph::{
        adjacency::{AdjacencyStore, Neighbors, Vertices},
        GraphBase, Vertex,
    },
    Result,
};

/// An undirected graph backed by mirrored adjacency sets.
///
/// # Examples
///
/// ```rust
/// use graphwalk::UndirectedAdjacencyList;
///
/// let graph = UndirectedAdjacencyList::from_edges([("a", "b"), ("b", "c")])?;
/// assert_eq!(graph.degree_of(&"b")?, 2);
/// assert_eq!(graph.size(), 2);
///
/// let edges: Vec<_> = graph.edges().collect();
/// assert_eq!(edges, vec![(&"a", &"b"), (&"b", &"c")]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedAdjacencyList<V> {
    store: AdjacencyStore<V>,
}

impl<V: Vertex> Default for UndirectedAdjacencyList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> UndirectedAdjacencyList<V> {
    /// Creates a new empty undirected graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: AdjacencyStore::new(),
        }
    }

    /// Creates a new undirected graph with room for `vertex_capacity` vertices.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            store: AdjacencyStore::with_capacity(vertex_capacity),
        }
    }

    /// Builds a graph from a sequence of `(u, v)` edges.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexType`] if any endpoint fails validation.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds `vertex` without any edges. Returns `true` if it was not yet present.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexType`] if the vertex fails validation.
    pub fn add_vertex(&mut self, vertex: V) -> Result<bool> {
        self.store.add_vertex(vertex)
    }

    /// Adds the edge `u - v`, adding either endpoint if needed.
    ///
    /// Returns `true` if the edge is new. The edge is counted once even though it is stored
    /// on both endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexType`] if either endpoint fails validation.
    pub fn add_edge(&mut self, u: V, v: V) -> Result<bool> {
        u.validate()?;
        v.validate()?;

        self.store.add_vertex(u.clone())?;
        self.store.add_vertex(v.clone())?;
        let added = self.store.attach(&u, &v)?;
        self.store.attach(&v, &u)?;
        if added {
            self.store.record_added();
        }
        Ok(added)
    }

    /// Alias of [`add_edge`](Self::add_edge).
    ///
    /// # Errors
    ///
    /// See [`add_edge`](Self::add_edge).
    pub fn ensure_edge(&mut self, u: V, v: V) -> Result<bool> {
        self.add_edge(u, v)
    }

    /// Removes `vertex` and every edge touching it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonexistentVertex`] if `vertex` is absent; the graph is left
    /// unchanged in that case.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let neighbors = self.store.take_vertex(vertex)?;
        for neighbor in neighbors.iter().filter(|&neighbor| neighbor != vertex) {
            self.store.detach(neighbor, vertex);
        }
        self.store.record_removed(neighbors.len());
        Ok(())
    }

    /// Removes the edge `u - v` from both endpoints. Returns `false` if it is absent.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        let removed = self.store.detach(u, v);
        if removed {
            self.store.detach(v, u);
            self.store.record_removed(1);
        }
        removed
    }

    /// Returns `true` if the edge `u - v` exists.
    #[must_use]
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.store.is_adjacent(u, v)
    }

    /// Returns `true` if `vertex` is part of the graph.
    #[must_use]
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.store.has_vertex(vertex)
    }

    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.store.order()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn size(&self) -> usize {
        self.store.size()
    }

    /// Iterates every vertex together with its neighbours.
    #[must_use]
    pub fn each_vertex(&self) -> Vertices<'_, V> {
        self.store.each_vertex()
    }

    /// Iterates the neighbours of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonexistentVertex`] if `vertex` is absent.
    pub fn adjacent_to(&self, vertex: &V) -> Result<Neighbors<'_, V>> {
        self.store.neighbors(vertex)
    }

    /// Number of edges touching `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonexistentVertex`] if `vertex` is absent.
    pub fn degree_of(&self, vertex: &V) -> Result<usize> {
        self.store.degree(vertex)
    }

    /// Iterates every edge exactly once.
    ///
    /// An edge is reported from whichever endpoint comes first in vertex order. A self-loop
    /// is reported once.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        let mut completed: HashSet<&V> = HashSet::with_capacity(self.order());
        self.store.each_vertex().flat_map(move |(vertex, neighbors)| {
            let pending: Vec<&V> = neighbors
                .filter(|neighbor| !completed.contains(neighbor))
                .collect();
            completed.insert(vertex);
            pending.into_iter().map(move |neighbor| (vertex, neighbor))
        })
    }
}

impl<V: Vertex> GraphBase for UndirectedAdjacencyList<V> {
    type Vertex = V;

    fn order(&self) -> usize {
        self.store.order()
    }

    fn size(&self) -> usize {
        self.store.size()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.store.has_vertex(vertex)
    }

    fn vertex(&self, vertex: &V) -> Option<&V> {
        self.store.vertex(vertex)
    }

    fn vertices(&self) -> impl Iterator<Item = &V> {
        self.store.vertices()
    }

    fn adjacent_to(&self, vertex: &V) -> Result<impl Iterator<Item = &V>> {
        self.store.neighbors(vertex)
    }

    fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        UndirectedAdjacencyList::edges(self)
    }

    fn as_undirected_mut(&mut self) -> Option<&mut UndirectedAdjacencyList<V>> {
        Some(self)
    }
}
