//! Insertion-ordered vertex to adjacency-set storage.
//!
//! [`AdjacencyStore`] is the shared core of both graph flavours. It keeps vertices in the
//! order they were first added and every adjacency set in the order its members were
//! attached, so iteration is deterministic and reproducible.
//!
//! # Nested Iteration
//!
//! Iteration is position based: [`Vertices`] and [`Neighbors`] each carry their own cursor
//! into the shared storage and never mutate it. Any number of them may be alive at once,
//! nested to any depth, and every call to [`AdjacencyStore::each_vertex`] starts a fresh
//! sequence from the first vertex. The borrow checker rules out mutation while any of them
//! is alive.
//!
//! # Edge Count
//!
//! The store does not decide what counts as an edge: a directed arc occupies one slot, an
//! undirected edge occupies two mirrored slots. The owning graph type maintains the
//! distinct edge count through [`AdjacencyStore::size`] as it attaches and detaches.

use std::collections::{HashMap, HashSet};

use crate::{graph::Vertex, Result};

/// The ordered set of vertices adjacent to one vertex.
#[derive(Debug, Clone)]
pub(crate) struct AdjacencySet<V> {
    ordered: Vec<V>,
    members: HashSet<V>,
}

impl<V: Vertex> AdjacencySet<V> {
    pub(crate) fn new() -> Self {
        Self {
            ordered: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Appends `vertex`, returning `true` if it was not yet a member.
    pub(crate) fn insert(&mut self, vertex: V) -> bool {
        if self.members.contains(&vertex) {
            return false;
        }
        self.members.insert(vertex.clone());
        self.ordered.push(vertex);
        true
    }

    /// Removes `vertex`, returning `true` if it was a member.
    pub(crate) fn remove(&mut self, vertex: &V) -> bool {
        if !self.members.remove(vertex) {
            return false;
        }
        self.ordered.retain(|member| member != vertex);
        true
    }

    pub(crate) fn contains(&self, vertex: &V) -> bool {
        self.members.contains(vertex)
    }

    pub(crate) fn len(&self) -> usize {
        self.ordered.len()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, V> {
        self.ordered.iter()
    }

    pub(crate) fn as_slice(&self) -> &[V] {
        &self.ordered
    }
}

/// Ordered mapping from each vertex to the set of its adjacent vertices.
///
/// For a directed graph the adjacency set of `v` holds its successors; for an undirected
/// graph it holds every neighbour, mirrored on both endpoints.
///
/// # Examples
///
/// ```rust
/// use graphwalk::AdjacencyStore;
///
/// let mut store = AdjacencyStore::new();
/// store.add_vertex("a")?;
/// store.add_vertex("b")?;
///
/// let names: Vec<&&str> = store.each_vertex().map(|(vertex, _)| vertex).collect();
/// assert_eq!(names, vec![&"a", &"b"]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyStore<V> {
    /// Vertices in insertion order
    vertices: Vec<V>,
    /// Position of each vertex inside `vertices` and `adjacency`
    positions: HashMap<V, usize>,
    /// Adjacency set of the vertex at the same position
    adjacency: Vec<AdjacencySet<V>>,
    /// Number of distinct edges, maintained by the owning graph
    size: usize,
}

impl<V: Vertex> Default for AdjacencyStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> AdjacencyStore<V> {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            positions: HashMap::new(),
            adjacency: Vec::new(),
            size: 0,
        }
    }

    /// Creates a new store with room for `vertex_capacity` vertices.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            positions: HashMap::with_capacity(vertex_capacity),
            adjacency: Vec::with_capacity(vertex_capacity),
            size: 0,
        }
    }

    /// Adds `vertex` with an empty adjacency set.
    ///
    /// Returns `true` if the vertex was new, `false` if it was already present (in which
    /// case nothing changes).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexType`] if [`Vertex::validate`] rejects the value.
    pub fn add_vertex(&mut self, vertex: V) -> Result<bool> {
        vertex.validate()?;
        if self.positions.contains_key(&vertex) {
            return Ok(false);
        }

        self.positions.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.adjacency.push(AdjacencySet::new());
        Ok(true)
    }

    /// Returns `true` if `vertex` is part of the store.
    #[must_use]
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    /// Returns the stored handle equal to `vertex`, if any.
    #[must_use]
    pub fn vertex(&self, vertex: &V) -> Option<&V> {
        self.positions.get(vertex).map(|&position| &self.vertices[position])
    }

    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterates every vertex together with its adjacency set, in insertion order.
    ///
    /// Each call yields an independent sequence starting at the first vertex.
    #[must_use]
    pub fn each_vertex(&self) -> Vertices<'_, V> {
        Vertices {
            store: self,
            next: 0,
        }
    }

    /// Iterates the vertices alone, in insertion order.
    pub fn vertices(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Iterates the adjacency set of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonexistentVertex`] if `vertex` is not in the store.
    pub fn neighbors(&self, vertex: &V) -> Result<Neighbors<'_, V>> {
        let position = self.position(vertex)?;
        Ok(Neighbors::new(&self.adjacency[position]))
    }

    /// Returns `true` if `to` is in the adjacency set of `from`.
    ///
    /// A missing `from` simply has no adjacent vertices.
    #[must_use]
    pub fn is_adjacent(&self, from: &V, to: &V) -> bool {
        self.positions
            .get(from)
            .is_some_and(|&position| self.adjacency[position].contains(to))
    }

    /// Size of the adjacency set of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonexistentVertex`] if `vertex` is not in the store.
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        let position = self.position(vertex)?;
        Ok(self.adjacency[position].len())
    }

    pub(crate) fn position(&self, vertex: &V) -> Result<usize> {
        self.positions
            .get(vertex)
            .copied()
            .ok_or_else(|| nonexistent_vertex!(vertex))
    }

    /// Adds `to` to the adjacency set of `from`; both must already be vertices.
    ///
    /// Returns `true` if the slot was new.
    pub(crate) fn attach(&mut self, from: &V, to: &V) -> Result<bool> {
        let position = self.position(from)?;
        let target = self.position(to)?;
        let handle = self.vertices[target].clone();
        Ok(self.adjacency[position].insert(handle))
    }

    /// Removes `to` from the adjacency set of `from`, returning `true` if it was there.
    pub(crate) fn detach(&mut self, from: &V, to: &V) -> bool {
        match self.positions.get(from) {
            Some(&position) => self.adjacency[position].remove(to),
            None => false,
        }
    }

    /// Removes `vertex` as a key and hands back its former adjacency set.
    ///
    /// Other vertices' adjacency sets are not touched; the owning graph detaches the vertex
    /// from them according to its own edge semantics.
    pub(crate) fn take_vertex(&mut self, vertex: &V) -> Result<AdjacencySet<V>> {
        let position = self.position(vertex)?;
        self.positions.remove(vertex);
        self.vertices.remove(position);
        let removed = self.adjacency.remove(position);

        for slot in self.positions.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    /// Returns a copy of the store with every adjacency relation pointing the other way.
    ///
    /// Vertex order is preserved; adjacency order follows the scan order of the original.
    pub(crate) fn reversed(&self) -> Self {
        let mut adjacency: Vec<AdjacencySet<V>> =
            (0..self.vertices.len()).map(|_| AdjacencySet::new()).collect();

        for (vertex, members) in self.vertices.iter().zip(&self.adjacency) {
            for member in members.iter() {
                if let Some(&position) = self.positions.get(member) {
                    adjacency[position].insert(vertex.clone());
                }
            }
        }

        Self {
            vertices: self.vertices.clone(),
            positions: self.positions.clone(),
            adjacency,
            size: self.size,
        }
    }

    pub(crate) fn adjacency_sets_mut(&mut self) -> std::slice::IterMut<'_, AdjacencySet<V>> {
        self.adjacency.iter_mut()
    }

    pub(crate) fn record_added(&mut self) {
        self.size += 1;
    }

    pub(crate) fn record_removed(&mut self, count: usize) {
        self.size = self.size.saturating_sub(count);
    }
}

/// Iterator over the vertices of an [`AdjacencyStore`] and their adjacency sets.
///
/// Created by [`AdjacencyStore::each_vertex`].
#[derive(Debug, Clone)]
pub struct Vertices<'a, V> {
    store: &'a AdjacencyStore<V>,
    next: usize,
}

impl<'a, V: Vertex> Iterator for Vertices<'a, V> {
    type Item = (&'a V, Neighbors<'a, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.store.vertices.get(self.next)?;
        let neighbors = Neighbors::new(&self.store.adjacency[self.next]);
        self.next += 1;
        Some((vertex, neighbors))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.store.vertices.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<V: Vertex> ExactSizeIterator for Vertices<'_, V> {}

/// Iterator over one adjacency set, in attachment order.
#[derive(Debug, Clone)]
pub struct Neighbors<'a, V> {
    set: &'a AdjacencySet<V>,
    next: usize,
}

impl<'a, V: Vertex> Neighbors<'a, V> {
    fn new(set: &'a AdjacencySet<V>) -> Self {
        Self { set, next: 0 }
    }

    /// Returns `true` if `vertex` is a member of the underlying adjacency set, regardless of
    /// how far this iterator has advanced.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.set.contains(vertex)
    }
}

impl<'a, V: Vertex> Iterator for Neighbors<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.set.ordered.get(self.next)?;
        self.next += 1;
        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<V: Vertex> ExactSizeIterator for Neighbors<'_, V> {}
