//! Directed adjacency-list graph.
//!
//! [`DirectedAdjacencyList`] stores, for every vertex, the ordered set of its successors.
//! Successor queries are therefore direct lookups, while predecessor queries scan every
//! adjacency set in the graph (O(order) per query). No reverse index is maintained.
//!
//! # Examples
//!
//! ```rust
//! use graphwalk::DirectedAdjacencyList;
//!
//! let mut graph = DirectedAdjacencyList::new();
//! graph.add_directed_edge("a", "b")?;
//! graph.add_directed_edge("b", "c")?;
//!
//! assert_eq!(graph.in_degree_of(&"b")?, 1);
//! assert_eq!(graph.out_degree_of(&"c")?, 0);
//! assert_eq!(graph.successors_of(&"a")?.collect::<Vec<_>>(), vec![&"b"]);
//! # Ok::<(), graphwalk::Error>(())
//! ```

use std::collections::HashSet;

use crate::{
    graph::{
        adjacency::{AdjacencyStore, Neighbors, Vertices},
        algorithms::{tarjan_scc, traverse, ToposortVisitor},
        GraphBase, Predecessors, Successors, Vertex,
    },
    Result,
};

/// A directed graph backed by successor sets.
///
/// Vertices and arcs iterate in insertion order. Inserting an arc auto-adds both of its
/// endpoints. [`size`](Self::size) counts distinct `(tail, head)` pairs.
#[derive(Debug, Clone)]
pub struct DirectedAdjacencyList<V> {
    store: AdjacencyStore<V>,
}

impl<V: Vertex> Default for DirectedAdjacencyList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> DirectedAdjacencyList<V> {
    /// Creates a new empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: AdjacencyStore::new(),
        }
    }

    /// Creates a new directed graph with room for `vertex_capacity` vertices.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            store: AdjacencyStore::with_capacity(vertex_capacity),
        }
    }

    /// Builds a graph from a sequence of `(tail, head)` arcs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexType`] if any endpoint fails validation.
    pub fn from_arcs<I>(arcs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (tail, head) in arcs {
            graph.add_directed_edge(tail, head)?;
        }
        Ok(graph)
    }

    /// Adds `vertex` without any arcs. Returns `true` if it was not yet present.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexType`] if the vertex fails validation.
    pub fn add_vertex(&mut self, vertex: V) -> Result<bool> {
        self.store.add_vertex(vertex)
    }

    /// Adds the arc `tail -> head`, adding either endpoint if needed.
    ///
    /// Returns `true` if the arc is new; re-adding an existing arc changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexType`] if either endpoint fails validation. Both
    /// endpoints are validated before the graph is touched.
    pub fn add_directed_edge(&mut self, tail: V, head: V) -> Result<bool> {
        tail.validate()?;
        head.validate()?;

        self.store.add_vertex(tail.clone())?;
        self.store.add_vertex(head.clone())?;
        let added = self.store.attach(&tail, &head)?;
        if added {
            self.store.record_added();
        }
        Ok(added)
    }

    /// Alias of [`add_directed_edge`](Self::add_directed_edge).
    ///
    /// # Errors
    ///
    /// See [`add_directed_edge`](Self::add_directed_edge).
    pub fn ensure_arc(&mut self, tail: V, head: V) -> Result<bool> {
        self.add_directed_edge(tail, head)
    }

    /// Removes `vertex` together with every arc entering or leaving it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonexistentVertex`] if `vertex` is absent; the graph is left
    /// unchanged in that case.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let outgoing = self.store.take_vertex(vertex)?;
        let mut dropped = outgoing.len();

        // Incoming arcs are only discoverable by scanning every successor set.
        for successors in self.store.adjacency_sets_mut() {
            if successors.remove(vertex) {
                dropped += 1;
            }
        }
        self.store.record_removed(dropped);
        Ok(())
    }

    /// Removes the arc `tail -> head`. Returns `false` (and does nothing) if it is absent.
    pub fn remove_arc(&mut self, tail: &V, head: &V) -> bool {
        let removed = self.store.detach(tail, head);
        if removed {
            self.store.record_removed(1);
        }
        removed
    }

    /// Returns `true` if the arc `tail -> head` exists.
    #[must_use]
    pub fn has_arc(&self, tail: &V, head: &V) -> bool {
        self.store.is_adjacent(tail, head)
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

    /// Number of distinct arcs.
    #[must_use]
    pub fn size(&self) -> usize {
        self.store.size()
    }

    /// Iterates every vertex together with its successors.
    #[must_use]
    pub fn each_vertex(&self) -> Vertices<'_, V> {
        self.store.each_vertex()
    }

    /// Iterates the successors of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonexistentVertex`] if `vertex` is absent.
    pub fn successors_of(&self, vertex: &V) -> Result<Neighbors<'_, V>> {
        self.store.neighbors(vertex)
    }

    /// Iterates the predecessors of `vertex` by scanning all successor sets.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonexistentVertex`] if `vertex` is absent. The check happens
    /// before the iterator is handed out.
    pub fn predecessors_of<'a>(&'a self, vertex: &V) -> Result<impl Iterator<Item = &'a V> + 'a> {
        let target = self
            .store
            .vertex(vertex)
            .ok_or_else(|| nonexistent_vertex!(vertex))?;

        Ok(self
            .store
            .each_vertex()
            .filter(move |(_, successors)| successors.contains(target))
            .map(|(tail, _)| tail))
    }

    /// Number of arcs entering `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonexistentVertex`] if `vertex` is absent.
    pub fn in_degree_of(&self, vertex: &V) -> Result<usize> {
        Ok(self.predecessors_of(vertex)?.count())
    }

    /// Number of arcs leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonexistentVertex`] if `vertex` is absent.
    pub fn out_degree_of(&self, vertex: &V) -> Result<usize> {
        self.store.degree(vertex)
    }

    /// Iterates every arc as `(tail, head)`, grouped by tail in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.store
            .each_vertex()
            .flat_map(|(tail, successors)| successors.map(move |head| (tail, head)))
    }

    /// Returns the vertices without incoming arcs, in insertion order.
    #[must_use]
    pub fn sources(&self) -> Vec<&V> {
        let heads: HashSet<&V> = self.edges().map(|(_, head)| head).collect();
        self.store
            .vertices()
            .filter(|vertex| !heads.contains(vertex))
            .collect()
    }

    /// Returns a new graph with every arc reversed. Vertex order is preserved.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            store: self.store.reversed(),
        }
    }

    /// Returns `true` if the graph contains no cycle.
    ///
    /// Runs a full depth-first traversal with a [`ToposortVisitor`]. A back edge, a graph
    /// without source vertices, or a cycle unreachable from every source all yield `false`.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        let mut visitor = ToposortVisitor::new();
        match traverse(self, &mut visitor, None) {
            Ok(()) => visitor
                .tsl()
                .is_ok_and(|sorted| sorted.len() == self.order()),
            Err(err) if err.is_runtime() => false,
            Err(err) => {
                log::warn!("acyclicity check aborted: {err}");
                false
            }
        }
    }

    /// Returns every cycle of the graph as a strongly connected component.
    ///
    /// Components of two or more vertices are cycles, as is a single vertex carrying a
    /// self-loop. Each component lists its vertices in Tarjan pop order.
    ///
    /// # Errors
    ///
    /// Propagates adjacency lookup failures; none occur on a consistent graph.
    pub fn get_cycles(&self) -> Result<Vec<Vec<V>>> {
        Ok(tarjan_scc(self)?.into_connected_components())
    }
}

impl<V: Vertex> GraphBase for DirectedAdjacencyList<V> {
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
        DirectedAdjacencyList::edges(self)
    }

    fn as_directed_mut(&mut self) -> Option<&mut DirectedAdjacencyList<V>> {
        Some(self)
    }
}

impl<V: Vertex> Successors for DirectedAdjacencyList<V> {
    fn successors_of(&self, vertex: &V) -> Result<impl Iterator<Item = &V>> {
        self.store.neighbors(vertex)
    }
}

impl<V: Vertex> Predecessors for DirectedAdjacencyList<V> {
    fn predecessors_of(&self, vertex: &V) -> Result<impl Iterator<Item = &V>> {
        DirectedAdjacencyList::predecessors_of(self, vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn chain() -> DirectedAdjacencyList<&'static str> {
        DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "c")]).unwrap()
    }

    fn arcs(graph: &DirectedAdjacencyList<&'static str>) -> HashSet<(&'static str, &'static str)> {
        graph.edges().map(|(t, h)| (*t, *h)).collect()
    }

    #[test]
    fn test_add_directed_edge_counts_distinct_pairs() {
        let mut graph = DirectedAdjacencyList::new();
        assert!(graph.add_directed_edge("a", "b").unwrap());
        assert!(!graph.ensure_arc("a", "b").unwrap());
        assert!(graph.add_directed_edge("b", "a").unwrap());

        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 2);
        assert_eq!(graph.out_degree_of(&"a").unwrap(), 1);
    }

    #[test]
    fn test_degrees() {
        let graph = chain();
        assert_eq!(graph.in_degree_of(&"a").unwrap(), 0);
        assert_eq!(graph.in_degree_of(&"b").unwrap(), 1);
        assert_eq!(graph.in_degree_of(&"c").unwrap(), 1);
        assert_eq!(graph.out_degree_of(&"a").unwrap(), 1);
        assert_eq!(graph.out_degree_of(&"b").unwrap(), 1);
        assert_eq!(graph.out_degree_of(&"c").unwrap(), 0);
    }

    #[test]
    fn test_predecessors_of() {
        let graph = DirectedAdjacencyList::from_arcs([("a", "c"), ("b", "c"), ("c", "a")]).unwrap();
        let preds: Vec<_> = graph.predecessors_of(&"c").unwrap().copied().collect();
        assert_eq!(preds, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_vertex_leaves_graph_unchanged() {
        let mut graph = chain();

        assert!(matches!(graph.successors_of(&"x"), Err(Error::NonexistentVertex(_))));
        assert!(matches!(graph.predecessors_of(&"x"), Err(Error::NonexistentVertex(_))));
        assert!(matches!(graph.in_degree_of(&"x"), Err(Error::NonexistentVertex(_))));
        assert!(matches!(graph.out_degree_of(&"x"), Err(Error::NonexistentVertex(_))));
        assert!(matches!(graph.remove_vertex(&"x"), Err(Error::NonexistentVertex(_))));

        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn test_remove_vertex_detaches_incoming_arcs() {
        let mut graph =
            DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "c"), ("c", "b"), ("b", "b")])
                .unwrap();
        assert_eq!(graph.size(), 4);

        graph.remove_vertex(&"b").unwrap();
        assert!(!graph.has_vertex(&"b"));
        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 0);
        assert_eq!(graph.out_degree_of(&"a").unwrap(), 0);
        assert_eq!(graph.out_degree_of(&"c").unwrap(), 0);
    }

    #[test]
    fn test_remove_arc() {
        let mut graph = chain();
        assert!(graph.remove_arc(&"a", &"b"));
        assert!(!graph.remove_arc(&"a", &"b"));
        assert!(!graph.remove_arc(&"x", &"y"));
        assert!(!graph.has_arc(&"a", &"b"));
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.order(), 3);
    }

    #[test]
    fn test_transpose() {
        let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("a", "c"), ("c", "b")]).unwrap();
        let transposed = graph.transpose();

        assert_eq!(transposed.order(), 3);
        assert_eq!(transposed.size(), 3);
        assert!(transposed.has_arc(&"b", &"a"));
        assert!(transposed.has_arc(&"c", &"a"));
        assert!(transposed.has_arc(&"b", &"c"));
        assert!(!transposed.has_arc(&"a", &"b"));

        let back = transposed.transpose();
        assert_eq!(arcs(&back), arcs(&graph));
        assert!(graph.has_arc(&"a", &"b"));
    }

    #[test]
    fn test_sources() {
        let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("e", "b"), ("b", "c")]).unwrap();
        assert_eq!(graph.sources(), vec![&"a", &"e"]);
    }

    #[test]
    fn test_is_acyclic() {
        let mut graph =
            DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "c"), ("a", "c"), ("b", "d")])
                .unwrap();
        assert!(graph.is_acyclic());

        graph.add_directed_edge("d", "b").unwrap();
        assert!(!graph.is_acyclic());
    }

    #[test]
    fn test_is_acyclic_cycle_behind_source() {
        // c <-> d is unreachable from the only source a
        let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("c", "d"), ("d", "c")]).unwrap();
        assert!(!graph.is_acyclic());
    }

    #[test]
    fn test_is_acyclic_trivial_graphs() {
        let empty: DirectedAdjacencyList<u32> = DirectedAdjacencyList::new();
        assert!(empty.is_acyclic());

        let mut lonely = DirectedAdjacencyList::new();
        lonely.add_vertex(1u32).unwrap();
        assert!(lonely.is_acyclic());

        lonely.add_directed_edge(1, 1).unwrap();
        assert!(!lonely.is_acyclic());
    }

    #[test]
    fn test_get_cycles() {
        let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "c"), ("c", "a")]).unwrap();
        assert_eq!(graph.get_cycles().unwrap(), vec![vec!["c", "b", "a"]]);

        let dag = chain();
        assert!(dag.get_cycles().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_endpoint_is_rejected_before_mutation() {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        struct Named(&'static str);

        impl Vertex for Named {
            fn validate(&self) -> Result<()> {
                if self.0.is_empty() {
                    return Err(invalid_vertex!("anonymous vertex"));
                }
                Ok(())
            }
        }

        let mut graph = DirectedAdjacencyList::new();
        let result = graph.add_directed_edge(Named("a"), Named(""));
        assert!(matches!(result, Err(Error::InvalidVertexType(_))));
        assert_eq!(graph.order(), 0);
        assert_eq!(graph.size(), 0);
    }
}
