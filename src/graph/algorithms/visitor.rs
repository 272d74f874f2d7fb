//! Depth-first visitor protocol and the bundled visitors.
//!
//! The [`crate::DepthFirst`] engine reports every traversal event to a
//! [`DepthFirstVisitor`]. All hooks default to doing nothing, so a visitor only implements
//! the events it cares about. A hook returning an error aborts the traversal and the error
//! is handed back to the caller unchanged.
//!
//! # Event Order
//!
//! 1. [`begin_traversal`](DepthFirstVisitor::begin_traversal)
//! 2. [`on_initialize_vertex`](DepthFirstVisitor::on_initialize_vertex) for every vertex,
//!    only when the engine picks the source vertices itself
//! 3. Per visited vertex: [`on_start_vertex`](DepthFirstVisitor::on_start_vertex), then for
//!    each successor [`on_examine_edge`](DepthFirstVisitor::on_examine_edge) followed by
//!    either a nested visit or [`on_back_edge`](DepthFirstVisitor::on_back_edge), then
//!    [`on_finish_vertex`](DepthFirstVisitor::on_finish_vertex)
//! 4. [`end_traversal`](DepthFirstVisitor::end_traversal)
//!
//! # Stateful Visitors
//!
//! [`ToposortVisitor`] and [`ReachabilityVisitor`] move through
//! [`VisitorState::NotStarted`], [`VisitorState::InProgress`] and [`VisitorState::Complete`].
//! Their results can only be read once complete, and a complete visitor cannot be ended or
//! started again.

use std::collections::{HashMap, HashSet};

use strum::Display;

use crate::{
    graph::{adjacency::AdjacencySet, Vertex},
    Error, Result,
};

/// Lifecycle of a stateful visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitorState {
    /// No traversal has been started yet.
    #[default]
    NotStarted,
    /// A traversal is running, or was aborted before it could end.
    InProgress,
    /// The traversal has ended; results are available. Terminal.
    Complete,
}

/// Handler for the events of a depth-first traversal.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{traverse, DepthFirstVisitor, DirectedAdjacencyList, Result};
///
/// #[derive(Default)]
/// struct EdgeCounter(usize);
///
/// impl<V> DepthFirstVisitor<V> for EdgeCounter {
///     fn on_examine_edge(&mut self, _from: &V, _to: &V) -> Result<()> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
///
/// let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("a", "c"), ("b", "c")])?;
/// let mut counter = EdgeCounter::default();
/// traverse(&graph, &mut counter, None)?;
/// assert_eq!(counter.0, 3);
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub trait DepthFirstVisitor<V> {
    /// Called once before any other event.
    ///
    /// # Errors
    ///
    /// Implementations may refuse to start, e.g. when already used.
    fn begin_traversal(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called for every vertex before the walk starts, when the engine determines the
    /// source vertices itself. `is_source` tells whether the vertex has no incoming arc.
    ///
    /// # Errors
    ///
    /// An error aborts the traversal.
    fn on_initialize_vertex(&mut self, _vertex: &V, _is_source: bool) -> Result<()> {
        Ok(())
    }

    /// Called when an examined arc leads to a vertex on the active path.
    ///
    /// The engine never descends along a back edge; the visitor decides whether the cycle
    /// is fatal.
    ///
    /// # Errors
    ///
    /// An error aborts the traversal.
    fn on_back_edge(&mut self, _vertex: &V) -> Result<()> {
        Ok(())
    }

    /// Called when a vertex is first reached and becomes part of the active path.
    ///
    /// # Errors
    ///
    /// An error aborts the traversal.
    fn on_start_vertex(&mut self, _vertex: &V) -> Result<()> {
        Ok(())
    }

    /// Called for every arc leaving a started vertex, before the head is visited.
    ///
    /// # Errors
    ///
    /// An error aborts the traversal.
    fn on_examine_edge(&mut self, _from: &V, _to: &V) -> Result<()> {
        Ok(())
    }

    /// Called once all successors of a vertex have been handled.
    ///
    /// # Errors
    ///
    /// An error aborts the traversal.
    fn on_finish_vertex(&mut self, _vertex: &V) -> Result<()> {
        Ok(())
    }

    /// Called once after a traversal ran to completion.
    ///
    /// # Errors
    ///
    /// Stateful visitors fail with [`Error::WrongVisitorState`] when already complete. Ending
    /// a visitor that was never begun moves it straight to [`VisitorState::Complete`].
    fn end_traversal(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Visitors that track a [`VisitorState`] lifecycle.
pub trait StatefulVisitor {
    /// Current lifecycle state.
    fn state(&self) -> VisitorState;

    /// Fails unless the visitor has completed a traversal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVisitorState`] if the state is not [`VisitorState::Complete`].
    fn require_complete(&self) -> Result<()> {
        expect_state(self.state(), VisitorState::Complete)
    }
}

fn expect_state(actual: VisitorState, expected: VisitorState) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::WrongVisitorState { expected, actual })
    }
}

/// Shared state transitions of the bundled stateful visitors.
#[derive(Debug, Clone, Copy, Default)]
struct Lifecycle(VisitorState);

impl Lifecycle {
    fn begin(&mut self) -> Result<()> {
        expect_state(self.0, VisitorState::NotStarted)?;
        self.0 = VisitorState::InProgress;
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        if self.0 == VisitorState::Complete {
            return Err(Error::WrongVisitorState {
                expected: VisitorState::InProgress,
                actual: self.0,
            });
        }
        self.0 = VisitorState::Complete;
        Ok(())
    }
}

/// Visitor that ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpVisitor;

impl<V> DepthFirstVisitor<V> for NoOpVisitor {}

/// Visitor that records vertices in finish order and rejects cycles.
///
/// The finish order lists every vertex after all of its successors, i.e. dependencies
/// first. Reversing it yields a classic topological order.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{traverse, DirectedAdjacencyList, ToposortVisitor};
///
/// let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "c"), ("a", "c"), ("b", "d")])?;
/// let mut visitor = ToposortVisitor::new();
/// traverse(&graph, &mut visitor, None)?;
/// assert_eq!(visitor.tsl()?, &["c", "d", "b", "a"]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ToposortVisitor<V> {
    lifecycle: Lifecycle,
    tsl: Vec<V>,
}

impl<V: Vertex> Default for ToposortVisitor<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> ToposortVisitor<V> {
    /// Creates a visitor that has not seen a traversal yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::default(),
            tsl: Vec::new(),
        }
    }

    /// The vertices in finish order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVisitorState`] until the traversal has ended.
    pub fn tsl(&self) -> Result<&[V]> {
        self.require_complete()?;
        Ok(&self.tsl)
    }

    /// Consumes the visitor, returning the vertices in finish order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVisitorState`] until the traversal has ended.
    pub fn into_tsl(self) -> Result<Vec<V>> {
        self.require_complete()?;
        Ok(self.tsl)
    }
}

impl<V: Vertex> StatefulVisitor for ToposortVisitor<V> {
    fn state(&self) -> VisitorState {
        self.lifecycle.0
    }
}

impl<V: Vertex> DepthFirstVisitor<V> for ToposortVisitor<V> {
    fn begin_traversal(&mut self) -> Result<()> {
        self.lifecycle.begin()
    }

    fn on_back_edge(&mut self, vertex: &V) -> Result<()> {
        Err(cycle_detected!(vertex))
    }

    fn on_finish_vertex(&mut self, vertex: &V) -> Result<()> {
        self.tsl.push(vertex.clone());
        Ok(())
    }

    fn end_traversal(&mut self) -> Result<()> {
        self.lifecycle.end()
    }
}

/// Visitor that records, for every vertex, the vertices reachable from it.
///
/// Behaves like [`ToposortVisitor`] (finish order, cycles rejected) and additionally keeps
/// one reachable set per vertex. While a vertex is on the active path, every vertex examined
/// below it is added to its set; reaching an already finished vertex merges that vertex's
/// completed set as well, so results stay exact when subgraphs are shared.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{traverse, DirectedAdjacencyList, ReachabilityVisitor};
///
/// let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "c"), ("a", "c"), ("b", "d")])?;
/// let mut visitor = ReachabilityVisitor::new();
/// traverse(&graph, &mut visitor, None)?;
///
/// assert_eq!(visitor.reachable(&"a")?, Some(&["b", "c", "d"][..]));
/// assert_eq!(visitor.reachable(&"b")?, Some(&["c", "d"][..]));
/// assert_eq!(visitor.reachable(&"d")?, Some(&[][..]));
/// assert_eq!(visitor.reachable(&"z")?, None);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReachabilityVisitor<V> {
    lifecycle: Lifecycle,
    tsl: Vec<V>,
    active: Vec<V>,
    finished: HashSet<V>,
    reachable: HashMap<V, AdjacencySet<V>>,
}

impl<V: Vertex> Default for ReachabilityVisitor<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> ReachabilityVisitor<V> {
    /// Creates a visitor that has not seen a traversal yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::default(),
            tsl: Vec::new(),
            active: Vec::new(),
            finished: HashSet::new(),
            reachable: HashMap::new(),
        }
    }

    /// Vertices reachable from `vertex`, in discovery order.
    ///
    /// Returns `None` for a vertex the traversal never saw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVisitorState`] until the traversal has ended.
    pub fn reachable(&self, vertex: &V) -> Result<Option<&[V]>> {
        self.require_complete()?;
        Ok(self.reachable.get(vertex).map(AdjacencySet::as_slice))
    }

    /// The vertices in finish order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongVisitorState`] until the traversal has ended.
    pub fn tsl(&self) -> Result<&[V]> {
        self.require_complete()?;
        Ok(&self.tsl)
    }
}

impl<V: Vertex> StatefulVisitor for ReachabilityVisitor<V> {
    fn state(&self) -> VisitorState {
        self.lifecycle.0
    }
}

impl<V: Vertex> DepthFirstVisitor<V> for ReachabilityVisitor<V> {
    fn begin_traversal(&mut self) -> Result<()> {
        self.lifecycle.begin()
    }

    fn on_initialize_vertex(&mut self, vertex: &V, _is_source: bool) -> Result<()> {
        self.reachable
            .entry(vertex.clone())
            .or_insert_with(AdjacencySet::new);
        Ok(())
    }

    fn on_back_edge(&mut self, vertex: &V) -> Result<()> {
        Err(cycle_detected!(vertex))
    }

    fn on_start_vertex(&mut self, vertex: &V) -> Result<()> {
        self.reachable
            .entry(vertex.clone())
            .or_insert_with(AdjacencySet::new);
        self.active.push(vertex.clone());
        Ok(())
    }

    fn on_examine_edge(&mut self, _from: &V, to: &V) -> Result<()> {
        let inherited: Vec<V> = if self.finished.contains(to) {
            self.reachable
                .get(to)
                .map(|set| set.as_slice().to_vec())
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        for ancestor in &self.active {
            if let Some(set) = self.reachable.get_mut(ancestor) {
                set.insert(to.clone());
                for vertex in &inherited {
                    set.insert(vertex.clone());
                }
            }
        }
        Ok(())
    }

    fn on_finish_vertex(&mut self, vertex: &V) -> Result<()> {
        self.active.pop();
        self.finished.insert(vertex.clone());
        self.tsl.push(vertex.clone());
        Ok(())
    }

    fn end_traversal(&mut self) -> Result<()> {
        self.lifecycle.end()
    }
}
