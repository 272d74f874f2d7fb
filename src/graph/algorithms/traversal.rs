//! Visitor-driven depth-first traversal.
//!
//! [`DepthFirst`] walks a directed graph from a queue of start vertices and reports every
//! event to a [`DepthFirstVisitor`]. When no start vertices are given, the queue holds the
//! graph's source vertices (in-degree zero) in insertion order.
//!
//! # Iterative Formulation
//!
//! The walk keeps an explicit stack of frames, each holding a vertex, a snapshot of its
//! successors and a cursor into that snapshot. Graph depth is therefore bounded by memory
//! rather than by the call stack; [`TraversalConfig::max_depth`] adds an explicit bound.
//!
//! # Vertex States
//!
//! Each vertex moves from unvisited to visiting (on the active path) to visited (finished)
//! exactly once per traversal. An examined arc whose head is visiting is a back edge: the
//! visitor is told and the walk does not descend.

use std::collections::{HashMap, HashSet};

use crate::{
    graph::{
        algorithms::{DepthFirstVisitor, ToposortVisitor, TraversalConfig},
        Successors,
    },
    Error, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Visited,
}

/// One vertex on the active path.
struct Frame<'g, V> {
    vertex: &'g V,
    successors: Vec<&'g V>,
    next: usize,
}

/// Depth-first traversal engine.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{DepthFirst, DirectedAdjacencyList, ToposortVisitor, TraversalConfig};
///
/// let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("e", "d")])?;
/// let engine = DepthFirst::new(TraversalConfig::default());
///
/// let mut visitor = ToposortVisitor::new();
/// engine.traverse(&graph, &mut visitor, Some(&["e", "a"][..]))?;
/// assert_eq!(visitor.tsl()?, &["d", "e", "b", "a"]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirst {
    config: TraversalConfig,
}

impl DepthFirst {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: TraversalConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine runs with.
    #[must_use]
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Walks `graph`, reporting every event to `visitor`.
    ///
    /// With `start` the walk processes the listed vertices in order, skipping any already
    /// visited, and sends no `on_initialize_vertex` events. Without it every vertex is
    /// initialized and the sources are walked.
    ///
    /// # Errors
    ///
    /// - [`Error::NonexistentVertex`] if a start vertex is missing, before any event fires
    /// - [`Error::NoSourceVertices`] if the graph is non-empty, no start was given, no
    ///   vertex is a source and the configuration requires sources
    /// - [`Error::RecursionLimit`] if the active path outgrows the configured depth
    /// - anything the visitor returns from a hook
    pub fn traverse<G, Vis>(
        &self,
        graph: &G,
        visitor: &mut Vis,
        start: Option<&[G::Vertex]>,
    ) -> Result<()>
    where
        G: Successors,
        Vis: DepthFirstVisitor<G::Vertex> + ?Sized,
    {
        let explicit = match start {
            Some(vertices) => Some(
                vertices
                    .iter()
                    .map(|vertex| graph.vertex(vertex).ok_or_else(|| nonexistent_vertex!(vertex)))
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };

        visitor.begin_traversal()?;
        let queue = match explicit {
            Some(queue) => queue,
            None => self.initialize(graph, visitor)?,
        };

        log::debug!(
            "depth-first traversal over {} vertices from {} start vertices",
            graph.order(),
            queue.len()
        );

        let mut marks: HashMap<&G::Vertex, Mark> = HashMap::with_capacity(graph.order());
        for root in queue {
            if !marks.contains_key(root) {
                self.visit(graph, visitor, root, &mut marks)?;
            }
        }

        visitor.end_traversal()
    }

    /// Runs a traversal with a [`ToposortVisitor`] and returns the finish order.
    ///
    /// Without `start`, every vertex of the graph must end up in the result; vertices that
    /// are only reachable through a cycle make the sort fail.
    ///
    /// # Errors
    ///
    /// [`Error::CycleDetected`] for any cycle encountered or left unreached, plus everything
    /// [`traverse`](Self::traverse) reports.
    pub fn toposort<G>(&self, graph: &G, start: Option<&G::Vertex>) -> Result<Vec<G::Vertex>>
    where
        G: Successors,
    {
        let mut visitor = ToposortVisitor::new();
        self.traverse(graph, &mut visitor, start.map(std::slice::from_ref))?;
        let sorted = visitor.into_tsl()?;

        if start.is_none() && sorted.len() != graph.order() {
            return Err(Error::CycleDetected(format!(
                "{} of {} vertices are only reachable through a cycle",
                graph.order() - sorted.len(),
                graph.order()
            )));
        }
        Ok(sorted)
    }

    /// Sends `on_initialize_vertex` for every vertex and returns the sources.
    fn initialize<'g, G, Vis>(&self, graph: &'g G, visitor: &mut Vis) -> Result<Vec<&'g G::Vertex>>
    where
        G: Successors,
        Vis: DepthFirstVisitor<G::Vertex> + ?Sized,
    {
        let heads: HashSet<&G::Vertex> = graph.edges().map(|(_, head)| head).collect();

        let mut sources = Vec::new();
        for vertex in graph.vertices() {
            let is_source = !heads.contains(vertex);
            visitor.on_initialize_vertex(vertex, is_source)?;
            if is_source {
                sources.push(vertex);
            }
        }

        if sources.is_empty() && graph.order() > 0 {
            if self.config.require_sources {
                return Err(Error::NoSourceVertices);
            }
            log::debug!("no source vertices among {} vertices, nothing to walk", graph.order());
        }
        Ok(sources)
    }

    fn visit<'g, G, Vis>(
        &self,
        graph: &'g G,
        visitor: &mut Vis,
        root: &'g G::Vertex,
        marks: &mut HashMap<&'g G::Vertex, Mark>,
    ) -> Result<()>
    where
        G: Successors,
        Vis: DepthFirstVisitor<G::Vertex> + ?Sized,
    {
        let mut stack: Vec<Frame<'g, G::Vertex>> = Vec::new();
        self.enter(graph, visitor, root, marks, &mut stack)?;

        loop {
            let (from, next) = match stack.last_mut() {
                Some(frame) => {
                    let next = frame.successors.get(frame.next).copied();
                    frame.next += 1;
                    (frame.vertex, next)
                }
                None => return Ok(()),
            };

            match next {
                Some(to) => {
                    visitor.on_examine_edge(from, to)?;
                    match marks.get(to).copied() {
                        Some(Mark::Visiting) => {
                            log::trace!("back edge {from:?} -> {to:?}");
                            visitor.on_back_edge(to)?;
                        }
                        Some(Mark::Visited) => {}
                        None => self.enter(graph, visitor, to, marks, &mut stack)?,
                    }
                }
                None => {
                    stack.pop();
                    visitor.on_finish_vertex(from)?;
                    marks.insert(from, Mark::Visited);
                }
            }
        }
    }

    fn enter<'g, G, Vis>(
        &self,
        graph: &'g G,
        visitor: &mut Vis,
        vertex: &'g G::Vertex,
        marks: &mut HashMap<&'g G::Vertex, Mark>,
        stack: &mut Vec<Frame<'g, G::Vertex>>,
    ) -> Result<()>
    where
        G: Successors,
        Vis: DepthFirstVisitor<G::Vertex> + ?Sized,
    {
        if let Some(limit) = self.config.max_depth {
            if stack.len() >= limit {
                return Err(Error::RecursionLimit(limit));
            }
        }

        marks.insert(vertex, Mark::Visiting);
        visitor.on_start_vertex(vertex)?;
        stack.push(Frame {
            vertex,
            successors: graph.successors_of(vertex)?.collect(),
            next: 0,
        });
        Ok(())
    }
}

/// Walks `graph` with the default configuration. See [`DepthFirst::traverse`].
///
/// # Errors
///
/// See [`DepthFirst::traverse`].
pub fn traverse<G, Vis>(graph: &G, visitor: &mut Vis, start: Option<&[G::Vertex]>) -> Result<()>
where
    G: Successors,
    Vis: DepthFirstVisitor<G::Vertex> + ?Sized,
{
    DepthFirst::default().traverse(graph, visitor, start)
}

/// Topologically sorts `graph` with the default configuration. See [`DepthFirst::toposort`].
///
/// # Errors
///
/// See [`DepthFirst::toposort`].
pub fn toposort<G>(graph: &G, start: Option<&G::Vertex>) -> Result<Vec<G::Vertex>>
where
    G: Successors,
{
    DepthFirst::default().toposort(graph, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{algorithms::NoOpVisitor, DirectedAdjacencyList},
        ReachabilityVisitor, StatefulVisitor, VisitorState,
    };

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl DepthFirstVisitor<&'static str> for Recorder {
        fn begin_traversal(&mut self) -> Result<()> {
            self.events.push("begin".into());
            Ok(())
        }
        fn on_initialize_vertex(&mut self, vertex: &&'static str, is_source: bool) -> Result<()> {
            self.events.push(format!("init {vertex} {is_source}"));
            Ok(())
        }
        fn on_back_edge(&mut self, vertex: &&'static str) -> Result<()> {
            self.events.push(format!("back {vertex}"));
            Ok(())
        }
        fn on_start_vertex(&mut self, vertex: &&'static str) -> Result<()> {
            self.events.push(format!("start {vertex}"));
            Ok(())
        }
        fn on_examine_edge(&mut self, from: &&'static str, to: &&'static str) -> Result<()> {
            self.events.push(format!("examine {from}->{to}"));
            Ok(())
        }
        fn on_finish_vertex(&mut self, vertex: &&'static str) -> Result<()> {
            self.events.push(format!("finish {vertex}"));
            Ok(())
        }
        fn end_traversal(&mut self) -> Result<()> {
            self.events.push("end".into());
            Ok(())
        }
    }

    #[test]
    fn test_event_order() {
        let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "a"), ("c", "a")]).unwrap();
        let mut recorder = Recorder::default();
        traverse(&graph, &mut recorder, None).unwrap();

        assert_eq!(
            recorder.events,
            vec![
                "begin",
                "init a false",
                "init b false",
                "init c true",
                "start c",
                "examine c->a",
                "start a",
                "examine a->b",
                "start b",
                "examine b->a",
                "back a",
                "finish b",
                "finish a",
                "finish c",
                "end",
            ]
        );
    }

    #[test]
    fn test_explicit_start_skips_initialization() {
        let graph = DirectedAdjacencyList::from_arcs([("a", "b")]).unwrap();
        let mut recorder = Recorder::default();
        traverse(&graph, &mut recorder, Some(&["b", "a"][..])).unwrap();

        assert_eq!(
            recorder.events,
            vec!["begin", "start b", "finish b", "start a", "examine a->b", "finish a", "end"]
        );
    }

    #[test]
    fn test_missing_start_vertex_fires_nothing() {
        let graph = DirectedAdjacencyList::from_arcs([("a", "b")]).unwrap();
        let mut recorder = Recorder::default();
        let result = traverse(&graph, &mut recorder, Some(&["a", "zz"][..]));

        assert!(matches!(result, Err(Error::NonexistentVertex(_))));
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn test_no_sources() {
        let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "a")]).unwrap();
        assert_eq!(traverse(&graph, &mut NoOpVisitor, None), Err(Error::NoSourceVertices));

        let lenient = DepthFirst::new(TraversalConfig::lenient());
        assert!(lenient.traverse(&graph, &mut NoOpVisitor, None).is_ok());
    }

    #[test]
    fn test_empty_graph() {
        let graph: DirectedAdjacencyList<u8> = DirectedAdjacencyList::new();
        let mut visitor = ToposortVisitor::new();
        traverse(&graph, &mut visitor, None).unwrap();
        assert_eq!(visitor.state(), VisitorState::Complete);
        assert!(visitor.tsl().unwrap().is_empty());
        assert_eq!(toposort(&graph, None).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_recursion_limit() {
        let graph = DirectedAdjacencyList::from_arcs((0u32..10).map(|i| (i, i + 1))).unwrap();

        let bounded = DepthFirst::new(TraversalConfig::strict(11));
        assert!(bounded.toposort(&graph, None).is_ok());

        let tight = DepthFirst::new(TraversalConfig::strict(10));
        assert_eq!(tight.toposort(&graph, None), Err(Error::RecursionLimit(10)));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let depth = 200_000u32;
        let graph = DirectedAdjacencyList::from_arcs((0..depth).map(|i| (i, i + 1))).unwrap();
        let sorted = toposort(&graph, Some(&0)).unwrap();
        assert_eq!(sorted.len(), depth as usize + 1);
        assert_eq!(sorted.first(), Some(&depth));
        assert_eq!(sorted.last(), Some(&0));
    }

    #[test]
    fn test_toposort_rejects_unreached_cycle() {
        let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("c", "d"), ("d", "c")]).unwrap();
        assert!(matches!(toposort(&graph, None), Err(Error::CycleDetected(_))));
        assert_eq!(toposort(&graph, Some(&"a")).unwrap(), vec!["b", "a"]);
    }

    #[test]
    fn test_visitor_reuse_is_refused() {
        let graph = DirectedAdjacencyList::from_arcs([("a", "b")]).unwrap();
        let mut visitor = ReachabilityVisitor::new();
        traverse(&graph, &mut visitor, None).unwrap();
        assert!(matches!(
            traverse(&graph, &mut visitor, None),
            Err(Error::WrongVisitorState { .. })
        ));
    }

    #[test]
    fn test_dyn_visitor() {
        let graph = DirectedAdjacencyList::from_arcs([("a", "b")]).unwrap();
        let mut recorder = Recorder::default();
        let visitor: &mut dyn DepthFirstVisitor<&'static str> = &mut recorder;
        traverse(&graph, visitor, None).unwrap();
        assert_eq!(recorder.events.len(), 9);
    }
}
