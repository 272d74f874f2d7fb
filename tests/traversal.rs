//! Depth-first traversal integration tests.
//!
//! These tests drive the public traversal API end to end:
//! 1. Build a small dependency graph
//! 2. Traverse it with the bundled or a counting visitor
//! 3. Verify event counts, finish orders and reachable sets

use graphwalk::{
    toposort, traverse, DepthFirst, DepthFirstVisitor, DirectedAdjacencyList, Error, NoOpVisitor,
    ReachabilityVisitor, Result, StatefulVisitor, ToposortVisitor, TraversalConfig, VisitorState,
};

/// a -> b, b -> c, a -> c, b -> d
fn dependency_graph() -> DirectedAdjacencyList<&'static str> {
    DirectedAdjacencyList::from_arcs([("a", "b"), ("b", "c"), ("a", "c"), ("b", "d")]).unwrap()
}

/// Counts every event it receives.
#[derive(Debug, Default)]
struct EventCounts {
    begin: usize,
    initialize: usize,
    sources: usize,
    back_edges: usize,
    started: usize,
    examined: usize,
    finished: usize,
    end: usize,
}

impl DepthFirstVisitor<&'static str> for EventCounts {
    fn begin_traversal(&mut self) -> Result<()> {
        self.begin += 1;
        Ok(())
    }

    fn on_initialize_vertex(&mut self, _vertex: &&'static str, is_source: bool) -> Result<()> {
        self.initialize += 1;
        self.sources += usize::from(is_source);
        Ok(())
    }

    fn on_back_edge(&mut self, _vertex: &&'static str) -> Result<()> {
        self.back_edges += 1;
        Ok(())
    }

    fn on_start_vertex(&mut self, _vertex: &&'static str) -> Result<()> {
        self.started += 1;
        Ok(())
    }

    fn on_examine_edge(&mut self, _from: &&'static str, _to: &&'static str) -> Result<()> {
        self.examined += 1;
        Ok(())
    }

    fn on_finish_vertex(&mut self, _vertex: &&'static str) -> Result<()> {
        self.finished += 1;
        Ok(())
    }

    fn end_traversal(&mut self) -> Result<()> {
        self.end += 1;
        Ok(())
    }
}

#[test]
fn test_toposort_from_root() {
    let graph = dependency_graph();
    assert_eq!(toposort(&graph, Some(&"a")).unwrap(), vec!["c", "d", "b", "a"]);
    assert_eq!(toposort(&graph, None).unwrap(), vec!["c", "d", "b", "a"]);
}

#[test]
fn test_event_counts_on_dag() {
    let graph = dependency_graph();
    let mut counts = EventCounts::default();
    traverse(&graph, &mut counts, None).unwrap();

    assert_eq!(counts.begin, 1);
    assert_eq!(counts.initialize, 4);
    assert_eq!(counts.sources, 1);
    assert_eq!(counts.started, 4);
    assert_eq!(counts.examined, 4);
    assert_eq!(counts.finished, 4);
    assert_eq!(counts.back_edges, 0);
    assert_eq!(counts.end, 1);
}

#[test]
fn test_single_back_edge_reported_once() {
    let mut graph = dependency_graph();
    graph.add_directed_edge("d", "b").unwrap();

    let mut counts = EventCounts::default();
    traverse(&graph, &mut counts, None).unwrap();

    assert_eq!(counts.back_edges, 1);
    assert_eq!(counts.started, 4);
    assert_eq!(counts.finished, 4);
    assert_eq!(counts.examined, 5);
}

#[test]
fn test_cycle_through_root() {
    let mut graph = dependency_graph();
    graph.add_directed_edge("d", "a").unwrap();

    let mut counts = EventCounts::default();
    traverse(&graph, &mut counts, Some(&["a"][..])).unwrap();
    assert_eq!(counts.back_edges, 1);
    assert_eq!(counts.initialize, 0);

    // Every vertex now has an incoming arc
    let mut counts = EventCounts::default();
    assert_eq!(
        traverse(&graph, &mut counts, None),
        Err(Error::NoSourceVertices)
    );
    assert_eq!(counts.begin, 1);
    assert_eq!(counts.started, 0);
    assert_eq!(counts.end, 0);
}

#[test]
fn test_explicit_start_queue() {
    let mut graph = dependency_graph();
    graph.add_directed_edge("e", "c").unwrap();

    let mut visitor = ToposortVisitor::new();
    traverse(&graph, &mut visitor, Some(&["a", "e"][..])).unwrap();
    assert_eq!(visitor.tsl().unwrap(), &["c", "d", "b", "a", "e"]);

    // Later start vertices that were already reached are skipped
    let mut visitor = ToposortVisitor::new();
    traverse(&graph, &mut visitor, Some(&["b", "a"][..])).unwrap();
    assert_eq!(visitor.tsl().unwrap(), &["c", "d", "b", "a"]);
}

#[test]
fn test_missing_start_vertex() {
    let graph = dependency_graph();
    let mut visitor = ToposortVisitor::new();

    let err = traverse(&graph, &mut visitor, Some(&["a", "zzz"][..])).unwrap_err();
    assert!(matches!(err, Error::NonexistentVertex(_)));
    assert!(!err.is_runtime());
    assert_eq!(visitor.state(), VisitorState::NotStarted);
}

#[test]
fn test_reachability_sets() {
    let graph = dependency_graph();
    let mut visitor = ReachabilityVisitor::new();
    traverse(&graph, &mut visitor, None).unwrap();

    assert_eq!(visitor.reachable(&"a").unwrap(), Some(&["b", "c", "d"][..]));
    assert_eq!(visitor.reachable(&"b").unwrap(), Some(&["c", "d"][..]));
    assert_eq!(visitor.reachable(&"c").unwrap(), Some(&[][..]));
    assert_eq!(visitor.reachable(&"d").unwrap(), Some(&[][..]));
    assert_eq!(visitor.tsl().unwrap(), &["c", "d", "b", "a"]);
}

#[test]
fn test_reachability_rejects_cycles() {
    let mut graph = dependency_graph();
    graph.add_directed_edge("d", "b").unwrap();

    let mut visitor = ReachabilityVisitor::new();
    let err = traverse(&graph, &mut visitor, None).unwrap_err();
    assert!(matches!(err, Error::CycleDetected(_)));
    assert_eq!(visitor.state(), VisitorState::InProgress);
    assert!(visitor.reachable(&"a").is_err());
}

#[test]
fn test_toposort_cycle_detected() {
    let mut graph = dependency_graph();
    graph.add_directed_edge("d", "b").unwrap();

    let err = toposort(&graph, Some(&"a")).unwrap_err();
    assert!(err.is_runtime());
    assert!(matches!(err, Error::CycleDetected(_)));
}

#[test]
fn test_toposort_cycle_behind_source() {
    // The cycle c <-> d is unreachable from the only source a
    let graph = DirectedAdjacencyList::from_arcs([("a", "b"), ("c", "d"), ("d", "c")]).unwrap();

    assert!(matches!(toposort(&graph, None), Err(Error::CycleDetected(_))));
    assert!(!graph.is_acyclic());
}

#[test]
fn test_noop_visitor_is_reusable() {
    let graph = dependency_graph();
    let mut visitor = NoOpVisitor;
    traverse(&graph, &mut visitor, None).unwrap();
    traverse(&graph, &mut visitor, None).unwrap();
}

#[test]
fn test_engine_with_config() {
    let cyclic = DirectedAdjacencyList::from_arcs([(1, 2), (2, 1)]).unwrap();

    let strict = DepthFirst::default();
    assert_eq!(
        strict.traverse(&cyclic, &mut NoOpVisitor, None),
        Err(Error::NoSourceVertices)
    );

    let lenient = DepthFirst::new(TraversalConfig::lenient());
    let mut visitor = ToposortVisitor::new();
    lenient.traverse(&cyclic, &mut visitor, None).unwrap();
    assert!(visitor.tsl().unwrap().is_empty());

    let chain = DirectedAdjacencyList::from_arcs((0..5).map(|i| (i, i + 1))).unwrap();
    let bounded = DepthFirst::new(TraversalConfig::strict(3));
    assert_eq!(bounded.toposort(&chain, None), Err(Error::RecursionLimit(3)));
    assert_eq!(
        DepthFirst::new(TraversalConfig::strict(6)).toposort(&chain, None),
        Ok(vec![5, 4, 3, 2, 1, 0])
    );
}
