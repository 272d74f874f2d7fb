//! Strongly Connected Components (SCC) using Tarjan's algorithm.
//!
//! A strongly connected component is a maximal set of vertices such that there is a path
//! from every vertex to every other vertex in the set. Components with more than one vertex,
//! and single vertices carrying a self-loop, are exactly the cycles of the graph.
//!
//! # Use Cases
//!
//! - **Cycle detection**: [`crate::DirectedAdjacencyList::get_cycles`]
//! - **Dependency analysis**: grouping mutually dependent modules
//! - **Condensation**: every component collapses to one vertex of a DAG

use std::collections::HashMap;

use crate::{
    graph::{Successors, Vertex},
    utils::BitSet,
    Result,
};

/// Computes the strongly connected components of a directed graph.
///
/// Uses Tarjan's algorithm with a single depth-first pass over an explicit frame stack.
/// Every vertex receives a discovery index and a lowlink; when a vertex's lowlink equals
/// its index it is the root of a component, and the algorithm stack is popped down to it.
///
/// # Returns
///
/// The components in emission order, which is **reverse topological order** of the
/// condensation: if an arc leads from component A to component B, B is emitted first.
/// Each component lists its vertices in pop order.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Errors
///
/// Returns [`crate::Error::NonexistentVertex`] if the graph reports a successor it does not
/// contain, or fails to list the successors of one of its own vertices. The graphs in this
/// crate never do either.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{tarjan_scc, DirectedAdjacencyList};
///
/// let graph = DirectedAdjacencyList::from_arcs([
///     ("a", "d"), ("a", "b"), ("b", "c"), ("c", "d"), ("d", "a"),
///     ("e", "d"), ("f", "g"), ("g", "h"), ("h", "f"),
/// ])?;
///
/// let sccs = tarjan_scc(&graph)?;
/// assert_eq!(sccs.components(), &[vec!["c", "b", "d", "a"], vec!["e"], vec!["h", "g", "f"]]);
///
/// let cycles: Vec<&[&str]> = sccs.connected_components().collect();
/// assert_eq!(cycles, vec![&["c", "b", "d", "a"][..], &["h", "g", "f"][..]]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub fn tarjan_scc<G>(graph: &G) -> Result<StronglyConnectedComponents<G::Vertex>>
where
    G: Successors,
{
    let mut state = TarjanState::new(graph.order());

    for vertex in graph.vertices() {
        if !state.index.contains_key(vertex) {
            state.strongconnect(graph, vertex)?;
        }
    }

    let sccs = state.finish();
    log::debug!(
        "tarjan: {} vertices in {} components, {} cyclic",
        graph.order(),
        sccs.len(),
        sccs.connected_components().count()
    );
    Ok(sccs)
}

/// The strongly connected components of a graph, as computed by [`tarjan_scc`].
#[derive(Debug, Clone)]
pub struct StronglyConnectedComponents<V> {
    components: Vec<Vec<V>>,
    cyclic: Vec<bool>,
    membership: HashMap<V, usize>,
}

impl<V: Vertex> StronglyConnectedComponents<V> {
    /// All components in emission order.
    #[must_use]
    pub fn components(&self) -> &[Vec<V>] {
        &self.components
    }

    /// The components that form cycles: more than one vertex, or a single vertex with a
    /// self-loop.
    pub fn connected_components(&self) -> impl Iterator<Item = &[V]> {
        self.components
            .iter()
            .zip(&self.cyclic)
            .filter(|(_, cyclic)| **cyclic)
            .map(|(component, _)| component.as_slice())
    }

    /// Returns `true` if the component at `index` is a cycle.
    #[must_use]
    pub fn is_cyclic(&self, index: usize) -> bool {
        self.cyclic.get(index).copied().unwrap_or(false)
    }

    /// Index of the component containing `vertex`.
    #[must_use]
    pub fn component_of(&self, vertex: &V) -> Option<usize> {
        self.membership.get(vertex).copied()
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the graph had no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Consumes the result, returning every component.
    #[must_use]
    pub fn into_components(self) -> Vec<Vec<V>> {
        self.components
    }

    /// Consumes the result, returning only the cyclic components.
    #[must_use]
    pub fn into_connected_components(self) -> Vec<Vec<V>> {
        self.components
            .into_iter()
            .zip(self.cyclic)
            .filter_map(|(component, cyclic)| cyclic.then_some(component))
            .collect()
    }
}

/// A vertex whose successors are still being examined.
struct Frame<'g, V> {
    index: usize,
    successors: Vec<&'g V>,
    next: usize,
}

/// Internal state for Tarjan's algorithm.
struct TarjanState<'g, V> {
    /// Discovery index of every vertex seen so far
    index: HashMap<&'g V, usize>,
    /// Lowlink, by discovery index
    lowlink: Vec<usize>,
    /// Whether the vertex with a given discovery index is on the stack
    on_stack: BitSet,
    /// Whether the vertex with a given discovery index has an arc to itself
    self_loops: BitSet,
    /// The algorithm stack, as (discovery index, vertex)
    stack: Vec<(usize, &'g V)>,
    components: Vec<Vec<V>>,
    cyclic: Vec<bool>,
}

impl<'g, V: Vertex> TarjanState<'g, V> {
    fn new(order: usize) -> Self {
        Self {
            index: HashMap::with_capacity(order),
            lowlink: Vec::with_capacity(order),
            on_stack: BitSet::new(order),
            self_loops: BitSet::new(order),
            stack: Vec::new(),
            components: Vec::new(),
            cyclic: Vec::new(),
        }
    }

    fn strongconnect<G>(&mut self, graph: &'g G, root: &'g V) -> Result<()>
    where
        G: Successors<Vertex = V>,
    {
        let mut frames = vec![self.discover(graph, root)?];

        loop {
            let (v, next) = match frames.last_mut() {
                Some(frame) => {
                    let next = frame.successors.get(frame.next).copied();
                    frame.next += 1;
                    (frame.index, next)
                }
                None => return Ok(()),
            };

            match next {
                Some(w) => match self.index.get(w).copied() {
                    None => {
                        let w = graph.vertex(w).ok_or_else(|| nonexistent_vertex!(w))?;
                        frames.push(self.discover(graph, w)?);
                    }
                    Some(w_index) => {
                        if w_index == v {
                            self.self_loops.insert(v);
                        }
                        if self.on_stack.contains(w_index) {
                            self.lowlink[v] = self.lowlink[v].min(w_index);
                        }
                    }
                },
                None => {
                    frames.pop();
                    if let Some(parent) = frames.last() {
                        self.lowlink[parent.index] = self.lowlink[parent.index].min(self.lowlink[v]);
                    }
                    if self.lowlink[v] == v {
                        self.emit(v);
                    }
                }
            }
        }
    }

    /// Assigns the next discovery index to `vertex` and pushes it on the algorithm stack.
    ///
    /// Successors are fetched first so a failing lookup leaves the state untouched.
    fn discover<G>(&mut self, graph: &'g G, vertex: &'g V) -> Result<Frame<'g, V>>
    where
        G: Successors<Vertex = V>,
    {
        let successors = graph.successors_of(vertex)?.collect();
        let index = self.lowlink.len();
        self.index.insert(vertex, index);
        self.lowlink.push(index);
        self.stack.push((index, vertex));
        self.on_stack.insert(index);

        Ok(Frame {
            index,
            successors,
            next: 0,
        })
    }

    /// Pops the component rooted at discovery index `root`.
    fn emit(&mut self, root: usize) {
        let mut component = Vec::new();
        while let Some((index, vertex)) = self.stack.pop() {
            self.on_stack.remove(index);
            component.push(vertex.clone());
            if index == root {
                break;
            }
        }

        let cyclic = component.len() > 1 || self.self_loops.contains(root);
        log::trace!("tarjan: component {component:?} (cyclic: {cyclic})");
        self.components.push(component);
        self.cyclic.push(cyclic);
    }

    fn finish(self) -> StronglyConnectedComponents<V> {
        debug_assert!(self.on_stack.is_empty());
        log::trace!("tarjan: {} self-loops", self.self_loops.count());

        let mut membership = HashMap::with_capacity(self.index.len());
        for (position, component) in self.components.iter().enumerate() {
            for vertex in component {
                membership.insert(vertex.clone(), position);
            }
        }

        StronglyConnectedComponents {
            components: self.components,
            cyclic: self.cyclic,
            membership,
        }
    }
}
