//! Depth-first traversal configuration
//!
//! Controls the limits and strictness of the [`crate::DepthFirst`] engine. The defaults
//! match the behaviour of the free [`crate::traverse`] and [`crate::toposort`] functions.

/// Configuration for depth-first traversals
///
/// # Examples
///
/// ```rust
/// use graphwalk::{DepthFirst, DirectedAdjacencyList, Error, NoOpVisitor, TraversalConfig};
///
/// let graph = DirectedAdjacencyList::from_arcs([(1, 2), (2, 3), (3, 4)])?;
/// let engine = DepthFirst::new(TraversalConfig::strict(2));
///
/// let result = engine.traverse(&graph, &mut NoOpVisitor, None);
/// assert_eq!(result, Err(Error::RecursionLimit(2)));
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Maximum number of vertices on the active depth-first path (`None` for unbounded)
    /// Exceeding it aborts the traversal with [`crate::Error::RecursionLimit`]
    pub max_depth: Option<usize>,

    /// Fail with [`crate::Error::NoSourceVertices`] when a traversal without explicit start
    /// vertices finds no source in a non-empty graph (default: true)
    /// When disabled such a traversal visits nothing and succeeds
    pub require_sources: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            require_sources: true,
        }
    }
}

impl TraversalConfig {
    /// Creates a configuration that bounds the active path to `max_depth` vertices
    ///
    /// Useful when traversing untrusted input where a pathological chain should be
    /// reported rather than walked to the end.
    #[must_use]
    pub fn strict(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            require_sources: true,
        }
    }

    /// Creates a configuration that tolerates graphs without source vertices
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_depth: None,
            require_sources: false,
        }
    }
}
