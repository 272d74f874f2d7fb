use thiserror::Error;

use crate::graph::algorithms::VisitorState;

macro_rules! nonexistent_vertex {
    ($vertex:expr) => {
        crate::Error::NonexistentVertex(format!("{:?}", $vertex))
    };
}

/// Builds an [`Error::InvalidVertexType`] for a [`crate::Vertex::validate`] implementation.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{invalid_vertex, Vertex};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Port(u16);
///
/// impl Vertex for Port {
///     fn validate(&self) -> graphwalk::Result<()> {
///         if self.0 == 0 {
///             return Err(invalid_vertex!("port {} is reserved", self.0));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(Port(0).validate().is_err());
/// ```
#[macro_export]
macro_rules! invalid_vertex {
    // Single string version
    ($msg:expr) => {
        $crate::Error::InvalidVertexType($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::InvalidVertexType(format!($fmt, $($arg)*))
    };
}

macro_rules! cycle_detected {
    ($vertex:expr) => {
        crate::Error::CycleDetected(format!("back edge to {:?}", $vertex))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every fallible graph mutation, query, traversal and visitor accessor reports one of these
/// variants. Failing operations never leave a graph partially modified: existence checks run
/// before any mutation takes place.
///
/// # Error Categories
///
/// ## Graph Contract Errors
/// - [`Error::InvalidVertexType`] - A value without stable identity was offered as a vertex
/// - [`Error::NonexistentVertex`] - A query or mutation named a vertex the graph does not hold
/// - [`Error::IncompatibleGraphType`] - A direction-dispatching helper got an unsupported graph
///
/// ## Traversal Errors
/// - [`Error::CycleDetected`] - A visitor refused a back edge
/// - [`Error::NoSourceVertices`] - A non-empty graph had no vertex with in-degree zero
/// - [`Error::RecursionLimit`] - The active depth-first path grew past the configured limit
///
/// ## Visitor Errors
/// - [`Error::WrongVisitorState`] - A stateful visitor was used outside its lifecycle
///
/// Only [`Error::CycleDetected`] and [`Error::NoSourceVertices`] describe properties of the
/// graph itself rather than misuse of the API; [`Error::is_runtime`] singles them out.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{DirectedAdjacencyList, Error};
///
/// let graph: DirectedAdjacencyList<&str> = DirectedAdjacencyList::new();
/// match graph.out_degree_of(&"missing") {
///     Err(Error::NonexistentVertex(vertex)) => println!("no such vertex: {vertex}"),
///     Err(e) => println!("other error: {e}"),
///     Ok(degree) => println!("degree: {degree}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value lacking the identity semantics required of a vertex was offered to a graph.
    ///
    /// Raised immediately by vertex and edge insertion when [`crate::Vertex::validate`]
    /// rejects the value. The graph is left untouched.
    #[error("Invalid vertex type - {0}")]
    InvalidVertexType(String),

    /// A query or mutation referenced a vertex that is not part of the graph.
    ///
    /// The associated string is the `Debug` rendering of the offending vertex.
    #[error("Vertex is not present in the graph - {0}")]
    NonexistentVertex(String),

    /// A helper that dispatches on graph direction received a graph that is neither
    /// mutable as a directed nor as an undirected graph.
    #[error("Incompatible graph type - {0}")]
    IncompatibleGraphType(String),

    /// A cycle was found during a traversal that requires an acyclic graph.
    ///
    /// Raised by [`crate::ToposortVisitor`] when the traversal reports a back edge.
    #[error("Cycle detected - {0}")]
    CycleDetected(String),

    /// The traversal could not find a single source vertex in a non-empty graph.
    ///
    /// Every vertex has at least one incoming arc, so the graph is cyclic with respect to
    /// any starting point the traversal could choose on its own.
    #[error("No source vertices found, the graph is entirely cyclic")]
    NoSourceVertices,

    /// A stateful visitor was driven or queried outside of its lifecycle.
    ///
    /// # Fields
    ///
    /// * `expected` - The state the operation requires
    /// * `actual` - The state the visitor was in
    #[error("Visitor is in state {actual}, expected {expected}")]
    WrongVisitorState {
        /// The state the operation requires
        expected: VisitorState,
        /// The state the visitor was actually in
        actual: VisitorState,
    },

    /// Recursion limit reached.
    ///
    /// The depth-first engine enforces an optional maximum path length. The associated
    /// value is the limit that was exceeded.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),
}

impl Error {
    /// Returns `true` for failures that describe the shape of the graph rather than misuse
    /// of the API.
    ///
    /// These are the conditions [`crate::DirectedAdjacencyList::is_acyclic`] folds into a
    /// `false` answer.
    #[must_use]
    pub fn is_runtime(&self) -> bool {
        matches!(self, Error::CycleDetected(_) | Error::NoSourceVertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_classification() {
        assert!(Error::CycleDetected("a".into()).is_runtime());
        assert!(Error::NoSourceVertices.is_runtime());
        assert!(!Error::NonexistentVertex("a".into()).is_runtime());
        assert!(!Error::RecursionLimit(8).is_runtime());
        assert!(!Error::WrongVisitorState {
            expected: VisitorState::Complete,
            actual: VisitorState::InProgress,
        }
        .is_runtime());
    }

    #[test]
    fn test_macros_render_debug() {
        assert_eq!(
            nonexistent_vertex!("x"),
            Error::NonexistentVertex("\"x\"".to_string())
        );
        assert_eq!(
            invalid_vertex!("empty label"),
            Error::InvalidVertexType("empty label".to_string())
        );
        assert_eq!(cycle_detected!(7), Error::CycleDetected("back edge to 7".into()));
    }

    #[test]
    fn test_wrong_state_message() {
        let err = Error::WrongVisitorState {
            expected: VisitorState::Complete,
            actual: VisitorState::NotStarted,
        };
        assert_eq!(
            err.to_string(),
            "Visitor is in state NOT_STARTED, expected COMPLETE"
        );
    }
}
