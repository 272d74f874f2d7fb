//! Vertex handle contract.
//!
//! A vertex is an opaque, client-supplied handle. The graph stores one clone of each
//! handle and compares handles with [`Eq`] and [`Hash`], so any type whose equality is a
//! stable identity qualifies: interned identifiers, integers, string keys, or shared
//! pointers such as [`Rc`] and [`Arc`] whose contents identify the object.
//!
//! # Validation
//!
//! Types whose values do not all carry identity override [`Vertex::validate`]. Graphs call
//! it before inserting a value and report [`crate::Error::InvalidVertexType`] when it fails.
//!
//! ```rust
//! use graphwalk::{DirectedAdjacencyList, Error, Vertex};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Module(String);
//!
//! impl Vertex for Module {
//!     fn validate(&self) -> graphwalk::Result<()> {
//!         if self.0.is_empty() {
//!             return Err(Error::InvalidVertexType("unnamed module".into()));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut graph = DirectedAdjacencyList::new();
//! assert!(graph.add_vertex(Module("core".into())).is_ok());
//! assert!(matches!(
//!     graph.add_vertex(Module(String::new())),
//!     Err(Error::InvalidVertexType(_))
//! ));
//! assert_eq!(graph.order(), 1);
//! ```

use std::{fmt, hash::Hash, rc::Rc, sync::Arc};

use crate::Result;

/// A value usable as a graph vertex.
///
/// Clones of a vertex must compare equal and hash identically to the original; the graph
/// hands clones back out of its algorithms.
pub trait Vertex: Eq + Hash + Clone + fmt::Debug {
    /// Checks that this value carries the identity a vertex requires.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexType`] when the value must not become a vertex.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

macro_rules! impl_vertex {
    ($($ty:ty),* $(,)?) => {
        $(impl Vertex for $ty {})*
    };
}

impl_vertex!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, String,
);

impl Vertex for &str {}

impl<T> Vertex for Rc<T> where T: Eq + Hash + fmt::Debug + ?Sized {}

impl<T> Vertex for Arc<T> where T: Eq + Hash + fmt::Debug + ?Sized {}
