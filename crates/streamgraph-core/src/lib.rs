//! In-memory analytic engine over stream graphs: graphs whose nodes and
//! links exist only during disjoint time intervals.
//!
//! A [`graph::StreamGraph`] is assembled once, atomically, by
//! [`graph::StreamGraphBuilder`]; after that it is immutable and safely
//! shared across however many [`stream::Stream`] views a caller opens on
//! it. Every query runs over lazily-produced iterators from
//! [`iter`] and never mutates the underlying graph.
//!
//! Parsing an on-disk format, CLI entry points, logging of per-query
//! work, and the per-stream metric functions are all deliberately left
//! to callers of this crate.

pub mod bit_array;
pub mod error;
pub mod events;
pub mod graph;
pub mod ids;
pub mod interval;
pub mod iter;
pub mod key_moments;
pub mod link;
pub mod node;
pub mod stream;

pub use bit_array::BitArray;
pub use error::{BuildError, QueryError};
pub use events::{Event, EventsTable, EventsTableBuilder};
pub use graph::{StreamGraph, StreamGraphBuilder};
pub use ids::{LinkId, NodeId};
pub use interval::{Interval, IntervalSet};
pub use key_moments::{KeyMomentsTable, KeyMomentsTableBuilder, RelativeMoment, SLICE_SIZE};
pub use link::Link;
pub use node::TemporalNode;
pub use stream::{ChunkState, Stream};
