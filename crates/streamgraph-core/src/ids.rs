//! Dense, typed indices into a [`crate::graph::StreamGraph`]'s node/link arrays.
//!
//! There are no pointers between nodes and links in this engine — every
//! cross-reference is one of these indices into the graph's owned arrays,
//! the same arena-of-indices discipline the teacher's tree utilities use
//! in place of raw pointers.

use std::fmt;

macro_rules! dense_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub usize);

        impl $name {
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                $name(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

dense_id!(NodeId);
dense_id!(LinkId);
