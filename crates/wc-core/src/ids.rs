//! Dense indices into the graph's node and edge tables.
//!
//! Collaborators address nodes by their string id (`"depot"`, `"cp1"`, …).
//! The graph resolves each string id once, at build time, to a [`NodeId`]:
//! the node's position in a table sorted by string id.  Comparing two
//! `NodeId`s is therefore the same as comparing the string ids they stand
//! for, and the "lowest id wins" tie-break never touches a string.
//!
//! [`EdgeId`]s are positions in the CSR edge arrays, where each node's
//! outgoing edges are contiguous and keep their registration order.

use std::fmt;

/// Declare a `u32` position wrapper for one of the graph tables.
macro_rules! table_index {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Placeholder for "not reached" in predecessor arrays.
            pub const INVALID: $name = $name(u32::MAX);

            /// Wrap a table position.  Graph tables are bounded by `u32`
            /// when they are built, so the cast never truncates.
            #[inline(always)]
            pub fn from_index(i: usize) -> Self {
                debug_assert!(i < u32::MAX as usize);
                $name(i as u32)
            }

            /// Position in the table, for indexing the graph's `Vec`s.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

table_index! {
    /// Position of a node in the id-sorted node table.
    NodeId
}

table_index! {
    /// Position of a directed edge in the CSR edge arrays.
    EdgeId
}
