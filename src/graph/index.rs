//! Integer handles into the node and edge arenas.
//!
//! Handles are plain values: copying one never aliases graph storage, and a
//! handle stays numerically valid for as long as the graph only grows. The
//! maximum value of the index type is reserved as the "absent / end of list"
//! sentinel.

use core::fmt;
use core::hash::Hash;

use serde::{Deserialize, Serialize};

/// The default integer type backing graph handles.
pub type DefaultIx = u32;

/// Integer types usable as arena handles.
///
/// `max()` is reserved as the sentinel, so a graph indexed by `Ix` holds at
/// most `Ix::max() - 1` nodes and as many edges.
pub trait IndexType: Copy + Default + Hash + Ord + fmt::Debug + 'static {
    /// Converts an arena position into the index type, saturating to
    /// [`max()`](IndexType::max) when `x` does not fit.
    fn new(x: usize) -> Self;
    /// Returns the arena position as `usize`.
    fn index(&self) -> usize;
    /// The sentinel value.
    fn max() -> Self;
}

macro_rules! impl_index_type {
    ($($t:ty),* $(,)?) => {
        $(
            impl IndexType for $t {
                #[inline(always)]
                fn new(x: usize) -> Self {
                    // Out-of-range positions collapse onto the sentinel, which
                    // every bounds check rejects.
                    <$t>::try_from(x).unwrap_or(<$t>::MAX)
                }

                #[inline(always)]
                fn index(&self) -> usize {
                    *self as usize
                }

                #[inline(always)]
                fn max() -> Self {
                    <$t>::MAX
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, usize);

/// Handle to a node in a [`Graph`](crate::graph::Graph).
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex<Ix = DefaultIx>(Ix);

impl<Ix: IndexType> NodeIndex<Ix> {
    /// Wraps an arena position.
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    /// Returns the arena position.
    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// The "no node" sentinel.
    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }

    /// Returns `true` for the sentinel.
    #[inline]
    pub fn is_end(self) -> bool {
        self == Self::end()
    }
}

impl<Ix: IndexType> Default for NodeIndex<Ix> {
    fn default() -> Self {
        Self::end()
    }
}

impl<Ix: IndexType> From<Ix> for NodeIndex<Ix> {
    fn from(ix: Ix) -> Self {
        NodeIndex(ix)
    }
}

impl<Ix: fmt::Debug> fmt::Debug for NodeIndex<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({:?})", self.0)
    }
}

/// Handle to an edge in a [`Graph`](crate::graph::Graph).
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeIndex<Ix = DefaultIx>(Ix);

impl<Ix: IndexType> EdgeIndex<Ix> {
    /// Wraps an arena position.
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(IndexType::new(x))
    }

    /// Returns the arena position.
    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// The "end of list" sentinel.
    #[inline]
    pub fn end() -> Self {
        EdgeIndex(IndexType::max())
    }

    /// Returns `true` for the sentinel.
    #[inline]
    pub fn is_end(self) -> bool {
        self == Self::end()
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    #[inline]
    pub(crate) fn live(self) -> Option<Self> {
        if self.is_end() {
            None
        } else {
            Some(self)
        }
    }
}

impl<Ix: IndexType> Default for EdgeIndex<Ix> {
    fn default() -> Self {
        Self::end()
    }
}

impl<Ix: IndexType> From<Ix> for EdgeIndex<Ix> {
    fn from(ix: Ix) -> Self {
        EdgeIndex(ix)
    }
}

impl<Ix: fmt::Debug> fmt::Debug for EdgeIndex<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeIndex({:?})", self.0)
    }
}

/// Selects one of the two adjacency lists a node heads and an edge threads.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Edges leaving the node (the node is the source).
    Outgoing = 0,
    /// Edges entering the node (the node is the target).
    #[doc(alias = "Ingoing")]
    Incoming = 1,
}

impl Direction {
    /// Both directions, in list-slot order.
    pub const ALL: [Direction; 2] = [Direction::Outgoing, Direction::Incoming];

    /// The other direction.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Outgoing => Direction::Incoming,
            Direction::Incoming => Direction::Outgoing,
        }
    }

    /// Slot of this direction in the per-node / per-edge link arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}
