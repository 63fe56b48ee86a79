//! Internal building blocks shared by the traversals.
//!
//! `pub(crate)` so algorithms can share scratch structures (visited sets)
//! without exposing them as part of the public API surface.

pub(crate) mod visited;
