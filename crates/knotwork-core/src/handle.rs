//! Type-safe expression handles.
//!
//! Handles are 32-bit indices into an [`crate::arena::ExprArena`], a
//! lightweight alternative to pointers that keeps node storage contiguous.

use std::fmt;

/// A handle to an expression node in an arena.
///
/// Within a single arena, two handles are equal if and only if they refer to
/// the same (structurally identical) node, thanks to hash-consing. Handles
/// from different arenas must never be mixed; the parser keeps one arena per
/// compiled expression, so this cannot arise through the public API.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprHandle(u32);

impl ExprHandle {
    /// Creates a handle from a raw index.
    ///
    /// Primarily for internal use by the arena.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw arena index of this handle.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprHandle({})", self.0)
    }
}

impl fmt::Display for ExprHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
