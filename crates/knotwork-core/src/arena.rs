//! Arena allocator for expression storage.
//!
//! Nodes are stored contiguously in a `Vec`, with hash-consing so each
//! structurally unique node within one arena is stored exactly once. The
//! parser builds one small arena per compiled equation; repeated subtrees
//! such as the `cos(2*t)` in `cos(t) - 2*cos(2*t)` share storage.

use hashbrown::HashMap;

use crate::expr::{CallArgs, ExprNode};
use crate::handle::ExprHandle;
use crate::lexicon::{Constant, Function};

/// The arena a compiled expression's nodes live in.
#[derive(Debug, Clone, Default)]
pub struct ExprArena {
    /// Storage for all expression nodes.
    nodes: Vec<ExprNode>,
    /// Interning table: maps node content to its handle.
    intern_map: HashMap<ExprNode, ExprHandle>,
}

impl ExprArena {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a node, returning its handle.
    ///
    /// If an identical node already exists, returns the existing handle.
    pub fn intern(&mut self, node: ExprNode) -> ExprHandle {
        if let Some(&handle) = self.intern_map.get(&node) {
            return handle;
        }

        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "arena capacity exceeded");

        let handle = ExprHandle::new(index as u32);
        self.nodes.push(node.clone());
        self.intern_map.insert(node, handle);
        handle
    }

    /// Gets the node at the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this arena.
    #[must_use]
    pub fn get(&self, handle: ExprHandle) -> &ExprNode {
        &self.nodes[handle.index() as usize]
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // === Convenience constructors ===

    /// Creates a numeric literal.
    pub fn number(&mut self, value: f64) -> ExprHandle {
        self.intern(ExprNode::number(value))
    }

    /// Creates the free-parameter node.
    pub fn parameter(&mut self) -> ExprHandle {
        self.intern(ExprNode::Parameter)
    }

    /// Creates a named-constant node.
    pub fn constant(&mut self, constant: Constant) -> ExprHandle {
        self.intern(ExprNode::Constant(constant))
    }

    /// Creates an addition.
    pub fn add(&mut self, lhs: ExprHandle, rhs: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::Add(lhs, rhs))
    }

    /// Creates a subtraction.
    pub fn sub(&mut self, lhs: ExprHandle, rhs: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::Sub(lhs, rhs))
    }

    /// Creates a multiplication.
    pub fn mul(&mut self, lhs: ExprHandle, rhs: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::Mul(lhs, rhs))
    }

    /// Creates a division.
    pub fn div(&mut self, lhs: ExprHandle, rhs: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::Div(lhs, rhs))
    }

    /// Creates a power expression.
    pub fn pow(&mut self, base: ExprHandle, exp: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::Pow { base, exp })
    }

    /// Creates a negation.
    pub fn neg(&mut self, arg: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::Neg(arg))
    }

    /// Creates a function application.
    ///
    /// The caller (the parser) is responsible for having checked arity.
    pub fn call(&mut self, func: Function, args: CallArgs) -> ExprHandle {
        self.intern(ExprNode::Call { func, args })
    }
}
