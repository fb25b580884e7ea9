//! # knotwork-core
//!
//! Expression storage for the knotwork equation engine.
//!
//! This crate provides:
//! - Arena-allocated expression nodes with hash-consing
//! - Type-safe expression handles
//! - The closed lexicon of functions and constants user equations may
//!   reference
//!
//! ## Design Principles
//!
//! - **Closed lexicon**: every symbol a parsed equation can mention is a
//!   variant of an enum in [`lexicon`]; there is no way to smuggle an
//!   out-of-set name past the type system
//! - **Hash-Consing**: structurally identical subexpressions within one
//!   arena are stored exactly once
//! - **Zero-Cost Handles**: 32-bit indices instead of pointers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod expr;
pub mod handle;
pub mod lexicon;

pub use arena::ExprArena;
pub use expr::ExprNode;
pub use handle::ExprHandle;
pub use lexicon::{Constant, Function, PARAMETER};
