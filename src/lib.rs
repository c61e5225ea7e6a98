//! Generic binary tree on a generational arena.
//!
//! Every node lives in an [`generational_arena::Arena`] and is addressed
//! by its [`Index`]. Children are created in place as fresh leaves via
//! [`BinaryTree::set_left_child`]/[`BinaryTree::set_right_child`], which
//! keeps the structure acyclic and single-parented by construction.
//! Replacing or deleting a child frees the whole discarded subtree, and
//! the arena's generation counter turns any handle into it into a
//! checkable stale state instead of a dangling pointer.
//!
//! Traversal is a single pre-order primitive ([`BinaryTree::iter_from`])
//! that carries each node's relative depth; counting, depth measurement
//! and predicate search are compositions over it. Because the iterator
//! borrows the tree, structural mutation during a traversal is a borrow
//! error at compile time rather than a documented hazard.

pub mod errors;
pub mod iter;
mod render;
pub mod tree;
pub mod util;

pub use errors::{TreeError, TreeResult};
pub use generational_arena::Index;
pub use iter::DepthFirstIter;
pub use tree::{BinaryTree, Node};
