use generational_arena::Index;

use crate::tree::{BinaryTree, Node};

/// Pre-order iterator over a subtree, yielding each node together with its
/// depth relative to the starting node (the start is depth 0).
///
/// Uses an explicit stack instead of recursion, so traversal depth is not
/// bounded by the call stack. Right children are pushed before left ones
/// so the left subtree is fully visited first.
pub struct DepthFirstIter<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<(Index, usize)>,
}

impl<'a, T> DepthFirstIter<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>, start: Index) -> Self {
        let mut stack = Vec::new();
        if tree.get(start).is_some() {
            stack.push((start, 0));
        }
        Self { tree, stack }
    }
}

impl<'a, T> Iterator for DepthFirstIter<'a, T> {
    type Item = (Index, &'a Node<T>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, depth) = self.stack.pop()?;
        // Indices on the stack came from live nodes of a tree we hold
        // borrowed, so they resolve.
        let node = self.tree.get(idx)?;
        if let Some(right) = node.right() {
            self.stack.push((right, depth + 1));
        }
        if let Some(left) = node.left() {
            self.stack.push((left, depth + 1));
        }
        Some((idx, node, depth))
    }
}
