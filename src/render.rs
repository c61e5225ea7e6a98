use std::fmt;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::tree::BinaryTree;

impl<T: fmt::Display> BinaryTree<T> {
    /// Renders the subtree rooted at `start` as indented text, one node
    /// per line. Children are tagged `left:`/`right:` so a lone left child
    /// reads differently from a lone right child; the connector glyphs
    /// come from termtree and distinguish a child followed by siblings
    /// from the last child at its level. Diagnostic output only, not a
    /// stable format. A stale handle renders as the empty string.
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self, start: Index) -> String {
        match self.get(start) {
            Some(node) => {
                let mut tree = Tree::new(node.value.to_string());
                build_branches(self, start, &mut tree);
                tree.to_string()
            }
            None => String::new(),
        }
    }
}

fn build_branches<T: fmt::Display>(bt: &BinaryTree<T>, idx: Index, out: &mut Tree<String>) {
    if let Some(node) = bt.get(idx) {
        for (tag, slot) in [("left", node.left()), ("right", node.right())] {
            if let Some(child_idx) = slot {
                if let Some(child) = bt.get(child_idx) {
                    let mut child_tree = Tree::new(format!("{}: {}", tag, child.value));
                    build_branches(bt, child_idx, &mut child_tree);
                    out.push(child_tree);
                }
            }
        }
    }
}
