use sigil_backend::flags::TreeNodeFlags;

use crate::context::Context;
use crate::widget::Layout;

/// A collapsible tree node.
///
/// When the node is open its layout is built and the tree level popped,
/// unless the flags include `NO_TREE_PUSH_ON_OPEN` (collapsing headers do),
/// in which case the backend pushed nothing and no pop is issued.
pub struct TreeNode<'a> {
    label: String,
    flags: TreeNodeFlags,
    layout: Layout<'a>,
}

impl<'a> TreeNode<'a> {
    pub fn new(label: impl Into<String>, layout: Layout<'a>) -> Self {
        Self { label: label.into(), flags: TreeNodeFlags::empty(), layout }
    }

    /// A full-width header that does not indent its content.
    pub fn collapsing_header(label: impl Into<String>, layout: Layout<'a>) -> Self {
        Self::new(label, layout).flags(TreeNodeFlags::COLLAPSING_HEADER)
    }

    pub fn flags(mut self, flags: TreeNodeFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn build(self, ctx: &mut Context<'_>) {
        let open = ctx.backend().tree_node(&self.label, self.flags);
        if self.flags.contains(TreeNodeFlags::NO_TREE_PUSH_ON_OPEN) {
            if open {
                self.layout.build(ctx);
            }
            return;
        }
        ctx.region("tree node", open, self.layout, |b| b.tree_pop());
    }
}

#[cfg(test)]
mod tests {
    use sigil_backend::trace::{Call, Script, TraceBackend};

    use super::*;
    use crate::layout;
    use crate::widgets::label::Label;

    #[test]
    fn open_node_pops() {
        let mut b = TraceBackend::new();
        TreeNode::new("root", layout![TreeNode::new("leaf", layout![Label::new("x")])])
            .build(&mut Context::new(&mut b));
        assert_eq!(b.count(|c| *c == Call::TreePop), 2);
        assert_eq!(b.calls().last(), Some(&Call::TreePop));
    }

    #[test]
    fn collapsed_node_skips_children_and_pop() {
        let mut b = TraceBackend::with_script(Script::new().close("root"));
        TreeNode::new("root", layout![Label::new("x")]).build(&mut Context::new(&mut b));
        assert_eq!(b.calls().len(), 1);
    }

    #[test]
    fn collapsing_header_never_pops() {
        let mut b = TraceBackend::new();
        TreeNode::collapsing_header("Section", layout![Label::new("body")])
            .build(&mut Context::new(&mut b));
        assert_eq!(
            b.calls(),
            &[
                Call::TreeNode { label: "Section".into(), flags: TreeNodeFlags::COLLAPSING_HEADER },
                Call::Text("body".into()),
            ]
        );
    }
}
