use crate::dom::document::NodeId;
use crate::dom::query::DomQuery;

/// Verdict a walker filter returns for each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkFilter {
    /// Yield the node and descend into it.
    Accept,
    /// Do not yield the node, but still descend into it.
    Skip,
    /// Neither yield the node nor visit anything beneath it.
    Reject,
}

/// Pre-order depth-first walk over the descendants of a root element.
/// The root itself is never yielded.
pub struct TreeWalker<'a, D: ?Sized, F> {
    dom: &'a D,
    stack: Vec<NodeId>,
    filter: F,
}

impl<'a, D, F> TreeWalker<'a, D, F>
where
    D: DomQuery + ?Sized,
    F: FnMut(NodeId) -> WalkFilter,
{
    pub fn new(dom: &'a D, root: NodeId, filter: F) -> Self {
        let mut walker = Self {
            dom,
            stack: vec![],
            filter,
        };
        walker.push_children(root);
        walker
    }

    fn push_children(&mut self, node: NodeId) {
        self.stack.extend(self.dom.children(node).into_iter().rev());
    }
}

impl<'a, D, F> Iterator for TreeWalker<'a, D, F>
where
    D: DomQuery + ?Sized,
    F: FnMut(NodeId) -> WalkFilter,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(node) = self.stack.pop() {
            match (self.filter)(node) {
                WalkFilter::Reject => continue,
                WalkFilter::Skip => self.push_children(node),
                WalkFilter::Accept => {
                    self.push_children(node);
                    return Some(node);
                }
            }
        }
        None
    }
}
