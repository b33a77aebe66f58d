//! Build phase — mirror a question tree into `LayoutNode`s.
//!
//! Ids are synthetic and path-derived: the root is `root`, the question's
//! i-th timeline is `timeline-{i}`, and the j-th fork of a node `P` is
//! `P-fork-{j}`. Depth is threaded through the recursion; nodes keep no
//! reference to their parent.

use crate::types::graph::NodeKind;
use crate::types::tree::{Question, SourceNode, Timeline};


pub const ROOT_ID: &str = "root";


/// Working record for one node while the layout is computed.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode<'a> {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub subtree_width: f64,
    pub source: SourceNode<'a>,
    pub kind: NodeKind,
    pub children: Vec<LayoutNode<'a>>,
}


impl<'a> LayoutNode<'a> {
    fn new(id: String, source: SourceNode<'a>, kind: NodeKind) -> Self {
        LayoutNode {
            id,
            x: 0.0,
            y: 0.0,
            subtree_width: 0.0,
            source,
            kind,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order visit of this node and its descendants.
    pub fn visit<F: FnMut(&LayoutNode<'a>)>(&self, f: &mut F) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// Pre-order visit with mutable access.
    pub fn visit_mut<F: FnMut(&mut LayoutNode<'a>)>(&mut self, f: &mut F) {
        f(self);
        for child in &mut self.children {
            child.visit_mut(f);
        }
    }
}


/// Build the layout tree for a question. Returns `None` when the question
/// has no timelines, since there is nothing to render.
pub fn build(question: &Question) -> Option<LayoutNode<'_>> {
    if question.timelines.is_empty() {
        return None;
    }

    let mut root = LayoutNode::new(
        ROOT_ID.to_string(),
        SourceNode::Question(question),
        NodeKind::Question,
    );
    root.children = question
        .timelines
        .iter()
        .enumerate()
        .map(|(i, timeline)| build_timeline(timeline, format!("timeline-{}", i), NodeKind::Timeline, 1))
        .collect();
    Some(root)
}


fn build_timeline(
    timeline: &Timeline,
    id: String,
    kind: NodeKind,
    depth: usize,
) -> LayoutNode<'_> {
    let fork_kind = fork_kind(depth);
    let children = timeline
        .forks
        .iter()
        .enumerate()
        .map(|(j, fork)| build_timeline(fork, format!("{}-fork-{}", id, j), fork_kind, depth + 1))
        .collect();

    let mut node = LayoutNode::new(id, SourceNode::Timeline(timeline), kind);
    node.children = children;
    node
}


/// Kind assigned to forks whose parent sits at `parent_depth`.
///
/// Forks of a top-level timeline are plain `fork`; deeper forks carry the
/// parent's depth so a renderer can tell the levels apart.
fn fork_kind(parent_depth: usize) -> NodeKind {
    if parent_depth == 1 {
        NodeKind::Fork
    } else {
        NodeKind::ForkLevel(parent_depth)
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
