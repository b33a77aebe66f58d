//! Tree layout — turn a question tree into a positioned node-and-edge graph.
//!
//! The `tree` module mirrors the source data into `LayoutNode`s with
//! path-derived ids and depth-tagged kinds. The `geometry` module measures
//! subtree widths bottom-up, assigns positions top-down, and centers the
//! result on the canvas. The `flatten` module emits the renderer-facing
//! nodes and edges. Every call rebuilds from scratch.

pub mod flatten;
pub mod geometry;
pub mod tree;

use crate::types::config::LayoutConfig;
use crate::types::graph::{ForkHook, Graph};
use crate::types::tree::Question;


/// Lay out a question tree with the default geometry and no fork hook.
pub fn layout(question: &Question) -> Graph<'_> {
    layout_with(question, &LayoutConfig::default(), None)
}


/// Lay out a question tree.
///
/// A question with no timelines yields an empty graph, root included.
/// `on_fork` is attached to every node's data so a renderer can trigger a
/// fork of that node's timeline.
pub fn layout_with<'a>(
    question: &'a Question,
    cfg: &LayoutConfig,
    on_fork: Option<&'a ForkHook<'a>>,
) -> Graph<'a> {
    let Some(mut root) = tree::build(question) else {
        tracing::debug!(question = %question.id, "question has no timelines, nothing to lay out");
        return Graph::default();
    };

    let offset = geometry::arrange(&mut root, cfg);
    let graph = flatten::flatten(&root, cfg, on_fork);
    tracing::debug!(
        question = %question.id,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        width = root.subtree_width,
        offset,
        "layout complete"
    );
    graph
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
