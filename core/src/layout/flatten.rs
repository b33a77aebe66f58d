//! Flatten phase — turn a positioned layout tree into renderer nodes and edges.

use crate::layout::tree::LayoutNode;
use crate::types::config::LayoutConfig;
use crate::types::graph::{Edge, ForkHook, Graph, NodeData, Point, PositionedNode};
use crate::types::tree::SourceNode;


/// Display labels for timelines are cut to this many characters.
pub const LABEL_LIMIT: usize = 80;
/// Placeholder label for a timeline with neither tldr nor summary.
pub const LABEL_FALLBACK: &str = "Timeline";

const CARD: &str = "card";


/// Emit nodes and edges in pre-order: each node, then for every child the
/// connecting edge followed by the child's subtree.
pub fn flatten<'a>(
    root: &LayoutNode<'a>,
    cfg: &LayoutConfig,
    on_fork: Option<&'a ForkHook<'a>>,
) -> Graph<'a> {
    let mut graph = Graph::default();
    emit(root, cfg, on_fork, &mut graph);
    graph
}


fn emit<'a>(
    node: &LayoutNode<'a>,
    cfg: &LayoutConfig,
    on_fork: Option<&'a ForkHook<'a>>,
    graph: &mut Graph<'a>,
) {
    tracing::trace!(id = %node.id, kind = %node.kind, x = node.x, y = node.y, "node placed");
    graph.nodes.push(PositionedNode {
        id: node.id.clone(),
        node_type: CARD,
        position: Point { x: node.x, y: node.y },
        anchor: Point {
            x: node.x - cfg.node_width / 2.0,
            y: node.y,
        },
        data: NodeData {
            item: node.source,
            label: label(node.source),
            kind: node.kind,
            forkable: node.source.is_timeline(),
            on_fork,
        },
    });

    for child in &node.children {
        graph.edges.push(Edge::between(&node.id, &child.id));
        emit(child, cfg, on_fork, graph);
    }
}


/// Human-readable label for a node.
///
/// The question shows its full text. Timelines show the first non-empty of
/// `tldr` and `summary`, cut to `LABEL_LIMIT` characters and always
/// suffixed with an ellipsis.
pub fn label(source: SourceNode<'_>) -> String {
    match source {
        SourceNode::Question(q) => format!("Question: {}", q.text),
        SourceNode::Timeline(t) => {
            let text = [t.tldr.as_str(), t.summary.as_str()]
                .into_iter()
                .find(|s| !s.is_empty())
                .unwrap_or(LABEL_FALLBACK);
            let cut: String = text.chars().take(LABEL_LIMIT).collect();
            format!("{}...", cut)
        }
    }
}
