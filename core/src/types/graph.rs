//! Output graph — positioned nodes and edges handed to a node-graph renderer.
//!
//! Serializes to the camelCase shape the renderer consumes. The fork hook is
//! carried in memory only; serialized output reports `forkable` instead.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::types::tree::SourceNode;


/// Callback invoked with a timeline id when the renderer asks to fork it.
pub type ForkHook<'a> = dyn Fn(&str) + Sync + 'a;


/// Flat node and edge lists for one question tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph<'a> {
    pub nodes: Vec<PositionedNode<'a>>,
    pub edges: Vec<Edge>,
}


impl<'a> Graph<'a> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&PositionedNode<'a>> {
        self.nodes.iter().find(|n| n.id == id)
    }
}


#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode<'a> {
    pub id: String,
    /// Renderer node type. Every node renders as a card.
    #[serde(rename = "type")]
    pub node_type: &'static str,
    /// Layout center of the node box.
    pub position: Point,
    /// Top-left corner of the node box.
    pub anchor: Point,
    pub data: NodeData<'a>,
}


#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData<'a> {
    pub item: SourceNode<'a>,
    pub label: String,
    pub kind: NodeKind,
    pub forkable: bool,
    #[serde(skip)]
    pub on_fork: Option<&'a ForkHook<'a>>,
}


impl NodeData<'_> {
    /// Fire the fork hook for this node's timeline.
    ///
    /// Returns `false` when the node is the question root or no hook was
    /// supplied to the layout call.
    pub fn fork(&self) -> bool {
        match (self.item.as_timeline(), self.on_fork) {
            (Some(timeline), Some(hook)) => {
                hook(timeline.id.as_str());
                true
            }
            _ => false,
        }
    }
}


impl fmt::Debug for NodeData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeData")
            .field("item", &self.item.id())
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("forkable", &self.forkable)
            .field("on_fork", &self.on_fork.is_some())
            .finish()
    }
}


// Hooks are closures; two payloads are equal when both carry one or neither does.
impl PartialEq for NodeData<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
            && self.label == other.label
            && self.kind == other.kind
            && self.forkable == other.forkable
            && self.on_fork.is_some() == other.on_fork.is_some()
    }
}


/// Rendering category of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Question,
    Timeline,
    /// A fork whose parent timeline hangs directly off the question.
    Fork,
    /// A deeper fork, tagged with its parent's depth.
    ForkLevel(usize),
}


impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Question => f.write_str("question"),
            NodeKind::Timeline => f.write_str("timeline"),
            NodeKind::Fork => f.write_str("fork"),
            NodeKind::ForkLevel(depth) => write!(f, "fork-level-{}", depth),
        }
    }
}


impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}


#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub animated: bool,
    pub marker_end: Marker,
}


impl Edge {
    pub fn between(source: &str, target: &str) -> Edge {
        Edge {
            id: format!("edge-{}-{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
            animated: true,
            marker_end: Marker {
                marker_type: MarkerType::ArrowClosed,
            },
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    #[serde(rename = "type")]
    pub marker_type: MarkerType,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerType {
    ArrowClosed,
}
