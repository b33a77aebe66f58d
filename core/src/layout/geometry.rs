//! Geometry passes — subtree widths, positions, and canvas centering.
//!
//! Widths are computed bottom-up before any position is assigned; positions
//! are then assigned top-down so every child is centered inside the span
//! its parent allots to it.

use crate::layout::tree::LayoutNode;
use crate::types::config::LayoutConfig;


/// Horizontal extent of a laid-out tree, measured on node boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}


impl Bounds {
    pub fn center_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }
}


/// Post-order: set `subtree_width` on every node and return the root's.
pub fn measure(node: &mut LayoutNode<'_>, cfg: &LayoutConfig) -> f64 {
    if node.is_leaf() {
        node.subtree_width = cfg.node_width;
        return node.subtree_width;
    }

    let total: f64 = node
        .children
        .iter_mut()
        .map(|child| measure(child, cfg))
        .sum();
    let spacing = (node.children.len() - 1) as f64 * cfg.min_horizontal_spacing;

    node.subtree_width = cfg.node_width.max(total + spacing);
    node.subtree_width
}


/// Width occupied by a node's children laid side by side, gaps included.
pub fn children_span(node: &LayoutNode<'_>, cfg: &LayoutConfig) -> f64 {
    if node.children.is_empty() {
        return 0.0;
    }
    let total: f64 = node.children.iter().map(|c| c.subtree_width).sum();
    total + (node.children.len() - 1) as f64 * cfg.min_horizontal_spacing
}


/// Pre-order: place `node` at `x` and its descendants beneath it.
///
/// The node's own `y` must already be set; children land one
/// `vertical_spacing` lower.
pub fn position(node: &mut LayoutNode<'_>, x: f64, cfg: &LayoutConfig) {
    node.x = x;
    if node.is_leaf() {
        return;
    }

    let child_y = node.y + cfg.vertical_spacing;
    let mut left = node.x - children_span(node, cfg) / 2.0;

    for child in &mut node.children {
        child.y = child_y;
        let center = left + child.subtree_width / 2.0;
        position(child, center, cfg);
        left += child.subtree_width + cfg.min_horizontal_spacing;
    }
}


/// Bounding box over node boxes. Every node counts as `node_width` wide,
/// whatever its subtree width.
pub fn bounds(root: &LayoutNode<'_>, cfg: &LayoutConfig) -> Bounds {
    let half = cfg.node_width / 2.0;
    let mut b = Bounds {
        min_x: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
    };
    root.visit(&mut |n| {
        b.min_x = b.min_x.min(n.x - half);
        b.max_x = b.max_x.max(n.x + half);
        b.min_y = b.min_y.min(n.y);
        b.max_y = b.max_y.max(n.y);
    });
    b
}


/// Shift the whole tree horizontally so its bounds center on
/// `canvas_center_x`. Returns the applied offset.
pub fn center(root: &mut LayoutNode<'_>, cfg: &LayoutConfig) -> f64 {
    let offset = cfg.canvas_center_x - bounds(root, cfg).center_x();
    root.visit_mut(&mut |n| n.x += offset);
    offset
}


/// Run the three geometry passes over a freshly built tree.
pub fn arrange(root: &mut LayoutNode<'_>, cfg: &LayoutConfig) -> f64 {
    measure(root, cfg);
    root.y = 0.0;
    position(root, 0.0, cfg);
    center(root, cfg)
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tree::build;
    use crate::types::tree::{Question, Timeline};

    fn leaf(id: &str) -> Timeline {
        Timeline {
            id: id.into(),
            ..Timeline::default()
        }
    }

    fn with_forks(id: &str, forks: Vec<Timeline>) -> Timeline {
        Timeline {
            id: id.into(),
            forks,
            ..Timeline::default()
        }
    }

    fn question(timelines: Vec<Timeline>) -> Question {
        Question {
            timelines,
            ..Question::default()
        }
    }

    #[test]
    fn leaf_width_is_node_width() {
        let q = question(vec![leaf("a")]);
        let mut root = build(&q).unwrap();
        let cfg = LayoutConfig::default();
        measure(&mut root, &cfg);
        assert_eq!(root.children[0].subtree_width, 300.0);
        // A single child never widens its parent past the node box.
        assert_eq!(root.subtree_width, 300.0);
    }

    #[test]
    fn width_sums_children_and_gaps() {
        let q = question(vec![leaf("a"), leaf("b"), with_forks("c", vec![leaf("c1"), leaf("c2")])]);
        let mut root = build(&q).unwrap();
        let cfg = LayoutConfig::default();
        let width = measure(&mut root, &cfg);
        // c: 300 + 150 + 300 = 750; root: 300 + 300 + 750 + 2 * 150 = 1650
        assert_eq!(root.children[2].subtree_width, 750.0);
        assert_eq!(width, 1650.0);
    }

    #[test]
    fn narrow_geometry_never_shrinks_below_node_width() {
        let q = question(vec![leaf("a"), leaf("b")]);
        let mut root = build(&q).unwrap();
        let cfg = LayoutConfig {
            node_width: 500.0,
            min_horizontal_spacing: 0.0,
            ..LayoutConfig::default()
        };
        assert_eq!(measure(&mut root, &cfg), 1000.0);
    }

    #[test]
    fn children_centered_in_allotted_span() {
        let q = question(vec![with_forks("a", vec![leaf("a1"), leaf("a2")]), leaf("b")]);
        let mut root = build(&q).unwrap();
        let cfg = LayoutConfig::default();
        measure(&mut root, &cfg);
        position(&mut root, 0.0, &cfg);
        // span = 750 + 150 + 300 = 1200, starts at -600
        assert_eq!(root.children[0].x, -600.0 + 375.0);
        assert_eq!(root.children[1].x, -600.0 + 750.0 + 150.0 + 150.0);
        assert_eq!(root.children[0].children[0].x, -225.0 - 225.0);
        assert_eq!(root.children[0].children[1].x, -225.0 + 225.0);
        assert_eq!(root.children[0].y, 350.0);
        assert_eq!(root.children[0].children[0].y, 700.0);
    }

    #[test]
    fn center_moves_bounds_onto_canvas_center() {
        let q = question(vec![with_forks("a", vec![leaf("a1"), leaf("a2")]), leaf("b")]);
        let mut root = build(&q).unwrap();
        let cfg = LayoutConfig::default();
        let offset = arrange(&mut root, &cfg);
        let b = bounds(&root, &cfg);
        assert!((b.center_x() - 600.0).abs() < 1e-9);
        // Before centering the boxes span -600..600, symmetric about 0.
        assert!((offset - 600.0).abs() < 1e-9);
        assert_eq!(b.min_y, 0.0);
        assert_eq!(b.max_y, 700.0);
    }

    #[test]
    fn lopsided_tree_is_recentered() {
        let q = question(vec![with_forks("a", vec![with_forks("a1", vec![leaf("x"), leaf("y")])])]);
        let mut root = build(&q).unwrap();
        let cfg = LayoutConfig::default();
        arrange(&mut root, &cfg);
        let b = bounds(&root, &cfg);
        assert!((b.center_x() - cfg.canvas_center_x).abs() < 1e-9);
        // Single children sit directly under their parents.
        assert_eq!(root.x, root.children[0].x);
        assert_eq!(root.children[0].x, root.children[0].children[0].x);
    }
}
