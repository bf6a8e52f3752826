use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace, warn};

use crate::align::align_panels;
use crate::geometry::{Axis, EPSILON, axis_for_side, compute_ratio, resize_along};
use crate::graph::{Graph, GraphError};

/// A width/height change requested for one panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeDelta {
    pub panel_id: String,
    pub delta_w: f64,
    pub delta_h: f64,
}

impl ResizeDelta {
    pub fn new(panel_id: impl Into<String>, delta_w: f64, delta_h: f64) -> Self {
        Self {
            panel_id: panel_id.into(),
            delta_w,
            delta_h,
        }
    }

    /// A delta of `amount` in the slot matching `axis`, zero in the other.
    pub fn along(panel_id: impl Into<String>, axis: Axis, amount: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(panel_id, amount, 0.0),
            Axis::Vertical => Self::new(panel_id, 0.0, amount),
        }
    }

    fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.delta_w,
            Axis::Vertical => self.delta_h,
        }
    }
}

/// What to do when a panel that was queued more than once comes up again
/// after it has already been processed.
///
/// The visited set is consulted when a neighbor is enqueued. Two edges can
/// both reach the same panel before it is dequeued, so it may sit in the
/// queue twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevisitPolicy {
    /// Apply the second delta too and process the panel's edges again.
    #[default]
    Requeue,
    /// Drop deltas for panels already processed in this call.
    SkipVisited,
}

/// Tuning for [`propagate_resize_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropagationConfig {
    /// Forwarded deltas at or below this magnitude do not enqueue the neighbor.
    pub epsilon: f64,
    pub revisit: RevisitPolicy,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            revisit: RevisitPolicy::default(),
        }
    }
}

/// Applies `initial` and carries it breadth-first through every panel
/// reachable over propagating edges, keeping shared seams coincident.
///
/// See [`propagate_resize_with`] for the details.
pub fn propagate_resize(graph: &mut Graph, initial: ResizeDelta) -> Result<(), GraphError> {
    propagate_resize_with(graph, initial, &PropagationConfig::default())
}

/// Resize propagation with an explicit [`PropagationConfig`].
///
/// For each dequeued delta the panel's width and height change first. Then,
/// for each propagating edge touching it in declaration order, the overlap on
/// this side grows by the delta along the edge axis and the overlap on the
/// far side by the same delta scaled by their ratio (taken before the
/// resize). A large enough scaled delta queues the neighbor unless it was
/// already processed. The neighbor is realigned against this panel in any case.
///
/// Fails with [`GraphError::PanelNotFound`] when the delta or an edge names a
/// missing panel. Panels and edges of the failing iteration are left as they
/// were; earlier iterations stay applied.
pub fn propagate_resize_with(
    graph: &mut Graph,
    initial: ResizeDelta,
    config: &PropagationConfig,
) -> Result<(), GraphError> {
    debug!(
        panel = %initial.panel_id,
        delta_w = initial.delta_w,
        delta_h = initial.delta_h,
        "propagating resize"
    );

    let mut queue = VecDeque::from([initial]);
    let mut visited: HashSet<String> = HashSet::new();
    let mut processed = 0usize;

    while let Some(delta) = queue.pop_front() {
        let index = graph.panel_position(&delta.panel_id)?;

        if visited.contains(&delta.panel_id) {
            match config.revisit {
                RevisitPolicy::SkipVisited => {
                    trace!(panel = %delta.panel_id, "skipping already processed panel");
                    continue;
                }
                RevisitPolicy::Requeue => {
                    warn!(panel = %delta.panel_id, "panel queued twice, applying delta again");
                }
            }
        }

        // Resolve every neighbor up front so a dangling edge aborts before anything moves.
        let mut steps = Vec::new();
        for &edge_index in graph.edge_positions(index) {
            let edge = graph.edge_at(edge_index);
            if !edge.propagates() {
                continue;
            }
            let other_id = edge.other(&delta.panel_id).to_string();
            let other_index = graph.panel_position(&other_id)?;
            let from_a = edge.face_a().panel_id == delta.panel_id;
            steps.push((edge_index, from_a, other_id, other_index));
        }

        trace!(
            panel = %delta.panel_id,
            delta_w = delta.delta_w,
            delta_h = delta.delta_h,
            edges = steps.len(),
            "applying delta"
        );

        let panel = graph.panel_at_mut(index);
        panel.width += delta.delta_w;
        panel.height += delta.delta_h;

        for (edge_index, from_a, other_id, other_index) in steps {
            let edge = graph.edge_at_mut(edge_index);
            let (self_side, other_side) = if from_a {
                (edge.face_a.side, edge.face_b.side)
            } else {
                (edge.face_b.side, edge.face_a.side)
            };
            let axis = axis_for_side(self_side);

            let (self_overlap, other_overlap) = edge.overlap.sides_mut(from_a);
            let ratio = compute_ratio(self_overlap, other_overlap, axis);
            let amount = delta.component(axis);
            let other_amount = amount * ratio;
            resize_along(self_overlap, axis, amount);
            resize_along(other_overlap, axis, other_amount);
            let (self_overlap, other_overlap) = (*self_overlap, *other_overlap);

            if other_amount.abs() > config.epsilon && !visited.contains(&other_id) {
                trace!(
                    from = %delta.panel_id,
                    to = %other_id,
                    ?axis,
                    ratio,
                    other_amount,
                    "forwarding delta"
                );
                queue.push_back(ResizeDelta::along(other_id, axis, other_amount));
            }

            if other_index == index {
                let panel = graph.panel_at_mut(index);
                let anchor = panel.clone();
                align_panels(&anchor, self_side, &self_overlap, panel, other_side, &other_overlap);
            } else {
                let (anchor, target) = graph.anchor_and_target(index, other_index);
                align_panels(anchor, self_side, &self_overlap, target, other_side, &other_overlap);
            }
        }

        visited.insert(delta.panel_id);
        processed += 1;
    }

    debug!(processed, distinct = visited.len(), "resize propagation finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::{Edge, Overlap};
    use crate::geometry::{FaceSide, Rect};
    use crate::panel::{FaceRect, Panel};

    fn butt_joint(id: &str, a: &str, side_a: FaceSide, b: &str, side_b: FaceSide, h: f64) -> Edge {
        let seam = Rect::new(0.0, 0.0, 0.0, h);
        Edge::new(
            id,
            FaceRect::new(a, side_a, seam),
            FaceRect::new(b, side_b, seam),
            Overlap::new(seam, seam),
        )
    }

    // A reaches C directly and through B, so C is queued twice.
    fn triangle() -> Graph {
        let mut graph = Graph::new(18.0);
        for id in ["A", "B", "C"] {
            graph.add_panel(Panel::new(id, 20.0, 30.0)).unwrap();
        }
        graph.add_edge(butt_joint("A-B", "A", FaceSide::Right, "B", FaceSide::Left, 30.0)).unwrap();
        graph.add_edge(butt_joint("B-C", "B", FaceSide::Right, "C", FaceSide::Left, 30.0)).unwrap();
        graph.add_edge(butt_joint("A-C", "A", FaceSide::Left, "C", FaceSide::Right, 30.0)).unwrap();
        graph
    }

    #[test]
    fn test_requeue_applies_second_delta() {
        let mut graph = triangle();
        propagate_resize(&mut graph, ResizeDelta::new("A", 0.0, 10.0)).unwrap();

        assert_eq!(graph.panel("A").unwrap().height, 40.0);
        assert_eq!(graph.panel("B").unwrap().height, 40.0);
        assert_eq!(graph.panel("C").unwrap().height, 50.0);
    }

    #[test]
    fn test_skip_visited_applies_once() {
        let mut graph = triangle();
        let config = PropagationConfig {
            revisit: RevisitPolicy::SkipVisited,
            ..PropagationConfig::default()
        };
        propagate_resize_with(&mut graph, ResizeDelta::new("A", 0.0, 10.0), &config).unwrap();

        for id in ["A", "B", "C"] {
            assert_eq!(graph.panel(id).unwrap().height, 40.0, "panel {}", id);
        }
    }

    #[test]
    fn test_epsilon_threshold_stops_forwarding() {
        let mut graph = triangle();
        let config = PropagationConfig {
            epsilon: 100.0,
            ..PropagationConfig::default()
        };
        propagate_resize_with(&mut graph, ResizeDelta::new("A", 0.0, 10.0), &config).unwrap();

        assert_eq!(graph.panel("A").unwrap().height, 40.0);
        assert_eq!(graph.panel("B").unwrap().height, 30.0);
        // Overlaps on both sides of A's edges still follow the resize.
        let overlap = graph.edge("A-B").unwrap().overlap();
        assert_eq!(overlap.on_a.h, 40.0);
        assert_eq!(overlap.on_b.h, 40.0);
    }

    #[test]
    fn test_self_loop_aligns_against_itself() {
        let mut graph = Graph::new(10.0);
        graph.add_panel(Panel::new("A", 20.0, 30.0).at(5.0, 0.0, 0.0)).unwrap();
        graph.add_edge(butt_joint("A-A", "A", FaceSide::Right, "A", FaceSide::Left, 30.0)).unwrap();

        propagate_resize(&mut graph, ResizeDelta::new("A", 4.0, 0.0)).unwrap();

        let panel = graph.panel("A").unwrap();
        assert_eq!(panel.width, 24.0);
        // x + width/2 + width/2 - 0
        assert_eq!(panel.x, 29.0);
    }
}
