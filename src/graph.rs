use std::collections::HashMap;

use thiserror::Error;

use crate::edge::Edge;
use crate::panel::{Panel, Rotation};

/// Errors raised while building or traversing a [`Graph`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A panel id referenced by a resize or an edge does not exist.
    #[error("panel not found: {0}")]
    PanelNotFound(String),
    #[error("duplicate panel id: {0}")]
    DuplicatePanel(String),
    #[error("duplicate edge id: {0}")]
    DuplicateEdge(String),
}

/// Panels, the edges joining them, and the global panel thickness.
///
/// Panels and edges live in flat vectors in declaration order and are
/// addressed by id. Each panel keeps the positions of the edges touching it,
/// ascending, so traversal never scans the whole edge list. Only numeric
/// fields change once the graph is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    thickness: f64,
    panels: Vec<Panel>,
    edges: Vec<Edge>,
    panel_index: HashMap<String, usize>,
    edge_index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(thickness: f64) -> Self {
        Self {
            thickness,
            panels: Vec::new(),
            edges: Vec::new(),
            panel_index: HashMap::new(),
            edge_index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn count_panels(&self) -> usize {
        self.panels.len()
    }

    pub fn count_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn add_panel(&mut self, panel: Panel) -> Result<(), GraphError> {
        if self.panel_index.contains_key(panel.id()) {
            return Err(GraphError::DuplicatePanel(panel.id().to_string()));
        }
        self.panel_index.insert(panel.id().to_string(), self.panels.len());
        self.panels.push(panel);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Adds an edge. Both faces must reference panels already in the graph.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if self.edge_index.contains_key(edge.id()) {
            return Err(GraphError::DuplicateEdge(edge.id().to_string()));
        }
        let a = self.panel_position(&edge.face_a.panel_id)?;
        let b = self.panel_position(&edge.face_b.panel_id)?;
        let position = self.edges.len();
        self.edge_index.insert(edge.id().to_string(), position);
        self.edges.push(edge);
        // Positions only grow, so each list stays in declaration order.
        self.adjacency[a].push(position);
        if b != a {
            self.adjacency[b].push(position);
        }
        Ok(())
    }

    pub fn set_rotation(&mut self, id: &str, rotation: Rotation) -> Result<(), GraphError> {
        let index = self.panel_position(id)?;
        self.panels[index].rotation = rotation;
        Ok(())
    }

    /// Looks up a panel by id.
    pub fn panel(&self, id: &str) -> Result<&Panel, GraphError> {
        self.panel_position(id).map(|index| &self.panels[index])
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edge_index.get(id).map(|&index| &self.edges[index])
    }

    /// All edges touching `id` on either face, in declaration order.
    pub fn edges_for_panel(&self, id: &str) -> Vec<&Edge> {
        self.edge_positions_for_panel(id)
            .iter()
            .map(|&position| &self.edges[position])
            .collect()
    }

    /// Ids across each edge touching `id`, in edge declaration order.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.edges_for_panel(id)
            .into_iter()
            .map(|edge| edge.other(id))
            .collect()
    }

    /// Checks that every edge references existing panels.
    pub fn validate(&self) -> Result<(), GraphError> {
        for edge in &self.edges {
            self.panel_position(&edge.face_a.panel_id)?;
            self.panel_position(&edge.face_b.panel_id)?;
        }
        Ok(())
    }

    pub(crate) fn panel_position(&self, id: &str) -> Result<usize, GraphError> {
        self.panel_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::PanelNotFound(id.to_string()))
    }

    /// Positions of the edges touching `id`, empty for an unknown panel.
    pub(crate) fn edge_positions_for_panel(&self, id: &str) -> &[usize] {
        match self.panel_index.get(id) {
            Some(&index) => self.edge_positions(index),
            None => &[],
        }
    }

    pub(crate) fn edge_positions(&self, panel: usize) -> &[usize] {
        &self.adjacency[panel]
    }

    pub(crate) fn panel_at_mut(&mut self, index: usize) -> &mut Panel {
        &mut self.panels[index]
    }

    /// Borrows two distinct panels at once: one to read, one to move.
    pub(crate) fn anchor_and_target(
        &mut self,
        anchor: usize,
        target: usize,
    ) -> (&Panel, &mut Panel) {
        debug_assert_ne!(anchor, target);
        if anchor < target {
            let (head, tail) = self.panels.split_at_mut(target);
            (&head[anchor], &mut tail[0])
        } else {
            let (head, tail) = self.panels.split_at_mut(anchor);
            (&tail[0], &mut head[target])
        }
    }

    pub(crate) fn edge_at(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    pub(crate) fn edge_at_mut(&mut self, index: usize) -> &mut Edge {
        &mut self.edges[index]
    }
}
