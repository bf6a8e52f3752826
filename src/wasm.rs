use crate::edge::{Edge, Overlap};
use crate::geometry::{FaceSide, Rect};
use crate::graph::Graph;
use crate::panel::{FaceRect, Panel, Rotation};
use crate::propagation::{ResizeDelta, propagate_resize};
use crate::sample::furniture_carcass;
use js_sys::Array;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(typescript_custom_section)]
const TS_FACE_SIDE: &'static str = r#"
export type FaceSide = "left" | "right" | "top" | "bottom";
"#;

fn parse_rect(values: &[f64], what: &str) -> Result<Rect, JsError> {
    Rect::from_slice(values).ok_or_else(|| {
        JsError::new(&format!("{} must be [x, y, w, h], got {} values", what, values.len()))
    })
}

/// Panel graph handle for the browser viewer.
///
/// The renderer rebuilds its meshes from `panel` and `overlap` after every
/// call to `propagate_resize`.
#[wasm_bindgen(js_name = PanelGraph)]
pub struct PanelGraph {
    inner: Graph,
}

#[wasm_bindgen(js_class = PanelGraph)]
impl PanelGraph {
    #[wasm_bindgen(constructor)]
    pub fn new(thickness: f64) -> PanelGraph {
        PanelGraph { inner: Graph::new(thickness) }
    }

    /// The five-panel sample carcass.
    pub fn sample() -> Result<PanelGraph, JsError> {
        Ok(PanelGraph { inner: furniture_carcass()? })
    }

    #[wasm_bindgen(getter)]
    pub fn thickness(&self) -> f64 { self.inner.thickness() }
    #[wasm_bindgen(getter)]
    pub fn count_panels(&self) -> usize { self.inner.count_panels() }
    #[wasm_bindgen(getter)]
    pub fn count_edges(&self) -> usize { self.inner.count_edges() }

    pub fn add_panel(
        &mut self,
        id: &str,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
        z: f64,
    ) -> Result<(), JsError> {
        self.inner.add_panel(Panel::new(id, width, height).at(x, y, z))?;
        Ok(())
    }

    pub fn set_rotation(&mut self, id: &str, rx: f64, ry: f64, rz: f64) -> Result<(), JsError> {
        self.inner.set_rotation(id, Rotation::new(rx, ry, rz))?;
        Ok(())
    }

    /// Adds an edge. Rects are `[x, y, w, h]` in the owning panel's frame.
    pub fn add_edge(
        &mut self,
        id: &str,
        panel_a: &str,
        side_a: &str,
        face_a: &[f64],
        panel_b: &str,
        side_b: &str,
        face_b: &[f64],
        overlap_a: &[f64],
        overlap_b: &[f64],
        propagate: bool,
    ) -> Result<(), JsError> {
        let side_a: FaceSide = side_a.parse()?;
        let side_b: FaceSide = side_b.parse()?;
        let edge = Edge::new(
            id,
            FaceRect::new(panel_a, side_a, parse_rect(face_a, "face_a")?),
            FaceRect::new(panel_b, side_b, parse_rect(face_b, "face_b")?),
            Overlap::new(parse_rect(overlap_a, "overlap_a")?, parse_rect(overlap_b, "overlap_b")?),
        );
        self.inner.add_edge(if propagate { edge } else { edge.visual_only() })?;
        Ok(())
    }

    pub fn propagate_resize(
        &mut self,
        panel_id: &str,
        delta_w: f64,
        delta_h: f64,
    ) -> Result<(), JsError> {
        propagate_resize(&mut self.inner, ResizeDelta::new(panel_id, delta_w, delta_h))?;
        Ok(())
    }

    pub fn panel_ids(&self) -> Array {
        self.inner.panels().iter().map(|panel| JsValue::from_str(panel.id())).collect()
    }

    pub fn edge_ids(&self) -> Array {
        self.inner.edges().iter().map(|edge| JsValue::from_str(edge.id())).collect()
    }

    pub fn neighbors(&self, id: &str) -> Array {
        self.inner.neighbors(id).into_iter().map(JsValue::from_str).collect()
    }

    /// `[width, height, x, y, z, rx, ry, rz]` of a panel.
    pub fn panel(&self, id: &str) -> Result<Vec<f64>, JsError> {
        let panel = self.inner.panel(id)?;
        let [rx, ry, rz] = panel.rotation.0;
        Ok(vec![panel.width, panel.height, panel.x, panel.y, panel.z, rx, ry, rz])
    }

    /// `[a.x, a.y, a.w, a.h, b.x, b.y, b.w, b.h]` of an edge's overlap.
    pub fn overlap(&self, edge_id: &str) -> Result<Vec<f64>, JsError> {
        let edge = self
            .inner
            .edge(edge_id)
            .ok_or_else(|| JsError::new(&format!("edge not found: {}", edge_id)))?;
        let overlap = edge.overlap();
        let mut values = overlap.on_a.to_array().to_vec();
        values.extend_from_slice(&overlap.on_b.to_array());
        Ok(values)
    }

    pub fn edge_propagates(&self, edge_id: &str) -> Option<bool> {
        self.inner.edge(edge_id).map(|edge| edge.propagates())
    }
}

impl PanelGraph {
    pub fn graph(&self) -> &Graph {
        &self.inner
    }
}
