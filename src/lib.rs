//! # panelgraph
//!
//! `panelgraph` keeps box-panel furniture layouts consistent while panels are resized. It is
//! designed to be used in Rust as well as compiled to WebAssembly (WASM) behind a 3D viewer.
//!
//! Panels are rigid rectangular boards. Edges record where a face of one panel abuts a face
//! of another and carry the overlap band between them, once in each panel's local frame.
//!
//! ## Features
//!
//! - **Resize propagation**: a width/height change spreads breadth-first through every panel
//!   joined by propagating edges, scaled by the ratio of the overlaps on each edge.
//! - **Seam alignment**: after each step the neighbor is moved so the shared faces stay flush
//!   and the overlap bands stay lined up.
//! - **Display-only edges**: edges can be kept for visualization without forwarding changes.
//! - **WASM-first**: a `wasm-bindgen` facade for the browser viewer.
//!
//! ## Main Interface
//!
//! Build a [`Graph`] from [`Panel`]s and [`Edge`]s, then call [`propagate_resize`] with a
//! [`ResizeDelta`]. The renderer re-reads panel geometry and edge overlaps afterwards.

mod align;
mod edge;
mod geometry;
mod graph;
mod panel;
mod propagation;
pub mod sample;
mod wasm;

pub use align::align_panels;
pub use edge::Edge;
pub use edge::Overlap;
pub use geometry::Axis;
pub use geometry::EPSILON;
pub use geometry::FaceSide;
pub use geometry::ParseFaceSideError;
pub use geometry::Rect;
pub use geometry::axis_for_side;
pub use geometry::compute_ratio;
pub use geometry::length_along;
pub use geometry::resize_along;
pub use graph::Graph;
pub use graph::GraphError;
pub use panel::FaceRect;
pub use panel::Panel;
pub use panel::Rotation;
pub use propagation::PropagationConfig;
pub use propagation::ResizeDelta;
pub use propagation::RevisitPolicy;
pub use propagation::propagate_resize;
pub use propagation::propagate_resize_with;
pub use wasm::PanelGraph;
