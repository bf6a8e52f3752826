//! Ready-made graphs.

use std::f64::consts::FRAC_PI_2;

use crate::edge::{Edge, Overlap};
use crate::geometry::{FaceSide, Rect};
use crate::graph::{Graph, GraphError};
use crate::panel::{FaceRect, Panel, Rotation};

fn joint(id: &str, a: (&str, FaceSide, Rect), b: (&str, FaceSide, Rect)) -> Edge {
    Edge::new(
        id,
        FaceRect::new(a.0, a.1, a.2),
        FaceRect::new(b.0, b.1, b.2),
        Overlap::new(a.2, b.2),
    )
}

/// A five-panel open-front box: top, bottom, left, right and back.
///
/// The four side joints propagate resizes. The back panel is only tied in for
/// display, so resizing it moves nothing else.
pub fn furniture_carcass() -> Result<Graph, GraphError> {
    let mut graph = Graph::new(10.0);

    let flat = Rotation::new(FRAC_PI_2, 0.0, 0.0);
    let upright = Rotation::new(0.0, FRAC_PI_2, 0.0);
    graph.add_panel(Panel::new("top", 280.0, 300.0).at(0.0, 0.0, 145.0).rotated(flat))?;
    graph.add_panel(Panel::new("bottom", 280.0, 300.0).at(0.0, 0.0, -145.0).rotated(flat))?;
    graph.add_panel(Panel::new("left", 300.0, 300.0).at(-145.0, 0.0, 0.0).rotated(upright))?;
    graph.add_panel(Panel::new("right", 300.0, 300.0).at(145.0, 0.0, 0.0).rotated(upright))?;
    graph.add_panel(Panel::new("back", 280.0, 280.0).at(0.0, -145.0, 0.0))?;

    graph.add_edge(joint(
        "top-left",
        ("top", FaceSide::Bottom, Rect::new(-140.0, 0.0, 10.0, 300.0)),
        ("left", FaceSide::Top, Rect::new(0.0, 145.0, 300.0, 10.0)),
    ))?;
    graph.add_edge(joint(
        "top-right",
        ("top", FaceSide::Bottom, Rect::new(140.0, 0.0, 10.0, 300.0)),
        ("right", FaceSide::Top, Rect::new(0.0, 145.0, 300.0, 10.0)),
    ))?;
    graph.add_edge(joint(
        "bottom-left",
        ("bottom", FaceSide::Top, Rect::new(-140.0, 0.0, 10.0, 300.0)),
        ("left", FaceSide::Bottom, Rect::new(0.0, -145.0, 300.0, 10.0)),
    ))?;
    graph.add_edge(joint(
        "bottom-right",
        ("bottom", FaceSide::Top, Rect::new(140.0, 0.0, 10.0, 300.0)),
        ("right", FaceSide::Bottom, Rect::new(0.0, -145.0, 300.0, 10.0)),
    ))?;

    graph.add_edge(
        joint(
            "back-left",
            ("back", FaceSide::Left, Rect::new(-140.0, 0.0, 10.0, 280.0)),
            ("left", FaceSide::Right, Rect::new(0.0, 0.0, 10.0, 280.0)),
        )
        .visual_only(),
    )?;
    graph.add_edge(
        joint(
            "back-right",
            ("back", FaceSide::Right, Rect::new(140.0, 0.0, 10.0, 280.0)),
            ("right", FaceSide::Left, Rect::new(0.0, 0.0, 10.0, 280.0)),
        )
        .visual_only(),
    )?;
    graph.add_edge(
        joint(
            "back-top",
            ("back", FaceSide::Top, Rect::new(0.0, 140.0, 280.0, 10.0)),
            ("top", FaceSide::Bottom, Rect::new(0.0, 140.0, 280.0, 10.0)),
        )
        .visual_only(),
    )?;
    graph.add_edge(
        joint(
            "back-bottom",
            ("back", FaceSide::Bottom, Rect::new(0.0, -140.0, 280.0, 10.0)),
            ("bottom", FaceSide::Top, Rect::new(0.0, -140.0, 280.0, 10.0)),
        )
        .visual_only(),
    )?;

    Ok(graph)
}
