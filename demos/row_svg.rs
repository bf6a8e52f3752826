use plotters::prelude::*;
use panelgraph::sample::furniture_carcass;
use panelgraph::{
    Edge, FaceRect, FaceSide, Graph, Overlap, Panel, Rect, ResizeDelta, propagate_resize,
};
use tracing_subscriber::EnvFilter;

const HEIGHTS: [f64; 5] = [60.0, 40.0, 80.0, 50.0, 70.0];
const WIDTH: f64 = 30.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("panelgraph=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let before = build_row()?;
    let mut after = before.clone();
    propagate_resize(&mut after, ResizeDelta::new("p0", 20.0, 20.0))?;
    draw("row_resize.svg", &before, &after)?;

    let mut carcass = furniture_carcass()?;
    propagate_resize(&mut carcass, ResizeDelta::new("left", 0.0, 40.0))?;
    for panel in carcass.panels() {
        println!(
            "{:>7}: {:6.1} x {:6.1} at ({:7.1}, {:7.1}, {:7.1})",
            panel.id(), panel.width, panel.height, panel.x, panel.y, panel.z
        );
    }

    Ok(())
}

/// Panels side by side, each joint overlapping the shorter of the two neighbors fully.
fn build_row() -> Result<Graph, Box<dyn std::error::Error>> {
    let mut graph = Graph::new(18.0);
    for (i, &height) in HEIGHTS.iter().enumerate() {
        let panel = Panel::new(format!("p{}", i), WIDTH, height);
        graph.add_panel(panel.at(i as f64 * WIDTH, 0.0, 0.0))?;
    }
    for i in 1..HEIGHTS.len() {
        let seam = HEIGHTS[i - 1].min(HEIGHTS[i]);
        let on_a = Rect::new(WIDTH / 2.0, 0.0, 0.0, seam);
        let on_b = Rect::new(-WIDTH / 2.0, 0.0, 0.0, seam);
        graph.add_edge(Edge::new(
            format!("p{}-p{}", i - 1, i),
            FaceRect::new(format!("p{}", i - 1), FaceSide::Right, on_a),
            FaceRect::new(format!("p{}", i), FaceSide::Left, on_b),
            Overlap::new(on_a, on_b),
        ))?;
    }
    Ok(graph)
}

fn outline(panel: &Panel) -> Vec<(f64, f64)> {
    let (hw, hh) = (panel.width / 2.0, panel.height / 2.0);
    vec![
        (panel.x - hw, panel.y - hh),
        (panel.x + hw, panel.y - hh),
        (panel.x + hw, panel.y + hh),
        (panel.x - hw, panel.y + hh),
        (panel.x - hw, panel.y - hh),
    ]
}

fn draw(filename: &str, before: &Graph, after: &Graph) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (1024, 512)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(-40.0..200.0, -60.0..60.0)?;

    for panel in before.panels() {
        chart.draw_series(std::iter::once(PathElement::new(outline(panel), BLACK.mix(0.3))))?;
    }
    for panel in after.panels() {
        let corners = outline(panel);
        chart.draw_series(std::iter::once(Polygon::new(corners.clone(), BLUE.mix(0.1).filled())))?;
        chart.draw_series(std::iter::once(PathElement::new(corners, BLUE.stroke_width(2))))?;
    }

    root.present()?;
    println!("Output saved to {}", filename);
    Ok(())
}
