use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use panelgraph::{
    Edge, FaceRect, FaceSide, Graph, Overlap, Panel, Rect, ResizeDelta, propagate_resize,
};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const SIZES: [usize; 4] = [10, 100, 1000, 10_000];

/// A row of `count` panels, each butt-jointed to the next with random overlap heights.
fn random_row(count: usize, rng: &mut StdRng) -> Graph {
    let mut graph = Graph::new(18.0);
    for i in 0..count {
        let height = rng.gen_range(10.0..100.0);
        let panel = Panel::new(format!("p{}", i), 20.0, height).at(i as f64 * 20.0, 0.0, 0.0);
        graph.add_panel(panel).unwrap();
    }
    for i in 1..count {
        let on_a = Rect::new(10.0, 0.0, 0.0, rng.gen_range(10.0..100.0));
        let on_b = Rect::new(-10.0, 0.0, 0.0, rng.gen_range(10.0..100.0));
        graph
            .add_edge(Edge::new(
                format!("e{}", i),
                FaceRect::new(format!("p{}", i - 1), FaceSide::Right, on_a),
                FaceRect::new(format!("p{}", i), FaceSide::Left, on_b),
                Overlap::new(on_a, on_b),
            ))
            .unwrap();
    }
    graph
}

/// A `side` x `side` grid joined left/right and top/bottom with equal overlaps.
fn grid(side: usize) -> Graph {
    let mut graph = Graph::new(18.0);
    for row in 0..side {
        for col in 0..side {
            let panel = Panel::new(format!("p{}_{}", row, col), 20.0, 20.0);
            graph
                .add_panel(panel.at(col as f64 * 20.0, row as f64 * 20.0, 0.0))
                .unwrap();
        }
    }
    let vertical_seam = Rect::new(0.0, 0.0, 0.0, 20.0);
    let horizontal_seam = Rect::new(0.0, 0.0, 20.0, 0.0);
    for row in 0..side {
        for col in 0..side {
            let here = format!("p{}_{}", row, col);
            if col + 1 < side {
                graph
                    .add_edge(Edge::new(
                        format!("h{}_{}", row, col),
                        FaceRect::new(here.clone(), FaceSide::Right, vertical_seam),
                        FaceRect::new(
                            format!("p{}_{}", row, col + 1),
                            FaceSide::Left,
                            vertical_seam,
                        ),
                        Overlap::new(vertical_seam, vertical_seam),
                    ))
                    .unwrap();
            }
            if row + 1 < side {
                graph
                    .add_edge(Edge::new(
                        format!("v{}_{}", row, col),
                        FaceRect::new(here.clone(), FaceSide::Top, horizontal_seam),
                        FaceRect::new(
                            format!("p{}_{}", row + 1, col),
                            FaceSide::Bottom,
                            horizontal_seam,
                        ),
                        Overlap::new(horizontal_seam, horizontal_seam),
                    ))
                    .unwrap();
            }
        }
    }
    graph
}

fn benchmark_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("row");
    group.sample_size(10);

    for &size in &SIZES {
        let mut rng = StdRng::seed_from_u64(123456789);
        let graph = random_row(size, &mut rng);
        group.bench_with_input(BenchmarkId::new("height", size), &graph, |b, graph| {
            b.iter(|| {
                let mut graph = graph.clone();
                propagate_resize(&mut graph, ResizeDelta::new("p0", 0.0, 5.0)).unwrap();
                black_box(graph);
            })
        });
    }
    group.finish();
}

fn benchmark_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    group.sample_size(10);

    for side in [4, 16, 32] {
        let graph = grid(side);
        group.bench_with_input(BenchmarkId::new("both_axes", side * side), &graph, |b, graph| {
            b.iter(|| {
                let mut graph = graph.clone();
                propagate_resize(&mut graph, ResizeDelta::new("p0_0", 5.0, 5.0)).unwrap();
                black_box(graph);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_row, benchmark_grid);
criterion_main!(benches);
