use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use roadnet_lib::{
    build_graph, find_nearest, load_road_network, plan_search, search_bfs, search_dfs,
    search_dijkstra, Graph, LatLon, RoadRecord, SearchRequest, Vertex,
};
use std::hint::black_box;
use std::path::PathBuf;

const GRID_SIZE: usize = 60;
const GRID_STEP: f64 = 0.001;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_roads.geojson")
}

static SAMPLE: Lazy<Graph> = Lazy::new(|| load_road_network(&fixture_path()).expect("fixture loads"));

/// Square street grid: one record per row and per column.
static GRID: Lazy<Graph> = Lazy::new(|| {
    let coordinate = |i: usize| 106.9 + i as f64 * GRID_STEP;
    let mut records = Vec::with_capacity(GRID_SIZE * 2);
    for row in 0..GRID_SIZE {
        let lat = 47.9 + row as f64 * GRID_STEP;
        records.push(RoadRecord::new((0..GRID_SIZE).map(|col| (coordinate(col), lat))));
    }
    for col in 0..GRID_SIZE {
        let lon = coordinate(col);
        records.push(RoadRecord::new(
            (0..GRID_SIZE).map(|row| (lon, 47.9 + row as f64 * GRID_STEP)),
        ));
    }
    build_graph(&records)
});

fn grid_corners(graph: &Graph) -> (Vertex, Vertex) {
    let start = graph.vertex_at(0).expect("grid has vertices");
    let end = find_nearest(graph, 48.0, 107.0).expect("grid has vertices");
    (start, end)
}

fn benchmark_pathfinding(c: &mut Criterion) {
    let grid = &*GRID;
    let (start, end) = grid_corners(grid);

    c.bench_function("bfs_grid_corners", |b| {
        b.iter(|| black_box(search_bfs(grid, start, end).visited_count()));
    });

    c.bench_function("dfs_grid_corners", |b| {
        b.iter(|| black_box(search_dfs(grid, start, end).visited_count()));
    });

    c.bench_function("dijkstra_grid_corners", |b| {
        b.iter(|| black_box(search_dijkstra(grid, start, end).distance));
    });

    c.bench_function("nearest_grid", |b| {
        b.iter(|| black_box(find_nearest(grid, black_box(47.93), black_box(106.93))));
    });

    let sample = &*SAMPLE;
    let request = SearchRequest::dijkstra(LatLon::new(47.91, 106.90), LatLon::new(47.92, 106.93));
    c.bench_function("dijkstra_sample_plan", |b| {
        b.iter(|| {
            let plan = plan_search(sample, &request).expect("sample has vertices");
            black_box(plan.result.hop_count())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
