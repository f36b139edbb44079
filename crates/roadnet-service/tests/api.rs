use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use roadnet_lib::{build_graph, RoadRecord};
use roadnet_service::app;
use roadnet_service_shared::test_utils::{fixture_points, test_state};
use roadnet_service_shared::AppState;

fn server() -> TestServer {
    TestServer::new(app(test_state())).expect("test server starts")
}

fn empty_server() -> TestServer {
    let graph = build_graph(&Vec::<RoadRecord>::new());
    TestServer::new(app(AppState::from_graph(graph))).expect("test server starts")
}

fn body(algorithm: Option<&str>, start: (f64, f64), end: (f64, f64)) -> Value {
    let mut body = json!({
        "start_lat": start.0,
        "start_lon": start.1,
        "end_lat": end.0,
        "end_lon": end.1,
    });
    if let Some(algorithm) = algorithm {
        body["algorithm"] = json!(algorithm);
    }
    body
}

#[tokio::test]
async fn info_reports_graph_size() {
    let response = server().get("/api/info").await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "success");
    assert_eq!(json["nodes"], 9);
    assert_eq!(json["edges"], 17);
}

#[tokio::test]
async fn search_defaults_to_dijkstra() {
    let response = server()
        .post("/api/search")
        .json(&body(
            None,
            fixture_points::PEACE_WEST,
            fixture_points::STATION_NORTH,
        ))
        .await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "success");
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["found"], true);
    assert_eq!(json["path_length"], 4);
    assert_eq!(json["distance"], 2.6);
    assert_eq!(json["path"][0], json!([47.91, 106.9]));
    assert_eq!(json["path"][3], json!([47.92, 106.92]));
    assert_eq!(json["visited"][0], json!([47.91, 106.9]));
}

#[tokio::test]
async fn search_snaps_off_network_coordinates() {
    let response = server()
        .post("/api/search")
        .json(&body(Some("bfs"), (47.9101, 106.8999), (47.919, 106.917)))
        .await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["found"], true);
    assert_eq!(json["path"][0], json!([47.91, 106.9]));
    assert_eq!(json["path"][3], json!([47.92, 106.92]));
}

#[tokio::test]
async fn search_between_components_is_not_an_error() {
    let response = server()
        .post("/api/search")
        .json(&body(
            Some("dijkstra"),
            fixture_points::PEACE_WEST,
            fixture_points::ISLAND_WEST,
        ))
        .await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], json!([]));
    assert_eq!(json["distance"], 0.0);
    assert_eq!(json["path_length"], 0);
    assert_eq!(json["visited_count"], 7);
}

#[tokio::test]
async fn search_rejects_unknown_algorithm() {
    let response = server()
        .post("/api/search")
        .json(&body(
            Some("astar"),
            fixture_points::PEACE_WEST,
            fixture_points::STATION_NORTH,
        ))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/problem+json"
    );

    let json = response.json::<Value>();
    assert_eq!(json["type"], "/problems/unknown-algorithm");
    assert!(json["instance"].is_string());
}

#[tokio::test]
async fn search_rejects_out_of_range_coordinates() {
    let response = server()
        .post("/api/search")
        .json(&body(None, (95.0, 106.9), fixture_points::STATION_NORTH))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["type"], "/problems/invalid-request");
    assert!(json["detail"].as_str().unwrap().contains("start_lat"));
}

#[tokio::test]
async fn search_rejects_missing_fields() {
    let response = server()
        .post("/api/search")
        .json(&json!({ "start_lat": 47.91, "start_lon": 106.9 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["type"], "/problems/invalid-request");
}

#[tokio::test]
async fn search_on_empty_graph_is_bad_request() {
    let response = empty_server()
        .post("/api/search")
        .json(&body(None, (0.0, 0.0), (1.0, 1.0)))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["type"], "/problems/empty-graph");
}

#[tokio::test]
async fn compare_runs_every_algorithm() {
    let response = server()
        .post("/api/compare")
        .json(&body(
            None,
            fixture_points::PEACE_WEST,
            fixture_points::STATION_NORTH,
        ))
        .await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "success");
    let results = json["results"].as_object().unwrap();
    assert_eq!(results.len(), 3);
    for name in ["bfs", "dfs", "dijkstra"] {
        let entry = &results[name];
        assert_eq!(entry["found"], true, "{name} should find a path");
        assert!(entry["execution_time_ms"].as_f64().unwrap() >= 0.0);
    }
    assert_eq!(results["dijkstra"]["distance"], 2.6);
    assert_eq!(results["bfs"]["path_length"], 4);
}

#[tokio::test]
async fn visualize_returns_geojson() {
    let response = server()
        .post("/api/visualize")
        .json(&body(
            Some("dijkstra"),
            fixture_points::PEACE_WEST,
            fixture_points::STATION_NORTH,
        ))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/geo+json"
    );

    let json = response.json::<Value>();
    assert_eq!(json["type"], "FeatureCollection");
    let features = json["features"].as_array().unwrap();
    assert_eq!(features[0]["geometry"]["type"], "LineString");
    assert_eq!(features[0]["properties"]["kind"], "path");
    assert_eq!(features[0]["geometry"]["coordinates"][0], json!([106.9, 47.91]));
    assert!(features[1..]
        .iter()
        .all(|f| f["properties"]["kind"] == "visited"));
}

#[tokio::test]
async fn visualize_without_path_is_not_found() {
    let response = server()
        .post("/api/visualize")
        .json(&body(
            Some("bfs"),
            fixture_points::RING_NORTH,
            fixture_points::ISLAND_WEST,
        ))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<Value>();
    assert_eq!(json["type"], "/problems/path-not-found");
    assert!(json["detail"].as_str().unwrap().contains("bfs"));
}

#[tokio::test]
async fn health_probes() {
    let server = server();
    server.get("/health/live").await.assert_status_ok();

    let ready = server.get("/health/ready").await;
    ready.assert_status_ok();
    assert_eq!(ready.json::<Value>()["vertices_loaded"], 9);

    empty_server()
        .get("/health/ready")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = server().get("/api/info").await;
    let id = response.header("x-request-id");
    assert_eq!(id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn metrics_endpoint_responds() {
    let response = server().get("/metrics").await;
    response.assert_status_ok();
    assert!(response.text().starts_with('#') || response.text().is_empty());
}
