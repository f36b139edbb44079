//! Request handlers for the `/api` routes.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use roadnet_lib::{
    compare_coordinates, plan_search, round2, search_to_geojson, AlgorithmRun, SearchPlan,
    SearchRequest, SearchSummary, VISITED_RESPONSE_LIMIT,
};
use roadnet_service_shared::{
    from_lib_error, record_request_rejected, record_search_completed, record_search_not_found,
    record_vertices_visited, AppState, CompareBody, ProblemDetails, RequestId, SearchBody,
    ServiceResponse, Validate,
};

type ApiResult<T> = Result<ServiceResponse<T>, ProblemDetails>;

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub nodes: usize,
    pub edges: usize,
}

#[derive(Debug, Serialize)]
pub struct CompareEntry {
    pub found: bool,
    pub distance: f64,
    pub path_length: usize,
    pub visited_count: usize,
    pub execution_time_ms: f64,
}

impl From<&AlgorithmRun> for CompareEntry {
    fn from(run: &AlgorithmRun) -> Self {
        Self {
            found: run.found,
            distance: round2(run.distance_km),
            path_length: run.path_length,
            visited_count: run.visited_count,
            execution_time_ms: round2(run.elapsed_ms),
        }
    }
}

/// Results keyed by algorithm name.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub results: BTreeMap<&'static str, CompareEntry>,
}

/// Turn a body rejection into a 400 problem instead of axum's plain-text 422.
fn accept_body<T: Validate>(
    body: Result<Json<T>, JsonRejection>,
    endpoint: &str,
    request_id: &RequestId,
) -> Result<T, ProblemDetails> {
    let Json(body) = body.map_err(|rejection| {
        record_request_rejected("malformed_body", endpoint);
        ProblemDetails::bad_request(rejection.body_text(), request_id.as_str())
    })?;

    body.validate(request_id.as_str()).map_err(|problem| {
        record_request_rejected("validation_error", endpoint);
        *problem
    })?;
    Ok(body)
}

/// `GET /api/info`
pub async fn info_handler(State(state): State<AppState>) -> ServiceResponse<InfoResponse> {
    let graph = state.graph();
    ServiceResponse::new(InfoResponse {
        nodes: graph.vertex_count(),
        edges: graph.edge_count(),
    })
}

fn run_search(
    state: &AppState,
    body: &SearchBody,
    request_id: &RequestId,
) -> Result<SearchPlan, ProblemDetails> {
    let algorithm = body.algorithm(request_id.as_str()).map_err(|problem| *problem)?;
    let request = SearchRequest::new(body.start(), body.end(), algorithm);

    let plan = plan_search(state.graph(), &request).map_err(|e| {
        warn!(request_id = %request_id, error = %e, "search could not be planned");
        from_lib_error(&e, request_id.as_str())
    })?;

    let name = plan.algorithm.as_str();
    record_vertices_visited(name, plan.result.visited_count());
    if plan.result.found {
        record_search_completed(name, plan.result.path_len());
    } else {
        record_search_not_found(name);
    }

    info!(
        request_id = %request_id,
        algorithm = name,
        start = %plan.start,
        end = %plan.end,
        found = plan.result.found,
        path_length = plan.result.path_len(),
        visited = plan.result.visited_count(),
        elapsed_ms = plan.elapsed_ms(),
        "search completed"
    );
    Ok(plan)
}

/// `POST /api/search`
///
/// A search that finds nothing is still a success with `found: false`.
pub async fn search_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResult<SearchSummary> {
    let body = accept_body(body, "search", &request_id)?;
    let plan = run_search(&state, &body, &request_id)?;
    Ok(ServiceResponse::new(SearchSummary::from_result(
        plan.algorithm,
        &plan.result,
    )))
}

/// `POST /api/compare`
pub async fn compare_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Result<Json<CompareBody>, JsonRejection>,
) -> ApiResult<CompareResponse> {
    let body = accept_body(body, "compare", &request_id)?;

    let comparison = compare_coordinates(state.graph(), body.start(), body.end())
        .map_err(|e| from_lib_error(&e, request_id.as_str()))?;

    let results = comparison
        .runs
        .iter()
        .map(|run| (run.algorithm.as_str(), CompareEntry::from(run)))
        .collect();

    info!(
        request_id = %request_id,
        start = %comparison.start,
        end = %comparison.end,
        shortest = ?comparison.shortest(),
        "comparison completed"
    );
    Ok(ServiceResponse::new(CompareResponse { results }))
}

/// `POST /api/visualize`
///
/// Returns the path and the first visited vertices as a GeoJSON
/// `FeatureCollection`, or a 404 problem when no path exists.
pub async fn visualize_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Response, ProblemDetails> {
    let body = accept_body(body, "visualize", &request_id)?;
    let plan = run_search(&state, &body, &request_id)?;

    if !plan.result.found {
        return Err(ProblemDetails::path_not_found(
            plan.algorithm.as_str(),
            request_id.as_str(),
        ));
    }

    let collection = search_to_geojson(&plan.result, VISITED_RESPONSE_LIMIT);
    Ok((
        [(header::CONTENT_TYPE, "application/geo+json")],
        Json(collection),
    )
        .into_response())
}
