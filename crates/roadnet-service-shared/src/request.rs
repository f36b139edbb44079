//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use roadnet_lib::{LatLon, SearchAlgorithm};

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Body of `POST /api/search` and `POST /api/visualize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchBody {
    /// `bfs`, `dfs`, or `dijkstra`; defaults to `dijkstra` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,

    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
}

impl SearchBody {
    pub fn start(&self) -> LatLon {
        LatLon::new(self.start_lat, self.start_lon)
    }

    pub fn end(&self) -> LatLon {
        LatLon::new(self.end_lat, self.end_lon)
    }

    /// Parse the requested algorithm name.
    pub fn algorithm(&self, request_id: &str) -> Result<SearchAlgorithm, Box<ProblemDetails>> {
        match self.algorithm.as_deref() {
            None => Ok(SearchAlgorithm::default()),
            Some(name) => name
                .parse()
                .map_err(|_| Box::new(ProblemDetails::unknown_algorithm(name, request_id))),
        }
    }
}

impl Validate for SearchBody {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        validate_point("start", self.start_lat, self.start_lon, request_id)?;
        validate_point("end", self.end_lat, self.end_lon, request_id)?;
        self.algorithm(request_id)?;
        Ok(())
    }
}

/// Body of `POST /api/compare`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareBody {
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
}

impl CompareBody {
    pub fn start(&self) -> LatLon {
        LatLon::new(self.start_lat, self.start_lon)
    }

    pub fn end(&self) -> LatLon {
        LatLon::new(self.end_lat, self.end_lon)
    }
}

impl Validate for CompareBody {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        validate_point("start", self.start_lat, self.start_lon, request_id)?;
        validate_point("end", self.end_lat, self.end_lon, request_id)
    }
}

fn validate_point(
    prefix: &str,
    lat: f64,
    lon: f64,
    request_id: &str,
) -> Result<(), Box<ProblemDetails>> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(Box::new(ProblemDetails::bad_request(
            format!("The '{prefix}_lat' field must be a latitude between -90 and 90"),
            request_id,
        )));
    }

    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(Box::new(ProblemDetails::bad_request(
            format!("The '{prefix}_lon' field must be a longitude between -180 and 180"),
            request_id,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PROBLEM_INVALID_REQUEST, PROBLEM_UNKNOWN_ALGORITHM};

    fn search(algorithm: Option<&str>) -> SearchBody {
        SearchBody {
            algorithm: algorithm.map(str::to_string),
            start_lat: 47.91,
            start_lon: 106.90,
            end_lat: 47.92,
            end_lon: 106.93,
        }
    }

    #[test]
    fn test_search_body_valid() {
        assert!(search(Some("bfs")).validate("test").is_ok());
        assert!(search(None).validate("test").is_ok());
    }

    #[test]
    fn test_search_body_defaults_to_dijkstra() {
        let body: SearchBody = serde_json::from_str(
            r#"{"start_lat":1.0,"start_lon":2.0,"end_lat":3.0,"end_lon":4.0}"#,
        )
        .unwrap();
        assert!(body.algorithm.is_none());
        assert_eq!(body.algorithm("test").unwrap(), SearchAlgorithm::Dijkstra);
        assert_eq!(body.start(), LatLon::new(1.0, 2.0));
        assert_eq!(body.end(), LatLon::new(3.0, 4.0));
    }

    #[test]
    fn test_search_body_algorithm_is_case_insensitive() {
        assert_eq!(
            search(Some("DFS")).algorithm("test").unwrap(),
            SearchAlgorithm::Dfs
        );
    }

    #[test]
    fn test_search_body_unknown_algorithm() {
        let err = search(Some("astar")).validate("req-1").unwrap_err();
        assert_eq!(err.type_uri, PROBLEM_UNKNOWN_ALGORITHM);
        assert_eq!(err.status, 400);
        assert_eq!(err.instance.as_deref(), Some("req-1"));
    }

    #[test]
    fn test_search_body_latitude_out_of_range() {
        let mut body = search(None);
        body.start_lat = 91.0;
        let err = body.validate("test").unwrap_err();
        assert_eq!(err.type_uri, PROBLEM_INVALID_REQUEST);
        assert!(err.detail.as_deref().unwrap().contains("'start_lat'"));
    }

    #[test]
    fn test_search_body_non_finite_longitude() {
        let mut body = search(None);
        body.end_lon = f64::NAN;
        let err = body.validate("test").unwrap_err();
        assert!(err.detail.as_deref().unwrap().contains("'end_lon'"));
    }

    #[test]
    fn test_compare_body_validation() {
        let mut body = CompareBody {
            start_lat: 0.0,
            start_lon: 180.0,
            end_lat: -90.0,
            end_lon: -180.0,
        };
        assert!(body.validate("test").is_ok());

        body.start_lon = 180.5;
        let err = body.validate("test").unwrap_err();
        assert!(err.detail.as_deref().unwrap().contains("'start_lon'"));
    }

    #[test]
    fn test_missing_coordinate_fails_to_deserialize() {
        let result: Result<CompareBody, _> =
            serde_json::from_str(r#"{"start_lat":1.0,"start_lon":2.0,"end_lat":3.0}"#);
        assert!(result.is_err());
    }
}
