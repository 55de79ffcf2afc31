//! REST API route handlers.
//!
//! One handler per route, each making a single store call. Response bodies
//! keep the wire shape existing clients depend on, including the 200 status
//! on an empty location search.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use cafe_store::{NewCafe, StoreError};

use crate::state::AppState;

const CAFE_NOT_FOUND: &str = "Sorry, a cafe with that id was not found in the database.";
const LOCATION_NOT_FOUND: &str = "Sorry, we don't have a cafe at that location.";
const STORE_EMPTY: &str = "Sorry, there are no cafes in the database yet.";
const LOCATION_PROMPT: &str = "<p>Please type in a valid location.</p>";
const FORBIDDEN: &str =
    "Sorry, you are not allowed to perform this action. Make sure you have the right api key.";

// ---------------------------------------------------------------------------
// GET /random
// ---------------------------------------------------------------------------

/// Return one cafe chosen uniformly at random.
pub async fn random_cafe(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.cafes.pick_random().await {
        Ok(cafe) => (StatusCode::OK, Json(json!({ "cafe": cafe }))),
        Err(e) => store_failure(e),
    }
}

// ---------------------------------------------------------------------------
// GET /all
// ---------------------------------------------------------------------------

/// List every cafe.
pub async fn all_cafes(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match state.cafes.list_all().await {
        Ok(cafes) => (StatusCode::OK, Json(json!({ "cafes": cafes }))),
        Err(e) => store_failure(e),
    }
}

// ---------------------------------------------------------------------------
// GET /search?loc=
// ---------------------------------------------------------------------------

/// Query string for `/search`.
#[derive(Deserialize)]
pub struct SearchParams {
    pub loc: Option<String>,
}

/// Cafes at a location, matched after title-casing `loc`.
///
/// A missing `loc` yields an HTML prompt and no match yields a
/// `Not Found` body, both with status 200.
pub async fn search_cafes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let Some(loc) = params.loc else {
        return Html(LOCATION_PROMPT).into_response();
    };

    match state.cafes.find_by_location(&loc).await {
        Ok(cafes) if cafes.is_empty() => (
            StatusCode::OK,
            Json(json!({ "error": { "Not Found": LOCATION_NOT_FOUND } })),
        )
            .into_response(),
        Ok(cafes) => (StatusCode::OK, Json(json!({ "cafes": cafes }))).into_response(),
        Err(e) => store_failure(e).into_response(),
    }
}

// ---------------------------------------------------------------------------
// POST /add
// ---------------------------------------------------------------------------

/// Add a cafe from a form-encoded body.
///
/// Facility flags (`sockets`, `toilet`, `wifi`, `calls`) are `true` for any
/// non-empty value.
pub async fn add_cafe(
    State(state): State<Arc<AppState>>,
    Form(input): Form<NewCafe>,
) -> (StatusCode, Json<Value>) {
    match state.cafes.insert(input).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "response": { "success": "Successfully added the new cafe." } })),
        ),
        Err(e) => store_failure(e),
    }
}

// ---------------------------------------------------------------------------
// PATCH /update-price/{cafe_id}?new_price=
// ---------------------------------------------------------------------------

/// Query string for `/update-price/{cafe_id}`.
#[derive(Deserialize)]
pub struct UpdatePriceParams {
    pub new_price: Option<String>,
}

/// Replace a cafe's coffee price. A missing `new_price` clears it.
pub async fn update_price(
    State(state): State<Arc<AppState>>,
    Path(cafe_id): Path<String>,
    Query(params): Query<UpdatePriceParams>,
) -> (StatusCode, Json<Value>) {
    let Some(id) = parse_cafe_id(&cafe_id) else {
        return cafe_not_found();
    };

    match state.cafes.update_price(id, params.new_price).await {
        Ok(Some(_)) => (
            StatusCode::OK,
            Json(json!({ "success": "Successfully updated the price." })),
        ),
        Ok(None) => cafe_not_found(),
        Err(e) => store_failure(e),
    }
}

// ---------------------------------------------------------------------------
// DELETE /report-closed/{cafe_id}?api-key=
// ---------------------------------------------------------------------------

/// Query string for `/report-closed/{cafe_id}`.
#[derive(Deserialize)]
pub struct ReportClosedParams {
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

/// Delete a cafe that has closed. Requires the admin API key.
///
/// The key is checked before the id, so a wrong key gets 403 whether or
/// not the cafe exists.
pub async fn report_closed(
    State(state): State<Arc<AppState>>,
    Path(cafe_id): Path<String>,
    Query(params): Query<ReportClosedParams>,
) -> (StatusCode, Json<Value>) {
    if !state.admin_key_matches(params.api_key.as_deref()) {
        tracing::warn!(cafe_id = %cafe_id, "delete refused: api key mismatch");
        return (StatusCode::FORBIDDEN, Json(json!({ "error": FORBIDDEN })));
    }

    let Some(id) = parse_cafe_id(&cafe_id) else {
        return cafe_not_found();
    };

    match state.cafes.delete(id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({ "success": "Successfully deleted records of the cafe." })),
        ),
        Ok(false) => cafe_not_found(),
        Err(e) => store_failure(e),
    }
}

// ---------------------------------------------------------------------------
// GET /api/status
// ---------------------------------------------------------------------------

/// Response payload for the `/api/status` endpoint.
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub cafe_count: i64,
    pub database: bool,
}

/// Report service health and the number of stored cafes.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let database = state.db.ping().await;
    let cafe_count = if database {
        state.cafes.count().await.unwrap_or_default()
    } else {
        0
    };

    Json(StatusResponse {
        status: if database { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        cafe_count,
        database,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Path ids arrive as text; anything that is not an integer matches no cafe.
fn parse_cafe_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn cafe_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": { "Not Found": CAFE_NOT_FOUND } })),
    )
}

/// Map a store error to a status code and error body.
fn store_failure(err: StoreError) -> (StatusCode, Json<Value>) {
    match err {
        StoreError::EmptyStore => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "Not Found": STORE_EMPTY } })),
        ),
        StoreError::MissingField(field) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "Bad Request": format!("Missing required field: {field}.") } })),
        ),
        StoreError::Duplicate { value, .. } => (
            StatusCode::CONFLICT,
            Json(json!({ "error": { "Conflict": format!("A cafe named {value:?} already exists.") } })),
        ),
        other => {
            tracing::error!(error = %other, "store operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": other.to_string() })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cafe_id_accepts_integers_only() {
        assert_eq!(parse_cafe_id("7"), Some(7));
        assert_eq!(parse_cafe_id("-1"), Some(-1));
        assert_eq!(parse_cafe_id("seven"), None);
        assert_eq!(parse_cafe_id("7.5"), None);
        assert_eq!(parse_cafe_id(""), None);
    }

    #[test]
    fn empty_store_maps_to_not_found() {
        let (code, Json(body)) = store_failure(StoreError::EmptyStore);
        assert_eq!(code, StatusCode::NOT_FOUND);
        assert!(body["error"]["Not Found"].is_string());
    }

    #[test]
    fn missing_field_maps_to_bad_request() {
        let (code, Json(body)) = store_failure(StoreError::MissingField("seats"));
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert!(
            body["error"]["Bad Request"]
                .as_str()
                .unwrap()
                .contains("seats")
        );
    }

    #[test]
    fn duplicate_maps_to_conflict() {
        let (code, _) = store_failure(StoreError::Duplicate {
            field: "name",
            value: "Twice".into(),
        });
        assert_eq!(code, StatusCode::CONFLICT);
    }

    #[test]
    fn other_errors_map_to_internal() {
        let (code, Json(body)) = store_failure(StoreError::TaskJoin("boom".into()));
        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("boom"));
    }
}
