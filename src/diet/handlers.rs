use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::db::AppState;
use crate::error::ApiError;

use super::dto::{DietPayload, DietRecord, Message};
use super::repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/allDiet", get(list_diets))
        .route("/diet", get(get_diet_by_query).post(create_diet))
        .route(
            "/diet/:id",
            get(get_diet).put(update_diet).delete(delete_diet),
        )
}

#[derive(Debug, Deserialize)]
pub struct GetDietParams {
    pub id: Option<i64>,
}

#[instrument(skip(state))]
async fn list_diets(State(state): State<AppState>) -> Result<Json<Vec<DietRecord>>, ApiError> {
    let mut conn = state.connect().await?;
    let diets = repo::fetch_all(&mut conn).await?;
    Ok(Json(diets))
}

// Same semantics as `get_diet`, but the identifier arrives as a query
// parameter and its absence is the caller's error.
#[instrument(skip(state))]
async fn get_diet_by_query(
    State(state): State<AppState>,
    Query(params): Query<GetDietParams>,
) -> Result<Response, ApiError> {
    let id = params.id.ok_or(ApiError::MissingParam("id"))?;
    let mut conn = state.connect().await?;
    diet_or_not_found(repo::fetch_by_id(&mut conn, id).await?)
}

#[instrument(skip(state))]
async fn get_diet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let mut conn = state.connect().await?;
    diet_or_not_found(repo::fetch_by_id(&mut conn, id).await?)
}

#[instrument(skip(state, payload))]
async fn create_diet(
    State(state): State<AppState>,
    Json(payload): Json<DietPayload>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let mut conn = state.connect().await?;
    let id = repo::insert(&mut conn, &payload).await?;
    debug!(id, "diet row inserted");
    Ok((
        StatusCode::CREATED,
        Json(Message {
            message: "Diet added successfully",
        }),
    ))
}

#[instrument(skip(state, payload))]
async fn update_diet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DietPayload>,
) -> Result<Json<Message>, ApiError> {
    let mut conn = state.connect().await?;
    let affected = repo::update(&mut conn, id, &payload).await?;
    debug!(id, affected, "diet row updated");
    Ok(Json(Message {
        message: "Diet updated successfully",
    }))
}

#[instrument(skip(state))]
async fn delete_diet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, ApiError> {
    let mut conn = state.connect().await?;
    let affected = repo::delete(&mut conn, id).await?;
    debug!(id, affected, "diet row deleted");
    Ok(Json(Message {
        message: "Diet deleted successfully",
    }))
}

// A read matching zero rows is not an error: 404 with a `message` body,
// distinct from the `error` envelope.
fn diet_or_not_found(found: Option<DietRecord>) -> Result<Response, ApiError> {
    match found {
        Some(diet) => Ok(Json(diet).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(Message {
                message: "Diet not found",
            }),
        )
            .into_response()),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::app::build_app;
    use crate::db::AppState;

    fn app() -> axum::Router {
        build_app(AppState::fake())
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn liveness_reports_running() {
        let response = app()
            .oneshot(request(Method::GET, "/", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Diet Planner API is running");
    }

    // Identifier validation happens before the connection attempt, so the
    // 400 wins even with storage unreachable.
    #[tokio::test]
    async fn get_diet_without_id_is_400() {
        let response = app()
            .oneshot(request(Method::GET, "/diet", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "id parameter is required" })
        );
    }

    #[tokio::test]
    async fn crud_routes_surface_connection_failure_as_500() {
        let cases = [
            (Method::GET, "/allDiet", None),
            (Method::GET, "/diet?id=1", None),
            (Method::GET, "/diet/1", None),
            (
                Method::POST,
                "/diet",
                Some(json!({ "meal_type": "breakfast", "food_item": "oats" })),
            ),
            (Method::PUT, "/diet/1", Some(json!({}))),
            (Method::DELETE, "/diet/1", None),
        ];

        for (method, uri, body) in cases {
            let response = app()
                .oneshot(request(method.clone(), uri, body))
                .await
                .unwrap();
            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{method} {uri}"
            );
            assert_eq!(
                body_json(response).await,
                json!({ "error": "Database connection failed" }),
                "{method} {uri}"
            );
        }
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app()
            .oneshot(request(Method::GET, "/diets", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_route_rejects_wrong_method() {
        let response = app()
            .oneshot(request(Method::POST, "/allDiet", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
