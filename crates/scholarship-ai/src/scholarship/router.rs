use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, warn};

use super::artifacts::ArtifactStore;
use super::intake::ProfileIntake;
use super::service::{PredictionReport, ScholarshipService, ScholarshipServiceError};

/// Router builder exposing prediction, recommendation, and artifact endpoints.
pub fn scholarship_router<S>(service: Arc<ScholarshipService<S>>) -> Router
where
    S: ArtifactStore + 'static,
{
    Router::new()
        .route("/predict", post(predict_handler::<S>))
        .route("/recommendations", post(recommendations_handler::<S>))
        .route("/model_info", get(model_info_handler::<S>))
        .route("/dataset_stats", get(dataset_stats_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct PredictionEnvelope {
    success: bool,
    #[serde(flatten)]
    report: PredictionReport,
}

pub(crate) async fn predict_handler<S>(
    State(service): State<Arc<ScholarshipService<S>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    S: ArtifactStore + 'static,
{
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    let result = ProfileIntake::from_json(&payload)
        .map_err(ScholarshipServiceError::from)
        .and_then(|profile| service.predict(&profile));

    match result {
        Ok(report) => (
            StatusCode::OK,
            Json(PredictionEnvelope {
                success: true,
                report,
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn recommendations_handler<S>(
    State(service): State<Arc<ScholarshipService<S>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    S: ArtifactStore + 'static,
{
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match ProfileIntake::from_json(&payload) {
        Ok(profile) => {
            let recommendations = service.recommend(&profile);
            let body = json!({
                "success": true,
                "recommendations": recommendations,
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err.into()),
    }
}

pub(crate) async fn model_info_handler<S>(
    State(service): State<Arc<ScholarshipService<S>>>,
) -> Response
where
    S: ArtifactStore + 'static,
{
    match service.model_results() {
        Ok(results) => {
            let body = json!({ "success": true, "results": results });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn dataset_stats_handler<S>(
    State(service): State<Arc<ScholarshipService<S>>>,
) -> Response
where
    S: ArtifactStore + 'static,
{
    match service.dataset_stats() {
        Ok(stats) => {
            let body = json!({ "success": true, "stats": stats });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: ScholarshipServiceError) -> Response {
    let status = match &err {
        ScholarshipServiceError::Malformed(_) => StatusCode::BAD_REQUEST,
        ScholarshipServiceError::ModelResultsMissing | ScholarshipServiceError::DatasetMissing => {
            StatusCode::NOT_FOUND
        }
        ScholarshipServiceError::ModelsUnavailable
        | ScholarshipServiceError::NoPredictions
        | ScholarshipServiceError::Artifact(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!(error = %err, "scholarship request failed");
    } else {
        warn!(status = status.as_u16(), error = %err, "scholarship request rejected");
    }

    let payload = json!({
        "success": false,
        "error": err.to_string(),
    });
    (status, Json(payload)).into_response()
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let payload = json!({
        "success": false,
        "error": rejection.body_text(),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
