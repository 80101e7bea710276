use actix_web::{
    delete, get, post,
    web::{self, Data, Json, Path},
    HttpRequest, HttpResponse,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::candidates::Candidate;
use crate::error::ApiError;
use crate::validation::{self, CandidatePayload};

/// Shared per-process state: the one database handle opened at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub conn: SqlitePool,
}

#[get("/candidates")]
async fn list_candidates(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let candidates = Candidate::list(&state.conn)
        .await
        .map_err(ApiError::Internal)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "success",
        "data": candidates,
    })))
}

#[get("/candidates/{id}")]
async fn get_candidate(state: Data<AppState>, id: Path<i64>) -> Result<HttpResponse, ApiError> {
    let candidate = Candidate::find(&state.conn, id.into_inner()).await?;

    // An unknown id still answers 200; the envelope simply has no data key.
    let body = match candidate {
        Some(candidate) => json!({ "message": "success", "data": candidate }),
        None => json!({ "message": "success" }),
    };

    Ok(HttpResponse::Ok().json(body))
}

#[delete("/candidates/{id}")]
async fn delete_candidate(state: Data<AppState>, id: Path<i64>) -> Result<HttpResponse, ApiError> {
    let changes = Candidate::delete(&state.conn, id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "successfully deleted",
        "changes": changes,
    })))
}

#[post("/candidates")]
async fn create_candidate(
    state: Data<AppState>,
    payload: Json<CandidatePayload>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    validation::validate_payload(&payload).map_err(ApiError::Validation)?;

    let id = payload.to_record().create(&state.conn).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "success, candidate created",
        "data": payload,
        "id": id,
    })))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let body = json!({ "error": err.to_string() });
    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
        .into()
}

/// Mounts the API scope, the JSON error shape, and the catch-all 404.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .service(list_candidates)
                .service(get_candidate)
                .service(delete_candidate)
                .service(create_candidate),
        )
        .default_service(web::route().to(not_found));
}
