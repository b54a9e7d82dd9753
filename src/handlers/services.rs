use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::services as service_db;
use crate::error::ApiError;
use crate::models::services::{CompleteService, CreateService, HireRequest};

/// POST /servicios — a client posts a new service request.
pub async fn create_service(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateService>,
) -> Result<HttpResponse, ApiError> {
    let service_id = service_db::insert_service(db.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Request created",
        "service_id": service_id,
    })))
}

/// GET /servicios/{cliente_id} — the client's requests with proposal counts.
pub async fn list_client_services(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let entries = service_db::client_services(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// GET /feed-servicios — open requests for workers to browse.
pub async fn feed(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let rows = service_db::feed(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /trabajador/mis-trabajos/{id} — requests assigned to a worker.
pub async fn worker_jobs(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let rows = service_db::worker_jobs(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// POST /servicios/contratar — accept one proposal, binding its worker to
/// the request. A request that already left REQUESTED answers 409.
pub async fn hire(
    db: web::Data<DatabaseConnection>,
    body: web::Json<HireRequest>,
) -> Result<HttpResponse, ApiError> {
    service_db::hire(db.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Worker hired",
    })))
}

/// POST /servicios/finalizar — complete a request and rate the worker.
pub async fn complete(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CompleteService>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    if !(1..=5).contains(&input.rating) {
        return Err(ApiError::Validation(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    service_db::complete_and_rate(db.get_ref(), input).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Completed and rated",
    })))
}
