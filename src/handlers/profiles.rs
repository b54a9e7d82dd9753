use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::profiles as profile_db;
use crate::error::ApiError;
use crate::models::client_details::UpdateClientProfile;
use crate::models::worker_details::UpdateWorkerProfile;

/// GET /mi-perfil/{id} — a worker's profile and professional data.
pub async fn get_worker_profile(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let profile = profile_db::worker_profile(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// PUT /mi-perfil/{id} — update a worker's user row and detail row
/// atomically.
pub async fn update_worker_profile(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateWorkerProfile>,
) -> Result<HttpResponse, ApiError> {
    profile_db::update_worker_profile(db.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Profile updated",
    })))
}

/// GET /mi-perfil-cliente/{id} — a client's profile and address data.
pub async fn get_client_profile(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let profile = profile_db::client_profile(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// PUT /mi-perfil-cliente/{id} — update a client's user row (optionally
/// rotating the password) and detail row atomically.
pub async fn update_client_profile(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateClientProfile>,
) -> Result<HttpResponse, ApiError> {
    profile_db::update_client_profile(db.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Profile updated",
    })))
}
