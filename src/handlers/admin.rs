use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::admin as admin_db;
use crate::error::ApiError;
use crate::models::users::AdminActionRequest;

/// GET /admin/usuarios — every user with their derived role label.
pub async fn list_users(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    let users = admin_db::list_users(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// POST /admin/accion — apply one moderation action to a user. Unknown
/// actions are rejected at deserialization time.
pub async fn apply_action(
    db: web::Data<DatabaseConnection>,
    body: web::Json<AdminActionRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    let action = input.action;
    admin_db::apply_action(db.get_ref(), input).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Action {action:?} applied"),
    })))
}
