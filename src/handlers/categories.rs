use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::categories as category_db;
use crate::error::ApiError;

/// GET /categorias — the trade/service category catalog.
pub async fn list_categories(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let categories = category_db::all_categories(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(categories))
}
