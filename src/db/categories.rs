use sea_orm::*;

use crate::error::ApiError;
use crate::models::categories;

/// Fetch the full category catalog.
pub async fn all_categories(db: &DatabaseConnection) -> Result<Vec<categories::Model>, ApiError> {
    Ok(categories::Entity::find().all(db).await?)
}
