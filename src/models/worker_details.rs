use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `worker_details` table (1:1 with users).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "worker_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub years_experience: i32,
    #[sea_orm(column_type = "Double")]
    pub hourly_rate: f64,
    #[sea_orm(column_type = "Double")]
    pub rating_average: f64,
    pub rating_count: i32,
    pub admin_validated: bool,
    pub id_front_url: Option<String>,
    pub id_back_url: Option<String>,
    pub background_check_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::worker_categories::Entity")]
    WorkerCategories,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::worker_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkerCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Response body for GET /mi-perfil/{id}: user identity joined with the
/// worker's professional data.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct WorkerProfileRow {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub profile_photo_url: Option<String>,
    pub bio: String,
    pub years_experience: i32,
    pub hourly_rate: f64,
    pub rating_average: f64,
    pub rating_count: i32,
    pub admin_validated: bool,
    pub id_front_url: Option<String>,
    pub id_back_url: Option<String>,
    pub background_check_url: Option<String>,
}

/// Request body for PUT /mi-perfil/{id}.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWorkerProfile {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub profile_photo_url: Option<String>,
    pub bio: String,
    pub years_experience: i32,
    pub hourly_rate: f64,
    pub id_front_url: Option<String>,
    pub id_back_url: Option<String>,
    pub background_check_url: Option<String>,
}
