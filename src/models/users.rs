use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: String,
    pub birth_date: Date,
    pub is_admin: bool,
    pub active: bool,
    #[serde(skip_serializing)]
    pub verification_code: Option<String>,
    pub locked_until: Option<DateTimeUtc>,
    pub profile_photo_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::client_details::Entity")]
    ClientDetail,
    #[sea_orm(has_one = "super::worker_details::Entity")]
    WorkerDetail,
    #[sea_orm(has_many = "super::proposals::Entity")]
    Proposals,
}

impl Related<super::client_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClientDetail.def()
    }
}

impl Related<super::worker_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkerDetail.def()
    }
}

impl Related<super::proposals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proposals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /registro-cliente.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterClient {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birth_date: Date,
    pub street: String,
    pub neighborhood: String,
    pub exterior_number: String,
    pub interior_number: Option<String>,
    pub postal_code: String,
    pub city: String,
    pub reference_notes: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Request body for POST /registro-trabajador.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterWorker {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub birth_date: Date,
    pub bio: String,
    pub years_experience: i32,
    pub hourly_rate: f64,
    pub category_ids: Vec<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Request body for POST /verificar-cuenta.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyAccount {
    pub email: String,
    pub code: String,
}

/// Request body for POST /login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The identity blob returned on a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginUser {
    pub id: Uuid,
    pub name: String,
    pub is_admin: bool,
    pub is_worker: bool,
}

/// Moderation actions. A closed set: anything else fails at
/// deserialization time instead of silently passing through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminAction {
    Validate,
    Lock,
    Unlock,
    Delete,
}

/// Request body for POST /admin/accion.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminActionRequest {
    pub user_id: Uuid,
    pub action: AdminAction,
    pub lock_days: Option<i64>,
}
