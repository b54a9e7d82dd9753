use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `proposals` table. At most one proposal may exist
/// per (service, worker) pair, backed by a unique index.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "proposals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: Uuid,
    pub worker_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub accepted: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::services::Entity",
        from = "Column::ServiceId",
        to = "super::services::Column::Id"
    )]
    Service,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::WorkerId",
        to = "super::users::Column::Id"
    )]
    Worker,
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /propuestas.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProposal {
    pub service_id: Uuid,
    pub worker_id: Uuid,
    pub price: f64,
    pub message: String,
}

/// A row of GET /servicios/{id}/propuestas: the bid plus the bidding
/// worker's identity and rating stats, cheapest first.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct ProposalRow {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub price: f64,
    pub message: String,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub profile_photo_url: Option<String>,
    pub rating_average: f64,
    pub rating_count: i32,
    pub years_experience: i32,
    pub bio: String,
}
