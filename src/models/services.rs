use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Service request lifecycle, stored as an uppercase string in the database.
/// Assignment moves REQUESTED → IN_PROGRESS; completion moves
/// IN_PROGRESS → COMPLETED.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "REQUESTED")]
    Requested,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

/// SeaORM entity for the `service_requests` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_id: Uuid,
    pub category_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub scheduled_at: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Double", nullable)]
    pub estimated_price: Option<f64>,
    pub address: String,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
    pub photo_url: Option<String>,
    pub status: Status,
    pub worker_id: Option<Uuid>,
    pub rating: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ClientId",
        to = "super::users::Column::Id"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::proposals::Entity")]
    Proposals,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::proposals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proposals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /servicios.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub client_id: Uuid,
    pub category_id: i32,
    pub title: String,
    pub description: String,
    pub scheduled_at: Option<DateTimeUtc>,
    pub estimated_price: Option<f64>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub photo_url: Option<String>,
}

/// Request body for POST /servicios/contratar.
#[derive(Debug, Clone, Deserialize)]
pub struct HireRequest {
    pub service_id: Uuid,
    pub worker_id: Uuid,
    pub proposal_id: Uuid,
}

/// Request body for POST /servicios/finalizar.
#[derive(Debug, Clone, Deserialize)]
pub struct CompleteService {
    pub service_id: Uuid,
    pub rating: i32,
    pub review: String,
}

// ── Query rows (joined projections) ──

/// A row of GET /servicios/{cliente_id}: the client's own requests with the
/// category name; the proposal count is attached afterwards.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct ClientServiceRow {
    pub id: Uuid,
    pub title: String,
    pub status: Status,
    pub created_at: DateTimeUtc,
    pub category: String,
}

/// A `ClientServiceRow` annotated with its live proposal count.
#[derive(Debug, Clone, Serialize)]
pub struct ClientServiceEntry {
    #[serde(flatten)]
    pub row: ClientServiceRow,
    pub proposal_count: u64,
}

/// A row of GET /feed-servicios: open requests for workers to browse.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct FeedRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_price: Option<f64>,
    pub scheduled_at: Option<DateTimeUtc>,
    pub address: String,
    pub photo_url: Option<String>,
    pub category: String,
    pub client_name: String,
}

/// A row of GET /trabajador/mis-trabajos/{id}: requests assigned to a worker.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct WorkerJobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub created_at: DateTimeUtc,
    pub address: String,
    pub estimated_price: Option<f64>,
    pub rating: Option<i32>,
    pub review: Option<String>,
    pub client_name: String,
    pub client_phone: String,
}
