use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `client_details` table (1:1 with users).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Response body for GET /mi-perfil-cliente/{id}: user identity joined with
/// the client's address data.
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct ClientProfileRow {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
    pub profile_photo_url: Option<String>,
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

/// Request body for PUT /mi-perfil-cliente/{id}. A present `new_password`
/// rotates the stored hash.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClientProfile {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
    pub profile_photo_url: Option<String>,
    pub new_password: Option<String>,
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
