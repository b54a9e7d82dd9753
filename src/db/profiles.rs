use sea_orm::*;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::error::ApiError;
use crate::models::client_details::{self, ClientProfileRow, UpdateClientProfile};
use crate::models::users;
use crate::models::worker_details::{self, UpdateWorkerProfile, WorkerProfileRow};

/// Fetch a worker profile: users joined with worker_details.
pub async fn worker_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<WorkerProfileRow, ApiError> {
    users::Entity::find_by_id(user_id)
        .select_only()
        .column(users::Column::Name)
        .column(users::Column::Surname)
        .column(users::Column::Phone)
        .column(users::Column::ProfilePhotoUrl)
        .column(worker_details::Column::Bio)
        .column(worker_details::Column::YearsExperience)
        .column(worker_details::Column::HourlyRate)
        .column(worker_details::Column::RatingAverage)
        .column(worker_details::Column::RatingCount)
        .column(worker_details::Column::AdminValidated)
        .column(worker_details::Column::IdFrontUrl)
        .column(worker_details::Column::IdBackUrl)
        .column(worker_details::Column::BackgroundCheckUrl)
        .join(JoinType::InnerJoin, users::Relation::WorkerDetail.def())
        .into_model::<WorkerProfileRow>()
        .one(db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile".to_string()))
}

/// Update users + worker_details in one transaction. Both statements commit
/// together or neither does.
pub async fn update_worker_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: UpdateWorkerProfile,
) -> Result<(), ApiError> {
    let txn = db.begin().await?;

    let user = users::Entity::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile".to_string()))?;
    let detail = worker_details::Entity::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile".to_string()))?;

    let mut user: users::ActiveModel = user.into();
    user.name = Set(input.name);
    user.surname = Set(input.surname);
    user.phone = Set(input.phone);
    user.profile_photo_url = Set(input.profile_photo_url);
    user.update(&txn).await?;

    let mut detail: worker_details::ActiveModel = detail.into();
    detail.bio = Set(input.bio);
    detail.years_experience = Set(input.years_experience);
    detail.hourly_rate = Set(input.hourly_rate);
    detail.id_front_url = Set(input.id_front_url);
    detail.id_back_url = Set(input.id_back_url);
    detail.background_check_url = Set(input.background_check_url);
    detail.update(&txn).await?;

    txn.commit().await?;
    Ok(())
}

/// Fetch a client profile: users joined with client_details.
pub async fn client_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<ClientProfileRow, ApiError> {
    users::Entity::find_by_id(user_id)
        .select_only()
        .column(users::Column::Name)
        .column(users::Column::Surname)
        .column(users::Column::Phone)
        .column(users::Column::Email)
        .column(users::Column::ProfilePhotoUrl)
        .column(users::Column::BirthDate)
        .column(client_details::Column::Street)
        .column(client_details::Column::Neighborhood)
        .column(client_details::Column::ExteriorNumber)
        .column(client_details::Column::InteriorNumber)
        .column(client_details::Column::PostalCode)
        .column(client_details::Column::City)
        .column(client_details::Column::ReferenceNotes)
        .column(client_details::Column::Latitude)
        .column(client_details::Column::Longitude)
        .join(JoinType::InnerJoin, users::Relation::ClientDetail.def())
        .into_model::<ClientProfileRow>()
        .one(db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile".to_string()))
}

/// Update users (optionally rotating the password) + client_details in one
/// transaction.
pub async fn update_client_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: UpdateClientProfile,
) -> Result<(), ApiError> {
    let txn = db.begin().await?;

    let user = users::Entity::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile".to_string()))?;
    let detail = client_details::Entity::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile".to_string()))?;

    let mut user: users::ActiveModel = user.into();
    user.name = Set(input.name);
    user.surname = Set(input.surname);
    user.phone = Set(input.phone);
    user.email = Set(input.email);
    user.profile_photo_url = Set(input.profile_photo_url);
    if let Some(new_password) = &input.new_password {
        user.password_hash = Set(hash_password(new_password)?);
    }
    user.update(&txn).await?;

    let mut detail: client_details::ActiveModel = detail.into();
    detail.street = Set(input.street);
    detail.neighborhood = Set(input.neighborhood);
    detail.exterior_number = Set(input.exterior_number);
    detail.interior_number = Set(input.interior_number);
    detail.postal_code = Set(input.postal_code);
    detail.city = Set(input.city);
    detail.reference_notes = Set(input.reference_notes);
    detail.latitude = Set(input.latitude);
    detail.longitude = Set(input.longitude);
    detail.update(&txn).await?;

    txn.commit().await?;
    Ok(())
}
