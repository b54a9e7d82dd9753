use sea_orm::*;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::proposals::{self, CreateProposal, ProposalRow};
use crate::models::{users, worker_details};

/// Insert a worker's bid on a service request. A second bid from the same
/// worker on the same request is rejected; the unique index on
/// (service_id, worker_id) backs the pre-check against races.
pub async fn insert_proposal(
    db: &DatabaseConnection,
    input: CreateProposal,
) -> Result<proposals::Model, ApiError> {
    let existing = proposals::Entity::find()
        .filter(proposals::Column::ServiceId.eq(input.service_id))
        .filter(proposals::Column::WorkerId.eq(input.worker_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::DuplicateProposal);
    }

    proposals::ActiveModel {
        id: Set(Uuid::new_v4()),
        service_id: Set(input.service_id),
        worker_id: Set(input.worker_id),
        price: Set(input.price),
        message: Set(input.message),
        accepted: Set(false),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(db)
    .await
    .map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::DuplicateProposal,
        _ => e.into(),
    })
}

/// The proposals on a request, joined with each worker's identity and
/// rating stats, cheapest first. No secondary sort key: equal prices come
/// back in storage order.
pub async fn proposals_for_service(
    db: &DatabaseConnection,
    service_id: Uuid,
) -> Result<Vec<ProposalRow>, ApiError> {
    Ok(proposals::Entity::find()
        .select_only()
        .column(proposals::Column::Id)
        .column(proposals::Column::WorkerId)
        .column(proposals::Column::Price)
        .column(proposals::Column::Message)
        .column(users::Column::Name)
        .column(users::Column::Surname)
        .column(users::Column::Phone)
        .column(users::Column::ProfilePhotoUrl)
        .column(worker_details::Column::RatingAverage)
        .column(worker_details::Column::RatingCount)
        .column(worker_details::Column::YearsExperience)
        .column(worker_details::Column::Bio)
        .join(JoinType::InnerJoin, proposals::Relation::Worker.def())
        .join(JoinType::InnerJoin, users::Relation::WorkerDetail.def())
        .filter(proposals::Column::ServiceId.eq(service_id))
        .order_by_asc(proposals::Column::Price)
        .into_model::<ProposalRow>()
        .all(db)
        .await?)
}
