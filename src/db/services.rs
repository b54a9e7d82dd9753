use sea_orm::sea_query::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::services::{
    self, ClientServiceEntry, ClientServiceRow, CompleteService, CreateService, FeedRow,
    HireRequest, Status, WorkerJobRow,
};
use crate::models::{categories, proposals, users, worker_details};

/// How many open requests the public feed returns.
const FEED_LIMIT: u64 = 20;

/// Insert a new service request (defaults to REQUESTED status).
pub async fn insert_service(
    db: &DatabaseConnection,
    input: CreateService,
) -> Result<Uuid, ApiError> {
    let new_service = services::ActiveModel {
        id: Set(Uuid::new_v4()),
        client_id: Set(input.client_id),
        category_id: Set(input.category_id),
        title: Set(input.title),
        description: Set(input.description),
        scheduled_at: Set(input.scheduled_at),
        estimated_price: Set(input.estimated_price),
        address: Set(input.address),
        latitude: Set(input.latitude),
        longitude: Set(input.longitude),
        photo_url: Set(input.photo_url),
        status: Set(Status::Requested),
        worker_id: Set(None),
        rating: Set(None),
        review: Set(None),
        created_at: Set(chrono::Utc::now()),
    };

    let inserted = new_service.insert(db).await?;
    Ok(inserted.id)
}

/// A client's own requests, newest first, each with its live proposal count.
pub async fn client_services(
    db: &DatabaseConnection,
    client_id: Uuid,
) -> Result<Vec<ClientServiceEntry>, ApiError> {
    let rows = services::Entity::find()
        .select_only()
        .column(services::Column::Id)
        .column(services::Column::Title)
        .column(services::Column::Status)
        .column(services::Column::CreatedAt)
        .column_as(categories::Column::Name, "category")
        .join(JoinType::InnerJoin, services::Relation::Category.def())
        .filter(services::Column::ClientId.eq(client_id))
        .order_by_desc(services::Column::CreatedAt)
        .into_model::<ClientServiceRow>()
        .all(db)
        .await?;

    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let proposal_count = proposals::Entity::find()
            .filter(proposals::Column::ServiceId.eq(row.id))
            .count(db)
            .await?;
        entries.push(ClientServiceEntry {
            row,
            proposal_count,
        });
    }
    Ok(entries)
}

/// The public feed: REQUESTED services, newest first, capped at 20.
pub async fn feed(db: &DatabaseConnection) -> Result<Vec<FeedRow>, ApiError> {
    Ok(services::Entity::find()
        .select_only()
        .column(services::Column::Id)
        .column(services::Column::Title)
        .column(services::Column::Description)
        .column(services::Column::EstimatedPrice)
        .column(services::Column::ScheduledAt)
        .column(services::Column::Address)
        .column(services::Column::PhotoUrl)
        .column_as(categories::Column::Name, "category")
        .column_as(users::Column::Name, "client_name")
        .join(JoinType::InnerJoin, services::Relation::Category.def())
        .join(JoinType::InnerJoin, services::Relation::Client.def())
        .filter(services::Column::Status.eq(Status::Requested))
        .order_by_desc(services::Column::CreatedAt)
        .limit(FEED_LIMIT)
        .into_model::<FeedRow>()
        .all(db)
        .await?)
}

/// The requests assigned to a worker, newest first, with client contact data.
pub async fn worker_jobs(
    db: &DatabaseConnection,
    worker_id: Uuid,
) -> Result<Vec<WorkerJobRow>, ApiError> {
    Ok(services::Entity::find()
        .select_only()
        .column(services::Column::Id)
        .column(services::Column::Title)
        .column(services::Column::Description)
        .column(services::Column::Status)
        .column(services::Column::CreatedAt)
        .column(services::Column::Address)
        .column(services::Column::EstimatedPrice)
        .column(services::Column::Rating)
        .column(services::Column::Review)
        .column_as(users::Column::Name, "client_name")
        .column_as(users::Column::Phone, "client_phone")
        .join(JoinType::InnerJoin, services::Relation::Client.def())
        .filter(services::Column::WorkerId.eq(worker_id))
        .order_by_desc(services::Column::CreatedAt)
        .into_model::<WorkerJobRow>()
        .all(db)
        .await?)
}

/// Accept a proposal: bind the worker, copy the offered price, move the
/// request to IN_PROGRESS and mark the proposal accepted, all in one
/// transaction.
///
/// The status transition is a conditional update on `status = REQUESTED`,
/// so concurrent hires on the same request cannot both succeed; the loser
/// gets `AlreadyHired`. Competing proposals are left untouched.
pub async fn hire(db: &DatabaseConnection, input: HireRequest) -> Result<(), ApiError> {
    let txn = db.begin().await?;

    let proposal = proposals::Entity::find_by_id(input.proposal_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Proposal".to_string()))?;
    if proposal.service_id != input.service_id || proposal.worker_id != input.worker_id {
        return Err(ApiError::Validation(
            "Proposal does not belong to this request and worker".to_string(),
        ));
    }

    let result = services::Entity::update_many()
        .col_expr(services::Column::WorkerId, Expr::value(input.worker_id))
        .col_expr(
            services::Column::EstimatedPrice,
            Expr::value(proposal.price),
        )
        .col_expr(services::Column::Status, Expr::value(Status::InProgress))
        .filter(services::Column::Id.eq(input.service_id))
        .filter(services::Column::Status.eq(Status::Requested))
        .exec(&txn)
        .await?;

    if result.rows_affected == 0 {
        let exists = services::Entity::find_by_id(input.service_id)
            .one(&txn)
            .await?
            .is_some();
        return Err(if exists {
            ApiError::AlreadyHired
        } else {
            ApiError::NotFound("Service".to_string())
        });
    }

    let mut proposal: proposals::ActiveModel = proposal.into();
    proposal.accepted = Set(true);
    proposal.update(&txn).await?;

    txn.commit().await?;
    Ok(())
}

/// Running average and evaluation count over a worker's ratings.
pub fn rating_stats(ratings: &[i32]) -> (f64, i32) {
    if ratings.is_empty() {
        return (0.0, 0);
    }
    let sum: i32 = ratings.iter().sum();
    (f64::from(sum) / ratings.len() as f64, ratings.len() as i32)
}

/// Complete a request and store its rating, then recompute the assigned
/// worker's running average over all their rated requests. One transaction.
pub async fn complete_and_rate(
    db: &DatabaseConnection,
    input: CompleteService,
) -> Result<(), ApiError> {
    let txn = db.begin().await?;

    let service = services::Entity::find_by_id(input.service_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound("Service".to_string()))?;
    let worker_id = service.worker_id;

    let mut service: services::ActiveModel = service.into();
    service.status = Set(Status::Completed);
    service.rating = Set(Some(input.rating));
    service.review = Set(Some(input.review));
    service.update(&txn).await?;

    if let Some(worker_id) = worker_id {
        let rated = services::Entity::find()
            .filter(services::Column::WorkerId.eq(worker_id))
            .filter(services::Column::Rating.is_not_null())
            .all(&txn)
            .await?;
        let ratings: Vec<i32> = rated.iter().filter_map(|s| s.rating).collect();
        let (average, count) = rating_stats(&ratings);

        if let Some(detail) = worker_details::Entity::find_by_id(worker_id).one(&txn).await? {
            let mut detail: worker_details::ActiveModel = detail.into();
            detail.rating_average = Set(average);
            detail.rating_count = Set(count);
            detail.update(&txn).await?;
        }
    }

    txn.commit().await?;
    Ok(())
}
