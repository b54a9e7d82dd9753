use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::proposals as proposal_db;
use crate::error::ApiError;
use crate::models::proposals::CreateProposal;

/// POST /propuestas — a worker bids on a service request. One bid per
/// worker per request.
pub async fn create_proposal(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateProposal>,
) -> Result<HttpResponse, ApiError> {
    let proposal = proposal_db::insert_proposal(db.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Proposal sent",
        "proposal_id": proposal.id,
    })))
}

/// GET /servicios/{id}/propuestas — the bids on a request with each
/// worker's identity and rating stats, cheapest first.
pub async fn list_proposals(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let rows = proposal_db::proposals_for_service(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(rows))
}
