use actix_web::{HttpResponse, web};

use crate::error::ApiError;
use crate::payments::{PaymentClient, PaymentRequest};

/// POST /pagos/crear-preferencia — create a provider-hosted checkout page
/// for a hired service and return its redirect link.
pub async fn create_preference(
    payments: web::Data<PaymentClient>,
    body: web::Json<PaymentRequest>,
) -> Result<HttpResponse, ApiError> {
    let (preference_id, init_point) = payments.create_preference(&body).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "preference_id": preference_id,
        "init_point": init_point,
    })))
}
