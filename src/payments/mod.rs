use serde::Deserialize;
use std::env;
use uuid::Uuid;

use crate::error::ApiError;

const DEFAULT_API_BASE: &str = "https://api.mercadopago.com";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";

/// Request body for POST /pagos/crear-preferencia.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    pub service_id: Uuid,
    pub proposal_id: Uuid,
    pub worker_id: Uuid,
    pub title: String,
    pub price: f64,
}

/// What the provider answered for a created preference.
#[derive(Debug, Clone, Deserialize)]
struct PreferenceResponse {
    id: String,
    init_point: Option<String>,
    sandbox_init_point: Option<String>,
}

/// The opaque reconciliation string carried on the preference:
/// `service|proposal|worker`.
pub fn external_reference(service_id: Uuid, proposal_id: Uuid, worker_id: Uuid) -> String {
    format!("{service_id}|{proposal_id}|{worker_id}")
}

/// Client for the Mercado Pago preference API. Performs no local writes:
/// a failed call leaves nothing to undo.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    access_token: Option<String>,
    api_base: String,
    frontend_url: String,
}

impl PaymentClient {
    pub fn new(access_token: Option<String>, api_base: String, frontend_url: String) -> Self {
        PaymentClient {
            http: reqwest::Client::new(),
            access_token,
            api_base,
            frontend_url,
        }
    }

    /// Read `MP_ACCESS_TOKEN` and `FRONTEND_URL` from the environment. A
    /// missing token is tolerated at startup; payment calls will fail until
    /// it is configured.
    pub fn from_env() -> Self {
        let access_token = env::var("MP_ACCESS_TOKEN").ok();
        if access_token.is_none() {
            tracing::warn!("MP_ACCESS_TOKEN is not set; payment endpoints will fail");
        }
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());
        PaymentClient::new(access_token, DEFAULT_API_BASE.to_string(), frontend_url)
    }

    /// The preference payload: a single line item in MXN, back URLs on the
    /// frontend dashboard, and the reconciliation reference.
    pub fn preference_body(&self, input: &PaymentRequest) -> serde_json::Value {
        let back_url = format!("{}/frontend/dashboard.html", self.frontend_url);
        serde_json::json!({
            "items": [{
                "id": input.service_id.to_string(),
                "title": input.title,
                "quantity": 1,
                "currency_id": "MXN",
                "unit_price": input.price,
            }],
            "back_urls": {
                "success": back_url,
                "failure": back_url,
                "pending": back_url,
            },
            "auto_return": "approved",
            "external_reference": external_reference(
                input.service_id,
                input.proposal_id,
                input.worker_id,
            ),
        })
    }

    /// Create a checkout preference and return the redirect link, preferring
    /// the sandbox link when the provider supplies one.
    pub async fn create_preference(
        &self,
        input: &PaymentRequest,
    ) -> Result<(String, String), ApiError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or_else(|| ApiError::PaymentSession("payment provider not configured".into()))?;

        tracing::info!("Creating payment preference for: {} - ${}", input.title, input.price);

        let response = self
            .http
            .post(format!("{}/checkout/preferences", self.api_base))
            .bearer_auth(token)
            .json(&self.preference_body(input))
            .send()
            .await
            .map_err(|e| ApiError::PaymentSession(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Preference creation rejected ({status}): {body}");
            return Err(ApiError::PaymentSession(format!(
                "provider returned {status}"
            )));
        }

        let preference: PreferenceResponse = response
            .json()
            .await
            .map_err(|e| ApiError::PaymentSession(e.to_string()))?;

        let init_point = preference
            .sandbox_init_point
            .or(preference.init_point)
            .ok_or_else(|| ApiError::PaymentSession("provider returned no redirect URL".into()))?;

        Ok((preference.id, init_point))
    }
}
