//! Unit tests for payment-preference construction. The request body is
//! built locally; no call to the provider is made.
//!
//! Run with: `cargo test --test payments_test`
use uuid::Uuid;

use oficios_backend::payments::{PaymentClient, PaymentRequest, external_reference};

fn sample_request() -> PaymentRequest {
    PaymentRequest {
        service_id: Uuid::new_v4(),
        proposal_id: Uuid::new_v4(),
        worker_id: Uuid::new_v4(),
        title: "Fix kitchen sink".to_string(),
        price: 450.0,
    }
}

#[test]
fn test_external_reference_encodes_three_ids() {
    let (s, p, w) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let reference = external_reference(s, p, w);

    let parts: Vec<&str> = reference.split('|').collect();
    assert_eq!(parts, vec![s.to_string(), p.to_string(), w.to_string()]);
}

#[test]
fn test_preference_body_shape() {
    let client = PaymentClient::new(
        Some("test-token".to_string()),
        "https://api.example.com".to_string(),
        "https://frontend.example.com".to_string(),
    );
    let request = sample_request();
    let body = client.preference_body(&request);

    let items = body["items"].as_array().expect("items must be an array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], request.service_id.to_string());
    assert_eq!(items[0]["title"], "Fix kitchen sink");
    assert_eq!(items[0]["quantity"], 1);
    assert_eq!(items[0]["currency_id"], "MXN");
    assert_eq!(items[0]["unit_price"], 450.0);

    assert_eq!(body["auto_return"], "approved");
    assert_eq!(
        body["external_reference"],
        external_reference(request.service_id, request.proposal_id, request.worker_id)
    );
}

#[test]
fn test_back_urls_point_at_frontend_dashboard() {
    let client = PaymentClient::new(
        Some("test-token".to_string()),
        "https://api.example.com".to_string(),
        "https://frontend.example.com".to_string(),
    );
    let body = client.preference_body(&sample_request());

    let expected = "https://frontend.example.com/frontend/dashboard.html";
    for key in ["success", "failure", "pending"] {
        assert_eq!(body["back_urls"][key], expected);
    }
}
