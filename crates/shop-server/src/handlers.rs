//! HTTP Handlers
//!
//! Thin request→view mappings over the catalog and the intent service.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use shop_core::{Catalog, format_minor_units};
use shop_payments::{IntentDetails, PaymentError};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutParams {
    pub item: Option<String>,
}

/// Checkout page view model
#[derive(Debug, Serialize)]
pub struct CheckoutView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub publishable_key: String,
}

#[derive(Debug, Deserialize)]
pub struct SuccessParams {
    pub payment_intent: Option<String>,
}

/// Success page view model
#[derive(Debug, Default, Serialize)]
pub struct SuccessView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    #[serde(default)]
    pub item: Option<String>,
}

#[derive(Serialize)]
pub struct CreateIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Checkout page data: item title and formatted amount, or an error flag.
///
/// Pure mapping with no side effects; repeated calls yield identical output.
pub async fn checkout_view(
    State(state): State<AppState>,
    Query(params): Query<CheckoutParams>,
) -> Json<CheckoutView> {
    Json(build_checkout_view(
        &state.catalog,
        params.item.as_deref(),
        state.publishable_key.clone(),
    ))
}

fn build_checkout_view(
    catalog: &Catalog,
    item: Option<&str>,
    publishable_key: String,
) -> CheckoutView {
    let found = item.and_then(|id| catalog.lookup(id));

    CheckoutView {
        item: item.map(str::to_string),
        title: found.map(|i| i.title.clone()),
        amount: found.map(|i| format_minor_units(i.amount)),
        error: found.is_none().then_some("No item selected"),
        publishable_key,
    }
}

/// Success page data: payment details re-queried from Stripe.
///
/// A retrieval failure of any kind renders the generic error view; this
/// endpoint never fails at the HTTP level.
pub async fn success_view(
    State(state): State<AppState>,
    Query(params): Query<SuccessParams>,
) -> Json<SuccessView> {
    match state
        .intents
        .retrieve_intent(params.payment_intent.as_deref())
        .await
    {
        Ok(details) => Json(build_success_view(details)),
        Err(e) => {
            tracing::warn!("Payment intent retrieval failed: {}", e);
            Json(SuccessView {
                error: Some(e.user_message()),
                ..Default::default()
            })
        }
    }
}

fn build_success_view(details: IntentDetails) -> SuccessView {
    SuccessView {
        payment_intent: Some(details.id),
        amount: Some(format_minor_units(details.amount)),
        currency: Some(details.currency.to_uppercase()),
        payment_status: Some(details.status),
        payment_method: details.payment_method_types.first().cloned(),
        metadata: Some(details.metadata),
        error: None,
    }
}

/// Create a payment intent for the posted item
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<CreateIntentRequest>,
) -> Result<Json<CreateIntentResponse>, (StatusCode, Json<ErrorResponse>)> {
    let client_secret = state
        .intents
        .create_intent(payload.item.as_deref())
        .await
        .map_err(|e| match e {
            PaymentError::InvalidItem => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid item".into(),
                }),
            ),
            // The processor message is passed through as-is
            PaymentError::Processor(message) => {
                tracing::error!("Intent creation failed: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { error: message }),
                )
            }
            other => {
                tracing::error!("Intent creation failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: other.to_string(),
                    }),
                )
            }
        })?;

    Ok(Json(CreateIntentResponse { client_secret }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    use shop_payments::{IntentService, PaymentsConfig};

    fn test_state() -> AppState {
        let catalog = Arc::new(Catalog::builtin());
        let config = PaymentsConfig {
            secret_key: "sk_test_dummy".into(),
            publishable_key: "pk_test_dummy".into(),
        };
        AppState {
            catalog: catalog.clone(),
            intents: Arc::new(IntentService::new(&config, catalog)),
            publishable_key: config.publishable_key,
        }
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_checkout_view_known_item() {
        let catalog = Catalog::builtin();
        let view = build_checkout_view(&catalog, Some("1"), "pk_test_dummy".into());

        assert_eq!(view.title.as_deref(), Some("The Art of Doing Science and Engineering"));
        assert_eq!(view.amount.as_deref(), Some("23.00"));
        assert_eq!(view.error, None);
        assert_eq!(view.item.as_deref(), Some("1"));
    }

    #[test]
    fn test_checkout_view_unknown_item() {
        let catalog = Catalog::builtin();
        let view = build_checkout_view(&catalog, Some("99"), "pk_test_dummy".into());

        assert_eq!(view.error, Some("No item selected"));
        assert!(view.title.is_none());
        assert!(view.amount.is_none());
    }

    #[test]
    fn test_checkout_view_missing_item() {
        let catalog = Catalog::builtin();
        let view = build_checkout_view(&catalog, None, "pk_test_dummy".into());

        assert_eq!(view.error, Some("No item selected"));
        assert!(view.title.is_none());
        assert!(view.amount.is_none());
    }

    #[test]
    fn test_success_view_mapping() {
        let details = IntentDetails {
            id: "pi_123".into(),
            amount: 2500,
            currency: "usd".into(),
            status: "succeeded".into(),
            payment_method_types: vec!["card".into(), "link".into()],
            metadata: HashMap::from([
                ("item_id".to_string(), "2".to_string()),
                (
                    "title".to_string(),
                    "The Making of Prince of Persia: Journals 1985-1993".to_string(),
                ),
            ]),
        };

        let view = build_success_view(details);

        assert_eq!(view.payment_intent.as_deref(), Some("pi_123"));
        assert_eq!(view.amount.as_deref(), Some("25.00"));
        assert_eq!(view.currency.as_deref(), Some("USD"));
        assert_eq!(view.payment_status.as_deref(), Some("succeeded"));
        assert_eq!(view.payment_method.as_deref(), Some("card"));
        assert_eq!(
            view.metadata.unwrap().get("item_id").map(String::as_str),
            Some("2")
        );
        assert_eq!(view.error, None);
    }

    #[tokio::test]
    async fn test_get_checkout_known_item() {
        let app = crate::app(test_state());
        let (status, body) = get_json(app, "/api/checkout?item=1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amount"], "23.00");
        assert_eq!(body["title"], "The Art of Doing Science and Engineering");
        assert_eq!(body["publishable_key"], "pk_test_dummy");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_get_checkout_unknown_item() {
        let app = crate::app(test_state());
        let (status, body) = get_json(app, "/api/checkout?item=99").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "No item selected");
        assert!(body.get("title").is_none());
        assert!(body.get("amount").is_none());
    }

    #[tokio::test]
    async fn test_get_checkout_is_idempotent() {
        let state = test_state();
        let (_, first) = get_json(crate::app(state.clone()), "/api/checkout?item=1").await;
        let (_, second) = get_json(crate::app(state), "/api/checkout?item=1").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_create_payment_intent_invalid_item() {
        let app = crate::app(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/create-payment-intent")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"item":"99"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid item");
    }

    #[tokio::test]
    async fn test_create_payment_intent_missing_item() {
        let app = crate::app(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/create-payment-intent")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = crate::app(test_state());
        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}
