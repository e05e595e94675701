//! Payment Intent Service
//!
//! Creates and retrieves Stripe payment intents for catalog items.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use stripe::{
    Client, CreatePaymentIntent, CreatePaymentIntentAutomaticPaymentMethods, Currency,
    PaymentIntent, PaymentIntentId,
};

use shop_core::Catalog;

use crate::config::PaymentsConfig;
use crate::error::{PaymentError, Result};

/// Stripe-backed payment intent service.
///
/// Holds the API client and the catalog used to validate item ids before any
/// network call is made.
pub struct IntentService {
    client: Client,
    catalog: Arc<Catalog>,
}

/// Payment intent state, reduced from the Stripe resource to what the
/// success page displays.
#[derive(Clone, Debug, Serialize)]
pub struct IntentDetails {
    /// Intent id (pi_...)
    pub id: String,

    /// Amount in minor units
    pub amount: i64,

    /// Lowercase ISO currency code as reported by Stripe
    pub currency: String,

    /// Intent lifecycle status (e.g. "succeeded")
    pub status: String,

    /// Payment method types the intent accepts, most relevant first
    pub payment_method_types: Vec<String>,

    /// Metadata attached at creation ({item_id, title})
    pub metadata: HashMap<String, String>,
}

impl IntentService {
    /// Create a new intent service
    pub fn new(config: &PaymentsConfig, catalog: Arc<Catalog>) -> Self {
        Self {
            client: Client::new(config.secret_key.clone()),
            catalog,
        }
    }

    /// Create a payment intent for a catalog item and return its client
    /// secret.
    ///
    /// The id is validated against the catalog first; an unknown or missing
    /// id is a terminal input error and no remote resource is created.
    pub async fn create_intent(&self, item_id: Option<&str>) -> Result<String> {
        let item = item_id
            .and_then(|id| self.catalog.lookup(id))
            .ok_or(PaymentError::InvalidItem)?;

        let mut params = CreatePaymentIntent::new(item.amount, Currency::USD);
        params.automatic_payment_methods = Some(CreatePaymentIntentAutomaticPaymentMethods {
            enabled: true,
            ..Default::default()
        });

        let mut metadata = HashMap::new();
        metadata.insert("item_id".to_string(), item.id.clone());
        metadata.insert("title".to_string(), item.title.clone());
        params.metadata = Some(metadata);

        tracing::info!(item_id = %item.id, amount = item.amount, "Creating payment intent");

        let intent = PaymentIntent::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Processor(e.to_string()))?;

        intent
            .client_secret
            .ok_or_else(|| PaymentError::Processor("No client secret returned".into()))
    }

    /// Fetch the current state of a payment intent from Stripe.
    ///
    /// Every failure mode collapses into `PaymentError::Retrieval`; the
    /// caller shows one generic message regardless of cause and never
    /// retries.
    pub async fn retrieve_intent(&self, intent_id: Option<&str>) -> Result<IntentDetails> {
        let raw = intent_id
            .ok_or_else(|| PaymentError::Retrieval("missing payment_intent".into()))?;

        let id: PaymentIntentId = raw
            .parse()
            .map_err(|e: stripe::ParseIdError| PaymentError::Retrieval(e.to_string()))?;

        let intent = PaymentIntent::retrieve(&self.client, &id, &[])
            .await
            .map_err(|e| PaymentError::Retrieval(e.to_string()))?;

        Ok(IntentDetails {
            id: intent.id.to_string(),
            amount: intent.amount,
            currency: intent.currency.to_string(),
            status: intent.status.to_string(),
            payment_method_types: intent.payment_method_types,
            metadata: intent.metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> IntentService {
        let config = PaymentsConfig {
            secret_key: "sk_test_dummy".into(),
            publishable_key: "pk_test_dummy".into(),
        };
        IntentService::new(&config, Arc::new(Catalog::builtin()))
    }

    #[tokio::test]
    async fn test_create_intent_rejects_unknown_item() {
        let err = service().create_intent(Some("99")).await.unwrap_err();
        assert!(matches!(err, PaymentError::InvalidItem));
    }

    #[tokio::test]
    async fn test_create_intent_rejects_missing_item() {
        let err = service().create_intent(None).await.unwrap_err();
        assert!(matches!(err, PaymentError::InvalidItem));
    }

    #[tokio::test]
    async fn test_retrieve_intent_rejects_missing_id() {
        let err = service().retrieve_intent(None).await.unwrap_err();
        assert!(matches!(err, PaymentError::Retrieval(_)));
    }

    #[tokio::test]
    async fn test_retrieve_intent_rejects_malformed_id() {
        let err = service()
            .retrieve_intent(Some("not-an-intent-id"))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::Retrieval(_)));
    }
}
