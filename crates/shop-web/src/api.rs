//! API Client

use serde::Deserialize;
use std::collections::HashMap;

/// Checkout page data from the server
#[derive(Clone, Debug, Deserialize)]
pub struct CheckoutData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    pub publishable_key: String,
}

/// Payment details for the success page
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SuccessData {
    #[serde(default)]
    pub payment_intent: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Fetch the checkout view model for an item
pub async fn fetch_checkout(item: Option<&str>) -> Result<CheckoutData, String> {
    let client = reqwest::Client::new();

    let url = match item {
        Some(item) => format!("/api/checkout?item={item}"),
        None => "/api/checkout".to_string(),
    };

    let response = client.get(&url).send().await.map_err(|e| e.to_string())?;
    response.json().await.map_err(|e| e.to_string())
}

/// Request a payment intent for an item; returns the client secret
pub async fn create_payment_intent(item: Option<&str>) -> Result<String, String> {
    let client = reqwest::Client::new();

    let body = serde_json::json!({ "item": item });

    let response = client
        .post("/create-payment-intent")
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
        data["clientSecret"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| "Malformed response".into())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"]
            .as_str()
            .unwrap_or("Failed to create payment intent")
            .to_string())
    }
}

/// Fetch payment details for the success page
pub async fn fetch_success(payment_intent: Option<&str>) -> Result<SuccessData, String> {
    let client = reqwest::Client::new();

    let url = match payment_intent {
        Some(id) => format!("/api/success?payment_intent={id}"),
        None => "/api/success".to_string(),
    };

    let response = client.get(&url).send().await.map_err(|e| e.to_string())?;
    response.json().await.map_err(|e| e.to_string())
}
