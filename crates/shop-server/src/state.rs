//! Application State

use std::sync::Arc;

use shop_core::Catalog;
use shop_payments::IntentService;

/// Shared application state
///
/// Everything here is read-only after startup; requests never contend over
/// shared mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Read-only item catalog
    pub catalog: Arc<Catalog>,

    /// Stripe payment intent service
    pub intents: Arc<IntentService>,

    /// Publishable key handed to the checkout page
    pub publishable_key: String,
}
