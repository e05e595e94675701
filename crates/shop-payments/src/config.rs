//! Payments Configuration

use crate::error::{PaymentError, Result};

/// Stripe key pair loaded from the environment.
#[derive(Clone)]
pub struct PaymentsConfig {
    /// Server-side secret key (sk_test_... / sk_live_...)
    pub secret_key: String,

    /// Publishable key handed to the checkout page
    pub publishable_key: String,
}

impl PaymentsConfig {
    /// Load from `STRIPE_SECRET_KEY` / `STRIPE_PUBLISHABLE_KEY`.
    ///
    /// The demo cannot run without both keys, so a missing variable is a
    /// startup error rather than a degraded mode.
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;
        let publishable_key = std::env::var("STRIPE_PUBLISHABLE_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_PUBLISHABLE_KEY not set".into()))?;

        Ok(Self {
            secret_key,
            publishable_key,
        })
    }
}
