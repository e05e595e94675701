//! # shop-payments
//!
//! Stripe integration for the bookshop checkout demo.
//!
//! The demo uses the embedded Payment Element approach: the server creates a
//! payment intent and hands the browser a client secret; the browser collects
//! card details in a Stripe-hosted iframe and confirms the payment directly
//! with Stripe, never sending card data through this server.
//!
//! ```text
//! ┌──────────────┐   client secret   ┌───────────────────┐
//! │  shop-server │──────────────────▶│  Payment Element  │
//! │  (intents)   │                   │  (browser iframe) │
//! └──────┬───────┘                   └─────────┬─────────┘
//!        │ create / retrieve                   │ confirmPayment
//!        ▼                                     ▼
//!       Stripe API ◀───────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shop_payments::{IntentService, PaymentsConfig};
//!
//! let config = PaymentsConfig::from_env()?;
//! let intents = IntentService::new(&config, catalog);
//!
//! let client_secret = intents.create_intent(Some("1")).await?;
//! ```

mod config;
mod error;
mod intent;

pub use config::PaymentsConfig;
pub use error::{PaymentError, Result};
pub use intent::{IntentDetails, IntentService};
