//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
///
/// Every variant is terminal for the current request; there is no retry
/// policy anywhere in the flow.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Unknown or missing catalog item
    #[error("Invalid item")]
    InvalidItem,

    /// Payment intent lookup failed, regardless of cause
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// Stripe rejected or failed an intent creation
    #[error("Stripe error: {0}")]
    Processor(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &'static str {
        match self {
            PaymentError::InvalidItem => "Invalid item",
            PaymentError::Retrieval(_) => "Could not retrieve payment details",
            PaymentError::Processor(_) => "Payment processing failed. Please try again.",
            PaymentError::Config(_) => "Service configuration error.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieval_errors_share_one_message() {
        let network = PaymentError::Retrieval("connection reset".into());
        let not_found = PaymentError::Retrieval("no such payment_intent".into());
        assert_eq!(network.user_message(), "Could not retrieve payment details");
        assert_eq!(network.user_message(), not_found.user_message());
    }
}
