use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::GatewayError;

/// Shop-side order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Result<Self, GatewayError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(GatewayError::Validation("OrderId must not be empty".into()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Order number assigned right before a checkout attempt is sent to the
/// provider. A new one is drawn for every attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderOrderNumber(i64);

impl ProviderOrderNumber {
    pub fn new(number: i64) -> Result<Self, GatewayError> {
        if number <= 0 {
            return Err(GatewayError::Validation(format!(
                "ProviderOrderNumber must be positive, got: {number}"
            )));
        }
        Ok(Self(number))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Provider resource identifier: `tr_xxx` for payments, `ord_xxx` for orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Result<Self, GatewayError> {
        let id = id.into();
        if !(id.starts_with("tr_") || id.starts_with("ord_")) {
            return Err(GatewayError::Validation(format!(
                "TransactionId must start with tr_ or ord_, got: {id}"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
