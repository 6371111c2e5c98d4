use {
    derive_more::Display,
    serde::{Deserialize, Serialize},
};

/// Which provider API a checkout is created through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMethod {
    #[display("payment")]
    Payment,
    #[display("order")]
    Order,
}

impl ApiMethod {
    /// Only the literal `"payment"` selects the payments API; every other
    /// configured value falls back to the orders API.
    pub fn from_configured(value: &str) -> Self {
        match value {
            "payment" => Self::Payment,
            "order" => Self::Order,
            other => {
                tracing::debug!(configured = other, "unrecognized api method, using order");
                Self::Order
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Order => "order",
        }
    }
}

/// Provider-side configuration of one shop payment type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentModel {
    /// Shop payment-type code, e.g. `mollieideal`.
    pub payment_type: String,
    /// Provider method id sent with the request, e.g. `ideal`.
    pub provider_method: String,
    pub api_method: ApiMethod,
}

impl PaymentModel {
    pub fn new(
        payment_type: impl Into<String>,
        provider_method: impl Into<String>,
        api_method: ApiMethod,
    ) -> Self {
        Self {
            payment_type: payment_type.into(),
            provider_method: provider_method.into(),
            api_method,
        }
    }
}
