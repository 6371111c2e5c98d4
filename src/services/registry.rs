use {
    crate::domain::{
        error::GatewayError,
        payment_model::PaymentModel,
        provider::PaymentMethodRegistry,
    },
    std::collections::HashMap,
};

/// Provider payment types known from configuration, keyed by shop code.
#[derive(Debug, Clone, Default)]
pub struct StaticPaymentRegistry {
    models: HashMap<String, PaymentModel>,
}

impl StaticPaymentRegistry {
    pub fn new(models: impl IntoIterator<Item = PaymentModel>) -> Self {
        Self {
            models: models
                .into_iter()
                .map(|m| (m.payment_type.clone(), m))
                .collect(),
        }
    }
}

impl PaymentMethodRegistry for StaticPaymentRegistry {
    fn is_provider_method(&self, payment_type: &str) -> bool {
        self.models.contains_key(payment_type)
    }

    fn payment_model(&self, payment_type: &str) -> Result<PaymentModel, GatewayError> {
        self.models.get(payment_type).cloned().ok_or_else(|| {
            GatewayError::NotFound(format!("no payment model for payment type {payment_type}"))
        })
    }
}
