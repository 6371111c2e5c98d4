use {
    crate::domain::{
        error::{GatewayError, ProviderError},
        money::Money,
        order::Order,
        payment_model::{ApiMethod, PaymentModel},
        provider::{PaymentProvider, RequestLog},
        request::{OrderRequest, PaymentRequest, RemoteResource},
        request_log::NewRequestLogEntry,
    },
    std::sync::Arc,
};

/// The two resource shapes a checkout can be created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteRequest {
    Payment(PaymentRequest),
    Order(OrderRequest),
}

impl RemoteRequest {
    pub fn build(
        model: &PaymentModel,
        order: &Order,
        amount: &Money,
        return_url: &str,
    ) -> Result<Self, GatewayError> {
        match model.api_method {
            ApiMethod::Payment => Ok(Self::Payment(PaymentRequest::new(
                model, order, amount, return_url,
            )?)),
            ApiMethod::Order => Ok(Self::Order(OrderRequest::new(
                model, order, amount, return_url,
            )?)),
        }
    }

    pub fn api_method(&self) -> ApiMethod {
        match self {
            Self::Payment(_) => ApiMethod::Payment,
            Self::Order(_) => ApiMethod::Order,
        }
    }

    pub fn redirect_url(&self) -> &str {
        match self {
            Self::Payment(r) => &r.redirect_url,
            Self::Order(r) => &r.redirect_url,
        }
    }
}

pub struct Dispatcher {
    provider: Arc<dyn PaymentProvider>,
    request_log: Arc<dyn RequestLog>,
}

impl Dispatcher {
    pub fn new(provider: Arc<dyn PaymentProvider>, request_log: Arc<dyn RequestLog>) -> Self {
        Self {
            provider,
            request_log,
        }
    }

    /// Sends the request to the matching provider endpoint. Provider errors
    /// are returned as-is for the caller to record.
    pub async fn send_request(
        &self,
        order: &Order,
        request: &RemoteRequest,
    ) -> Result<RemoteResource, ProviderError> {
        let resource = match request {
            RemoteRequest::Payment(body) => self.provider.create_payment(body).await?,
            RemoteRequest::Order(body) => self.provider.create_order(body).await?,
        };

        let entry = NewRequestLogEntry::created(order.id(), &resource);
        if let Err(e) = self.request_log.record(&entry).await {
            tracing::warn!(order_id = %order.id(), error = %e, "failed to log provider response");
        }

        Ok(resource)
    }
}
