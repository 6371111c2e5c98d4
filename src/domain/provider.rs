use {
    super::checkout::{CheckoutRequest, Execution},
    super::error::{GatewayError, ProviderError},
    super::id::{OrderId, ProviderOrderNumber, TransactionId},
    super::money::Money,
    super::order::Order,
    super::payment_model::PaymentModel,
    super::request::{OrderRequest, PaymentRequest, RemoteResource},
    super::request_log::NewRequestLogEntry,
    std::{future::Future, pin::Pin},
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Order finalization step of the shop: executes the payment for an order.
pub trait PaymentGateway: Send + Sync {
    fn execute_payment<'a>(
        &'a self,
        amount: &'a Money,
        order: &'a mut Order,
        checkout: &'a CheckoutRequest,
    ) -> BoxFuture<'a, Execution>;
}

/// Classification of shop payment types.
pub trait PaymentMethodRegistry: Send + Sync {
    fn is_provider_method(&self, payment_type: &str) -> bool;

    fn payment_model(&self, payment_type: &str) -> Result<PaymentModel, GatewayError>;
}

/// Outbound provider API.
pub trait PaymentProvider: Send + Sync {
    fn create_payment<'a>(
        &'a self,
        request: &'a PaymentRequest,
    ) -> BoxFuture<'a, Result<RemoteResource, ProviderError>>;

    fn create_order<'a>(
        &'a self,
        request: &'a OrderRequest,
    ) -> BoxFuture<'a, Result<RemoteResource, ProviderError>>;
}

/// Storage of the provider references on shop orders.
pub trait OrderStore: Send + Sync {
    fn find_order<'a>(&'a self, id: &'a OrderId) -> BoxFuture<'a, Result<Option<Order>, GatewayError>>;

    fn next_order_number(&self) -> BoxFuture<'_, Result<ProviderOrderNumber, GatewayError>>;

    fn save_order_number<'a>(
        &'a self,
        id: &'a OrderId,
        number: ProviderOrderNumber,
    ) -> BoxFuture<'a, Result<(), GatewayError>>;

    fn save_transaction_id<'a>(
        &'a self,
        id: &'a OrderId,
        transaction_id: &'a TransactionId,
    ) -> BoxFuture<'a, Result<(), GatewayError>>;
}

/// Audit trail of provider requests.
pub trait RequestLog: Send + Sync {
    fn record<'a>(&'a self, entry: &'a NewRequestLogEntry) -> BoxFuture<'a, Result<(), GatewayError>>;
}
