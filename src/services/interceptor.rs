use {
    super::dispatch::{Dispatcher, RemoteRequest},
    super::return_url::ReturnUrlBuilder,
    crate::domain::{
        checkout::{CheckoutRequest, Execution, PaymentFailure},
        error::GatewayError,
        id::TransactionId,
        money::Money,
        order::Order,
        provider::{BoxFuture, OrderStore, PaymentGateway, PaymentMethodRegistry, RequestLog},
        request_log::NewRequestLogEntry,
    },
    std::sync::Arc,
};

/// Where a provider checkout attempt ended up.
enum Attempt {
    Redirect(String),
    NoCheckoutUrl(TransactionId),
}

/// Wraps the shop's own payment execution and takes over orders paid with
/// a provider method. Everything else goes to `base` untouched.
pub struct ProviderGateway {
    base: Arc<dyn PaymentGateway>,
    registry: Arc<dyn PaymentMethodRegistry>,
    orders: Arc<dyn OrderStore>,
    request_log: Arc<dyn RequestLog>,
    dispatcher: Dispatcher,
    return_urls: ReturnUrlBuilder,
}

pub struct ProviderGatewayParts {
    pub base: Arc<dyn PaymentGateway>,
    pub registry: Arc<dyn PaymentMethodRegistry>,
    pub orders: Arc<dyn OrderStore>,
    pub request_log: Arc<dyn RequestLog>,
    pub dispatcher: Dispatcher,
    pub return_urls: ReturnUrlBuilder,
}

impl ProviderGateway {
    pub fn new(parts: ProviderGatewayParts) -> Self {
        Self {
            base: parts.base,
            registry: parts.registry,
            orders: parts.orders,
            request_log: parts.request_log,
            dispatcher: parts.dispatcher,
            return_urls: parts.return_urls,
        }
    }

    async fn execute(
        &self,
        amount: &Money,
        order: &mut Order,
        checkout: &CheckoutRequest,
    ) -> Execution {
        if !self.registry.is_provider_method(order.payment_type()) {
            tracing::debug!(
                order_id = %order.id(),
                payment_type = order.payment_type(),
                "not a provider method, delegating"
            );
            return self.base.execute_payment(amount, order, checkout).await;
        }

        match self.handle_provider_payment(order, amount, checkout).await {
            Ok(Attempt::Redirect(url)) => {
                tracing::info!(order_id = %order.id(), checkout_url = %url, "redirecting to provider checkout");
                Execution::Redirect(url)
            }
            Ok(Attempt::NoCheckoutUrl(id)) => {
                tracing::warn!(
                    order_id = %order.id(),
                    transaction_id = %id,
                    "provider returned no checkout url, not redirecting"
                );
                Execution::AwaitingCheckout(id)
            }
            Err(e) => {
                match &e {
                    GatewayError::Provider(_) => {
                        tracing::warn!(order_id = %order.id(), error = %e, "provider rejected checkout")
                    }
                    _ => tracing::error!(order_id = %order.id(), error = %e, "checkout attempt failed"),
                }
                Execution::Failed(PaymentFailure::from(&e))
            }
        }
    }

    async fn handle_provider_payment(
        &self,
        order: &mut Order,
        amount: &Money,
        checkout: &CheckoutRequest,
    ) -> Result<Attempt, GatewayError> {
        let number = self.orders.next_order_number().await?;
        order.begin_attempt(number);
        self.orders.save_order_number(order.id(), number).await?;

        let model = self.registry.payment_model(order.payment_type())?;
        let return_url = self.return_urls.build(checkout);
        let request = RemoteRequest::build(&model, order, amount, &return_url)?;

        let resource = match self.dispatcher.send_request(order, &request).await {
            Ok(resource) => resource,
            Err(e) => {
                let entry = NewRequestLogEntry::exception(
                    Some(order.id()),
                    e.code,
                    &e.message,
                    request.api_method().as_str(),
                );
                if let Err(log_err) = self.request_log.record(&entry).await {
                    tracing::warn!(order_id = %order.id(), error = %log_err, "failed to log provider error");
                }
                return Err(e.into());
            }
        };

        // The order only carries the transaction id once storage has it.
        if let Err(e) = self
            .orders
            .save_transaction_id(order.id(), &resource.id)
            .await
        {
            tracing::error!(
                order_id = %order.id(),
                transaction_id = %resource.id,
                error = %e,
                "provider resource created but transaction id not stored"
            );
            return Err(e);
        }
        order.record_transaction_id(resource.id.clone())?;

        match resource.checkout_url() {
            Some(url) => Ok(Attempt::Redirect(url.to_string())),
            None => Ok(Attempt::NoCheckoutUrl(resource.id)),
        }
    }
}

impl PaymentGateway for ProviderGateway {
    fn execute_payment<'a>(
        &'a self,
        amount: &'a Money,
        order: &'a mut Order,
        checkout: &'a CheckoutRequest,
    ) -> BoxFuture<'a, Execution> {
        Box::pin(self.execute(amount, order, checkout))
    }
}
