use crate::domain::{
    checkout::{CheckoutRequest, Execution},
    money::Money,
    order::Order,
    provider::{BoxFuture, PaymentGateway},
};

/// The shop's stock behaviour for payment types settled outside the checkout
/// (invoice, cash on delivery, prepayment): nothing to collect, so the order
/// may proceed.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGateway;

impl PaymentGateway for OfflineGateway {
    fn execute_payment<'a>(
        &'a self,
        amount: &'a Money,
        order: &'a mut Order,
        _checkout: &'a CheckoutRequest,
    ) -> BoxFuture<'a, Execution> {
        Box::pin(async move {
            tracing::info!(
                order_id = %order.id(),
                payment_type = order.payment_type(),
                amount = %amount.amount(),
                currency = %amount.currency(),
                "offline payment accepted"
            );
            Execution::Finished(true)
        })
    }
}
