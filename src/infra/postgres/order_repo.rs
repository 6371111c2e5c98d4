use {
    crate::domain::{
        error::GatewayError,
        id::{OrderId, ProviderOrderNumber, TransactionId},
        money::{Currency, Money, MoneyAmount},
        order::{BillingAddress, Order, OrderLine, OrderParams},
        provider::{BoxFuture, OrderStore},
    },
    sqlx::{PgPool, types::Json},
};

type OrderRow = (
    String,
    String,
    i64,
    String,
    String,
    Json<BillingAddress>,
    Json<Vec<OrderLine>>,
    Option<i64>,
    Option<String>,
);

pub async fn find_order(pool: &PgPool, id: &OrderId) -> Result<Option<Order>, GatewayError> {
    let row = sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT id, payment_type, total_amount, currency, locale, billing, lines,
               provider_order_number, provider_transaction_id
        FROM orders
        WHERE id = $1
        "#,
    )
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    row.map(order_from_row).transpose()
}

fn order_from_row(row: OrderRow) -> Result<Order, GatewayError> {
    let (
        id,
        payment_type,
        total_amount,
        currency,
        locale,
        billing,
        lines,
        provider_order_number,
        provider_transaction_id,
    ) = row;

    Ok(Order::new(OrderParams {
        id: OrderId::new(id)?,
        payment_type,
        total: Money::new(
            MoneyAmount::new(total_amount)?,
            Currency::try_from(currency.as_str())?,
        ),
        locale,
        billing: billing.0,
        lines: lines.0,
        provider_order_number: provider_order_number
            .map(ProviderOrderNumber::new)
            .transpose()?,
        transaction_id: provider_transaction_id
            .map(TransactionId::new)
            .transpose()?,
    }))
}

pub async fn next_order_number(pool: &PgPool) -> Result<ProviderOrderNumber, GatewayError> {
    let number: i64 = sqlx::query_scalar("SELECT nextval('provider_order_number_seq')")
        .fetch_one(pool)
        .await?;
    ProviderOrderNumber::new(number)
}

/// A new attempt number also resets the transaction id of the previous one.
pub async fn update_order_number(
    pool: &PgPool,
    id: &OrderId,
    number: ProviderOrderNumber,
) -> Result<(), GatewayError> {
    let result = sqlx::query(
        r#"
        UPDATE orders
        SET provider_order_number = $2,
            provider_transaction_id = NULL,
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id.as_str())
    .bind(number.value())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(GatewayError::NotFound(format!("order {id}")));
    }
    Ok(())
}

pub async fn update_transaction_id(
    pool: &PgPool,
    id: &OrderId,
    transaction_id: &TransactionId,
) -> Result<(), GatewayError> {
    let result = sqlx::query(
        r#"
        UPDATE orders
        SET provider_transaction_id = $2,
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id.as_str())
    .bind(transaction_id.as_str())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(GatewayError::NotFound(format!("order {id}")));
    }
    Ok(())
}

#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl OrderStore for PgOrderStore {
    fn find_order<'a>(&'a self, id: &'a OrderId) -> BoxFuture<'a, Result<Option<Order>, GatewayError>> {
        Box::pin(find_order(&self.pool, id))
    }

    fn next_order_number(&self) -> BoxFuture<'_, Result<ProviderOrderNumber, GatewayError>> {
        Box::pin(next_order_number(&self.pool))
    }

    fn save_order_number<'a>(
        &'a self,
        id: &'a OrderId,
        number: ProviderOrderNumber,
    ) -> BoxFuture<'a, Result<(), GatewayError>> {
        Box::pin(update_order_number(&self.pool, id, number))
    }

    fn save_transaction_id<'a>(
        &'a self,
        id: &'a OrderId,
        transaction_id: &'a TransactionId,
    ) -> BoxFuture<'a, Result<(), GatewayError>> {
        Box::pin(update_transaction_id(&self.pool, id, transaction_id))
    }
}
