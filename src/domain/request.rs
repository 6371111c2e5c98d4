use {
    super::error::GatewayError,
    super::id::TransactionId,
    super::money::{Money, MoneyAmount},
    super::order::{BillingAddress, Order, OrderLine},
    super::payment_model::{ApiMethod, PaymentModel},
    serde::Serialize,
};

/// `{"currency": "EUR", "value": "10.00"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderAmount {
    pub currency: String,
    pub value: String,
}

impl From<&Money> for ProviderAmount {
    fn from(money: &Money) -> Self {
        Self {
            currency: money.currency().as_str().to_string(),
            value: money.decimal_value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestMetadata {
    pub order_id: String,
}

/// Body of `POST /payments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: ProviderAmount,
    pub description: String,
    pub redirect_url: String,
    pub method: String,
    pub metadata: RequestMetadata,
}

impl PaymentRequest {
    pub fn new(
        model: &PaymentModel,
        order: &Order,
        amount: &Money,
        return_url: &str,
    ) -> Result<Self, GatewayError> {
        let number = order.provider_order_number().ok_or_else(|| {
            GatewayError::Validation(format!("order {} has no provider order number", order.id()))
        })?;

        Ok(Self {
            amount: amount.into(),
            description: format!("Order {number}"),
            redirect_url: return_url.to_string(),
            method: model.provider_method.clone(),
            metadata: RequestMetadata {
                order_id: order.id().to_string(),
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAddress {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub street_and_number: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl From<&BillingAddress> for OrderAddress {
    fn from(b: &BillingAddress) -> Self {
        Self {
            given_name: b.given_name.clone(),
            family_name: b.family_name.clone(),
            email: b.email.clone(),
            street_and_number: b.street_and_number.clone(),
            postal_code: b.postal_code.clone(),
            city: b.city.clone(),
            country: b.country.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequestLine {
    pub sku: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: ProviderAmount,
    pub total_amount: ProviderAmount,
    pub vat_rate: String,
    pub vat_amount: ProviderAmount,
}

impl OrderRequestLine {
    fn new(line: &OrderLine, money: &Money) -> Result<Self, GatewayError> {
        let price = |amount: MoneyAmount| ProviderAmount::from(&money.with_amount(amount));
        Ok(Self {
            sku: line.sku.clone(),
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: price(line.unit_price),
            total_amount: price(line.total()?),
            vat_rate: line.vat_rate(),
            vat_amount: price(line.vat_amount),
        })
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub amount: ProviderAmount,
    pub order_number: String,
    pub redirect_url: String,
    pub method: String,
    pub locale: String,
    pub billing_address: OrderAddress,
    pub lines: Vec<OrderRequestLine>,
    pub metadata: RequestMetadata,
}

impl OrderRequest {
    pub fn new(
        model: &PaymentModel,
        order: &Order,
        amount: &Money,
        return_url: &str,
    ) -> Result<Self, GatewayError> {
        let number = order.provider_order_number().ok_or_else(|| {
            GatewayError::Validation(format!("order {} has no provider order number", order.id()))
        })?;
        if order.lines().is_empty() {
            return Err(GatewayError::Validation(format!(
                "order {} has no lines, the orders API needs at least one",
                order.id()
            )));
        }

        let lines = order
            .lines()
            .iter()
            .map(|line| OrderRequestLine::new(line, amount))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            amount: amount.into(),
            order_number: number.to_string(),
            redirect_url: return_url.to_string(),
            method: model.provider_method.clone(),
            locale: order.locale().to_string(),
            billing_address: order.billing().into(),
            lines,
            metadata: RequestMetadata {
                order_id: order.id().to_string(),
            },
        })
    }
}

/// What the provider hands back after creating a payment or order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResource {
    pub id: TransactionId,
    pub checkout_url: Option<String>,
    pub api_method: ApiMethod,
}

impl RemoteResource {
    /// Checkout URL, treating an empty string like a missing one.
    pub fn checkout_url(&self) -> Option<&str> {
        self.checkout_url.as_deref().filter(|url| !url.is_empty())
    }
}
