use {
    super::error::GatewayError,
    super::id::{OrderId, ProviderOrderNumber, TransactionId},
    super::money::{Money, MoneyAmount},
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub street_and_number: String,
    pub postal_code: String,
    pub city: String,
    /// ISO 3166-1 alpha-2.
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub sku: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: MoneyAmount,
    /// VAT rate in basis points, 2100 = 21%.
    pub vat_rate_bp: u32,
    pub vat_amount: MoneyAmount,
}

impl OrderLine {
    pub fn total(&self) -> Result<MoneyAmount, GatewayError> {
        self.unit_price.checked_mul(self.quantity).ok_or_else(|| {
            GatewayError::Validation(format!("line total overflows for sku {}", self.sku))
        })
    }

    /// `2100` becomes `"21.00"`.
    pub fn vat_rate(&self) -> String {
        format!("{}.{:02}", self.vat_rate_bp / 100, self.vat_rate_bp % 100)
    }
}

pub struct OrderParams {
    pub id: OrderId,
    pub payment_type: String,
    pub total: Money,
    pub locale: String,
    pub billing: BillingAddress,
    pub lines: Vec<OrderLine>,
    pub provider_order_number: Option<ProviderOrderNumber>,
    pub transaction_id: Option<TransactionId>,
}

/// Shop order as seen by the checkout. Only the two provider reference
/// fields are written here; everything else belongs to the shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    payment_type: String,
    total: Money,
    locale: String,
    billing: BillingAddress,
    lines: Vec<OrderLine>,
    provider_order_number: Option<ProviderOrderNumber>,
    transaction_id: Option<TransactionId>,
}

impl Order {
    pub fn new(p: OrderParams) -> Self {
        Self {
            id: p.id,
            payment_type: p.payment_type,
            total: p.total,
            locale: p.locale,
            billing: p.billing,
            lines: p.lines,
            provider_order_number: p.provider_order_number,
            transaction_id: p.transaction_id,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn payment_type(&self) -> &str {
        &self.payment_type
    }

    pub fn total(&self) -> &Money {
        &self.total
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn billing(&self) -> &BillingAddress {
        &self.billing
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn provider_order_number(&self) -> Option<ProviderOrderNumber> {
        self.provider_order_number
    }

    pub fn transaction_id(&self) -> Option<&TransactionId> {
        self.transaction_id.as_ref()
    }

    /// Starts a new checkout attempt. The transaction id of any earlier
    /// attempt no longer applies.
    pub fn begin_attempt(&mut self, number: ProviderOrderNumber) {
        self.provider_order_number = Some(number);
        self.transaction_id = None;
    }

    /// Records the provider resource created for the current attempt.
    pub fn record_transaction_id(&mut self, id: TransactionId) -> Result<(), GatewayError> {
        if self.provider_order_number.is_none() {
            return Err(GatewayError::Validation(format!(
                "order {} has no active checkout attempt",
                self.id
            )));
        }
        if let Some(existing) = &self.transaction_id {
            return Err(GatewayError::Validation(format!(
                "order {} already has transaction {existing} for this attempt",
                self.id
            )));
        }
        self.transaction_id = Some(id);
        Ok(())
    }
}
