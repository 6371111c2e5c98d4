use {
    super::error::GatewayError,
    derive_more::Display,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Amount in the currency's minor unit (cents for EUR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoneyAmount(i64);

impl MoneyAmount {
    pub fn new(minor: i64) -> Result<Self, GatewayError> {
        if minor < 0 {
            return Err(GatewayError::Validation(format!(
                "MoneyAmount cannot be negative, got: {minor}"
            )));
        }
        Ok(Self(minor))
    }

    pub fn minor(&self) -> i64 {
        self.0
    }

    pub fn checked_mul(self, factor: u32) -> Option<MoneyAmount> {
        self.0.checked_mul(i64::from(factor)).map(MoneyAmount)
    }

    /// Renders the amount as a major-unit decimal string, `1234` with
    /// exponent 2 becomes `"12.34"`.
    pub fn to_decimal_string(&self, exponent: u32) -> String {
        if exponent == 0 {
            return self.0.to_string();
        }
        let scale = 10_i64.pow(exponent);
        format!(
            "{}.{:0width$}",
            self.0 / scale,
            self.0 % scale,
            width = exponent as usize
        )
    }
}

impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[display("EUR")]
    Eur,
    #[display("USD")]
    Usd,
    #[display("GBP")]
    Gbp,
    #[display("CHF")]
    Chf,
    #[display("JPY")]
    Jpy,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
            Self::Jpy => "JPY",
        }
    }

    pub fn minor_unit_exponent(&self) -> u32 {
        match self {
            Self::Jpy => 0,
            Self::Eur | Self::Usd | Self::Gbp | Self::Chf => 2,
        }
    }
}

impl TryFrom<&str> for Currency {
    type Error = GatewayError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            "CHF" => Ok(Self::Chf),
            "JPY" => Ok(Self::Jpy),
            other => Err(GatewayError::Validation(format!(
                "unknown currency: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: MoneyAmount,
    currency: Currency,
}

impl Money {
    pub fn new(amount: MoneyAmount, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> MoneyAmount {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Major-unit value as the provider expects it.
    pub fn decimal_value(&self) -> String {
        self.amount
            .to_decimal_string(self.currency.minor_unit_exponent())
    }

    /// Same currency, different amount.
    pub fn with_amount(&self, amount: MoneyAmount) -> Self {
        Self::new(amount, self.currency)
    }
}
