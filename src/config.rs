use {
    crate::domain::{
        error::GatewayError,
        payment_model::{ApiMethod, PaymentModel},
    },
    std::env,
};

pub const DEFAULT_MOLLIE_BASE_URL: &str = "https://api.mollie.com/v2";

/// Payment types offered out of the box: shop code, provider method.
const DEFAULT_PAYMENT_METHODS: [(&str, &str); 8] = [
    ("molliecreditcard", "creditcard"),
    ("mollieideal", "ideal"),
    ("molliebancontact", "bancontact"),
    ("molliesofort", "sofort"),
    ("molliepaypal", "paypal"),
    ("mollieapplepay", "applepay"),
    ("molliebanktransfer", "banktransfer"),
    ("mollieklarnapaylater", "klarnapaylater"),
];

#[derive(Debug, Clone)]
pub struct MollieConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub shop_url: String,
    pub mollie: MollieConfig,
    pub payment_methods: Vec<PaymentModel>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, GatewayError> {
        let mollie = MollieConfig {
            api_key: required("MOLLIE_API_KEY")?,
            base_url: env::var("MOLLIE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MOLLIE_BASE_URL.to_string()),
            timeout_secs: match env::var("MOLLIE_TIMEOUT_SECS") {
                Ok(v) => v.parse().map_err(|_| {
                    GatewayError::Config(format!("MOLLIE_TIMEOUT_SECS must be a number, got: {v}"))
                })?,
                Err(_) => 30,
            },
        };

        let payment_methods = match env::var("MOLLIE_PAYMENT_METHODS") {
            Ok(v) => parse_payment_methods(&v)?,
            Err(_) => default_payment_methods(),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            shop_url: required("SHOP_URL")?,
            mollie,
            payment_methods,
        })
    }
}

fn required(name: &str) -> Result<String, GatewayError> {
    env::var(name).map_err(|_| GatewayError::Config(format!("{name} must be set")))
}

pub fn default_payment_methods() -> Vec<PaymentModel> {
    DEFAULT_PAYMENT_METHODS
        .iter()
        .map(|(code, method)| PaymentModel::new(*code, *method, ApiMethod::Payment))
        .collect()
}

/// Parses `code=method:api` entries separated by commas, e.g.
/// `mollieideal=ideal:order,molliecreditcard=creditcard:payment`. The
/// `:api` part may be left out and defaults to `payment`.
pub fn parse_payment_methods(raw: &str) -> Result<Vec<PaymentModel>, GatewayError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (code, rest) = entry.split_once('=').ok_or_else(|| {
                GatewayError::Config(format!("payment method entry without '=': {entry}"))
            })?;
            let (method, api) = rest.split_once(':').unwrap_or((rest, "payment"));
            let (code, method, api) = (code.trim(), method.trim(), api.trim());
            if code.is_empty() || method.is_empty() {
                return Err(GatewayError::Config(format!(
                    "payment method entry is incomplete: {entry}"
                )));
            }
            Ok(PaymentModel::new(code, method, ApiMethod::from_configured(api)))
        })
        .collect()
}
