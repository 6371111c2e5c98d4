use {
    super::error::GatewayError,
    super::id::TransactionId,
    std::{borrow::Cow, collections::HashMap},
};

/// Parameters of the inbound order-execute request, unescaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams(HashMap<String, String>);

impl RequestParams {
    pub fn new(params: HashMap<String, String>) -> Self {
        Self(params)
    }

    /// HTML-escaped value of `name`, if present.
    pub fn escaped(&self, name: &str) -> Option<Cow<'_, str>> {
        self.0.get(name).map(|v| html_escape(v))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Session id fragment (`sid=...`) when the session travels in the URL
    /// instead of a cookie.
    transportable_sid: Option<String>,
    remote_access_token: String,
}

impl SessionState {
    pub fn new(transportable_sid: Option<String>, remote_access_token: impl Into<String>) -> Self {
        Self {
            transportable_sid: transportable_sid.filter(|s| !s.is_empty()),
            remote_access_token: remote_access_token.into(),
        }
    }

    pub fn transportable_sid(&self) -> Option<&str> {
        self.transportable_sid.as_deref()
    }

    pub fn remote_access_token(&self) -> &str {
        &self.remote_access_token
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub params: RequestParams,
    pub session: SessionState,
}

impl CheckoutRequest {
    pub fn new(params: RequestParams, session: SessionState) -> Self {
        Self { params, session }
    }
}

/// Error code and message of a failed provider checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentFailure {
    pub code: u16,
    pub message: String,
}

impl From<&GatewayError> for PaymentFailure {
    fn from(err: &GatewayError) -> Self {
        match err {
            GatewayError::Provider(e) => Self {
                code: e.code,
                message: e.message.clone(),
            },
            other => Self {
                code: 0,
                message: other.to_string(),
            },
        }
    }
}

/// Outcome of `PaymentGateway::execute_payment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Execution {
    /// Verdict of a gateway that settles the payment itself.
    Finished(bool),
    /// Shopper must be sent to the provider checkout page.
    Redirect(String),
    /// Provider resource exists but came without a checkout URL.
    AwaitingCheckout(TransactionId),
    Failed(PaymentFailure),
}

impl Execution {
    /// The boolean the shop's order finalization acts on. Only a settled
    /// payment counts as paid.
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Finished(true))
    }

    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            Self::Redirect(url) => Some(url),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&PaymentFailure> {
        match self {
            Self::Failed(f) => Some(f),
            _ => None,
        }
    }
}
