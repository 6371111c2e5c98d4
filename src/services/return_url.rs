use crate::domain::checkout::CheckoutRequest;

/// Order-execute parameters carried over into the return URL, in this order.
pub const RETURN_PARAMETERS: [&str; 5] = [
    "stoken",
    "sDeliveryAddressMD5",
    "oxdownloadableproductsagreement",
    "oxserviceproductsagreement",
    "ord_agb",
];

/// Controller and action the provider sends the shopper back to.
pub const RETURN_ROUTE: &str = "index.php?cl=order&fnc=handleMollieReturn";

/// Builds the URL the provider redirects the shopper to once the checkout
/// page is done.
#[derive(Debug, Clone)]
pub struct ReturnUrlBuilder {
    shop_url: String,
}

impl ReturnUrlBuilder {
    pub fn new(shop_url: impl Into<String>) -> Self {
        let mut shop_url = shop_url.into();
        if !shop_url.ends_with('/') {
            shop_url.push('/');
        }
        Self { shop_url }
    }

    pub fn base_url(&self) -> String {
        format!("{}{RETURN_ROUTE}", self.shop_url)
    }

    pub fn build(&self, checkout: &CheckoutRequest) -> String {
        let mut url = self.base_url();
        url.push_str(&additional_parameters(checkout));
        url
    }
}

/// Query string tail: whitelisted request parameters, the session id when it
/// travels in the URL, and the remote access token. Empty and `"0"` values
/// are left out, the shop posts unchecked agreement boxes as `0`.
pub fn additional_parameters(checkout: &CheckoutRequest) -> String {
    let mut params = String::new();

    for name in RETURN_PARAMETERS {
        if let Some(value) = checkout.params.escaped(name).filter(|v| is_set(v)) {
            params.push('&');
            params.push_str(name);
            params.push('=');
            params.push_str(&value);
        }
    }

    if let Some(sid) = checkout.session.transportable_sid() {
        params.push('&');
        params.push_str(sid);
    }

    params.push_str("&rtoken=");
    params.push_str(checkout.session.remote_access_token());

    params
}

fn is_set(value: &str) -> bool {
    !value.is_empty() && value != "0"
}
