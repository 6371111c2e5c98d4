use {
    crate::{
        config::MollieConfig,
        domain::{
            error::{GatewayError, ProviderError},
            id::TransactionId,
            payment_model::ApiMethod,
            provider::{BoxFuture, PaymentProvider},
            request::{OrderRequest, PaymentRequest, RemoteResource},
        },
    },
    serde::{Deserialize, Serialize},
    std::time::Duration,
};

pub struct MollieClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MollieClient {
    pub fn new(config: &MollieConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Config(format!("http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

impl PaymentProvider for MollieClient {
    fn create_payment<'a>(
        &'a self,
        request: &'a PaymentRequest,
    ) -> BoxFuture<'a, Result<RemoteResource, ProviderError>> {
        Box::pin(self.create("payments", request, ApiMethod::Payment))
    }

    fn create_order<'a>(
        &'a self,
        request: &'a OrderRequest,
    ) -> BoxFuture<'a, Result<RemoteResource, ProviderError>> {
        Box::pin(self.create("orders", request, ApiMethod::Order))
    }
}

impl MollieClient {
    async fn create<B>(
        &self,
        endpoint: &str,
        body: &B,
        api_method: ApiMethod,
    ) -> Result<RemoteResource, ProviderError>
    where
        B: Serialize + Sync,
    {
        let url = format!("{}/{endpoint}", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::transport(format!("Mollie API: {e}")))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::transport(format!("Mollie API: {e}")))?;

        if !(200..300).contains(&status) {
            return Err(convert_error(status, &text));
        }

        let created: CreatedResource = serde_json::from_str(&text)
            .map_err(|e| ProviderError::new(status, format!("invalid response body: {e}")))?;
        let id = TransactionId::new(created.id)
            .map_err(|e| ProviderError::new(status, e.to_string()))?;

        Ok(RemoteResource {
            id,
            checkout_url: created.links.checkout.map(|link| link.href),
            api_method,
        })
    }
}

// ── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CreatedResource {
    id: String,
    #[serde(rename = "_links", default)]
    links: ResourceLinks,
}

#[derive(Debug, Default, Deserialize)]
struct ResourceLinks {
    checkout: Option<Link>,
}

#[derive(Debug, Deserialize)]
struct Link {
    href: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    status: u16,
    detail: String,
}

/// Mollie error bodies are `{"status": 422, "title": .., "detail": ..}`;
/// anything else keeps the HTTP status and raw body.
pub fn convert_error(http_status: u16, body: &str) -> ProviderError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => ProviderError::new(err.status, err.detail),
        Err(_) => ProviderError::new(http_status, format!("HTTP {http_status}: {body}")),
    }
}
