//! HTTP client for the Best Buy pricing endpoint.

use super::models::PriceResponse;
use crate::config::Config;
use crate::error::{PriceError, Result};
use async_trait::async_trait;
use tracing::{debug, info};
use wreq::Client;

/// Production host of the pricing service.
pub const BESTBUY_BASE: &str = "https://www.bestbuy.com";

const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/101.0.4951.67 Safari/537.36";
const CLIENT_ID: &str = "lib-price-browser";

/// Builds the price lookup URL. The SKU is inserted as given.
pub fn price_url(base_url: &str, sku: &str) -> String {
    format!(
        "{}/pricing/v1/price/item?allFinanceOffers=true&catalog=bby&context=offer-list&salesChannel=LargeView&skuId={}",
        base_url, sku
    )
}

/// Trait for price fetching - enables mocking for tests.
#[async_trait]
pub trait PriceLookup: Send + Sync {
    /// Fetches the raw price document for a SKU.
    async fn fetch_price(&self, sku: &str) -> Result<PriceResponse>;
}

/// Best Buy pricing client.
pub struct PriceClient {
    client: Client,
    base_url: String,
}

impl PriceClient {
    /// Creates a client against the production host.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None)
    }

    /// Creates a client with an optional custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let mut builder = Client::builder().redirect(wreq::redirect::Policy::default());

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            builder = builder.proxy(wreq::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.unwrap_or_else(|| BESTBUY_BASE.to_string()),
        })
    }
}

#[async_trait]
impl PriceLookup for PriceClient {
    async fn fetch_price(&self, sku: &str) -> Result<PriceResponse> {
        let url = price_url(&self.base_url, sku);

        info!("Fetching price for SKU {}", sku);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("accept-language", ACCEPT_LANGUAGE)
            .header("user-agent", USER_AGENT)
            .header("x-client-id", CLIENT_ID)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status != 200 {
            return Err(PriceError::RemoteRequest {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(PriceError::MalformedResponse)
    }
}
