//! Main Finding API client implementation.

use crate::decode::{decode_response, XmlDecoder};
use crate::query::{build_search_url, build_sold_url, SearchOption, DEFAULT_ENDPOINT};
use finding_core::{FindingError, GlobalId, Result, SearchResult};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The User-Agent the original client shipped with; some Finding API
/// deployments reject requests without a browser-looking one.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_7_3) \
AppleWebKit/535.11 (KHTML, like Gecko) Chrome/17.0.963.56 Safari/535.11";

/// Main Finding API client
///
/// Holds only immutable configuration after construction, so one instance
/// can be shared freely across tasks.
#[derive(Clone)]
pub struct FindingClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    app_id: String,
    base_url: String,
    decoder: XmlDecoder,
}

impl FindingClient {
    /// Create a new client with the given application id using default settings
    #[must_use]
    pub fn new(app_id: impl Into<String>) -> Self {
        FindingClientBuilder::new(app_id).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(app_id: impl Into<String>) -> FindingClientBuilder {
        FindingClientBuilder::new(app_id)
    }

    /// Search active listings by keywords
    ///
    /// Seeds the ListingType filter (FixedPrice, AuctionWithBIN, Auction)
    /// and the SellerInfo output selector, then applies `options` in order.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let result = client
    ///     .find_items_by_keywords(GlobalId::EbayUs, "djm 900", &[
    ///         SearchOption::page_size(25),
    ///         SearchOption::sort_order(SortOrder::PricePlusShippingLowest),
    ///     ])
    ///     .await?;
    /// ```
    pub async fn find_items_by_keywords(
        &self,
        global_id: GlobalId,
        keywords: &str,
        options: &[SearchOption],
    ) -> Result<SearchResult> {
        let url = build_search_url(
            &self.inner.base_url,
            &self.inner.app_id,
            &global_id,
            keywords,
            options,
        )?;
        self.execute(&url).await
    }

    /// Search completed listings that actually sold
    ///
    /// Seeds the Condition filter (Used, Unspecified) and SoldItemsOnly,
    /// then applies `options` in order.
    pub async fn find_sold_items(
        &self,
        global_id: GlobalId,
        keywords: &str,
        options: &[SearchOption],
    ) -> Result<SearchResult> {
        let url = build_sold_url(
            &self.inner.base_url,
            &self.inner.app_id,
            &global_id,
            keywords,
            options,
        )?;
        self.execute(&url).await
    }

    async fn execute(&self, url: &str) -> Result<SearchResult> {
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FindingError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FindingError::Transport(e.to_string()))?;

        let result = decode_response(&self.inner.decoder, status, &body);
        match &result {
            Ok(page) => debug!(items = page.len(), status, "decoded search result"),
            Err(FindingError::Api(error)) => {
                warn!(error_id = %error.error_id, status, "provider returned an error");
            }
            Err(_) => {}
        }
        result
    }
}

/// Builder for configuring a [`FindingClient`]
pub struct FindingClientBuilder {
    app_id: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl FindingClientBuilder {
    /// Create a new builder with the given application id
    #[must_use]
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            base_url: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the endpoint URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> FindingClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        FindingClient {
            inner: Arc::new(ClientInner {
                http,
                app_id: self.app_id,
                base_url: self.base_url,
                decoder: XmlDecoder,
            }),
        }
    }
}
