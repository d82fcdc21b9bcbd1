use log::info;
use reqwest::{
    Client, ClientBuilder,
    header::{
        ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION, HeaderMap, HeaderValue,
        UPGRADE_INSECURE_REQUESTS, USER_AGENT,
    },
};

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    /// Client with browser-impersonating default headers; the static
    /// archive occasionally blocks obvious bots.
    pub fn new() -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            ),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));

        let client = ClientBuilder::new().default_headers(headers).build()?;
        Ok(Self { client })
    }

    /// Fetch a page body. Transport errors and non-success statuses both
    /// come back as errors; callers treat either as "page unreachable".
    pub async fn fetch_page(&self, url: &str) -> anyhow::Result<String> {
        info!("Fetching URL: {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}
