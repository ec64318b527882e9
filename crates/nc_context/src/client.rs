use std::time::Duration;

use async_trait::async_trait;
use nc_core::{Article, Result};
use reqwest::Client;
use url::Url;

/// Anything that can produce the current article collection.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_articles(&self) -> Result<Vec<Article>>;
}

/// HTTP client for the news backend's article listing.
pub struct BackendClient {
    client: Client,
    endpoint: String,
}

impl BackendClient {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{}/api/articles", base_url.as_str().trim_end_matches('/'));
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ArticleSource for BackendClient {
    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        let articles = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Article>>()
            .await?;
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_base_url() {
        let base = Url::parse("https://news.example.com").unwrap();
        let client = BackendClient::new(&base, Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint, "https://news.example.com/api/articles");

        let base = Url::parse("https://news.example.com/").unwrap();
        let client = BackendClient::new(&base, Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint, "https://news.example.com/api/articles");
    }
}
