use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::client::ArticleSource;
use crate::context::build_context;
use crate::store::ContextStore;

/// Rebuilds the published context on a fixed schedule.
pub struct Refresher {
    source: Arc<dyn ArticleSource>,
    store: ContextStore,
    interval: Duration,
}

impl Refresher {
    pub fn new(source: Arc<dyn ArticleSource>, store: ContextStore, interval: Duration) -> Self {
        Self {
            source,
            store,
            interval,
        }
    }

    /// One refresh cycle. A failed fetch degrades to an empty collection;
    /// the slot is overwritten either way, last completion wins.
    pub async fn refresh(&self) {
        let articles = match self.source.fetch_articles().await {
            Ok(articles) => articles,
            Err(e) => {
                error!("Error fetching articles: {}", e);
                Vec::new()
            }
        };

        let context = build_context(&articles);
        info!("📰 Updated website context ({} articles)", articles.len());
        self.store.publish(context);
    }

    /// Refresh immediately, then on every interval tick, for the process
    /// lifetime.
    pub async fn run(self) {
        loop {
            self.refresh().await;
            tokio::time::sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::NO_ARTICLES;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use nc_core::{Article, Error, Result};

    struct StaticSource(Vec<Article>);

    #[async_trait]
    impl ArticleSource for StaticSource {
        async fn fetch_articles(&self) -> Result<Vec<Article>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ArticleSource for FailingSource {
        async fn fetch_articles(&self) -> Result<Vec<Article>> {
            Err(Error::Inference("backend unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_refresh_populates_store_before_first_tick() {
        let articles = vec![Article {
            title: "Chiplet packaging update".to_string(),
            source_name: Some("MyNews".to_string()),
            pub_date: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        }];
        let store = ContextStore::new();
        let refresher = Refresher::new(
            Arc::new(StaticSource(articles)),
            store.clone(),
            Duration::from_secs(300),
        );

        assert_eq!(&*store.snapshot(), "");
        refresher.refresh().await;

        let context = store.snapshot();
        assert!(context.contains("Chiplet packaging update"));
        assert!(context.contains("Source: MyNews"));
    }

    #[tokio::test]
    async fn test_failed_fetch_publishes_sentinel() {
        let store = ContextStore::new();
        let refresher = Refresher::new(
            Arc::new(FailingSource),
            store.clone(),
            Duration::from_secs(300),
        );

        refresher.refresh().await;
        assert_eq!(&*store.snapshot(), NO_ARTICLES);
    }

    #[tokio::test]
    async fn test_refresh_overwrites_previous_value() {
        let store = ContextStore::new();
        store.publish("stale context".to_string());

        let refresher = Refresher::new(
            Arc::new(StaticSource(Vec::new())),
            store.clone(),
            Duration::from_secs(300),
        );
        refresher.refresh().await;

        assert_eq!(&*store.snapshot(), NO_ARTICLES);
    }
}
