use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An article as listed by the news backend's `/api/articles` endpoint.
/// The backend owns these; we only read and summarize them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(rename = "pubDate")]
    pub pub_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_article() {
        let json = r#"{
            "title": "New fab breaks ground",
            "source_name": "MyNews",
            "pubDate": "2025-03-01T12:00:00Z"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "New fab breaks ground");
        assert_eq!(article.source_name.as_deref(), Some("MyNews"));
        assert_eq!(article.pub_date.to_rfc3339(), "2025-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_deserialize_article_without_source() {
        let json = r#"{"title": "Untitled wire story", "pubDate": "2025-03-02T08:30:00Z"}"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert!(article.source_name.is_none());
    }
}
