use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use nc_context::{BackendClient, ContextStore, Refresher};
use nc_core::Result;
use nc_inference::NewsAssistant;
use nc_web::{create_app, AppState};
use tracing::info;
use url::Url;

#[derive(Debug, Clone)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                match c {
                    's' => total_seconds += num,
                    'm' => total_seconds += num * 60,
                    'h' => total_seconds += num * 3600,
                    'd' => total_seconds += num * 86400,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                }
                current_number.clear();
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A trailing bare number counts as seconds
        if !current_number.is_empty() {
            total_seconds += current_number
                .parse::<u64>()
                .map_err(|_| "Invalid number in duration".to_string())?;
        } else if total_seconds == 0 && s.trim().is_empty() {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Chat relay for the MyNews site", long_about = None)]
struct Cli {
    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Base URL of the news backend serving /api/articles.
    #[arg(
        long,
        env = "NEWS_BACKEND_URL",
        default_value = "https://backend-main-news-website.onrender.com"
    )]
    backend_url: Url,

    /// API key for the generative-language provider.
    #[arg(long, env = "GOOGLE_GENAI_API_KEY")]
    api_key: Option<String>,

    #[arg(
        long,
        default_value = "gemini",
        help = "Model to use for chat. Available models: gemini (default), dummy"
    )]
    model: String,

    /// Provider-side model id override (e.g. gemini-2.0-flash-001).
    #[arg(long)]
    model_id: Option<String>,

    /// How often the website context is rebuilt (e.g. 5m, 1h30m, 90s).
    #[arg(long, default_value = "5m")]
    refresh_interval: HumanDuration,

    /// Timeout applied to every outbound HTTP call.
    #[arg(long, default_value = "30s")]
    request_timeout: HumanDuration,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = ContextStore::new();
    let backend = BackendClient::new(&cli.backend_url, cli.request_timeout.0)?;
    let refresher = Refresher::new(Arc::new(backend), store.clone(), cli.refresh_interval.0);
    tokio::spawn(refresher.run());
    info!(
        "📰 Context refresher started ({}s interval, backend {})",
        cli.refresh_interval.0.as_secs(),
        cli.backend_url
    );

    let config = nc_inference::Config {
        api_key: cli.api_key,
        model_name: Some(cli.model),
        model_id: cli.model_id,
        timeout: Some(cli.request_timeout.0),
    };
    let model = nc_inference::create_model(Some(config))?;
    info!("🧠 Chat model initialized successfully (using {})", model.name());

    let assistant = NewsAssistant::new(model, store);
    let app = create_app(AppState {
        chat: Arc::new(assistant),
    })
    .await;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cli.port)).await?;
    info!("✅ Chatbot server running on port {}", cli.port);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_human_duration() {
        assert_eq!(HumanDuration::from_str("5m").unwrap().0.as_secs(), 300);
        assert_eq!(HumanDuration::from_str("1h30m").unwrap().0.as_secs(), 5400);
        assert_eq!(HumanDuration::from_str("90").unwrap().0.as_secs(), 90);
        assert_eq!(HumanDuration::from_str("1d").unwrap().0.as_secs(), 86400);
        assert!(HumanDuration::from_str("5x").is_err());
        assert!(HumanDuration::from_str("abc").is_err());
    }
}
