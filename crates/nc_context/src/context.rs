use nc_core::Article;

/// Header line of every non-empty context blob.
pub const CONTEXT_HEADER: &str = "MyNews Website Context:";

/// Published when the article list is empty or the fetch failed.
pub const NO_ARTICLES: &str = "No recent articles available.";

/// Reduce the article collection to the context blob handed to the model,
/// one summary line per article in input order.
pub fn build_context(articles: &[Article]) -> String {
    if articles.is_empty() {
        return NO_ARTICLES.to_string();
    }

    let summaries: Vec<String> = articles
        .iter()
        .map(|article| {
            format!(
                "Title: \"{}\", Source: {}, Published: {}.",
                article.title,
                article.source_name.as_deref().unwrap_or("Unknown"),
                article.pub_date.format("%-m/%-d/%Y"),
            )
        })
        .collect();

    format!("{}\n{}", CONTEXT_HEADER, summaries.join("\n"))
}
