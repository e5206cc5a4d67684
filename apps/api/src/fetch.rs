//! Job page retrieval — fetches the posting URL and strips it to visible text.

use scraper::{Html, Node};
use tracing::debug;

use crate::errors::AppError;

/// Fetches the job posting page and returns its visible text content.
///
/// One GET with client-default timeout and redirect behavior. Any non-success
/// status and any transport failure (DNS, refused connection, timeout) halt
/// the run with a fetch error carrying the reason.
pub async fn fetch_job_page(client: &reqwest::Client, url: &str) -> Result<String, AppError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::Fetch(format!("GET {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Fetch(format!("GET {url}: server returned {status}")));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Fetch(format!("GET {url}: failed to read body: {e}")))?;

    let text = html_to_text(&body);
    debug!("Fetched {url}: {} chars of visible text", text.len());
    Ok(text)
}

/// Collects the visible text nodes of an HTML document, discarding markup and
/// the contents of `head`, `script`, `style`, and `noscript` elements.
/// Chunks are trimmed and joined with newlines; no further delimiter
/// structure is guaranteed.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut chunks: Vec<&str> = Vec::new();
    for node in document.tree.nodes() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(element) => {
                matches!(element.name(), "head" | "script" | "style" | "noscript")
            }
            _ => false,
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed);
        }
    }

    chunks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::Html as HtmlResponse, routing::get, Router};

    /// Binds a throwaway server on a random local port and returns its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_html_to_text_strips_markup() {
        let html = "<html><body><h1>Data Engineer</h1><p>Apply now</p></body></html>";
        let text = html_to_text(html);
        assert!(text.contains("Data Engineer"));
        assert!(text.contains("Apply now"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_html_to_text_drops_script_and_style_content() {
        let html = "<html><head><style>body { color: red; }</style></head>\
                    <body><script>var tracking = true;</script>\
                    <p>Senior Rust Engineer</p></body></html>";
        let text = html_to_text(html);
        assert!(text.contains("Senior Rust Engineer"));
        assert!(!text.contains("tracking"));
        assert!(!text.contains("color"));
    }

    #[tokio::test]
    async fn test_fetch_returns_visible_text_on_success() {
        let router = Router::new().route(
            "/job",
            get(|| async {
                HtmlResponse("<html><body><h1>Data Engineer</h1><p>Apply now</p></body></html>")
            }),
        );
        let base = serve(router).await;

        let client = reqwest::Client::new();
        let text = fetch_job_page(&client, &format!("{base}/job"))
            .await
            .unwrap();
        assert!(text.contains("Data Engineer"));
        assert!(text.contains("Apply now"));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_a_fetch_error() {
        let router = Router::new().route("/gone", get(|| async { StatusCode::NOT_FOUND }));
        let base = serve(router).await;

        let client = reqwest::Client::new();
        let err = fetch_job_page(&client, &format!("{base}/gone"))
            .await
            .unwrap_err();
        match err {
            AppError::Fetch(message) => assert!(message.contains("404")),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_a_fetch_error() {
        let client = reqwest::Client::new();
        // Nothing listens on the discard port.
        let err = fetch_job_page(&client, "http://127.0.0.1:9/job")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Fetch(_)));
    }
}
