// src/fetcher/http.rs
// =============================================================================
// This module performs the single HTTP GET for one page and works out the
// page's effective origin.
//
// Two details matter:
// - reqwest follows redirects by default, and Response::url() gives us the
//   FINAL URL the server answered from. The effective origin comes from
//   that URL, not the one we asked for, so a root-relative link found on a
//   redirected page resolves against where the page really lives.
// - Any transport failure (DNS, connection refused, TLS) is returned as an
//   error and the caller lets it unwind the whole crawl. There is no retry
//   and no skip-and-continue. HTTP error statuses are NOT failures: a 404
//   body still gets parsed for whatever links it carries.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use url::Url;

// One fetched page: where it actually came from, and what came back
#[derive(Debug)]
pub struct FetchedPage {
    /// Scheme + host (+ explicit port) of the final response URL, no path
    pub origin: String,
    /// The raw response body
    pub body: String,
}

// Fetches one page and computes its effective origin
//
// Parameters:
//   client: shared reqwest client (redirect-following, no timeout)
//   url: the absolute URL to GET
//
// Returns: FetchedPage, or an error that aborts the whole crawl
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to fetch {}", url))?;

    // The origin must reflect any redirects the server performed
    let origin = page_origin(response.url())?;

    let body = response
        .text()
        .await
        .with_context(|| format!("failed to read body of {}", url))?;

    Ok(FetchedPage { origin, body })
}

// Derives "scheme://host" (plus ":port" when one is explicit) from a URL
//
// Url::port() already reports None for a scheme's default port, so
// "https://example.com:443/x" and "https://example.com/x" both yield
// "https://example.com".
fn page_origin(url: &Url) -> Result<String> {
    let host = url
        .host_str()
        .ok_or_else(|| anyhow!("URL has no host: {}", url))?;

    Ok(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_origin_strips_path_query_and_fragment() {
        let url = Url::parse("https://example.com/deep/page?q=1#frag").unwrap();
        assert_eq!(page_origin(&url).unwrap(), "https://example.com");
    }

    #[test]
    fn test_origin_keeps_explicit_port() {
        let url = Url::parse("http://localhost:8080/index.html").unwrap();
        assert_eq!(page_origin(&url).unwrap(), "http://localhost:8080");
    }

    #[test]
    fn test_origin_elides_default_port() {
        let url = Url::parse("https://example.com:443/").unwrap();
        assert_eq!(page_origin(&url).unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_server_origin() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<a href=\"/x\">x</a>"))
            .mount(&server)
            .await;

        let client = Client::new();
        let page = fetch_page(&client, &format!("{}/page", server.uri()))
            .await
            .unwrap();

        // MockServer URIs look like http://127.0.0.1:PORT
        assert_eq!(page.origin, server.uri());
        assert_eq!(page.body, "<a href=\"/x\">x</a>");
    }

    #[tokio::test]
    async fn test_origin_follows_redirects() {
        // Two servers so the redirect genuinely changes host:port
        let first = MockServer::start().await;
        let second = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/start"))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("Location", format!("{}/landing", second.uri()).as_str()),
            )
            .mount(&first)
            .await;
        Mock::given(method("GET"))
            .and(path("/landing"))
            .respond_with(ResponseTemplate::new(200).set_body_string("landed"))
            .mount(&second)
            .await;

        let client = Client::new();
        let page = fetch_page(&client, &format!("{}/start", first.uri()))
            .await
            .unwrap();

        // The origin is where the page actually lives, not where we asked
        assert_eq!(page.origin, second.uri());
        assert_eq!(page.body, "landed");
    }

    #[tokio::test]
    async fn test_http_error_status_is_not_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;

        let client = Client::new();
        let page = fetch_page(&client, &format!("{}/missing", server.uri()))
            .await
            .unwrap();
        assert_eq!(page.body, "not here");
    }

    #[tokio::test]
    async fn test_transport_failure_is_an_error() {
        // Nothing listens on this port; connection is refused immediately
        let client = Client::new();
        let result = fetch_page(&client, "http://127.0.0.1:1/page").await;
        assert!(result.is_err());
    }
}
