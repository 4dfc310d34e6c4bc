//! Menu page fetching and raw fragment extraction.

use std::time::Duration;

use anyhow::Context;
use log::debug;

use crate::{Error, Result};

pub mod html;

/// Class of the container element holding a restaurant's daily menu.
pub const MENU_CONTAINER_CLASS: &str = "menicka";

/// The one menu source shape we know how to scrape.
pub fn is_supported_source(url: &str) -> bool {
    url.contains("menicka.cz")
}

/// Fetches one restaurant page and extracts the flat fragment sequence from
/// its menu container. Stateless apart from the shared HTTP client; safe to
/// clone across concurrent fetch tasks.
#[derive(Clone)]
pub struct MenuScraper {
    client: reqwest::Client,
}

impl MenuScraper {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// One network round-trip, then pure extraction. `Fetch` on network or
    /// timeout trouble, `Parse` when the page lacks the expected container.
    pub async fn fetch_fragments(&self, url: &str) -> Result<Vec<String>> {
        let fetch_err = |source: reqwest::Error| Error::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(fetch_err)?;
        let response = response.error_for_status().map_err(fetch_err)?;
        let body = response.text().await.map_err(fetch_err)?;
        debug!("fetched {} bytes from {url}", body.len());

        extract_fragments(url, &body)
    }
}

/// One text fragment per `div` inside the menu container, stripped of
/// surrounding whitespace. Empty fragments are preserved here; the
/// normalizer decides what to do with them.
pub fn extract_fragments(url: &str, body: &str) -> Result<Vec<String>> {
    let inner = html::find_class_inner(body, MENU_CONTAINER_CLASS).ok_or_else(|| Error::Parse {
        url: url.to_string(),
        reason: format!("no element with class '{MENU_CONTAINER_CLASS}'"),
    })?;
    Ok(html::div_blocks(inner).into_iter().map(html::text_of).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <div class="header">ignored</div>
        <div class="menicka">
            <div>Restaurace U Karla</div>
            <div>menu</div>
            <div>22.8.2025</div>
            <div></div>
            <div>Polévka</div>
            <div>Kulajda</div>
        </div>
        </body></html>"#;

    #[test]
    fn extracts_one_fragment_per_div() {
        let fragments = extract_fragments("test", PAGE).unwrap();
        assert_eq!(
            fragments,
            vec![
                "Restaurace U Karla",
                "menu",
                "22.8.2025",
                "",
                "Polévka",
                "Kulajda"
            ]
        );
    }

    #[test]
    fn missing_container_is_a_parse_error() {
        let err = extract_fragments("test", "<html><body>nothing</body></html>").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn source_gate_only_accepts_known_host() {
        assert!(is_supported_source("https://www.menicka.cz/123-u-karla.html"));
        assert!(!is_supported_source("https://example.com/menu"));
    }
}
