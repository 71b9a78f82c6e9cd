use std::time::Duration;

use reqwest::blocking::Client;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::ApodError;

/// Title used when a page has no bold caption.
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApodEntry {
    pub image_url: String,
    pub title: String,
}

pub fn build_client(timeout: Option<Duration>) -> Result<Client, ApodError> {
    // an explicit None also overrides reqwest's built-in 30s default
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(ApodError::Client)
}

/// GET `url`, failing on transport errors and on any non-2xx status.
pub fn fetch_html(client: &Client, url: &str) -> Result<String, ApodError> {
    log::debug!("GET {}", url);
    let response = client.get(url).send().map_err(|source| ApodError::Network {
        url: url.to_string(),
        source: source.without_url(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApodError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(|source| ApodError::Network {
        url: url.to_string(),
        source: source.without_url(),
    })
}

/// Pull the picture and its caption out of an APOD page.
///
/// Takes the first `<img>` and the first `<b>` in document order. Pages that
/// embed a video or audio player instead of a picture have no `<img>` and
/// come back as [`ApodError::NotFound`].
pub fn parse_apod_page(html: &str, image_base_url: &str) -> Result<ApodEntry, ApodError> {
    let document = Html::parse_document(html);

    let img_selector = Selector::parse("img").unwrap();
    let src = document
        .select(&img_selector)
        .next()
        .and_then(|element| element.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .ok_or(ApodError::NotFound)?;

    let image_url = if src.starts_with("http://") || src.starts_with("https://") {
        src.to_string()
    } else {
        format!("{}{}", image_base_url, src)
    };

    let bold_selector = Selector::parse("b").unwrap();
    let title = document
        .select(&bold_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    Ok(ApodEntry { image_url, title })
}
