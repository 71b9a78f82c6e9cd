use std::fmt;
use std::path::PathBuf;

use reqwest::blocking::Client;

use crate::config::Config;
use crate::dates::{page_urls, DateStamp};
use crate::error::ApodError;
use crate::io::save_image;
use crate::scraper::{build_client, fetch_html, parse_apod_page};

#[derive(Debug, Clone, PartialEq)]
pub struct SavedImage {
    pub title: String,
    pub image_url: String,
    pub path: PathBuf,
}

/// What happened to one page of the run.
#[derive(Debug)]
pub struct ItemReport {
    pub page_url: String,
    pub outcome: Result<SavedImage, ApodError>,
}

impl ItemReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// The console line printed for each page.
impl fmt::Display for ItemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(saved) => write!(f, "Image saved: {} ({})", saved.title, saved.image_url),
            Err(e) => write!(f, "Error fetching from {}: {}", self.page_url, e),
        }
    }
}

/// Fetch, parse and save a single page.
pub fn process_page(
    client: &Client,
    config: &Config,
    page_url: &str,
) -> Result<SavedImage, ApodError> {
    let html = fetch_html(client, page_url)?;
    let entry = parse_apod_page(&html, &config.image_base_url)?;
    let path = save_image(client, &config.output_dir, &entry.image_url, &entry.title)?;

    Ok(SavedImage {
        title: entry.title,
        image_url: entry.image_url,
        path,
    })
}

/// Walk back from `config.start_date`, saving every picture that can be found.
///
/// Only a malformed start date or an unusable HTTP client fail the run. A
/// page that cannot be fetched, parsed or saved is reported and skipped.
pub fn run(config: &Config) -> Result<Vec<ItemReport>, ApodError> {
    let start = DateStamp::parse(&config.start_date)?;
    let client = build_client(config.timeout)?;

    let urls = page_urls(start, config.num_days, &config.page_base_url);
    log::debug!(
        "checking {} pages starting at {}, saving into {}",
        urls.len(),
        start,
        config.output_dir.display()
    );

    let mut reports = Vec::with_capacity(urls.len());
    for page_url in urls {
        let outcome = process_page(&client, config, &page_url);
        let report = ItemReport { page_url, outcome };
        println!("{}", report);
        reports.push(report);
    }

    Ok(reports)
}
