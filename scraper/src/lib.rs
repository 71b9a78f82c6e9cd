pub mod cli;
pub mod config;
pub mod dates;
pub mod driver;
pub mod error;
pub mod io;
pub mod scraper;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::config::Config;
pub use crate::dates::{date_range, page_urls, DateStamp};
pub use crate::driver::{process_page, run, ItemReport, SavedImage};
pub use crate::error::ApodError;
pub use crate::io::{image_path, sanitize_title, save_image};
pub use crate::scraper::{build_client, fetch_html, parse_apod_page, ApodEntry, UNTITLED};
