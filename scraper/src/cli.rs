use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Utc};
use clap::Parser;

use crate::config::{
    timeout_from_secs, Config, DEFAULT_IMAGE_BASE_URL, DEFAULT_NUM_DAYS, DEFAULT_OUTPUT_DIR,
    DEFAULT_PAGE_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::dates::DateStamp;

/// New pages go up at midnight US Eastern time. UTC-5 is never ahead of
/// that, so today's page exists by the time this offset reaches it.
const APOD_UTC_OFFSET_SECS: i32 = -5 * 3600;

/// Download Astronomy Picture of the Day images, walking back from a start date
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Newest date to fetch, as YYMMDD (defaults to today's date in US Eastern
    /// standard time, UTC-5, when APOD publishes new pages)
    #[arg(short, long, env = "APOD_START_DATE")]
    pub start_date: Option<String>,

    /// Number of days to fetch, counting the start date
    #[arg(short, long, env = "APOD_NUM_DAYS", default_value_t = DEFAULT_NUM_DAYS)]
    pub num_days: usize,

    /// Directory the images are written to
    #[arg(short, long, env = "APOD_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Prefix of the dated page URLs
    #[arg(long, default_value = DEFAULT_PAGE_BASE_URL)]
    pub page_base_url: String,

    /// Prefix for relative image links found on a page
    #[arg(long, default_value = DEFAULT_IMAGE_BASE_URL)]
    pub image_base_url: String,

    /// Per-request timeout in seconds, 0 to wait indefinitely
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let start_date = self
            .start_date
            .unwrap_or_else(|| default_start_date(Utc::now()));

        Config {
            start_date,
            num_days: self.num_days,
            output_dir: self.output_dir,
            page_base_url: self.page_base_url,
            image_base_url: self.image_base_url,
            timeout: timeout_from_secs(self.timeout_secs),
        }
    }
}

/// The newest APOD date at `now`, as YYMMDD.
pub fn default_start_date(now: DateTime<Utc>) -> String {
    let date = match FixedOffset::east_opt(APOD_UTC_OFFSET_SECS) {
        Some(offset) => now.with_timezone(&offset).date_naive(),
        None => now.date_naive(),
    };
    DateStamp::from(date).to_string()
}
