use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_START_DATE: &str = "250404";
pub const DEFAULT_NUM_DAYS: usize = 20;
pub const DEFAULT_OUTPUT_DIR: &str = "NASAPOD_Images";
pub const DEFAULT_PAGE_BASE_URL: &str = "https://apod.nasa.gov/apod/ap";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://apod.nasa.gov/apod/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for one run of the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// First (newest) date to fetch, `YYMMDD`. Validated when the run starts.
    pub start_date: String,
    /// How many calendar days to walk back, including the start date.
    pub num_days: usize,
    pub output_dir: PathBuf,
    /// Page URLs are `<page_base_url><YYMMDD>.html`.
    pub page_base_url: String,
    /// Prefixed to the relative `src` of the page's image.
    pub image_base_url: String,
    /// Per-request timeout; `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_date: DEFAULT_START_DATE.to_string(),
            num_days: DEFAULT_NUM_DAYS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            page_base_url: DEFAULT_PAGE_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

/// Maps the CLI's `--timeout-secs` onto a request timeout, with 0 meaning none.
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}
