use std::fmt;
use std::iter;

use chrono::NaiveDate;

use crate::error::ApodError;

const STAMP_FORMAT: &str = "%y%m%d";

/// A calendar day written the way APOD names its pages: `YYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateStamp(NaiveDate);

impl DateStamp {
    pub fn parse(input: &str) -> Result<Self, ApodError> {
        let format_error = || ApodError::Format {
            input: input.to_string(),
        };

        // chrono accepts single-digit fields, the page names never do
        if input.len() != 6 || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format_error());
        }

        NaiveDate::parse_from_str(input, STAMP_FORMAT)
            .map(DateStamp)
            .map_err(|_| format_error())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day before, or `None` at the start of chrono's calendar.
    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(DateStamp)
    }

    pub fn page_url(&self, base_url: &str) -> String {
        format!("{}{}.html", base_url, self)
    }

    /// Recovers the date from a URL built by [`DateStamp::page_url`].
    pub fn from_page_url(base_url: &str, url: &str) -> Option<Self> {
        let stamp = url.strip_prefix(base_url)?.strip_suffix(".html")?;
        DateStamp::parse(stamp).ok()
    }
}

impl From<NaiveDate> for DateStamp {
    fn from(date: NaiveDate) -> Self {
        DateStamp(date)
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(STAMP_FORMAT))
    }
}

/// `start` and the days before it, newest first, `num_days` in total.
pub fn date_range(start: DateStamp, num_days: usize) -> Vec<DateStamp> {
    iter::successors(Some(start), DateStamp::pred)
        .take(num_days)
        .collect()
}

/// Page URLs for [`date_range`], in the same order.
pub fn page_urls(start: DateStamp, num_days: usize, base_url: &str) -> Vec<String> {
    date_range(start, num_days)
        .iter()
        .map(|stamp| stamp.page_url(base_url))
        .collect()
}
