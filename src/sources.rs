//! The configured set of watched sources.
//!
//! A source pairs a front-page URL with the extraction routine that knows its
//! markup. The list is fixed at process start; there is no runtime
//! reconfiguration.

use crate::scrapers::{self, Extractor};
use url::Url;

/// A fetch target plus its extraction routine. Immutable once configured;
/// the poller only reads it.
#[derive(Clone, Debug)]
pub struct SourceDescriptor {
    /// Outlet name used in diagnostics.
    pub name: &'static str,
    /// Front page to fetch each cycle.
    pub url: Url,
    /// Routine that maps the fetched document to news items.
    pub extract: Extractor,
}

impl SourceDescriptor {
    pub fn new(name: &'static str, url: &str, extract: Extractor) -> Self {
        let url = Url::parse(url).expect("source URL is hardcoded and valid");
        Self { name, url, extract }
    }
}

/// The built-in watch list, polled in this order every cycle.
pub fn default_sources() -> Vec<SourceDescriptor> {
    vec![
        SourceDescriptor::new(
            "The Washington Post",
            "https://www.washingtonpost.com/",
            scrapers::washingtonpost::extract,
        ),
        SourceDescriptor::new(
            "ABC News",
            "https://abcnews.go.com/International",
            scrapers::abcnews::extract,
        ),
        SourceDescriptor::new(
            "Fox News",
            "https://www.foxnews.com/world",
            scrapers::foxnews::extract,
        ),
    ]
}
