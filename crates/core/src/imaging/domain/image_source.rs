use std::fmt;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme, then a domain name, `localhost` or a dotted IPv4 quad, an
/// optional port, and an optional path or query.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|",
        r"localhost|",
        r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
        r"(?::\d+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("URL pattern is a valid regex")
});

/// Where an image is loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    File(PathBuf),
}

impl ImageSource {
    /// Classifies a location string. URLs are recognised first; anything else
    /// must name an existing regular file. Returns `None` otherwise.
    pub fn parse(location: &str) -> Option<Self> {
        if is_valid_url(location) {
            Some(ImageSource::Url(location.to_string()))
        } else if Path::new(location).is_file() {
            Some(ImageSource::File(PathBuf::from(location)))
        } else {
            None
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Url(url) => f.write_str(url),
            ImageSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn is_valid_url(location: &str) -> bool {
    URL_PATTERN.is_match(location)
}
