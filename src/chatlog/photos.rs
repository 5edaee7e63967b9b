//! Photo pool for log posts.

use std::time::{SystemTime, UNIX_EPOCH};

use teloxide::types::InputFile;
use url::Url;

use crate::config::ConfigError;

/// Fixed, non-empty set of photos to attach to log posts.
#[derive(Debug, Clone)]
pub struct PhotoPool {
    photos: Vec<String>,
}

impl PhotoPool {
    pub fn new(photos: Vec<String>) -> Result<Self, ConfigError> {
        if photos.is_empty() {
            return Err(ConfigError::NoPhotos);
        }
        Ok(Self { photos })
    }

    /// Pick a photo, pseudo-randomly seeded from the clock.
    ///
    /// Only as uniform as the clock's sub-second resolution: on a clock that
    /// ticks in microseconds the nanos are multiples of 1000, so pools whose
    /// size divides 1000 always get index 0.
    pub fn pick(&self) -> &str {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        self.pick_with(nanos as usize)
    }

    /// Pick the photo for a given seed.
    pub fn pick_with(&self, seed: usize) -> &str {
        &self.photos[seed % self.photos.len()]
    }

    #[cfg(test)]
    pub fn contains(&self, photo: &str) -> bool {
        self.photos.iter().any(|p| p == photo)
    }
}

/// Turn a photo reference into an upload source.
///
/// http(s) URLs are fetched by Telegram; anything else is a file id.
pub fn input_file(photo: &str) -> InputFile {
    match remote_url(photo) {
        Some(url) => InputFile::url(url),
        None => InputFile::file_id(photo.to_string()),
    }
}

fn remote_url(photo: &str) -> Option<Url> {
    Url::parse(photo)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}
