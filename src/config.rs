//! Configuration management and validation.
//!
//! Provides the per-conversion options accepted by the converter entry
//! points, with defaults that disable all filtering.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Options for one conversion call
///
/// Both thresholds are optional; an unset threshold performs no filtering
/// for that criterion. A row missing the relevant field is never filtered
/// by that criterion (absence is not failure).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Minimum confidence level a row must meet, when the row carries one
    pub min_confidence: Option<i32>,

    /// Minimum quality-of-video level a row must meet, when the row carries one
    pub min_quality: Option<i32>,
}

impl ConvertOptions {
    /// Create options with no filtering
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum confidence threshold
    pub fn with_min_confidence(mut self, min_confidence: i32) -> Self {
        self.min_confidence = Some(min_confidence);
        self
    }

    /// Set the minimum video-quality threshold
    pub fn with_min_quality(mut self, min_quality: i32) -> Self {
        self.min_quality = Some(min_quality);
        self
    }

    /// True if either threshold is configured
    pub fn is_filtering_enabled(&self) -> bool {
        self.min_confidence.is_some() || self.min_quality.is_some()
    }

    /// Validate threshold ranges
    ///
    /// Confidence and quality levels are recorded on small non-negative
    /// scales; a negative threshold is a caller mistake, not a request to
    /// accept everything.
    pub fn validate(&self) -> Result<()> {
        if let Some(min_confidence) = self.min_confidence {
            if min_confidence < 0 {
                return Err(Error::configuration(format!(
                    "min_confidence must be non-negative, got {}",
                    min_confidence
                )));
            }
        }

        if let Some(min_quality) = self.min_quality {
            if min_quality < 0 {
                return Err(Error::configuration(format!(
                    "min_quality must be non-negative, got {}",
                    min_quality
                )));
            }
        }

        Ok(())
    }
}
