/*!
 * Error types for the transcript2srt application.
 *
 * This module contains the error type of the conversion core, using the thiserror
 * crate. File and configuration plumbing reports through `anyhow` with context.
 */

use thiserror::Error;

/// Errors that can occur while converting a transcript into subtitles
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// A timestamp could not be decomposed into clock fields and milliseconds
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    /// No line of the input matched the transcript grammar
    #[error("No subtitle segments found in the input")]
    NoSegmentsFound,

    /// A computed time value was negative
    #[error("Negative time value: {0} seconds")]
    NegativeDuration(f64),

    /// Conversion options are out of range
    #[error("Invalid conversion options: {0}")]
    InvalidOptions(String),
}
