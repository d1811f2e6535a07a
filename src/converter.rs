/*!
 * Transcript to SRT conversion entry points.
 *
 * `convert` sequences line parsing, segment building, cue assignment and
 * serialization. Everything here is synchronous and performs no I/O; callers
 * that need responsiveness run it on a worker task.
 */

use log::debug;

use crate::errors::ConversionError;
use crate::segment_builder;
use crate::subtitle_processor::{self, Cue, SubtitleDocument};
use crate::transcript_parser;

/// Number of raw lines examined by a preview, as in the desktop tool
pub const DEFAULT_PREVIEW_LINES: usize = 3;

/// Smallest accepted minimum duration: one millisecond, the SRT time resolution
pub const MIN_DURATION_FLOOR_SECONDS: f64 = 0.001;

/// Parameters for one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    /// Seconds added to every timestamp (may be negative)
    pub offset_seconds: f64,

    /// Minimum display time for every cue, at least one millisecond
    pub min_duration_seconds: f64,

    /// Prefix cue text with the speaker label
    pub include_speaker: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            offset_seconds: 0.0,
            min_duration_seconds: 1.0,
            include_speaker: true,
        }
    }
}

impl ConversionOptions {
    /// Check that the options describe a usable conversion
    pub fn validate(&self) -> Result<(), ConversionError> {
        if !self.offset_seconds.is_finite() {
            return Err(ConversionError::InvalidOptions(format!(
                "offset must be a finite number, got {}",
                self.offset_seconds
            )));
        }
        // Below one millisecond the rendered end would equal the rendered start
        if !self.min_duration_seconds.is_finite()
            || self.min_duration_seconds < MIN_DURATION_FLOOR_SECONDS
        {
            return Err(ConversionError::InvalidOptions(format!(
                "minimum duration must be at least {} seconds, got {}",
                MIN_DURATION_FLOOR_SECONDS, self.min_duration_seconds
            )));
        }
        Ok(())
    }
}

/// Convert transcript text to the cues of a subtitle document
pub fn convert_to_document(
    input: &str,
    options: &ConversionOptions,
) -> Result<SubtitleDocument, ConversionError> {
    options.validate()?;

    let parsed = transcript_parser::parse_lines(input);
    let segments = segment_builder::build_segments(
        &parsed,
        options.offset_seconds,
        options.include_speaker,
    )?;
    let cues = subtitle_processor::assign_cues(&segments, options.min_duration_seconds);

    debug!("Converted {} transcript line(s) into {} cue(s)", parsed.len(), cues.len());
    Ok(SubtitleDocument::new(cues))
}

/// Convert transcript text to SRT text
pub fn convert(input: &str, options: &ConversionOptions) -> Result<String, ConversionError> {
    convert_to_document(input, options)?.to_srt_string()
}

/// Render a quick look at the first `max_lines` raw lines.
///
/// Each matching line becomes a cue lasting exactly the minimum duration; no
/// look-ahead to following lines is done. Fails with `NoSegmentsFound` when none
/// of the examined lines match.
pub fn preview(
    input: &str,
    options: &ConversionOptions,
    max_lines: usize,
) -> Result<String, ConversionError> {
    options.validate()?;

    let head: Vec<&str> = input.lines().take(max_lines).collect();
    let parsed = transcript_parser::parse_lines(&head.join("\n"));
    let segments = segment_builder::build_segments(
        &parsed,
        options.offset_seconds,
        options.include_speaker,
    )?;

    let cues: Vec<Cue> = segments
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            Cue::new(
                i + 1,
                segment.start,
                segment.start + options.min_duration_seconds,
                segment.text,
            )
        })
        .collect();

    subtitle_processor::serialize_cues(&cues)
}
