use log::debug;

use crate::errors::ConversionError;
use crate::time_codec;
use crate::transcript_parser::ParsedLine;

// @module: Parsed transcript lines -> timed segments

// @struct: Segment with a start time but no end time yet
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    // @field: Start in seconds, offset applied
    pub start: f64,

    // @field: Display text
    pub text: String,
}

impl Segment {
    pub fn new(start: f64, text: String) -> Self {
        Segment { start, text }
    }
}

/// Build one segment per parsed line, in input order.
///
/// Segments are never re-sorted or merged; out-of-order timestamps are left for
/// cue assignment to deal with. An empty result is reported as `NoSegmentsFound`.
pub fn build_segments(
    parsed_lines: &[ParsedLine],
    offset_seconds: f64,
    include_speaker: bool,
) -> Result<Vec<Segment>, ConversionError> {
    if parsed_lines.is_empty() {
        return Err(ConversionError::NoSegmentsFound);
    }

    let segments = parsed_lines
        .iter()
        .map(|line| -> Result<Segment, ConversionError> {
            let start = time_codec::to_seconds(&line.timestamp)? + offset_seconds;
            let text = if include_speaker {
                format!("{}: {}", line.speaker, line.text)
            } else {
                line.text.clone()
            };
            Ok(Segment::new(start, text))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Built {} segment(s) (offset {}s, speaker labels {})",
        segments.len(),
        offset_seconds,
        if include_speaker { "on" } else { "off" }
    );

    Ok(segments)
}
