use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use anyhow::{Context, Result};
use log::{debug, warn};

use crate::errors::ConversionError;
use crate::segment_builder::Segment;
use crate::time_codec;

// @module: Cue timing assignment and SRT serialization

/// Breathing gap kept between a cue's end and the next cue's start, in seconds
pub const GAP_SECONDS: f64 = 0.1;

// @struct: Single subtitle cue
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    // @field: 1-based sequence number
    pub index: usize,

    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,

    // @field: Subtitle text
    pub text: String,
}

impl Cue {
    pub fn new(index: usize, start: f64, end: f64, text: String) -> Self {
        Cue { index, start, end, text }
    }

    /// Display duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> Result<String, ConversionError> {
        time_codec::to_timestamp(self.start)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> Result<String, ConversionError> {
        time_codec::to_timestamp(self.end)
    }

    /// Render the four-line SRT block (index, range, text, blank line)
    pub fn to_srt_block(&self) -> Result<String, ConversionError> {
        Ok(format!(
            "{}\n{} --> {}\n{}\n\n",
            self.index,
            self.format_start_time()?,
            self.format_end_time()?,
            self.text
        ))
    }
}

/// Assign an end time to every segment in a single forward pass.
///
/// A cue ends `GAP_SECONDS` before the next segment starts; the last cue lasts
/// `min_duration_seconds`. Any cue shorter than the minimum is stretched to it,
/// even if that makes it overlap the following cue. Order and count are kept.
pub fn assign_cues(segments: &[Segment], min_duration_seconds: f64) -> Vec<Cue> {
    let cues: Vec<Cue> = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let start = segment.start;
            let tentative_end = match segments.get(i + 1) {
                Some(next) => next.start - GAP_SECONDS,
                None => start + min_duration_seconds,
            };

            let end = if tentative_end - start < min_duration_seconds {
                start + min_duration_seconds
            } else {
                tentative_end
            };

            Cue::new(i + 1, start, end, segment.text.clone())
        })
        .collect();

    let overlap_count = cues
        .windows(2)
        .filter(|pair| pair[0].end > pair[1].start)
        .count();
    if overlap_count > 0 {
        warn!("Minimum duration produced {} overlapping cue(s)", overlap_count);
    }

    cues
}

/// Render cues as SRT text. Fails if any cue carries a negative time.
pub fn serialize_cues(cues: &[Cue]) -> Result<String, ConversionError> {
    let mut output = String::new();
    for cue in cues {
        output.push_str(&cue.to_srt_block()?);
    }
    Ok(output)
}

/// Ordered set of cues produced by one conversion
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubtitleDocument {
    /// Cues in output order
    pub cues: Vec<Cue>,
}

impl SubtitleDocument {
    pub fn new(cues: Vec<Cue>) -> Self {
        SubtitleDocument { cues }
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Complete SRT file content
    pub fn to_srt_string(&self) -> Result<String, ConversionError> {
        serialize_cues(&self.cues)
    }

    /// Write subtitles to an SRT file
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_srt_string()?;

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write subtitle file: {}", path.display()))?;

        debug!("Wrote {} cue(s) to {}", self.cues.len(), path.display());
        Ok(())
    }
}

impl fmt::Display for SubtitleDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Document")?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        if let (Some(first), Some(last)) = (self.cues.first(), self.cues.last()) {
            writeln!(f, "Span: {:.3}s - {:.3}s", first.start, last.end)?;
        }
        Ok(())
    }
}
