use regex::Regex;
use once_cell::sync::Lazy;
use log::debug;

// @module: Speaker-annotated transcript line parsing

// @const: `[HH:MM:SS,mmm] SPEAKER_<digits>: text`, anchored at line start
// Digits are ASCII only; `\d` would also accept other Unicode decimal digits
static TRANSCRIPT_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[([0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3})\]\s*(SPEAKER_[0-9]+):\s*(.*)$").unwrap()
});

// @struct: One recognized transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    // @field: Clock timestamp as written (HH:MM:SS,mmm)
    pub timestamp: String,

    // @field: Speaker label (SPEAKER_<digits>)
    pub speaker: String,

    // @field: Utterance, trimmed; may be empty
    pub text: String,
}

/// Parse a single raw transcript line.
///
/// Returns `None` for anything that does not match the grammar (blank lines,
/// headers, malformed timestamps, other speaker labels). Callers skip those.
pub fn parse_line(raw_line: &str) -> Option<ParsedLine> {
    let caps = TRANSCRIPT_LINE_REGEX.captures(raw_line.trim())?;

    Some(ParsedLine {
        timestamp: caps[1].to_string(),
        speaker: caps[2].to_string(),
        text: caps[3].trim().to_string(),
    })
}

/// Parse every line of a transcript, keeping input order and dropping non-matching lines
pub fn parse_lines(input: &str) -> Vec<ParsedLine> {
    let mut skipped = 0;
    let parsed: Vec<ParsedLine> = input
        .lines()
        .filter_map(|line| {
            let parsed = parse_line(line);
            if parsed.is_none() && !line.trim().is_empty() {
                skipped += 1;
            }
            parsed
        })
        .collect();

    if skipped > 0 {
        debug!("Skipped {} non-transcript line(s)", skipped);
    }

    parsed
}
