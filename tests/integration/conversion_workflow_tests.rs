/*!
 * Integration tests for the transcript conversion workflow
 */

use anyhow::Result;
use transcript2srt::{convert, preview, ConversionError, ConversionOptions};
use transcript2srt::converter::DEFAULT_PREVIEW_LINES;
use crate::common;

/// Test the documented two-speaker example
#[test]
fn test_convert_withSampleTranscript_shouldMatchExpectedSrt() -> Result<()> {
    let output = convert(common::SAMPLE_TRANSCRIPT, &ConversionOptions::default())?;
    assert_eq!(output, common::SAMPLE_SRT);
    Ok(())
}

/// Test speaker suppression keeps timing identical
#[test]
fn test_convert_withSpeakerDisabled_shouldKeepTiming() -> Result<()> {
    let options = ConversionOptions { include_speaker: false, ..ConversionOptions::default() };
    let output = convert(common::SAMPLE_TRANSCRIPT, &options)?;

    let expected = common::SAMPLE_SRT
        .replace("SPEAKER_00: ", "")
        .replace("SPEAKER_01: ", "");
    assert_eq!(output, expected);
    Ok(())
}

/// Test a realistic export with headers, blank lines and noise
#[test]
fn test_convert_withNoisyExport_shouldSkipNonTranscriptLines() -> Result<()> {
    let input = "\u{feff}WhisperX export\n\
                 ===============\n\
                 \n\
                 [00:00:00,500] SPEAKER_00: Welcome, everyone.\n\
                 (music)\n\
                 [00:00:02,000]   SPEAKER_01:   Thanks for having me.   \n\
                 [00:00:02,300] SPEAKER_00: Sure.\n\
                 [00:01:10,250] SPEAKER_10: Let's begin.\n";

    let output = convert(input, &ConversionOptions::default())?;

    let expected = "1\n00:00:00,500 --> 00:00:01,900\nSPEAKER_00: Welcome, everyone.\n\n\
                    2\n00:00:02,000 --> 00:00:03,000\nSPEAKER_01: Thanks for having me.\n\n\
                    3\n00:00:02,300 --> 00:01:10,150\nSPEAKER_00: Sure.\n\n\
                    4\n00:01:10,250 --> 00:01:11,250\nSPEAKER_10: Let's begin.\n\n";
    assert_eq!(output, expected);
    Ok(())
}

/// Test an offset shifts both start and end times
#[test]
fn test_convert_withOffset_shouldShiftCues() -> Result<()> {
    let options = ConversionOptions { offset_seconds: 60.0, ..ConversionOptions::default() };
    let output = convert(common::SAMPLE_TRANSCRIPT, &options)?;

    assert!(output.starts_with("1\n00:01:01,000 --> 00:01:03,400\n"));
    assert!(output.contains("2\n00:01:03,500 --> 00:01:04,500\n"));
    Ok(())
}

/// Test out-of-order timestamps are not re-sorted
#[test]
fn test_convert_withOutOfOrderTimestamps_shouldKeepInputOrder() -> Result<()> {
    let input = "[00:00:10,000] SPEAKER_00: second in time\n[00:00:02,000] SPEAKER_00: first in time\n";
    let output = convert(input, &ConversionOptions::default())?;

    assert_eq!(
        output,
        "1\n00:00:10,000 --> 00:00:11,000\nSPEAKER_00: second in time\n\n\
         2\n00:00:02,000 --> 00:00:03,000\nSPEAKER_00: first in time\n\n"
    );
    Ok(())
}

/// Test a timestamp written with non-ASCII digits is skipped like any other non-matching line
#[test]
fn test_convert_withNonAsciiDigitTimestamp_shouldSkipLineAndKeepOthers() -> Result<()> {
    let input = "[00:00:01,000] SPEAKER_00: Hello there.\n\
                 [00:00:0\u{0663},000] SPEAKER_01: arabic-indic digit\n\
                 [00:00:03,500] SPEAKER_01: Hi!\n";

    let output = convert(input, &ConversionOptions::default())?;

    assert_eq!(output, common::SAMPLE_SRT);
    Ok(())
}

/// Test a transcript whose only line uses non-ASCII digits has nothing convertible
#[test]
fn test_convert_withOnlyNonAsciiDigitLines_shouldReportNoSegments() {
    assert_eq!(
        convert("[00:00:0\u{0663},000] SPEAKER_01: x\n", &ConversionOptions::default()),
        Err(ConversionError::NoSegmentsFound)
    );
}

/// Test an empty utterance still yields a cue
#[test]
fn test_convert_withEmptyUtterance_shouldKeepCue() -> Result<()> {
    let options = ConversionOptions { include_speaker: false, ..ConversionOptions::default() };
    let output = convert("[00:00:01,000] SPEAKER_00:\n", &options)?;

    assert_eq!(output, "1\n00:00:01,000 --> 00:00:02,000\n\n\n");
    Ok(())
}

/// Test inputs without any transcript line
#[test]
fn test_convert_withNothingConvertible_shouldReportNoSegments() {
    for input in ["", "\n\n", "SPEAKER_00: hello\n[00:00:01] SPEAKER_00: short\n"] {
        assert_eq!(
            convert(input, &ConversionOptions::default()),
            Err(ConversionError::NoSegmentsFound)
        );
    }
}

/// Test preview only looks at the first lines
#[test]
fn test_preview_withLongTranscript_shouldStopAfterWindow() -> Result<()> {
    let input = "[00:00:01,000] SPEAKER_00: one\n\
                 [00:00:02,000] SPEAKER_01: two\n\
                 [00:00:03,000] SPEAKER_00: three\n\
                 [00:00:04,000] SPEAKER_01: four\n";

    let output = preview(input, &ConversionOptions::default(), DEFAULT_PREVIEW_LINES)?;

    assert!(output.contains("SPEAKER_00: three"));
    assert!(!output.contains("four"));
    assert!(output.contains("1\n00:00:01,000 --> 00:00:02,000\n"));
    Ok(())
}
