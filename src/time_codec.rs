use crate::errors::ConversionError;

// @module: Clock timestamp <-> seconds conversion

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_HOUR: u64 = 3_600_000;

/// Convert an `HH:MM:SS,mmm` timestamp to a seconds offset.
///
/// The clock part must split into exactly three unsigned integer fields and the
/// millisecond part must be exactly three digits. Field ranges are not checked,
/// so `00:00:75,000` is read as 75 seconds.
pub fn to_seconds(timestamp: &str) -> Result<f64, ConversionError> {
    let malformed = || ConversionError::MalformedTimestamp(timestamp.to_string());

    let (clock, millis) = timestamp.split_once(',').ok_or_else(malformed)?;
    if millis.len() != 3 {
        return Err(malformed());
    }
    let millis = parse_field(millis).ok_or_else(malformed)?;

    let fields: Vec<&str> = clock.split(':').collect();
    if fields.len() != 3 {
        return Err(malformed());
    }
    let hours = parse_field(fields[0]).ok_or_else(malformed)?;
    let minutes = parse_field(fields[1]).ok_or_else(malformed)?;
    let seconds = parse_field(fields[2]).ok_or_else(malformed)?;

    let total_ms = hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|ms| ms.checked_add(minutes.checked_mul(MS_PER_MINUTE)?))
        .and_then(|ms| ms.checked_add(seconds.checked_mul(MS_PER_SECOND)?))
        .and_then(|ms| ms.checked_add(millis))
        .ok_or_else(malformed)?;

    // Dividing the integer total keeps ms-precision values bit-exact on the way back
    Ok(total_ms as f64 / MS_PER_SECOND as f64)
}

/// Format a non-negative seconds offset as `HH:MM:SS,mmm`.
///
/// The value is rounded to whole milliseconds before it is split into fields.
/// Hours grow past two digits instead of wrapping.
pub fn to_timestamp(seconds: f64) -> Result<String, ConversionError> {
    if seconds < 0.0 {
        return Err(ConversionError::NegativeDuration(seconds));
    }
    if !seconds.is_finite() {
        return Err(ConversionError::MalformedTimestamp(seconds.to_string()));
    }

    let total_ms = (seconds * MS_PER_SECOND as f64).round() as u64;
    Ok(format_millis(total_ms))
}

/// Format a millisecond count in SRT form (HH:MM:SS,mmm)
pub fn format_millis(ms: u64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

// Plain ASCII digits only; `str::parse` alone would accept a leading '+'
fn parse_field(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
