use crate::clock::number;
use crate::errors::ParseError;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Formats a second count as `1d 2h 3m 4s`.
///
/// A unit is shown when it is non-zero or a larger unit is already shown;
/// seconds always are.
pub fn format_duration(seconds: u64) -> String {
    let days = seconds / DAY;
    let hours = (seconds % DAY) / HOUR;
    let minutes = (seconds % HOUR) / MINUTE;
    let secs = seconds % MINUTE;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 || !parts.is_empty() {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 || !parts.is_empty() {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{secs}s"));
    parts.join(" ")
}

/// Strict parse of a `data-seconds` style counter.
pub fn parse_seconds(input: &str) -> Result<u64, ParseError> {
    number("seconds", input)
}
