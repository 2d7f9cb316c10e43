//! Rendering of elapsed time as `MM:SS:CC`.

use std::time::Duration;

/// Format milliseconds as "MM:SS:CC" (centiseconds). Minutes never roll over
/// into hours.
pub fn format_time(ms: u64) -> String {
    let total_secs = ms / 1000;
    let m = total_secs / 60;
    let s = total_secs % 60;
    let cs = (ms % 1000) / 10;
    format!("{:02}:{:02}:{:02}", m, s, cs)
}

/// Same as [`format_time`], truncating anything below a millisecond.
pub fn format_duration(duration: Duration) -> String {
    let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    format_time(ms)
}
