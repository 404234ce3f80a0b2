//! Playback clock formatting
//!
//! Elapsed/duration readouts render as `M:SS`, never with hours. Unknown
//! durations (NaN, infinite, negative) render as `0:00` so the UI always
//! has something stable to show before metadata arrives.

/// Format a position in seconds as `M:SS`
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let total = seconds as u64;
    let minutes = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_clock(0.0), "0:00");
    }

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_clock(65.0), "1:05");
        assert_eq!(format_clock(59.9), "0:59");
        assert_eq!(format_clock(600.0), "10:00");
    }

    #[test]
    fn invalid_values_render_as_zero() {
        assert_eq!(format_clock(f64::NAN), "0:00");
        assert_eq!(format_clock(f64::INFINITY), "0:00");
        assert_eq!(format_clock(-3.0), "0:00");
    }
}
