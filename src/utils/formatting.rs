//! Formatting utilities used for report output.

/// Render a number of seconds as `1d 02h 03m 04s`; the day part is
/// omitted below one day.
pub fn secs2readable(secs: f64) -> String {
    let total = secs.abs().round() as u64;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    let sign = if secs < 0.0 && total > 0 { "-" } else { "" };

    if days > 0 {
        format!("{sign}{days}d {hours:02}h {minutes:02}m {seconds:02}s")
    } else {
        format!("{sign}{hours:02}h {minutes:02}m {seconds:02}s")
    }
}

/// Print whole numbers without a fractional part, everything else with two
/// decimals.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
