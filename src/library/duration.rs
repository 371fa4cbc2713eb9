/// Format a whole-second duration the way the catalog displays it.
///
/// Hours and minutes only appear when non-zero and no component is
/// zero-padded: `0 -> "0"`, `65 -> "1:5"`, `3661 -> "1:1:1"`.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let remainder = secs % 3600;
    let mins = remainder / 60;
    let secs = remainder % 60;

    let mut out = String::new();
    if hours != 0 {
        out.push_str(&hours.to_string());
        out.push(':');
    }
    if mins != 0 {
        out.push_str(&mins.to_string());
        out.push(':');
    }
    out.push_str(&secs.to_string());
    out
}
