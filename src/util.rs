/// Escaped, truncated and padded view of some input, for trace output and diagnostics.
///
/// Truncation is by `char`, so multi-byte input never splits a code point.
pub fn formatter_str(c: &str) -> String {
    let s: String = c.chars().take(33).collect();
    let s = s.escape_default().to_string();
    let s = s.replace("\\\"", "\"");
    let s = s.replace("\\\'", "\'");
    let s: String = s.chars().take(33).collect();
    format!("{:<35}", "|".to_string() + &s + "|")
}
