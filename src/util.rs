// Small display helpers shared by the views.

/// Short date from the backend's `created_at`, which arrives either as an
/// RFC 1123 string ("Tue, 15 Oct 2024 10:00:00 GMT") or ISO 8601.
pub fn format_created_at(raw: &str) -> String {
    let raw = raw.trim();
    if let Some((_, rest)) = raw.split_once(", ") {
        let parts: Vec<&str> = rest.split_whitespace().take(3).collect();
        if parts.len() == 3 {
            return parts.join(" ");
        }
    }
    match raw.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => raw.to_string(),
    }
}

pub fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}
