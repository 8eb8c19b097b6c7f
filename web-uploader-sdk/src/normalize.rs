// ABOUTME: Joins relative image paths returned by upload endpoints onto a configured prefix
// ABOUTME: Absolute http(s) URLs and empty prefixes pass through untouched

/// Returns `url` as an absolute URL using `prefix` when needed.
///
/// `url` is returned unchanged when no prefix is configured or when it already
/// carries an `http://` or `https://` scheme (case-insensitive). Otherwise the
/// prefix and the path are joined by exactly one `/`.
pub fn normalize_url(url: &str, prefix: Option<&str>) -> String {
    let prefix = match prefix {
        Some(p) if !p.is_empty() => p,
        _ => return url.to_string(),
    };

    if is_absolute(url) {
        return url.to_string();
    }

    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}

fn is_absolute(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}
