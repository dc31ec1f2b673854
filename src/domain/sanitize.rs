/// Normalize text for use as prerelease or build metadata.
///
/// Leading and trailing `.` are trimmed, then every character outside
/// `[A-Za-z0-9.-]` becomes `-`. Branch names like `feature/login` turn into
/// `feature-login`.
pub fn sanitize(text: &str) -> String {
    text.trim_matches('.')
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
