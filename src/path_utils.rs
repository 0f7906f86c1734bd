//! Name sanitization for filesystem use
//!
//! Every externally supplied bundle name (from a manifest or from the command
//! line) goes through [`sanitize_name`] before it is joined onto a target
//! directory. The result is always a single path component.

/// Name used when sanitization leaves nothing behind
pub const FALLBACK_NAME: &str = "unnamed-skill";

/// Longest name produced by [`sanitize_name`], in bytes
pub const MAX_NAME_LEN: usize = 255;

fn is_allowed(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-')
}

fn trim_edges(s: &str) -> &str {
    s.trim_matches(|c| c == '.' || c == '-')
}

/// Make a bundle name safe for filesystem use.
///
/// Lower-cases the name, replaces every run of characters outside
/// `[a-z0-9._-]` with a single hyphen and trims leading/trailing dots and
/// hyphens. Returns [`FALLBACK_NAME`] if the result is empty and truncates to
/// [`MAX_NAME_LEN`] bytes.
///
/// # Examples
///
/// ```
/// use instill::path_utils::sanitize_name;
///
/// assert_eq!(sanitize_name("../../etc/evil"), "etc-evil");
/// assert_eq!(sanitize_name("My Cool Tool!"), "my-cool-tool");
/// assert_eq!(sanitize_name("///"), "unnamed-skill");
/// ```
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if is_allowed(c) {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }

    let trimmed = trim_edges(&out);
    if trimmed.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    // Only ASCII survives the filter above, so byte truncation is char-safe.
    let truncated = &trimmed[..trimmed.len().min(MAX_NAME_LEN)];
    trim_edges(truncated).to_string()
}
