//! Favicon generation: two-letter initials rendered into a small SVG.

/// Derive two-letter initials from a project name.
///
/// Understands kebab-case, camelCase, and multi-word names. Falls back to
/// `DS` when the name has no usable characters.
pub fn project_initials(project_name: &str) -> String {
    let cleaned: String = project_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return "DS".to_string();
    }

    // Break camelCase into words, then split on spaces and hyphens
    let mut spaced = String::with_capacity(cleaned.len() + 4);
    let mut prev_lower = false;
    for c in cleaned.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        prev_lower = c.is_ascii_lowercase();
        spaced.push(c);
    }

    let words: Vec<&str> = spaced
        .split(|c| c == ' ' || c == '-')
        .filter(|w| !w.is_empty())
        .collect();

    let initials: String = match words.as_slice() {
        [] | [_] => cleaned.chars().take(2).collect(),
        [first, second, ..] => {
            let mut s = String::new();
            s.extend(first.chars().next());
            s.extend(second.chars().next());
            s
        }
    };

    initials.to_ascii_uppercase()
}

/// Render a minimalist 32x32 SVG favicon with the given initials
pub fn favicon_svg(initials: &str) -> String {
    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg">
  <rect width="32" height="32" fill="#ffffff"/>
  <text
    x="16"
    y="16"
    font-family="system-ui, -apple-system, sans-serif"
    font-size="14"
    font-weight="600"
    text-anchor="middle"
    dominant-baseline="central"
    fill="#000000"
  >{initials}</text>
</svg>"##
    )
}
