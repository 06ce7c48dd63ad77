//! Plain-text rendering of a public post
//!
//! ```text
//! BOS vs NYR
//!   highlights: https://...
//!   full: link not found
//!
//! ⚠️ Issues:
//! - [video_source] VIDEO_LOOKUP_FAILED: ...
//! ```

use ahash::AHashSet;
use rewatch_domain::{PublicPost, RenderLabels};

/// Render `post` with the given labels.
///
/// Issues sharing `(code, origin, message)` are printed once. Surrounding
/// whitespace is trimmed from the result.
pub fn render_post(post: &PublicPost, labels: &RenderLabels) -> String {
    let mut lines: Vec<String> = Vec::new();

    if post.has_items() {
        for item in &post.items {
            lines.push(item.title.clone());
            lines.push(link_line(&labels.highlights, item.highlights_url.as_deref(), labels));
            lines.push(link_line(&labels.full, item.full_url.as_deref(), labels));
            lines.push(String::new());
        }
    } else {
        lines.push(labels.no_matches.clone());
    }

    if !post.issues.is_empty() {
        lines.push(labels.issues_header.clone());
        let mut seen = AHashSet::new();
        for issue in &post.issues {
            if seen.insert(issue.dedup_key()) {
                lines.push(format!("- {issue}"));
            }
        }
    }

    lines.join("\n").trim().to_string()
}

fn link_line(kind_label: &str, url: Option<&str>, labels: &RenderLabels) -> String {
    let target = url.filter(|u| !u.is_empty()).unwrap_or(&labels.not_found);
    format!("  {kind_label}: {target}")
}
