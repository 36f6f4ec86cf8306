use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref TITLE_MARKER: Regex = Regex::new(r"(?i)title:").unwrap();
    static ref DESC_MARKER: Regex = Regex::new(r"(?i)^desc:").unwrap();
}

/// One structured topic idea extracted from free-form model output.
///
/// Convention: `title` keeps the model's `Title:` marker verbatim (the UI
/// emphasizes the whole line); `description` has its `Desc:` marker
/// stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
}

// Markers are matched against the original text so the byte offsets stay
// valid; lowercasing first shifts offsets when a character's lowercase form
// has a different UTF-8 length.
fn find_title_marker(line: &str) -> Option<usize> {
    TITLE_MARKER.find(line).map(|m| m.start())
}

fn strip_desc_marker(segment: &str) -> String {
    let trimmed = segment.trim();
    match DESC_MARKER.find(trimmed) {
        Some(m) => trimmed[m.end()..].trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Parses the primary `Title: X | Desc: Y` line format. Lines without a
/// recognizable title marker are dropped; if nothing qualifies the whole
/// response becomes a single suggestion so the caller still has something
/// to show. Input line order is preserved.
pub fn parse_suggestions(raw: &str) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        let Some(marker) = find_title_marker(line) else {
            continue;
        };
        let line = &line[marker..];
        let (title, description) = match line.split_once('|') {
            Some((title, rest)) => (title.trim(), strip_desc_marker(rest)),
            None => (line, String::new()),
        };
        suggestions.push(Suggestion {
            title: title.to_string(),
            description,
        });
    }

    if suggestions.is_empty() && !raw.trim().is_empty() {
        suggestions.push(Suggestion {
            title: raw.trim().to_string(),
            description: String::new(),
        });
    }

    suggestions
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the older `---`-delimited response generation. Each block between
/// delimiters becomes one suggestion item; its `title:`-prefixed lines are
/// emphasized, everything is HTML-escaped. A response with no delimiters
/// falls back to a single escaped block.
pub fn render_suggestion_html(raw: &str) -> String {
    let blocks: Vec<&str> = raw
        .split("---")
        .filter(|block| !block.trim().is_empty())
        .collect();

    if blocks.is_empty() {
        return format!(
            "<div class=\"edcal-suggestion-item\">{}</div>",
            escape_html(raw)
        );
    }

    blocks
        .iter()
        .map(|block| {
            let mut html = String::from("<div class=\"edcal-suggestion-item\">");
            for line in block.trim().lines() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.to_lowercase().starts_with("title:") {
                    html.push_str(&format!("<strong>{}</strong><br>", escape_html(line)));
                } else {
                    html.push_str(&format!("{}<br>", escape_html(line)));
                }
            }
            html.push_str("</div>");
            html
        })
        .collect()
}
