use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref CODE_FENCE: Regex = Regex::new(r"(?s)```.*?```").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*(.*?)\*").unwrap();
    static ref INLINE_CODE: Regex = Regex::new(r"`(.*?)`").unwrap();
    static ref MULTI_NEWLINE: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref HORIZONTAL_WS: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref AI_PREAMBLE: Regex = Regex::new(
        r"(?si)^(?:Here's|Here is|Below is|I'll create|I've created|This outline|The outline|This writing guide|The writing guide).*?:\s*"
    )
    .unwrap();
    static ref TRAILING_NOTE: Regex = Regex::new(r"(?si)\n*(?:Note:|Remember:|Tip:).*$").unwrap();
    static ref META_LINE: Regex =
        Regex::new(r"(?i)^(?:Title|Description|Context|Tone|Format|Structure|Writing guide|Guide):")
            .unwrap();
    static ref CONTENT_LINE: Regex = Regex::new(r"^[#A-Za-z]").unwrap();
}

/// Normalizes a model-produced writing guide into plain text with only
/// ##/### headings: HTML and code fences removed, inline markdown unwrapped,
/// whitespace collapsed, AI preamble and trailing Note/Remember/Tip blocks
/// dropped, and any leading metadata echo skipped.
pub fn clean_outline(raw: &str) -> String {
    let outline = HTML_TAG.replace_all(raw, "");
    let outline = CODE_FENCE.replace_all(&outline, "");

    let outline = BOLD.replace_all(&outline, "$1");
    let outline = ITALIC.replace_all(&outline, "$1");
    let outline = INLINE_CODE.replace_all(&outline, "$1");

    let outline = MULTI_NEWLINE.replace_all(&outline, "\n\n");
    let outline = HORIZONTAL_WS.replace_all(&outline, " ");

    let outline = AI_PREAMBLE.replace(&outline, "");
    let outline = TRAILING_NOTE.replace(&outline, "");

    let outline = outline.trim();

    // Drop metadata-echo lines until the first real content line (a heading
    // or text). Lines the scan cannot place leave the cut point untouched.
    let lines: Vec<&str> = outline.split('\n').collect();
    let mut start_index = 0;
    for (i, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || META_LINE.is_match(line) {
            start_index = i + 1;
            continue;
        }
        if CONTENT_LINE.is_match(line) {
            start_index = i;
            break;
        }
    }

    if start_index >= lines.len() {
        return String::new();
    }
    lines[start_index..].join("\n").trim().to_string()
}
