use chrono::NaiveDate;

use crate::config::{CalendarSettings, FocusType};
use crate::dates::{long_date, relative_day_context};

pub const MAX_RECENT_TITLES: usize = 5;

/// One-line cleanup for values that get embedded in prompt sentences.
/// Stored settings were already sanitized and capped on save; this only
/// guards titles and other pass-through text.
fn inline_text(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the topic-suggestion prompt: exactly 3 ideas for the target date,
/// grounded in site context, tone, recent titles, and the avoid list, with a
/// strict `Title: X | Desc: Y` line format instruction.
pub fn build_suggestion_prompt(
    settings: &CalendarSettings,
    target: NaiveDate,
    today: NaiveDate,
    recent_titles: &[String],
) -> String {
    let mut prompt = format!(
        "Suggest 3 unique blog post ideas for {} ({}).",
        long_date(target),
        relative_day_context(target, today)
    );

    if !settings.site_context.is_empty() {
        prompt.push_str(&format!(" Site context: {}.", settings.site_context));
    }
    if !settings.tone.is_empty() {
        prompt.push_str(&format!(" Writing tone: {}.", settings.tone));
    }

    let titles: Vec<String> = recent_titles
        .iter()
        .map(|t| inline_text(t))
        .filter(|t| !t.is_empty())
        .take(MAX_RECENT_TITLES)
        .collect();
    if !titles.is_empty() {
        prompt.push_str(&format!(
            " The site has recently published these {} post{}: {}. Use these to understand the content themes and avoid duplication, but suggest fresh angles or complementary topics.",
            titles.len(),
            if titles.len() > 1 { "s" } else { "" },
            titles.join(", ")
        ));
    }

    if !settings.avoid_topics.is_empty() {
        prompt.push_str(&format!(
            " Avoid these topics/approaches: {}.",
            settings.avoid_topics
        ));
    }

    if !settings.countries.is_empty() {
        prompt.push_str(&format!(
            " Target audience countries: {}.",
            settings.countries.join(", ")
        ));
    }
    if !settings.cultures.is_empty() {
        prompt.push_str(&format!(
            " Cultural lens: {}.",
            settings.cultures.join(", ")
        ));
    }
    if !settings.beliefs.is_empty() {
        prompt.push_str(&format!(
            " Belief/religious context: {}.",
            settings.beliefs.join(", ")
        ));
    }
    match settings.focus_type {
        FocusType::Trends => {
            prompt.push_str(" Prefer timely, seasonal, or trending topics.");
        }
        FocusType::Evergreen => {
            prompt.push_str(" Prefer evergreen topics that stay relevant year-round.");
        }
        FocusType::Mix => {}
    }

    prompt.push_str(
        " Format: Title: X | Desc: Y (one line each, no duplicates, no markup, no formatting). Ensure suggestions are timely, relevant, and distinct from recent content.",
    );

    prompt
}

/// Builds the writing-guide prompt for a drafted post: Introduction, three
/// main sections, Conclusion with CTA, prose under ##/### headings, no
/// bullets, starting directly at the Introduction heading.
pub fn build_outline_prompt(
    title: &str,
    suggestion: &str,
    context: &str,
    tone: &str,
) -> String {
    let mut prompt = String::from("Create a writing guide for this blog post:\n\n");
    prompt.push_str(&format!("Title: {}\n", inline_text(title)));
    prompt.push_str(&format!("Description: {}\n", suggestion.trim()));

    if !context.is_empty() {
        prompt.push_str(&format!("Context: {}\n", context.trim()));
    }
    if !tone.is_empty() {
        prompt.push_str(&format!("Tone: {}\n", inline_text(tone)));
    }

    prompt.push_str("\nFormat: Plain text only. Use markdown-style headings (## for main sections, ### for subsections).\n");
    prompt.push_str("Structure: Introduction, 3 main sections, Conclusion with CTA.\n\n");
    prompt.push_str("For each section, provide writing guidance that tells the author WHAT to write, not just topics to cover. Use a hybrid approach:\n");
    prompt.push_str("- Writing instructions (e.g., 'Write an introduction that hooks the reader by...')\n");
    prompt.push_str("- Content guidance (e.g., 'Introduction: Focus on explaining why this topic matters to the reader...')\n");
    prompt.push_str("- Mix both approaches naturally throughout\n\n");
    prompt.push_str("Each section should guide the author on:\n");
    prompt.push_str("- What to write about (the content focus)\n");
    prompt.push_str("- How to approach it (the writing style/angle)\n");
    prompt.push_str("- What to accomplish (the goal of that section)\n\n");
    prompt.push_str("Make headings action-oriented and guidance specific/actionable. Do NOT use bullet points or lists.\n");
    prompt.push_str("Do NOT repeat the title or description in your output. Start directly with the Introduction section heading (## Introduction). Output only the writing guide, no explanations or metadata.");

    prompt
}
