use crate::llm::suggestions::{parse_suggestions, render_suggestion_html, Suggestion};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_lines_become_structured_suggestions() {
        let raw = "Title: Spring cleaning hacks | Desc: Ten quick wins for a tidy home\n\
                   Title: Decluttering your desk | Desc: A focused workspace in one hour";
        let suggestions = parse_suggestions(raw);

        assert_eq!(
            suggestions,
            vec![
                Suggestion {
                    title: "Title: Spring cleaning hacks".to_string(),
                    description: "Ten quick wins for a tidy home".to_string(),
                },
                Suggestion {
                    title: "Title: Decluttering your desk".to_string(),
                    description: "A focused workspace in one hour".to_string(),
                },
            ]
        );
    }

    #[test]
    fn numbering_and_case_before_the_marker_are_ignored() {
        let raw = "1. TITLE: First idea | DESC: First description";
        let suggestions = parse_suggestions(raw);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "TITLE: First idea");
        assert_eq!(suggestions[0].description, "First description");
    }

    #[test]
    fn a_missing_pipe_leaves_the_description_empty() {
        let suggestions = parse_suggestions("Title: Lone idea without a description");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "Title: Lone idea without a description");
        assert_eq!(suggestions[0].description, "");
    }

    #[test]
    fn extra_pipes_stay_inside_the_description() {
        let suggestions = parse_suggestions("Title: A | Desc: B | with a pipe");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].description, "B | with a pipe");
    }

    #[test]
    fn lines_without_a_marker_are_dropped_when_others_qualify() {
        let raw = "Sure, here are some ideas:\n\
                   Title: Real idea | Desc: Kept\n\
                   Hope these help!";
        let suggestions = parse_suggestions(raw);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "Title: Real idea");
    }

    #[test]
    fn unstructured_text_falls_back_to_one_suggestion() {
        let raw = "Some freeform paragraph the model produced instead.";
        let suggestions = parse_suggestions(raw);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, raw);
        assert_eq!(suggestions[0].description, "");
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(parse_suggestions("").is_empty());
        assert!(parse_suggestions("   \n  ").is_empty());
    }

    #[test]
    fn multibyte_text_before_the_marker_keeps_offsets_intact() {
        let suggestions = parse_suggestions("İstanbul ideas: Title: A | Desc: B");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "Title: A");
        assert_eq!(suggestions[0].description, "B");
    }

    #[test]
    fn case_shifting_prefixes_never_split_a_character() {
        // 'İ' lowercases to two characters, so a lowercased-copy offset
        // would land mid-character in the original.
        let raw = format!("{}Title:é", "İ".repeat(7));
        let suggestions = parse_suggestions(&raw);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "Title:é");
    }

    #[test]
    fn non_ascii_text_passes_through_untouched() {
        let raw = "Title: Fête des lumières 🎆 | Desc: Guide für Besucher";
        let suggestions = parse_suggestions(raw);
        assert_eq!(suggestions[0].title, "Title: Fête des lumières 🎆");
        assert_eq!(suggestions[0].description, "Guide für Besucher");
    }

    #[test]
    fn legacy_blocks_render_as_escaped_html_items() {
        let raw = "Title: First & best\nSome <b>detail</b>\n---\nTitle: Second";
        let html = render_suggestion_html(raw);

        assert_eq!(html.matches("edcal-suggestion-item").count(), 2);
        assert!(html.contains("<strong>Title: First &amp; best</strong><br>"));
        assert!(html.contains("Some &lt;b&gt;detail&lt;/b&gt;<br>"));
        assert!(html.contains("<strong>Title: Second</strong><br>"));
    }

    #[test]
    fn legacy_render_without_delimiters_is_a_single_block() {
        let html = render_suggestion_html("Just one answer");
        assert_eq!(html.matches("edcal-suggestion-item").count(), 1);
        assert!(html.contains("Just one answer"));
    }
}
