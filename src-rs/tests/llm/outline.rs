use crate::llm::outline::clean_outline;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_collapse_and_trailing_note_in_one_pass() {
        let raw = "Here's your outline:\n## Introduction\nWrite about X.\n\n\n\n## Conclusion\nWrap up.\nNote: remember to proofread.";
        assert_eq!(
            clean_outline(raw),
            "## Introduction\nWrite about X.\n\n## Conclusion\nWrap up."
        );
    }

    #[test]
    fn html_tags_are_stripped_but_their_text_kept() {
        let raw = "## Introduction\nWrite about <em>gravel</em> bikes.<br>";
        assert_eq!(
            clean_outline(raw),
            "## Introduction\nWrite about gravel bikes."
        );
    }

    #[test]
    fn code_fences_disappear_entirely() {
        let raw = "## Setup\nInstall it:\n```\nnpm install thing\n```\nThen continue.";
        let cleaned = clean_outline(raw);
        assert!(!cleaned.contains("npm install"));
        assert!(cleaned.contains("Then continue."));
    }

    #[test]
    fn inline_markdown_markers_unwrap() {
        let raw = "## Introduction\nUse **bold claims** and *light humor* with `code terms`.";
        assert_eq!(
            clean_outline(raw),
            "## Introduction\nUse bold claims and light humor with code terms."
        );
    }

    #[test]
    fn horizontal_whitespace_runs_collapse() {
        let raw = "## Introduction\nWrite    about\t\tthe topic.";
        assert_eq!(clean_outline(raw), "## Introduction\nWrite about the topic.");
    }

    #[test]
    fn metadata_echo_lines_before_content_are_dropped() {
        let raw = "Title: Gravel bikes\nDescription: Why they took over\n\n## Introduction\nHook the reader.";
        assert_eq!(clean_outline(raw), "## Introduction\nHook the reader.");
    }

    #[test]
    fn each_preamble_variant_is_recognized() {
        for lead in [
            "Here is the writing guide you asked for:",
            "Below is a structured guide:",
            "I've created the following outline:",
            "This writing guide covers your post:",
        ] {
            let raw = format!("{lead}\n## Introduction\nGo.");
            assert_eq!(clean_outline(&raw), "## Introduction\nGo.", "lead: {lead}");
        }
    }

    #[test]
    fn trailing_remember_and_tip_blocks_are_cut() {
        let raw = "## Conclusion\nEnd with a CTA.\n\nRemember: adapt freely.\nMore trailing text.";
        assert_eq!(clean_outline(raw), "## Conclusion\nEnd with a CTA.");

        let tip = "## Conclusion\nEnd well.\nTip: keep paragraphs short.";
        assert_eq!(clean_outline(tip), "## Conclusion\nEnd well.");
    }

    #[test]
    fn content_that_is_only_metadata_cleans_to_nothing() {
        assert_eq!(clean_outline("Title: Something\nTone: witty\n"), "");
        assert_eq!(clean_outline(""), "");
    }

    #[test]
    fn plain_prose_without_headings_survives() {
        let raw = "Write an introduction that hooks the reader early.";
        assert_eq!(clean_outline(raw), raw);
    }
}
