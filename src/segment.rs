//! Heading-boundary segmentation, the coarsest pass of the cascade.

use crate::config::ChunkerConfig;

/// Partition a document into heading segments.
///
/// Each segment is either a heading line plus the body text up to the next
/// heading of any level, or the preamble before the first heading. Segments
/// are contiguous slices of the input, trimmed; segments that trim to empty
/// are skipped. A document with no headings is a single segment.
///
/// This pass never truncates; over-budget segments are size-bounded by the
/// paragraph pass.
pub fn split_headings<'a>(text: &'a str, config: &ChunkerConfig) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut seg_start = 0usize;
    let mut pos = 0usize;

    for line in text.split_inclusive('\n') {
        if pos > seg_start && is_heading(line, config) {
            push_trimmed(&mut segments, &text[seg_start..pos]);
            seg_start = pos;
        }
        pos += line.len();
    }
    push_trimmed(&mut segments, &text[seg_start..]);

    segments
}

fn push_trimmed<'a>(segments: &mut Vec<&'a str>, raw: &'a str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed);
    }
}

/// A line is a heading when it starts with 1..=`max_heading_level` marker
/// characters followed by at least one whitespace character.
fn is_heading(line: &str, config: &ChunkerConfig) -> bool {
    let level = line
        .chars()
        .take_while(|&c| c == config.heading_marker)
        .count();
    if level == 0 || level > config.max_heading_level {
        return false;
    }
    line.chars().nth(level).is_some_and(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ChunkerConfig {
        ChunkerConfig::default()
    }

    #[test]
    fn test_no_headings_single_segment() {
        let text = "Just a plain paragraph.\n\nAnd another one.";
        let segments = split_headings(text, &config());
        assert_eq!(segments, vec![text]);
    }

    #[test]
    fn test_splits_before_each_heading() {
        let text = "# Alpha\nBody of alpha.\n## Beta\nBody of beta.\n# Gamma\nBody of gamma.";
        let segments = split_headings(text, &config());
        assert_eq!(
            segments,
            vec![
                "# Alpha\nBody of alpha.",
                "## Beta\nBody of beta.",
                "# Gamma\nBody of gamma.",
            ]
        );
    }

    #[test]
    fn test_preamble_before_first_heading() {
        let text = "Intro text before any heading.\n\n# First\nBody.";
        let segments = split_headings(text, &config());
        assert_eq!(
            segments,
            vec!["Intro text before any heading.", "# First\nBody."]
        );
    }

    #[test]
    fn test_heading_on_first_line_has_no_empty_preamble() {
        let text = "# Only\nBody.";
        let segments = split_headings(text, &config());
        assert_eq!(segments, vec!["# Only\nBody."]);
    }

    #[test]
    fn test_marker_without_whitespace_is_not_a_heading() {
        let text = "#hashtag line\nmore text";
        let segments = split_headings(text, &config());
        assert_eq!(segments, vec![text]);
    }

    #[test]
    fn test_seven_markers_is_not_a_heading() {
        let text = "intro\n####### too deep\nstill the same segment";
        let segments = split_headings(text, &config());
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_max_heading_level_is_configurable() {
        let shallow = ChunkerConfig {
            max_heading_level: 2,
            ..ChunkerConfig::default()
        };
        let text = "# Top\nbody\n### Deep\nmore body";
        let segments = split_headings(text, &shallow);
        assert_eq!(segments, vec!["# Top\nbody\n### Deep\nmore body"]);
    }

    #[test]
    fn test_custom_marker() {
        let equals = ChunkerConfig {
            heading_marker: '=',
            ..ChunkerConfig::default()
        };
        let text = "= One\nbody one\n== Two\nbody two";
        let segments = split_headings(text, &equals);
        assert_eq!(segments, vec!["= One\nbody one", "== Two\nbody two"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(split_headings("", &config()).is_empty());
        assert!(split_headings("  \n\n \t ", &config()).is_empty());
    }
}
