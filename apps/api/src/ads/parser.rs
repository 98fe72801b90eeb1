//! Response Parser — turns free-text completion output into ordered `AdCandidate`s.
//!
//! Segments are blank-line separated. Inside a segment the `Primary Text:` and
//! `Headline:` lines are found by label, so a numbering line like `Ad 1:` may
//! be present or absent. Segments with no labels at all fall back to the
//! positional convention: line 1 ignored, line 2 primary text, line 3 headline.
//! Runs of several blank lines count as a single separator.
//!
//! Parsing never fails; unusable segments are dropped.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::ad::AdCandidate;

/// One or more consecutive blank (or whitespace-only) lines.
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("valid regex"));

/// `Primary Text: ...` or `Headline: ...`, tolerating case, surrounding
/// markdown bold and a leading list marker.
static LABELED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:[-*]\s+)?(?:\*\*)?(primary text|headline)(?:\*\*)?\s*:(?:\*\*)?(.*)$")
        .expect("valid regex")
});

/// Parses raw completion text into candidates, preserving segment order.
pub fn parse_ads(raw: &str) -> Vec<AdCandidate> {
    let normalized = raw.replace("\r\n", "\n");

    BLANK_LINES
        .split(&normalized)
        .map(str::trim_start)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let parsed = parse_segment(segment);
            if parsed.is_none() {
                debug!("Dropping unparseable ad segment: {segment:?}");
            }
            parsed
        })
        .collect()
}

fn parse_segment(segment: &str) -> Option<AdCandidate> {
    let (primary_text, headline) = match labeled_fields(segment) {
        Some(fields) => fields,
        None => positional_fields(segment)?,
    };

    let primary_text = primary_text.trim();
    let headline = headline.trim();
    if primary_text.is_empty() || headline.is_empty() {
        return None;
    }

    Some(AdCandidate {
        headline: headline.to_string(),
        primary_text: primary_text.to_string(),
    })
}

/// Returns `None` only when the segment carries neither label. A segment with
/// one label yields an empty value for the other and is dropped by the caller.
fn labeled_fields(segment: &str) -> Option<(&str, &str)> {
    let mut primary_text: Option<&str> = None;
    let mut headline: Option<&str> = None;

    for line in segment.lines() {
        let Some(caps) = LABELED_LINE.captures(line) else {
            continue;
        };
        let (Some(label), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let value = value.as_str().trim_end_matches("**");
        if label.as_str().eq_ignore_ascii_case("headline") {
            headline.get_or_insert(value);
        } else {
            primary_text.get_or_insert(value);
        }
    }

    if primary_text.is_none() && headline.is_none() {
        return None;
    }
    Some((primary_text.unwrap_or_default(), headline.unwrap_or_default()))
}

/// Only reached for segments with no labeled line, so there is no prefix to strip.
fn positional_fields(segment: &str) -> Option<(&str, &str)> {
    let mut lines = segment.lines().skip(1);
    let primary_text = lines.next()?;
    let headline = lines.next()?;
    Some((primary_text, headline))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_formed(count: usize) -> String {
        (1..=count)
            .map(|i| format!("Ad {i}:\nPrimary Text: Primary {i}\nHeadline: Headline {i}"))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    #[test]
    fn test_five_well_formed_segments_parse_in_order() {
        let ads = parse_ads(&well_formed(5));
        assert_eq!(ads.len(), 5);
        for (i, ad) in ads.iter().enumerate() {
            assert_eq!(ad.primary_text, format!("Primary {}", i + 1));
            assert_eq!(ad.headline, format!("Headline {}", i + 1));
        }
    }

    #[test]
    fn test_segment_missing_headline_is_dropped() {
        let raw = "Ad 1:\nPrimary Text: One\nHeadline: H1\n\n\
                   Ad 2:\nPrimary Text: Two\n\n\
                   Ad 3:\nPrimary Text: Three\nHeadline: H3";
        let ads = parse_ads(raw);
        assert_eq!(ads.len(), 2);
        assert_eq!(ads[0].headline, "H1");
        assert_eq!(ads[1].headline, "H3");
    }

    #[test]
    fn test_empty_input_yields_no_candidates() {
        assert!(parse_ads("").is_empty());
        assert!(parse_ads("   \n\n  ").is_empty());
    }

    #[test]
    fn test_values_are_trimmed() {
        let ads = parse_ads("Ad 1:\nPrimary Text:    Spaced out   \nHeadline:  Tight  ");
        assert_eq!(ads[0].primary_text, "Spaced out");
        assert_eq!(ads[0].headline, "Tight");
    }

    #[test]
    fn test_segment_without_numbering_line_still_parses() {
        let ads = parse_ads("Primary Text: No number here\nHeadline: Still works");
        assert_eq!(
            ads,
            vec![AdCandidate {
                headline: "Still works".to_string(),
                primary_text: "No number here".to_string(),
            }]
        );
    }

    #[test]
    fn test_labels_in_swapped_order() {
        let ads = parse_ads("Ad 1:\nHeadline: First\nPrimary Text: Second");
        assert_eq!(ads[0].headline, "First");
        assert_eq!(ads[0].primary_text, "Second");
    }

    #[test]
    fn test_markdown_bold_labels() {
        let ads = parse_ads("**Ad 1**\n**Primary Text:** Bold body\n**Headline:** Bold head");
        assert_eq!(ads[0].primary_text, "Bold body");
        assert_eq!(ads[0].headline, "Bold head");
    }

    #[test]
    fn test_empty_label_value_is_dropped() {
        assert!(parse_ads("Ad 1:\nPrimary Text: \nHeadline: Lonely").is_empty());
    }

    #[test]
    fn test_unlabeled_segment_uses_positional_lines() {
        let ads = parse_ads("Ad 1\nSave big on skates\nFly Faster");
        assert_eq!(ads[0].primary_text, "Save big on skates");
        assert_eq!(ads[0].headline, "Fly Faster");
    }

    #[test]
    fn test_repeated_blank_lines_do_not_shift_positional_lines() {
        let ads = parse_ads("Ad 1\nSave big\nFly\n\n\nAd 2\nGo now\nRun");
        assert_eq!(
            ads,
            vec![
                AdCandidate {
                    headline: "Fly".to_string(),
                    primary_text: "Save big".to_string(),
                },
                AdCandidate {
                    headline: "Run".to_string(),
                    primary_text: "Go now".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_leading_blank_lines_do_not_shift_positional_lines() {
        let ads = parse_ads("\n  \nAd 1\nSave big\nFly");
        assert_eq!(ads.len(), 1);
        assert_eq!(ads[0].primary_text, "Save big");
        assert_eq!(ads[0].headline, "Fly");
    }

    #[test]
    fn test_short_unlabeled_segment_is_dropped() {
        assert!(parse_ads("Here are your ads!").is_empty());
        assert!(parse_ads("Here are your ads!\nOnly two lines").is_empty());
    }

    #[test]
    fn test_preamble_segment_does_not_shift_results() {
        let raw = format!("Here are five ads for Acme:\n\n{}", well_formed(2));
        let ads = parse_ads(&raw);
        assert_eq!(ads.len(), 2);
        assert_eq!(ads[0].headline, "Headline 1");
    }

    #[test]
    fn test_crlf_and_whitespace_blank_lines() {
        let raw = "Ad 1:\r\nPrimary Text: A\r\nHeadline: B\r\n  \r\nAd 2:\r\nPrimary Text: C\r\nHeadline: D";
        let ads = parse_ads(raw);
        assert_eq!(ads.len(), 2);
        assert_eq!(ads[1].primary_text, "C");
        assert_eq!(ads[1].headline, "D");
    }
}
