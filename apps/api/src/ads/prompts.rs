// Prompt text for ad generation. The brief listing sits between the two
// fixed blocks below.

use crate::models::brief::{Brief, BriefField};

/// Persona and task framing placed before the brief listing.
pub const AD_MENTOR_PREAMBLE: &str = "As My Ad Headline Mentor, your expertise is in writing, \
providing primary text and headline text, from information provided in the data input fields. \
With a deep understanding of the techniques of advertising legends like David Ogilvy, Dave Trott, \
Bill Bernbach, and Joseph Sugarman. Your advice is anchored in creating engaging \
headlines.These are the data input fields that you'll receive data from:";

/// Label for the reference copy line.
pub const CSV_LABEL: &str = "CSV Data";

/// Output-format instructions placed after the brief listing.
pub const AD_FORMAT_INSTRUCTIONS: &str = r#"Write five versions of ads, each containing:
1. Primary Text (constrained to 125 characters)
2. Headline (constrained to 40 characters)

Format each ad as follows:
Primary Text: [Your primary text here]
Headline: [Your headline here]

Separate each ad with a blank line and number each group Ad 1, Ad 2 etc."#;

/// Renders a brief into the completion prompt. Empty fields are listed with
/// nothing after their label.
pub fn build_prompt(brief: &Brief) -> String {
    let mut listing = String::new();
    for field in BriefField::ALL {
        listing.push_str(field.prompt_label());
        listing.push_str(": ");
        listing.push_str(brief.field(field));
        listing.push('\n');
    }
    listing.push_str(CSV_LABEL);
    listing.push_str(": ");
    listing.push_str(&brief.csv_data);

    format!("{AD_MENTOR_PREAMBLE}\n\n{listing}\n\n{AD_FORMAT_INSTRUCTIONS}")
}
