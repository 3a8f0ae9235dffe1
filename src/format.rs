//! Answer formatting for display

use once_cell::sync::Lazy;
use regex::Regex;

/// Which emphasis convention a raw answer uses
///
/// Remote completions emphasize with `**span**`; bank templates mark
/// fill-in spans with `[span]`. Exactly one convention applies per answer,
/// decided by the strategy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisMarkup {
    DoubleAsterisk,
    Brackets,
}

/// Placeholder token substituted with the session job role
const JOB_ROLE_PLACEHOLDER: &str = "{jobRole}";

/// Substituted when the job role is empty
const GENERIC_ROLE: &str = "professional";

static BOLD_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold span pattern is valid"));
static BRACKET_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]").expect("bracket span pattern is valid"));

/// Format a raw answer template for display.
///
/// Substitutes the job-role placeholder, converts the answer's emphasis
/// spans to `<strong>` and newlines to `<br>`. Pure, and a no-op on its own
/// output.
pub fn format_answer(template: &str, job_role: &str, markup: EmphasisMarkup) -> String {
    let role = if job_role.trim().is_empty() {
        GENERIC_ROLE
    } else {
        job_role
    };
    let substituted = template.replace(JOB_ROLE_PLACEHOLDER, role);

    let emphasized = match markup {
        EmphasisMarkup::DoubleAsterisk => {
            BOLD_SPAN.replace_all(&substituted, "<strong>$1</strong>")
        }
        EmphasisMarkup::Brackets => BRACKET_SPAN.replace_all(&substituted, "<strong>$1</strong>"),
    };

    emphasized.replace('\n', "<br>")
}
