use super::{AnswerResolver, ResolvedAnswer};
use crate::format::EmphasisMarkup;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Returned when no bank entry shares a keyword with the transcript
pub const NO_MATCH_TEMPLATE: &str = "I don't have a pre-written response for that question. \
     As a {jobRole}, I would answer it honestly and connect it back to [a relevant experience \
     or strength].";

/// One keyword-tagged answer template
#[derive(Debug, Clone)]
pub struct AnswerBankEntry {
    /// Tokens matched against the normalized transcript
    pub keywords: &'static [&'static str],
    /// Display label for the canonical question, not matched against
    pub question: &'static str,
    /// Answer template with `{jobRole}` placeholders and `[...]` spans
    pub template: &'static str,
}

/// The fixed answer bank, shared read-only across all lookups
pub static ANSWER_BANK: &[AnswerBankEntry] = &[
    AnswerBankEntry {
        keywords: &["tell", "me", "about", "yourself"],
        question: "Tell me about yourself",
        template: "Happy to. I'm a {jobRole} with [number] years of experience, and most \
             recently I [led a recent project or responsibility].\nWhat drew me to this work \
             is [your motivation], and I'm looking for a role where I can [what you want to \
             do next].",
    },
    AnswerBankEntry {
        keywords: &["greatest", "strengths", "strength"],
        question: "What are your strengths?",
        template: "My biggest strength as a {jobRole} is [key strength]. For example, \
             [a short story that proves it].\nDay to day it shows up as [a concrete habit \
             your team relies on].",
    },
    AnswerBankEntry {
        keywords: &["weakness", "weaknesses", "improve"],
        question: "What is your greatest weakness?",
        template: "Earlier in my career I struggled with [an honest, low-stakes weakness].\n\
             I've been working on it by [a concrete step you took], and my colleagues would \
             say [the improvement they have seen].",
    },
    AnswerBankEntry {
        keywords: &["why", "want", "work", "company", "here"],
        question: "Why do you want to work here?",
        template: "Three things stand out to me about this team.\nFirst, [something specific \
             about the company]. Second, the role lets me use my experience as a {jobRole} \
             on [the problem the team owns]. And third, [a value or goal you share].",
    },
    AnswerBankEntry {
        keywords: &["where", "see", "yourself", "five", "years", "future"],
        question: "Where do you see yourself in five years?",
        template: "In five years I want to have grown from a {jobRole} into [the next step \
             you are aiming for].\nGetting there means [a skill you plan to deepen], and this \
             role is the right place to build it.",
    },
];

/// Fixed punctuation class stripped during normalization
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.,!?;:'"()-]"#).expect("punctuation pattern is valid"));

/// Best-scoring template for one lookup
#[derive(Debug, Clone, Copy)]
pub struct ScoredMatch {
    /// Number of entry keywords found verbatim in the transcript
    pub score: usize,
    /// Template of the winning entry, or the no-match fallback
    pub template: &'static str,
}

/// Local keyword-overlap matcher over the fixed answer bank
///
/// A bounded, explainable heuristic: one linear scan over the bank, exact
/// token matches only.
pub struct BankResolver {
    bank: &'static [AnswerBankEntry],
}

impl Default for BankResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BankResolver {
    pub fn new() -> Self {
        Self { bank: ANSWER_BANK }
    }

    /// Matcher over a custom bank
    pub fn with_bank(bank: &'static [AnswerBankEntry]) -> Self {
        Self { bank }
    }

    /// Score every entry against the transcript and keep the best
    ///
    /// Ties keep the earliest entry in bank order. A best score of zero
    /// falls back to the fixed no-match template.
    pub fn best_match(&self, transcript: &str) -> ScoredMatch {
        let lowercased = transcript.to_lowercase();
        let normalized = PUNCTUATION.replace_all(&lowercased, "");
        let words: Vec<&str> = normalized.split_whitespace().collect();

        let mut best = ScoredMatch {
            score: 0,
            template: NO_MATCH_TEMPLATE,
        };

        for entry in self.bank {
            let score = entry
                .keywords
                .iter()
                .filter(|&&keyword| words.iter().any(|&word| word == keyword))
                .count();

            if score > best.score {
                best = ScoredMatch {
                    score,
                    template: entry.template,
                };
            }
        }

        best
    }

    /// Pick the bank template with the highest keyword overlap
    pub fn lookup(&self, transcript: &str) -> &'static str {
        let best = self.best_match(transcript);
        debug!("Bank lookup scored {} for {:?}", best.score, transcript);
        best.template
    }
}

#[async_trait::async_trait]
impl AnswerResolver for BankResolver {
    async fn resolve(&self, question: &str, _job_role: &str) -> ResolvedAnswer {
        // The job role reaches bank answers through the template
        // placeholder, substituted by the formatter.
        ResolvedAnswer {
            text: self.lookup(question).to_string(),
            markup: EmphasisMarkup::Brackets,
        }
    }

    fn name(&self) -> &str {
        "keyword-bank"
    }
}
