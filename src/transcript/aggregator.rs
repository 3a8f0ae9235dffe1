use super::events::PartialResult;

/// Outcome of absorbing one batch of partial results
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Text to display after this batch (final text wins over interim)
    pub display: String,
    /// The complete question, set on exactly one batch per session
    pub final_transcript: Option<String>,
}

/// Merges interim and final partial results into one transcript per
/// listening session.
///
/// Final text accumulates across batches in delivery order. Interim text is
/// rebuilt from scratch on every batch and never carried over. Once the
/// accumulated final text is non-empty the aggregator emits it and ignores
/// any further batches.
#[derive(Debug, Default)]
pub struct TranscriptAggregator {
    final_text: String,
    finished: bool,
}

impl TranscriptAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb one ordered batch delivered by the recognizer
    pub fn absorb(&mut self, batch: &[PartialResult]) -> BatchOutcome {
        if self.finished {
            return BatchOutcome {
                display: self.final_text.clone(),
                final_transcript: None,
            };
        }

        let mut interim = String::new();
        for result in batch {
            if result.is_final {
                self.final_text.push_str(&result.text);
            } else {
                interim.push_str(&result.text);
            }
        }

        let display = if self.final_text.is_empty() {
            interim
        } else {
            self.final_text.clone()
        };

        let final_transcript = if self.final_text.is_empty() {
            None
        } else {
            self.finished = true;
            Some(self.final_text.clone())
        };

        BatchOutcome {
            display,
            final_transcript,
        }
    }

    /// Whether the final transcript has been emitted
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Final text accumulated so far
    pub fn final_text(&self) -> &str {
        &self.final_text
    }
}
