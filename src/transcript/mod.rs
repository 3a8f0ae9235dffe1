//! Transcript accumulation
//!
//! Reconciles the interim and final partial results delivered by a
//! streaming recognizer into a single final transcript per listening
//! session.

mod aggregator;
mod events;

pub use aggregator::{BatchOutcome, TranscriptAggregator};
pub use events::{PartialResult, RecognizerError, RecognizerEvent};
