// Unit tests for transcript accumulation
//
// These tests verify that interim and final partial results are merged
// into exactly one final transcript per listening session.

use interview_copilot::{PartialResult, TranscriptAggregator};

#[test]
fn test_interim_batches_replace_each_other() {
    let mut aggregator = TranscriptAggregator::new();

    let first = aggregator.absorb(&[PartialResult::interim("tell me")]);
    assert_eq!(first.display, "tell me");
    assert!(first.final_transcript.is_none());

    // The next delivery fully replaces the displayed interim text
    let second = aggregator.absorb(&[PartialResult::interim("tell me about")]);
    assert_eq!(second.display, "tell me about");
    assert!(second.final_transcript.is_none());
    assert!(!aggregator.finished());
}

#[test]
fn test_final_text_wins_over_interim_in_display() {
    let mut aggregator = TranscriptAggregator::new();

    let outcome = aggregator.absorb(&[
        PartialResult::final_result("tell me about yourself"),
        PartialResult::interim(" plea"),
    ]);

    assert_eq!(outcome.display, "tell me about yourself");
    assert_eq!(
        outcome.final_transcript.as_deref(),
        Some("tell me about yourself")
    );
}

#[test]
fn test_final_transcript_concatenates_in_delivery_order() {
    let mut aggregator = TranscriptAggregator::new();

    aggregator.absorb(&[PartialResult::interim("tell me")]);
    let outcome = aggregator.absorb(&[
        PartialResult::final_result("tell me "),
        PartialResult::final_result("about yourself"),
    ]);

    assert_eq!(
        outcome.final_transcript.as_deref(),
        Some("tell me about yourself")
    );
    assert!(aggregator.finished());
}

#[test]
fn test_final_transcript_fires_exactly_once() {
    let mut aggregator = TranscriptAggregator::new();

    let first = aggregator.absorb(&[PartialResult::final_result("what are your strengths")]);
    assert!(first.final_transcript.is_some());

    // A chatty recognizer keeps delivering; nothing fires again
    let second = aggregator.absorb(&[PartialResult::final_result(" and weaknesses")]);
    assert!(second.final_transcript.is_none());
    assert_eq!(second.display, "what are your strengths");
    assert_eq!(aggregator.final_text(), "what are your strengths");
}

#[test]
fn test_interim_only_session_never_finishes() {
    let mut aggregator = TranscriptAggregator::new();

    for _ in 0..5 {
        let outcome = aggregator.absorb(&[PartialResult::interim("still talking")]);
        assert!(outcome.final_transcript.is_none());
    }

    assert!(!aggregator.finished());
    assert_eq!(aggregator.final_text(), "");
}

#[test]
fn test_empty_batch_is_harmless() {
    let mut aggregator = TranscriptAggregator::new();

    let outcome = aggregator.absorb(&[]);
    assert_eq!(outcome.display, "");
    assert!(outcome.final_transcript.is_none());
}
