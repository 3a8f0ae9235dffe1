//! Streaming recognizer boundary
//!
//! The pipeline consumes transcript events from a continuous speech-to-text
//! engine it does not own. Implementations wrap the real engine behind the
//! `Recognizer` trait; the `ScriptedRecognizer` stands in for it in the
//! demo binary and in tests.

use crate::transcript::{PartialResult, RecognizerEvent};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Recognizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// BCP-47 language tag for recognition
    pub language: String,
    /// Deliver interim results while the user is still speaking
    pub interim_results: bool,
    /// Keep recognizing after the first final result
    pub continuous: bool,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            interim_results: true, // live feedback as the user speaks
            continuous: false,     // single-utterance mode
        }
    }
}

/// Streaming speech recognizer
///
/// Capture and decoding stay behind this trait; the pipeline only drains
/// the event channel.
#[async_trait::async_trait]
pub trait Recognizer: Send + Sync {
    /// Start recognizing
    ///
    /// Returns a channel receiver that will receive recognition events
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognizerEvent>>;

    /// Stop recognizing
    async fn stop(&mut self) -> Result<()>;

    /// Check if the recognizer is currently listening
    fn is_listening(&self) -> bool;

    /// Get recognizer name for logging
    fn name(&self) -> &str;
}

/// Recognizer fed from a pre-baked script of events
///
/// Each call to `start` replays the scripted batches on the returned
/// channel, the way a single-utterance engine delivers them.
pub struct ScriptedRecognizer {
    script: Vec<RecognizerEvent>,
    listening: bool,
}

impl ScriptedRecognizer {
    pub fn new(script: Vec<RecognizerEvent>) -> Self {
        Self {
            script,
            listening: false,
        }
    }

    /// Script that speaks `question`: one interim batch while the last word
    /// is still pending, then the full final result, then end-of-stream.
    pub fn speaking(question: &str) -> Self {
        let words: Vec<&str> = question.split_whitespace().collect();
        let interim = words[..words.len().saturating_sub(1)].join(" ");
        Self::new(vec![
            RecognizerEvent::Results(vec![PartialResult::interim(interim)]),
            RecognizerEvent::Results(vec![PartialResult::final_result(question)]),
            RecognizerEvent::End,
        ])
    }
}

#[async_trait::async_trait]
impl Recognizer for ScriptedRecognizer {
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognizerEvent>> {
        let (tx, rx) = mpsc::channel(self.script.len().max(1));
        for event in &self.script {
            tx.send(event.clone())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to queue scripted event: {}", e))?;
        }
        self.listening = true;
        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        self.listening = false;
        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.listening
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
