use serde::{Deserialize, Serialize};

/// A single recognition result inside a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialResult {
    /// Transcribed text for this result
    pub text: String,
    /// Whether the recognizer will revise this result further
    #[serde(rename = "final")]
    pub is_final: bool,
}

impl PartialResult {
    /// An interim result, still subject to revision
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    /// A final result the recognizer will not revise
    pub fn final_result(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Event delivered by a recognizer backend
#[derive(Debug, Clone)]
pub enum RecognizerEvent {
    /// Ordered batch of partial results
    Results(Vec<PartialResult>),
    /// The recognizer ended the stream
    End,
    /// The recognizer failed
    Error(RecognizerError),
}

/// Recognizer failure categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerError {
    /// Microphone access was denied
    PermissionDenied,
    /// The recognizer could not reach its backing service
    Network,
    /// Any other recognizer failure, with the engine's error code
    Other(String),
}

impl RecognizerError {
    /// User-facing message for this error category
    pub fn user_message(&self) -> String {
        match self {
            RecognizerError::PermissionDenied => {
                "Microphone access denied. Please allow microphone permissions in your settings."
                    .to_string()
            }
            RecognizerError::Network => {
                "Network error. Please check your internet connection.".to_string()
            }
            RecognizerError::Other(code) => format!("Error: {}. Please try again.", code),
        }
    }
}
