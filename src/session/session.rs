use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visible lifecycle phase of an interview session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Collecting the job role
    Setup,
    /// Interview started, not listening
    Ready,
    /// Draining recognizer events
    Listening,
    /// A resolution strategy is running
    Resolving,
    /// An answer is on screen
    Displaying,
}

/// Mutable state for one interview
///
/// Owned by the session controller for its whole lifetime and passed
/// explicitly to the formatter and resolution strategies.
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique session identifier
    pub id: Uuid,
    /// Job role the candidate is interviewing for
    pub job_role: String,
    /// When the interview started
    pub started_at: DateTime<Utc>,
    /// Current lifecycle phase
    pub phase: Phase,
    /// Whether a listening session is active
    pub listening: bool,
    /// Most recent transcript shown to the user
    pub current_transcript: String,
    /// Batches of partial results seen this interview
    pub batches_seen: usize,
    /// Answers resolved this interview
    pub answers_resolved: usize,
}

impl Session {
    pub fn new(job_role: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_role,
            started_at: Utc::now(),
            phase: Phase::Ready,
            listening: false,
            current_transcript: String::new(),
            batches_seen: 0,
            answers_resolved: 0,
        }
    }

    /// Get current session statistics
    pub fn stats(&self) -> SessionStats {
        let duration = Utc::now().signed_duration_since(self.started_at);

        SessionStats {
            phase: self.phase,
            listening: self.listening,
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            batches_seen: self.batches_seen,
            answers_resolved: self.answers_resolved,
        }
    }
}

/// Statistics about an interview session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Current lifecycle phase
    pub phase: Phase,
    /// Whether a listening session is active
    pub listening: bool,
    /// When the interview started
    pub started_at: DateTime<Utc>,
    /// Total duration in seconds
    pub duration_secs: f64,
    /// Batches of partial results seen so far
    pub batches_seen: usize,
    /// Answers resolved so far
    pub answers_resolved: usize,
}
