use super::presenter::Presenter;
use super::session::{Phase, Session, SessionStats};
use crate::format::format_answer;
use crate::recognizer::Recognizer;
use crate::resolve::AnswerResolver;
use crate::transcript::{RecognizerEvent, TranscriptAggregator};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Prompt shown whenever the assistant is idle
const PROMPT_STATUS: &str = "Click the button and I'll listen for the question.";
const LISTENING_STATUS: &str = "Listening...";
const RESOLVING_STATUS: &str = "Heard you! Generating answer...";
const BLANK_ROLE_MESSAGE: &str = "Please enter the job role you are interviewing for.";

/// What a listening session ended with
enum ListenOutcome {
    /// A final transcript is ready for resolution
    Question(String),
    /// The stream ended without a final result; implicit stop
    Ended,
    /// The recognizer failed; its message is already on screen
    Failed,
}

/// Orchestrates the interview lifecycle
///
/// Owns the `Session` for its whole lifetime and drives
/// Setup → Ready → Listening → Resolving → Displaying, dispatching the
/// final transcript to the configured resolution strategy and handing the
/// formatted result to the presenter. All pipeline stages run on the
/// calling task; nothing is spawned.
pub struct SessionController {
    recognizer: Box<dyn Recognizer>,
    resolver: Box<dyn AnswerResolver>,
    presenter: Arc<dyn Presenter>,
    session: Option<Session>,
}

impl SessionController {
    pub fn new(
        recognizer: Box<dyn Recognizer>,
        resolver: Box<dyn AnswerResolver>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            recognizer,
            resolver,
            presenter,
            session: None,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.session
            .as_ref()
            .map(|session| session.phase)
            .unwrap_or(Phase::Setup)
    }

    /// Statistics for the interview in progress, if any
    pub fn stats(&self) -> Option<SessionStats> {
        self.session.as_ref().map(Session::stats)
    }

    /// Start an interview for the given job role
    ///
    /// A blank role is a validation failure: it is surfaced through the
    /// presenter and the controller stays in Setup.
    pub fn start_interview(&mut self, job_role: &str) -> bool {
        let job_role = job_role.trim();
        if job_role.is_empty() {
            self.presenter.show_status(BLANK_ROLE_MESSAGE);
            return false;
        }

        let session = Session::new(job_role.to_string());
        info!(
            "Interview started: session={} role={}",
            session.id, session.job_role
        );
        self.session = Some(session);
        self.presenter.show_assistant();
        self.presenter.show_status(PROMPT_STATUS);
        true
    }

    /// Listen for one question and resolve it
    ///
    /// Drains recognizer events on the calling task until a final
    /// transcript, an end-of-stream, or a recognizer error. Returns the
    /// formatted answer when a question was resolved.
    pub async fn listen_once(&mut self) -> Result<Option<String>> {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => anyhow::bail!("No interview in progress"),
        };
        if session.listening {
            anyhow::bail!("A listening session is already in progress");
        }

        // Clear whatever the previous question left on screen
        session.current_transcript.clear();
        session.phase = Phase::Listening;
        session.listening = true;
        self.presenter.show_transcript("");
        self.presenter.show_answer("");
        self.presenter.show_status(LISTENING_STATUS);

        let mut events = self
            .recognizer
            .start()
            .await
            .context("Failed to start recognizer")?;

        let mut aggregator = TranscriptAggregator::new();
        let mut outcome = ListenOutcome::Ended;

        while let Some(event) = events.recv().await {
            match event {
                RecognizerEvent::Results(batch) => {
                    session.batches_seen += 1;
                    let batch_outcome = aggregator.absorb(&batch);
                    session.current_transcript = batch_outcome.display.clone();
                    self.presenter.show_transcript(&batch_outcome.display);

                    if let Some(question) = batch_outcome.final_transcript {
                        self.presenter.show_status(RESOLVING_STATUS);
                        outcome = ListenOutcome::Question(question);
                        break;
                    }
                }
                RecognizerEvent::End => {
                    outcome = ListenOutcome::Ended;
                    break;
                }
                RecognizerEvent::Error(err) => {
                    warn!("Recognizer error: {:?}", err);
                    self.presenter.show_status(&err.user_message());
                    outcome = ListenOutcome::Failed;
                    break;
                }
            }
        }

        // One question per listening session: the recognizer stops as soon
        // as the stream resolved, whichever way it resolved.
        self.recognizer
            .stop()
            .await
            .context("Failed to stop recognizer")?;
        session.listening = false;

        let question = match outcome {
            ListenOutcome::Question(question) => question,
            ListenOutcome::Ended => {
                session.phase = Phase::Ready;
                self.presenter.show_status(PROMPT_STATUS);
                return Ok(None);
            }
            ListenOutcome::Failed => {
                session.phase = Phase::Ready;
                return Ok(None);
            }
        };

        session.phase = Phase::Resolving;
        let session_id = session.id;
        let job_role = session.job_role.clone();

        info!(
            "Resolving question with {}: {:?}",
            self.resolver.name(),
            question
        );
        let resolved = self.resolver.resolve(&question, &job_role).await;

        // A session reset while the request was in flight stays reset; the
        // late result is dropped.
        let session = match self.session.as_mut() {
            Some(session) if session.id == session_id => session,
            _ => {
                info!("Interview ended during resolution; discarding answer");
                return Ok(None);
            }
        };

        let formatted = format_answer(&resolved.text, &job_role, resolved.markup);
        session.phase = Phase::Displaying;
        session.answers_resolved += 1;

        self.presenter.show_answer(&formatted);
        self.presenter.show_status(PROMPT_STATUS);

        Ok(Some(formatted))
    }

    /// Toggle listening off without ending the interview
    ///
    /// Used after the caller cancels a listening session mid-drain.
    pub async fn stop_listening(&mut self) -> Result<()> {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => return Ok(()),
        };
        if !session.listening {
            return Ok(());
        }

        session.listening = false;
        session.phase = Phase::Ready;
        self.recognizer
            .stop()
            .await
            .context("Failed to stop recognizer")?;
        self.presenter.show_status(PROMPT_STATUS);
        Ok(())
    }

    /// End the interview from any phase and return to setup
    pub async fn end_interview(&mut self) -> Result<()> {
        if let Some(session) = self.session.take() {
            info!("Interview ended: session={}", session.id);
            if session.listening {
                self.recognizer
                    .stop()
                    .await
                    .context("Failed to stop recognizer")?;
            }
        }

        self.presenter.show_transcript("");
        self.presenter.show_answer("");
        self.presenter.show_setup();
        Ok(())
    }
}
