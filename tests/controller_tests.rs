// Integration tests for the session controller
//
// These tests drive the full pipeline with a scripted recognizer, the
// local bank strategy, and a recording presenter.

use anyhow::Result;
use interview_copilot::{
    BankResolver, Phase, Presenter, Recognizer, RecognizerError, RecognizerEvent,
    ScriptedRecognizer, SessionController,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Default)]
struct RecordingPresenter {
    transcripts: Mutex<Vec<String>>,
    statuses: Mutex<Vec<String>>,
    answers: Mutex<Vec<String>>,
    views: Mutex<Vec<&'static str>>,
}

impl Presenter for RecordingPresenter {
    fn show_transcript(&self, text: &str) {
        self.transcripts.lock().unwrap().push(text.to_string());
    }

    fn show_status(&self, text: &str) {
        self.statuses.lock().unwrap().push(text.to_string());
    }

    fn show_answer(&self, formatted: &str) {
        self.answers.lock().unwrap().push(formatted.to_string());
    }

    fn show_setup(&self) {
        self.views.lock().unwrap().push("setup");
    }

    fn show_assistant(&self) {
        self.views.lock().unwrap().push("assistant");
    }
}

fn controller_with(
    recognizer: Box<dyn Recognizer>,
) -> (SessionController, Arc<RecordingPresenter>) {
    let presenter = Arc::new(RecordingPresenter::default());
    let controller = SessionController::new(
        recognizer,
        Box::new(BankResolver::new()),
        presenter.clone(),
    );
    (controller, presenter)
}

#[tokio::test]
async fn test_blank_job_role_stays_in_setup() {
    let (mut controller, presenter) =
        controller_with(Box::new(ScriptedRecognizer::new(vec![])));

    assert!(!controller.start_interview("   "));
    assert_eq!(controller.phase(), Phase::Setup);

    // The assistant view was never revealed
    assert!(presenter.views.lock().unwrap().is_empty());
    assert!(presenter
        .statuses
        .lock()
        .unwrap()
        .last()
        .unwrap()
        .contains("job role"));
}

#[tokio::test]
async fn test_question_is_resolved_and_personalized() -> Result<()> {
    let recognizer = Box::new(ScriptedRecognizer::speaking("Tell me about yourself please"));
    let (mut controller, presenter) = controller_with(recognizer);

    assert!(controller.start_interview("Staff Engineer"));
    assert_eq!(controller.phase(), Phase::Ready);

    let answer = controller.listen_once().await?.expect("answer expected");

    assert_eq!(controller.phase(), Phase::Displaying);
    assert!(answer.contains("Staff Engineer"));
    assert!(answer.contains("<strong>"));
    assert!(answer.contains("<br>"));
    assert!(!answer.contains("{jobRole}"));

    // Interim text was shown before the final transcript replaced it
    let transcripts = presenter.transcripts.lock().unwrap();
    assert!(transcripts.contains(&"Tell me about yourself".to_string()));
    assert_eq!(
        transcripts.last().unwrap(),
        "Tell me about yourself please"
    );

    let stats = controller.stats().expect("stats while interview is live");
    assert_eq!(stats.answers_resolved, 1);
    assert!(!stats.listening);
    Ok(())
}

#[tokio::test]
async fn test_end_of_stream_without_final_is_an_implicit_stop() -> Result<()> {
    let recognizer = Box::new(ScriptedRecognizer::new(vec![
        RecognizerEvent::Results(vec![interview_copilot::PartialResult::interim("uh")]),
        RecognizerEvent::End,
    ]));
    let (mut controller, presenter) = controller_with(recognizer);

    controller.start_interview("Engineer");
    let answer = controller.listen_once().await?;

    assert!(answer.is_none());
    assert_eq!(controller.phase(), Phase::Ready);
    assert!(presenter.answers.lock().unwrap().iter().all(String::is_empty));
    Ok(())
}

#[tokio::test]
async fn test_recognizer_errors_surface_category_messages() -> Result<()> {
    let cases = [
        (RecognizerError::PermissionDenied, "Microphone access denied"),
        (RecognizerError::Network, "check your internet connection"),
        (
            RecognizerError::Other("aborted".to_string()),
            "Error: aborted",
        ),
    ];

    for (error, expected) in cases {
        let recognizer = Box::new(ScriptedRecognizer::new(vec![RecognizerEvent::Error(error)]));
        let (mut controller, presenter) = controller_with(recognizer);

        controller.start_interview("Engineer");
        let answer = controller.listen_once().await?;

        assert!(answer.is_none());
        assert_eq!(controller.phase(), Phase::Ready);
        assert!(
            presenter
                .statuses
                .lock()
                .unwrap()
                .iter()
                .any(|status| status.contains(expected)),
            "missing {:?}",
            expected
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_listening_requires_an_interview() {
    let (mut controller, _presenter) =
        controller_with(Box::new(ScriptedRecognizer::new(vec![])));

    assert!(controller.listen_once().await.is_err());
}

#[tokio::test]
async fn test_ending_clears_displays_and_returns_to_setup() -> Result<()> {
    let recognizer = Box::new(ScriptedRecognizer::speaking("Tell me about yourself"));
    let (mut controller, presenter) = controller_with(recognizer);

    controller.start_interview("Engineer");
    controller.listen_once().await?;
    controller.end_interview().await?;

    assert_eq!(controller.phase(), Phase::Setup);
    assert!(controller.stats().is_none());
    assert_eq!(presenter.transcripts.lock().unwrap().last().unwrap(), "");
    assert_eq!(presenter.answers.lock().unwrap().last().unwrap(), "");
    assert_eq!(presenter.views.lock().unwrap().last().unwrap(), &"setup");
    Ok(())
}

/// Recognizer that starts but never delivers an event until stopped
struct HangingRecognizer {
    listening: Arc<AtomicBool>,
    sender: Option<mpsc::Sender<RecognizerEvent>>,
}

#[async_trait::async_trait]
impl Recognizer for HangingRecognizer {
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognizerEvent>> {
        let (tx, rx) = mpsc::channel(1);
        self.sender = Some(tx);
        self.listening.store(true, Ordering::SeqCst);
        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        self.sender = None;
        self.listening.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "hanging"
    }
}

#[tokio::test]
async fn test_ending_while_listening_stops_the_recognizer() -> Result<()> {
    let listening = Arc::new(AtomicBool::new(false));
    let recognizer = Box::new(HangingRecognizer {
        listening: listening.clone(),
        sender: None,
    });
    let (mut controller, presenter) = controller_with(recognizer);

    controller.start_interview("Engineer");

    // The user ends the interview before any result arrives: the caller
    // cancels the drain, then ends the session.
    {
        let drain = controller.listen_once();
        tokio::pin!(drain);
        tokio::select! {
            _ = &mut drain => panic!("no result was scripted"),
            _ = tokio::time::sleep(Duration::from_millis(20)) => {}
        }
    }

    assert!(listening.load(Ordering::SeqCst));
    controller.end_interview().await?;

    assert!(!listening.load(Ordering::SeqCst));
    assert_eq!(controller.phase(), Phase::Setup);
    assert_eq!(presenter.views.lock().unwrap().last().unwrap(), &"setup");
    Ok(())
}

#[tokio::test]
async fn test_toggling_listening_off_keeps_the_interview() -> Result<()> {
    let listening = Arc::new(AtomicBool::new(false));
    let recognizer = Box::new(HangingRecognizer {
        listening: listening.clone(),
        sender: None,
    });
    let (mut controller, _presenter) = controller_with(recognizer);

    controller.start_interview("Engineer");

    {
        let drain = controller.listen_once();
        tokio::pin!(drain);
        tokio::select! {
            _ = &mut drain => panic!("no result was scripted"),
            _ = tokio::time::sleep(Duration::from_millis(20)) => {}
        }
    }

    controller.stop_listening().await?;

    assert!(!listening.load(Ordering::SeqCst));
    assert_eq!(controller.phase(), Phase::Ready);
    assert!(controller.stats().is_some());
    Ok(())
}
