pub mod config;
pub mod format;
pub mod recognizer;
pub mod resolve;
pub mod session;
pub mod transcript;

pub use config::{CompletionConfig, Config};
pub use format::{format_answer, EmphasisMarkup};
pub use recognizer::{Recognizer, RecognizerConfig, ScriptedRecognizer};
pub use resolve::{
    AnswerBankEntry, AnswerResolver, BankResolver, CompletionClient, ResolvedAnswer,
    ResolverFactory, ResolverKind, RetryPolicy,
};
pub use session::{ConsolePresenter, Phase, Presenter, Session, SessionController, SessionStats};
pub use transcript::{
    BatchOutcome, PartialResult, RecognizerError, RecognizerEvent, TranscriptAggregator,
};
