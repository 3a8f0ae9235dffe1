use anyhow::Result;
use clap::{Parser, ValueEnum};
use interview_copilot::{
    Config, ConsolePresenter, ResolverFactory, ResolverKind, ScriptedRecognizer,
    SessionController,
};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Resolve with the local answer bank
    Local,
    /// Resolve with the remote completion service
    Remote,
}

/// Scripted end-to-end run of the voice query resolution pipeline
#[derive(Debug, Parser)]
struct Args {
    /// Resolution strategy to run
    #[arg(long, value_enum, default_value = "local")]
    strategy: Strategy,

    /// Job role the candidate is interviewing for
    #[arg(long, default_value = "Software Engineer")]
    job_role: String,

    /// Question fed to the scripted recognizer
    #[arg(long, default_value = "Tell me about yourself")]
    question: String,

    /// Configuration file
    #[arg(long, default_value = "config/interview-copilot")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("interview-copilot v0.1.0");
    info!("Completion model: {}", cfg.completion.model);
    info!("Recognizer language: {}", cfg.recognizer.language);

    let kind = match args.strategy {
        Strategy::Local => ResolverKind::LocalBank,
        Strategy::Remote => ResolverKind::Remote,
    };

    let resolver = ResolverFactory::create(kind, &cfg)?;
    let recognizer = Box::new(ScriptedRecognizer::speaking(&args.question));

    let mut controller = SessionController::new(recognizer, resolver, Arc::new(ConsolePresenter));

    if !controller.start_interview(&args.job_role) {
        anyhow::bail!("A job role is required");
    }

    if let Some(answer) = controller.listen_once().await? {
        info!("Answer resolved ({} chars)", answer.len());
    }

    controller.end_interview().await?;
    Ok(())
}
