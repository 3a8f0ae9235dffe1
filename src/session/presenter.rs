use std::io::Write;

/// Presentation boundary
///
/// The pipeline produces display updates; how they are rendered is not its
/// concern.
pub trait Presenter: Send + Sync {
    /// Interim or final transcript update
    fn show_transcript(&self, text: &str);

    /// Status-line message
    fn show_status(&self, text: &str);

    /// Formatted answer
    fn show_answer(&self, formatted: &str);

    /// Reveal the setup view, hiding the assistant
    fn show_setup(&self);

    /// Reveal the assistant view, hiding setup
    fn show_assistant(&self);
}

/// Presenter that writes to stdout
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn show_transcript(&self, text: &str) {
        print!("\r{}", text);
        std::io::stdout().flush().ok();
    }

    fn show_status(&self, text: &str) {
        println!("\n[status] {}", text);
    }

    fn show_answer(&self, formatted: &str) {
        if !formatted.is_empty() {
            println!("\n{}", formatted);
        }
    }

    fn show_setup(&self) {
        println!("\n--- setup ---");
    }

    fn show_assistant(&self) {
        println!("\n--- assistant ---");
    }
}
